mod debug_report;

use factoid::{Reply, Session, StaticSource, WikipediaOptions, WikipediaSource, tokenize};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FACTOID_LOG";
const DEFAULT_LOG: &str = "warn";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging();

    let session = match build_session(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let result = match &config.question {
        Some(question) => {
            respond(&session, question, &config);
            Ok(())
        }
        None => query_loop(&session, &config),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    question: Option<String>,
    fixtures: Option<PathBuf>,
    wikipedia: WikipediaOptions,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut question: Option<String> = None;
    let mut fixtures: Option<PathBuf> = None;
    let mut wikipedia = WikipediaOptions::default();
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("factoid {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--trace" => trace = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--fixtures" => {
                let value = args.next().ok_or_else(|| "error: --fixtures expects a value".to_string())?;
                fixtures = Some(PathBuf::from(value));
            }
            "--endpoint" => {
                wikipedia.endpoint = args.next().ok_or_else(|| "error: --endpoint expects a value".to_string())?;
            }
            "--timeout" => {
                let value = args.next().ok_or_else(|| "error: --timeout expects a value".to_string())?;
                wikipedia.timeout = parse_timeout(&value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    question = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--fixtures=") => {
                fixtures = Some(PathBuf::from(arg.trim_start_matches("--fixtures=")));
            }
            _ if arg.starts_with("--endpoint=") => {
                wikipedia.endpoint = arg.trim_start_matches("--endpoint=").to_string();
            }
            _ if arg.starts_with("--timeout=") => {
                wikipedia.timeout = parse_timeout(arg.trim_start_matches("--timeout="))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                question = Some(rest);
                break;
            }
        }
    }

    Ok(CliConfig { question, fixtures, wikipedia, trace, color })
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    value
        .parse::<u64>()
        .ok()
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("error: invalid --timeout '{value}' (expected a positive number of seconds)"))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).try_init();
}

fn build_session(config: &CliConfig) -> Result<Session, String> {
    let session = match &config.fixtures {
        Some(path) => {
            let source = StaticSource::load(path).map_err(|err| format!("error: {}: {err}", path.display()))?;
            Session::new(source)
        }
        None => Session::new(WikipediaSource::new(config.wikipedia.clone())),
    };
    session.map_err(|err| format!("error: invalid question rules: {err}"))
}

/// Read questions until `bye` or end of input.
fn query_loop(session: &Session, config: &CliConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("Your query? ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        if !respond(session, &line?, config) {
            break;
        }
    }

    println!("\nSo long!\n");
    Ok(())
}

/// Answer one line of input. Returns `false` when the session should end.
fn respond(session: &Session, line: &str, config: &CliConfig) -> bool {
    let tokens = tokenize(line);

    let reply = if config.trace {
        let res = session.answer_verbose(&tokens);
        print_reply(&res.reply);
        debug_report::print_run(&res, config.color);
        res.reply
    } else {
        let reply = session.answer(&tokens);
        print_reply(&reply);
        reply
    };

    !reply.is_terminate()
}

fn print_reply(reply: &Reply) {
    for line in reply.lines() {
        println!("{line}");
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "factoid {version}

Answers short factual questions from Wikipedia infoboxes.

Usage:
  factoid [OPTIONS]                      Interactive mode; type `bye` to quit.
  factoid [OPTIONS] [--] <question...>   Answer one question and exit.

Questions:
  when was <person> born                 what is <person>'s birth date
  what is the polar radius of <body>     how big is <body>
  what is the capital of <country>       how many people live in <country>
  what is the population of <country>    what language is spoken in <country>
  what are the official languages of <country>

Options:
  --fixtures <file>     Answer from a JSON object of subject -> text block
                        instead of Wikipedia.
  --endpoint <url>      MediaWiki API endpoint. Default: {endpoint}
  --timeout <secs>      Per-request timeout. Default: {timeout}
  --trace               Print the matched rule, binding and timings.
  --color               Force ANSI color in trace output.
  --no-color            Disable ANSI color in trace output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Environment:
  {log_env}           Log filter (e.g. `debug`, `factoid=trace`). Default: {default_log}

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        endpoint = WikipediaOptions::default().endpoint,
        timeout = WikipediaOptions::default().timeout.as_secs(),
        log_env = LOG_ENV,
        default_log = DEFAULT_LOG,
    )
}
