use factoid::{AnswerVerbose, Reply};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &AnswerVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Query: {:?}", res.query), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Match ━━━", ansi::GRAY));
    print_match(res, &palette);

    println!("\n{}", palette.paint("━━━ Reply ━━━", ansi::GRAY));
    match &res.reply {
        Reply::Terminate => println!("  {}", palette.paint("terminate session", ansi::YELLOW)),
        Reply::Lines(lines) => {
            for (idx, line) in lines.iter().enumerate() {
                println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), palette.paint(line, ansi::GREEN));
            }
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Handler: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(format!("{:?}", res.details.matching), ansi::CYAN),
        palette.dim(format!("{:?}", res.details.handler)),
    );
    println!();
}

fn print_match(res: &AnswerVerbose, palette: &ansi::Palette) {
    let details = &res.details;
    let (Some(rule), Some(template)) = (&details.rule, &details.template) else {
        println!(
            "  {} {}",
            palette.dim("✗ no template matched"),
            palette.dim(format!("({} rules tried)", details.rules_tried))
        );
        println!("\n{}", palette.dim("  Tip: set FACTOID_LOG=factoid=trace to see every split the matcher tried"));
        return;
    };

    println!(
        "  {} {} {} {}",
        palette.paint("✓", ansi::GREEN),
        palette.bold(palette.paint(rule, ansi::BLUE)),
        palette.dim("│"),
        palette.paint(template, ansi::CYAN),
    );
    println!("      {} {}", palette.dim("rules tried:"), palette.paint(details.rules_tried.to_string(), ansi::YELLOW));
    for (idx, span) in details.binding.iter().enumerate() {
        println!("      {} {}", palette.dim(format!("%{}:", idx + 1)), palette.paint(format!("{span:?}"), ansi::YELLOW));
    }
}
