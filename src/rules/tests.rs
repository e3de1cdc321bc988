use crate::rules::questions;
use crate::{Dispatcher, DocumentSource, NOT_UNDERSTOOD, Reply, SourceError, StaticSource, tokenize};

const TANZANIA: &str = "Coat of arms\nMotto: \"Uhuru na Umoja\"\nCapital Dodoma\n6°10′S 35°44′E\n\
Largest city Dar es Salaam\nOfficial languages Swahili and English\nPopulation (2022) [4] 61,741,120";

const MEXICO: &str = "Capital and largest city Mexico City\nPopulation (2020) 126,014,024\nOfficial languages None";

const GERMANY: &str = "Capital and largest city Berlin\nOfficial languages German\nDemonym(s) German";

const OBAMA: &str = "44th President of the United States\nBorn Barack Hussein Obama II\n(1961-08-04) August 4, 1961\n\
Honolulu, Hawaii, U.S.";

const JUPITER: &str = "Physical characteristics\nEquatorial radius 71,492 km\nPolar radius 66,854 km\nFlattening 0.06487";

const ATLANTIS: &str = "Motto Glub\nGovernment Aquatic";

fn source() -> StaticSource {
    StaticSource::new()
        .with("tanzania", TANZANIA)
        .with("mexico", MEXICO)
        .with("germany", GERMANY)
        .with("barack obama", OBAMA)
        .with("jupiter", JUPITER)
        .with("atlantis", ATLANTIS)
}

fn ask(question: &str) -> Reply {
    let rules = questions::get().unwrap();
    Dispatcher::new(&rules).dispatch(&tokenize(question), &source())
}

#[test]
fn question_examples_answering() {
    // Array of (question, expected single answer line)
    let cases: Vec<(&str, &str)> = vec![
        ("what is the capital of tanzania", "The capital of tanzania is Dodoma"),
        ("What is the capital of Tanzania?", "The capital of tanzania is Dodoma"),
        ("how many people live in mexico", "The population of mexico is 126014024"),
        ("what is the population of tanzania", "The population of tanzania is 61741120"),
        ("what language is spoken in germany", "The official language(s) of germany: German"),
        ("what languages are spoken in tanzania", "The official language(s) of tanzania: Swahili, English"),
        ("what are the official languages of tanzania", "The official language(s) of tanzania: Swahili, English"),
        ("when was barack obama born", "1961-08-04"),
        ("what is barack obama's birth date", "1961-08-04"),
        ("how big is jupiter", "66,854"),
        ("what is the polar radius of jupiter", "66,854"),
    ];

    for (question, expected) in cases {
        assert_eq!(ask(question), Reply::line(expected), "question: {question}");
    }
}

#[test]
fn failures_become_answer_lines() {
    let cases: Vec<(&str, &str)> = vec![
        (
            "what is the capital of narnia",
            "Could not find capital: could not retrieve information for narnia: no matching page",
        ),
        ("how many people live in atlantis", "Could not find population: Page infobox has no population information"),
        (
            "what language is spoken in atlantis",
            "Could not find language info: Page infobox has no official language information",
        ),
        (
            "when was atlantis born",
            "Could not find birth date: Page infobox has no birth information (at least none in xxxx-xx-xx format)",
        ),
        ("how big is atlantis", "Could not find polar radius: Page infobox has no polar radius information"),
    ];

    for (question, expected) in cases {
        assert_eq!(ask(question), Reply::line(expected), "question: {question}");
    }
}

#[test]
fn capital_example_binds_the_country() {
    let rules = questions::get().unwrap();
    let tokens = ["what", "is", "the", "capital", "of", "tanzania"];
    let source = StaticSource::new().with("tanzania", "Capital Dodoma");
    let run = Dispatcher::new(&rules).dispatch_with_metrics(&tokens, &source);

    let trace = run.trace.unwrap();
    assert_eq!(trace.rule, "capital");
    assert_eq!(trace.binding.spans(), ["tanzania"]);
    assert_eq!(run.reply, Reply::line("The capital of tanzania is Dodoma"));
}

#[test]
fn population_example_strips_separators() {
    let rules = questions::get().unwrap();
    let source = StaticSource::new().with("mexico", "Population (2020) 126,014,024");
    let reply = Dispatcher::new(&rules).dispatch(&["how", "many", "people", "live", "in", "mexico"], &source);

    assert!(reply.lines()[0].contains("126014024"), "{reply:?}");
}

#[test]
fn multi_word_subjects() {
    let source = StaticSource::new().with("new zealand", "Capital Wellington");
    let rules = questions::get().unwrap();
    let reply = Dispatcher::new(&rules).dispatch(&tokenize("what is the capital of new zealand"), &source);

    // The echoed name is the first (and here only) span.
    assert_eq!(reply, Reply::line("The capital of new zealand is Wellington"));
}

#[test]
fn unavailable_document_is_an_answer_not_a_fault() {
    struct Offline;
    impl DocumentSource for Offline {
        fn resolve_document(&self, _subject: &str) -> Result<String, SourceError> {
            Err(SourceError::Transport("connection refused".to_string()))
        }
    }

    let rules = questions::get().unwrap();
    let reply = Dispatcher::new(&rules).dispatch(&tokenize("what is the capital of tanzania"), &Offline);

    assert_eq!(
        reply,
        Reply::line(
            "Could not find capital: could not retrieve information for tanzania: request failed: connection refused"
        )
    );
}

#[test]
fn bye_terminates() {
    assert_eq!(ask("bye"), Reply::Terminate);
    assert_eq!(ask("Bye?"), Reply::Terminate);
}

#[test]
fn unknown_questions_are_not_understood() {
    assert_eq!(ask("what is the meaning of life"), Reply::line(NOT_UNDERSTOOD));
    assert_eq!(ask("bye bye"), Reply::line(NOT_UNDERSTOOD));
    assert_eq!(ask(""), Reply::line(NOT_UNDERSTOOD));
}

#[test]
fn standard_rules_are_well_formed() {
    let rules = questions::get().unwrap();

    assert_eq!(rules.len(), 11);
    assert_eq!(rules.last().map(|r| r.name), Some("bye"));
    assert!(rules.iter().all(|r| r.template.wildcards() <= 1));
}
