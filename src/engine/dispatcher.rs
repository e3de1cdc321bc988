//! First-match-wins rule dispatch.
//!
//! The rule table is plain data: an ordered slice of [`Rule`]s. The dispatcher
//! tries each template in turn and hands the binding of the first match to
//! that rule's handler. Later rules are never tried, even if they would match
//! too; registration order is the only tie-break.
//!
//! ```text
//! rules: [r0, r1, r2, ...]
//!          │    │
//!          │    └─ match ──▶ handler(binding, source) ──▶ Reply
//!          └─ None (next)
//! ```
//!
//! Two replies are substituted here so callers always get at least one line:
//!
//! - a handler that produced no lines → [`NO_ANSWERS`]
//! - no rule matched                  → [`NOT_UNDERSTOOD`]
//!
//! [`Reply::Terminate`] passes through untouched; the rule that produces it is
//! not special to the dispatcher.

use super::matcher::match_template;
use super::metrics::{DispatchMetrics, DispatchResult, MatchTrace};
use crate::{DocumentSource, Reply, Rule};
use std::time::Instant;
use tracing::debug;

/// Reply line used when the matched handler produced nothing.
pub const NO_ANSWERS: &str = "No answers";

/// Reply line used when no template matched the query.
pub const NOT_UNDERSTOOD: &str = "I don't understand";

/// Dispatches queries over a borrowed, ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    rules: &'a [Rule],
}

impl<'a> Dispatcher<'a> {
    pub fn new(rules: &'a [Rule]) -> Self {
        Dispatcher { rules }
    }

    pub fn rules(&self) -> &'a [Rule] {
        self.rules
    }

    /// Answer `query` with the first matching rule.
    ///
    /// Convenience wrapper that discards trace and timing details. Use
    /// [`Dispatcher::dispatch_with_metrics`] to inspect them.
    pub fn dispatch<S: AsRef<str>>(&self, query: &[S], source: &dyn DocumentSource) -> Reply {
        self.dispatch_with_metrics(query, source).reply
    }

    /// Answer `query` and report which rule matched and how long it took.
    pub fn dispatch_with_metrics<S: AsRef<str>>(&self, query: &[S], source: &dyn DocumentSource) -> DispatchResult {
        let total_start = Instant::now();
        let mut metrics = DispatchMetrics::default();

        for rule in self.rules {
            metrics.rules_tried += 1;
            let Some(binding) = match_template(&rule.template, query) else {
                continue;
            };
            metrics.matching = total_start.elapsed();
            debug!(rule = rule.name, template = %rule.template, binding = ?binding.spans(), "rule matched");

            let handler_start = Instant::now();
            let reply = match (rule.handler)(&binding, source) {
                Reply::Lines(lines) if lines.is_empty() => {
                    debug!(rule = rule.name, "handler produced no lines");
                    Reply::line(NO_ANSWERS)
                }
                reply => reply,
            };
            metrics.handler = handler_start.elapsed();
            metrics.total = total_start.elapsed();

            let trace = MatchTrace { rule: rule.name, template: rule.template.source().to_string(), binding };
            return DispatchResult { reply, trace: Some(trace), metrics };
        }

        metrics.matching = total_start.elapsed();
        metrics.total = metrics.matching;
        debug!(tokens = query.len(), rules = self.rules.len(), "no rule matched");

        DispatchResult { reply: Reply::line(NOT_UNDERSTOOD), trace: None, metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binding, SourceError, StaticSource};
    use std::cell::Cell;

    fn echo(name: &'static str, template: &str) -> Rule {
        Rule::new(name, template, move |b: &Binding, _: &dyn DocumentSource| Reply::line(format!("{name}:{}", b.joined())))
            .unwrap()
    }

    fn tokens(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn first_registered_match_wins() {
        let rules = vec![echo("specific", "how big is %"), echo("general", "how % is %")];
        let reply = Dispatcher::new(&rules).dispatch(&tokens("how big is mars"), &StaticSource::new());

        assert_eq!(reply, Reply::line("specific:mars"));
    }

    #[test]
    fn later_rules_are_not_tried_after_a_match() {
        let rules = vec![echo("a", "hello %"), echo("b", "% world"), echo("c", "hello world")];
        let run = Dispatcher::new(&rules).dispatch_with_metrics(&tokens("hello world"), &StaticSource::new());

        assert_eq!(run.reply, Reply::line("a:world"));
        assert_eq!(run.metrics.rules_tried, 1);
        assert_eq!(run.trace.map(|t| t.rule), Some("a"));
    }

    #[test]
    fn skips_non_matching_rules() {
        let rules = vec![echo("capital", "what is the capital of %"), echo("size", "how big is %")];
        let run = Dispatcher::new(&rules).dispatch_with_metrics(&tokens("how big is jupiter"), &StaticSource::new());

        assert_eq!(run.reply, Reply::line("size:jupiter"));
        assert_eq!(run.metrics.rules_tried, 2);
    }

    #[test]
    fn empty_handler_output_becomes_placeholder() {
        let rules = vec![Rule::new("silent", "say nothing", |_: &Binding, _: &dyn DocumentSource| Reply::Lines(vec![])).unwrap()];
        let reply = Dispatcher::new(&rules).dispatch(&tokens("say nothing"), &StaticSource::new());

        assert_eq!(reply, Reply::line(NO_ANSWERS));
    }

    #[test]
    fn unmatched_query_is_not_understood() {
        let rules = vec![echo("size", "how big is %")];
        let run = Dispatcher::new(&rules).dispatch_with_metrics(&tokens("sing me a song"), &StaticSource::new());

        assert_eq!(run.reply, Reply::line(NOT_UNDERSTOOD));
        assert!(run.trace.is_none());
        assert_eq!(run.metrics.rules_tried, 1);
    }

    #[test]
    fn empty_rule_table_is_not_understood() {
        let reply = Dispatcher::new(&[]).dispatch(&tokens("anything"), &StaticSource::new());

        assert_eq!(reply, Reply::line(NOT_UNDERSTOOD));
    }

    #[test]
    fn terminate_passes_through() {
        let rules = vec![Rule::new("bye", "bye", |_: &Binding, _: &dyn DocumentSource| Reply::Terminate).unwrap()];
        let reply = Dispatcher::new(&rules).dispatch(&tokens("bye"), &StaticSource::new());

        assert_eq!(reply, Reply::Terminate);
    }

    #[test]
    fn handler_receives_the_source() {
        struct Counting(Cell<usize>);
        impl DocumentSource for Counting {
            fn resolve_document(&self, _subject: &str) -> Result<String, SourceError> {
                self.0.set(self.0.get() + 1);
                Err(SourceError::NoResults)
            }
        }

        let rules = vec![
            Rule::new("lookup", "look up %", |b: &Binding, source: &dyn DocumentSource| {
                match source.resolve_document(b.first()) {
                    Ok(text) => Reply::line(text),
                    Err(err) => Reply::line(err.to_string()),
                }
            })
            .unwrap(),
        ];
        let source = Counting(Cell::new(0));
        let reply = Dispatcher::new(&rules).dispatch(&tokens("look up pluto"), &source);

        assert_eq!(reply, Reply::line("no matching page"));
        assert_eq!(source.0.get(), 1);
    }
}
