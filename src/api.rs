use crate::engine::{DispatchResult, Dispatcher};
use crate::rules::questions;
use crate::{DocumentSource, Reply, Rule, TemplateError};
use std::time::Duration;

/// Split a typed question into query tokens.
///
/// Removes every `?`, lowercases, and splits on whitespace. [`Session::answer`]
/// expects tokens prepared this way but does not call this itself.
///
/// # Example
/// ```
/// assert_eq!(factoid::tokenize("How big is Mars?"), ["how", "big", "is", "mars"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    line.replace('?', "").to_lowercase().split_whitespace().map(String::from).collect()
}

/// A rule table paired with the document source its handlers consult.
///
/// Both are fixed for the lifetime of the session; answering keeps no state
/// between questions.
pub struct Session {
    rules: Vec<Rule>,
    source: Box<dyn DocumentSource>,
}

/// Additional details returned by [`Session::answer_verbose`].
#[derive(Debug, Clone)]
pub struct AnswerDetails {
    /// Name of the rule that matched, if any.
    pub rule: Option<String>,
    /// Template text of the rule that matched.
    pub template: Option<String>,
    /// Wildcard spans bound by the match.
    pub binding: Vec<String>,
    /// Rules tried, including the one that matched.
    pub rules_tried: usize,
    pub total: Duration,
    pub matching: Duration,
    pub handler: Duration,
}

/// Result from [`Session::answer_verbose`].
#[derive(Debug, Clone)]
pub struct AnswerVerbose {
    pub query: Vec<String>,
    pub reply: Reply,
    pub details: AnswerDetails,
}

impl Session {
    /// A session over the standard question rules.
    ///
    /// # Example
    /// ```
    /// use factoid::{Reply, Session, StaticSource};
    ///
    /// let source = StaticSource::new().with("tanzania", "Capital Dodoma");
    /// let session = Session::new(source).unwrap();
    ///
    /// let reply = session.answer(&["what", "is", "the", "capital", "of", "tanzania"]);
    /// assert_eq!(reply, Reply::line("The capital of tanzania is Dodoma"));
    /// ```
    pub fn new(source: impl DocumentSource + 'static) -> Result<Self, TemplateError> {
        Ok(Self::with_rules(questions::get()?, source))
    }

    /// A session over a custom rule table, tried in the given order.
    pub fn with_rules(rules: Vec<Rule>, source: impl DocumentSource + 'static) -> Self {
        Session { rules, source: Box::new(source) }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Answer one question given as query tokens.
    ///
    /// Always returns at least one line, or [`Reply::Terminate`].
    pub fn answer<S: AsRef<str>>(&self, tokens: &[S]) -> Reply {
        Dispatcher::new(&self.rules).dispatch(tokens, &*self.source)
    }

    /// Answer one question and report which rule matched and where the time
    /// went.
    pub fn answer_verbose<S: AsRef<str>>(&self, tokens: &[S]) -> AnswerVerbose {
        let run = Dispatcher::new(&self.rules).dispatch_with_metrics(tokens, &*self.source);
        let query = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let DispatchResult { reply, trace, metrics } = run;

        let details = AnswerDetails {
            rule: trace.as_ref().map(|t| t.rule.to_string()),
            template: trace.as_ref().map(|t| t.template.clone()),
            binding: trace.map(|t| t.binding.spans().to_vec()).unwrap_or_default(),
            rules_tried: metrics.rules_tried,
            total: metrics.total,
            matching: metrics.matching,
            handler: metrics.handler,
        };

        AnswerVerbose { query, reply, details }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("rules", &self.rules).field("source", &"<source>").finish()
    }
}
