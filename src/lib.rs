#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod extract;
mod rules;
mod source;

pub use api::{AnswerDetails, AnswerVerbose, Session, tokenize};
pub use engine::{
    DispatchMetrics, DispatchResult, Dispatcher, MatchTrace, NO_ANSWERS, NOT_UNDERSTOOD, Segment, Template, WILDCARD,
    match_template,
};
pub use error::{FixtureError, ResolveError, SourceError, TemplateError};
pub use extract::{ExtractionRule, FieldValue, Shape, extract, normalize, split_list, strip_grouping};
pub use rules::{fields, questions, resolvers};
pub use source::{DocumentSource, StaticSource, WikipediaOptions, WikipediaSource, infobox_text};

// --- Core types -------------------------------------------------------------

/// What a handler (and therefore [`Session::answer`]) produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Answer lines, in display order.
    Lines(Vec<String>),
    /// The session should end. Not an error, and carries no text.
    Terminate,
}

impl Reply {
    /// A reply made of exactly one line.
    pub fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, Reply::Terminate)
    }

    /// Answer lines, empty for [`Reply::Terminate`].
    pub fn lines(&self) -> &[String] {
        match self {
            Reply::Lines(lines) => lines,
            Reply::Terminate => &[],
        }
    }
}

/// Token spans captured by the wildcard markers of a template, left to right.
///
/// Each span is the consumed query tokens joined by a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    spans: Vec<String>,
}

impl Binding {
    pub(crate) fn new(spans: Vec<String>) -> Self {
        Binding { spans }
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.spans.get(idx).map(String::as_str)
    }

    /// The first span, or `""` for templates without wildcards.
    pub fn first(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    /// All spans joined by a single space.
    pub fn joined(&self) -> String {
        self.spans.join(" ")
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

pub type Handler = Box<dyn Fn(&Binding, &dyn DocumentSource) -> Reply + Send + Sync>;

/// A question rule: a name, a [`Template`] and the handler invoked with the
/// template's [`Binding`] when it matches.
///
/// Rules are tried in the order they were registered; the first match wins.
pub struct Rule {
    pub name: &'static str,
    pub template: Template,
    pub handler: Handler,
}

impl Rule {
    /// Build a rule, rejecting ill-formed templates (empty, or with two
    /// adjacent wildcard markers).
    pub fn new<F>(name: &'static str, template: &str, handler: F) -> Result<Self, TemplateError>
    where
        F: Fn(&Binding, &dyn DocumentSource) -> Reply + Send + Sync + 'static,
    {
        Ok(Rule { name, template: Template::parse(template)?, handler: Box::new(handler) })
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("template", &self.template.source())
            .field("handler", &"<function>")
            .finish()
    }
}
