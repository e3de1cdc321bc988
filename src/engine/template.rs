//! Question templates.
//!
//! A template is written as plain text: whitespace-separated words, where a
//! word starting with [`WILDCARD`] is a wildcard marker and everything else is
//! a literal.
//!
//! ```text
//! "what is the capital of %"   -> [lit what][lit is][lit the][lit capital][lit of][%]
//! "what is %'s birth date"     -> [lit what][lit is][% suffix "'s"][lit birth][lit date]
//! ```
//!
//! A marker with trailing text (`%'s`) is still a single wildcard: the last
//! token it binds must end with that text, which is cut from the binding.
//!
//! Literals are stored lowercase. Ill-formed templates are rejected here so
//! that the matcher never sees them.

use crate::TemplateError;
use std::fmt;
use std::str::FromStr;

/// Character that marks a wildcard word in template text.
pub const WILDCARD: char = '%';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal one query token, ignoring case.
    Literal(String),
    /// Binds one or more consecutive query tokens.
    Wildcard { suffix: Option<String> },
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    ///
    /// Fails on an empty template and on two wildcard markers in a row
    /// (`% %`, or `%%`), since the split between them would be arbitrary.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments: Vec<Segment> = Vec::new();

        for word in source.split_whitespace() {
            let segment = match word.strip_prefix(WILDCARD) {
                Some(suffix) if suffix.contains(WILDCARD) => {
                    return Err(TemplateError::AdjacentWildcards(source.to_string()));
                }
                Some("") => Segment::Wildcard { suffix: None },
                Some(suffix) => Segment::Wildcard { suffix: Some(suffix.to_lowercase()) },
                None => Segment::Literal(word.to_lowercase()),
            };

            if segment.is_wildcard() && segments.last().is_some_and(Segment::is_wildcard) {
                return Err(TemplateError::AdjacentWildcards(source.to_string()));
            }
            segments.push(segment);
        }

        if segments.is_empty() {
            return Err(TemplateError::Empty);
        }

        Ok(Template { source: source.trim().to_string(), segments })
    }

    /// The template text as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of wildcard markers, i.e. the length of a successful binding.
    pub fn wildcards(&self) -> usize {
        self.segments.iter().filter(|s| s.is_wildcard()).count()
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
