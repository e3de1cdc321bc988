//! Field extraction rules and their application.
//!
//! An [`ExtractionRule`] says where a field lives in a text block (a regex
//! with one named capture group), what to report when it is missing, and how
//! to shape the captured text:
//!
//! ```text
//! Shape::Text    " Dodoma "            -> "Dodoma"
//! Shape::Number  "126,014,024"         -> "126014024"
//! Shape::List    "English and French"  -> ["English", "French"]
//! Shape::Date    "1961-08-04"          -> "1961-08-04" (validated)
//! ```
//!
//! Only the named group is used; the rest of the match is context.

use crate::ResolveError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use tracing::trace;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Post-processing applied to a captured field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Trimmed text.
    Text,
    /// Digits with `,` grouping separators removed.
    Number,
    /// Items separated by `,` or ` and `, trimmed, empties dropped.
    List,
    /// A calendar date written `YYYY-MM-DD`.
    Date,
}

/// Where a field lives in a text block and what to say when it does not.
///
/// Rules are process-wide constants; see `src/rules/fields.rs`.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRule {
    pub name: &'static str,
    /// Search pattern source. Always compiled case-insensitive with `.`
    /// crossing newlines; see [`ExtractionRule::regex`].
    pub pattern: &'static str,
    /// Name of the capture group holding the value.
    pub group: &'static str,
    /// Human-readable reason reported when the field is missing.
    pub missing: &'static str,
    pub shape: Shape,
}

static COMPILED: Lazy<RwLock<HashMap<&'static str, Regex>>> = Lazy::new(Default::default);

impl ExtractionRule {
    /// The compiled search pattern, cached per pattern source.
    pub fn regex(&self) -> Result<Regex, regex::Error> {
        if let Some(re) = COMPILED.read().ok().and_then(|cache| cache.get(self.pattern).cloned()) {
            return Ok(re);
        }
        let re = RegexBuilder::new(self.pattern).case_insensitive(true).dot_matches_new_line(true).build()?;
        if let Ok(mut cache) = COMPILED.write() {
            cache.insert(self.pattern, re.clone());
        }
        Ok(re)
    }
}

/// An extracted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The value as one string; list items are joined with `", "`.
    pub fn into_scalar(self) -> String {
        match self {
            FieldValue::Scalar(s) => s,
            FieldValue::List(items) => items.join(", "),
        }
    }

    /// The value as a list; a scalar becomes a one-item list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::Scalar(s) => vec![s],
            FieldValue::List(items) => items,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Apply `rule` to normalized `text`.
///
/// Fails with [`ResolveError::FieldNotFound`] carrying `rule.missing` when the
/// pattern does not match, when the named group did not take part in the
/// match, or when the capture does not survive shaping (blank text, a list
/// with no items, an impossible date). A pattern that does not compile is
/// [`ResolveError::InvalidPattern`].
pub fn extract(text: &str, rule: &ExtractionRule) -> Result<FieldValue, ResolveError> {
    let not_found = || ResolveError::FieldNotFound(rule.missing);

    let pattern = rule
        .regex()
        .map_err(|err| ResolveError::InvalidPattern { field: rule.name, reason: err.to_string() })?;
    let captured = pattern.captures(text).and_then(|caps| caps.name(rule.group)).ok_or_else(not_found)?;
    trace!(field = rule.name, raw = captured.as_str(), "field captured");

    let value = match rule.shape {
        Shape::Text => FieldValue::Scalar(captured.as_str().trim().to_string()),
        Shape::Number => FieldValue::Scalar(strip_grouping(captured.as_str())),
        Shape::List => FieldValue::List(split_list(captured.as_str())),
        Shape::Date => {
            let date = NaiveDate::parse_from_str(captured.as_str().trim(), DATE_FORMAT).map_err(|_| not_found())?;
            FieldValue::Scalar(date.format(DATE_FORMAT).to_string())
        }
    };

    match &value {
        FieldValue::Scalar(s) if s.is_empty() => Err(not_found()),
        FieldValue::List(items) if items.is_empty() => Err(not_found()),
        _ => Ok(value),
    }
}

/// Remove `,` grouping separators and surrounding whitespace from a number.
pub fn strip_grouping(raw: &str) -> String {
    raw.trim().chars().filter(|&c| c != ',').collect()
}

/// Split a list on commas or the word `and`, trimming items and dropping
/// empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    regex!(r",\s*|\s+and\s+").split(raw).map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
