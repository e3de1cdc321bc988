use super::DocumentSource;
use crate::{FixtureError, SourceError};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A fixed table of subject → text block.
///
/// Subjects are matched ignoring case and surrounding whitespace. A JSON
/// fixture file is a single object:
///
/// ```json
/// { "tanzania": "Capital Dodoma\nPopulation (2022) 61,741,120" }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`StaticSource::insert`].
    pub fn with(mut self, subject: &str, text: impl Into<String>) -> Self {
        self.insert(subject, text);
        self
    }

    pub fn insert(&mut self, subject: &str, text: impl Into<String>) {
        self.documents.insert(key(subject), text.into());
    }

    /// Parse a JSON object of subject → text block.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let documents: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(documents.into_iter().collect())
    }

    /// Read and parse a JSON fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let source = Self::from_json(&json)?;
        debug!(path = %path.display(), documents = source.len(), "loaded fixtures");
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<S: AsRef<str>, T: Into<String>> FromIterator<(S, T)> for StaticSource {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut source = StaticSource::new();
        for (subject, text) in iter {
            source.insert(subject.as_ref(), text);
        }
        source
    }
}

impl DocumentSource for StaticSource {
    fn resolve_document(&self, subject: &str) -> Result<String, SourceError> {
        self.documents.get(&key(subject)).cloned().ok_or(SourceError::NoResults)
    }
}

fn key(subject: &str) -> String {
    subject.trim().to_lowercase()
}
