//! Error kinds.
//!
//! Each concern gets a small closed enum. None of these carry presentation
//! text beyond their `Display` impl; turning a failure into an answer line is
//! done once, in the question handlers (`rules/questions.rs`).

use thiserror::Error;

/// A question template could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template is empty")]
    Empty,

    /// Two wildcard markers in a row leave the split point between them
    /// undefined.
    #[error("template `{0}` has adjacent wildcard markers")]
    AdjacentWildcards(String),
}

/// A document source could not produce a text block for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("no matching page")]
    NoResults,

    #[error("page has no infobox")]
    NoInfobox,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Resolving a field for a subject failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("could not retrieve information for {subject}: {reason}")]
    DocumentUnavailable {
        subject: String,
        #[source]
        reason: SourceError,
    },

    /// The document was retrieved but the field pattern found nothing. Holds
    /// the extraction rule's description.
    #[error("{0}")]
    FieldNotFound(&'static str),

    #[error("invalid pattern for {field}: {reason}")]
    InvalidPattern { field: &'static str, reason: String },
}

/// Loading a JSON fixture file for [`crate::StaticSource`] failed.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid fixtures: {0}")]
    Json(#[from] serde_json::Error),
}
