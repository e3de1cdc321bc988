//! Document sources.
//!
//! A [`DocumentSource`] turns a subject name into the raw text block that
//! field extraction runs over. Nothing above this trait knows where documents
//! come from.
//!
//! - `fixture.rs`: [`StaticSource`], an in-memory table, optionally loaded
//!   from a JSON file. Used offline and in tests.
//! - `wikipedia.rs`: [`WikipediaSource`], search + first infobox of the best
//!   hit over the MediaWiki API.
//!
//! Sources do not retry or cache; a failed lookup is reported once and the
//! caller decides what to say about it.

#[path = "source/fixture.rs"]
mod fixture;
#[path = "source/wikipedia.rs"]
mod wikipedia;

use crate::SourceError;

pub use fixture::StaticSource;
pub use wikipedia::{WikipediaOptions, WikipediaSource, infobox_text};

/// Resolves a subject name to its document text block.
pub trait DocumentSource {
    /// Fetch the text block for `subject`.
    ///
    /// The returned text is untrusted and may be noisy; callers normalize it
    /// before extracting fields.
    fn resolve_document(&self, subject: &str) -> Result<String, SourceError>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn resolve_document(&self, subject: &str) -> Result<String, SourceError> {
        (**self).resolve_document(subject)
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn resolve_document(&self, subject: &str) -> Result<String, SourceError> {
        (**self).resolve_document(subject)
    }
}
