//! Subject resolvers.
//!
//! Every resolver is the same pipeline with a different extraction rule:
//!
//! ```text
//! subject ── source.resolve_document ──▶ raw text ── normalize ──▶ extract(rule)
//!                 │ Err                                              │ Err
//!                 └─▶ DocumentUnavailable                            └─▶ FieldNotFound
//! ```

use super::fields;
use crate::{DocumentSource, ExtractionRule, FieldValue, ResolveError, extract, normalize};
use tracing::{debug, warn};

/// Fetch the document for `subject` and extract `rule` from it.
pub fn resolve(source: &dyn DocumentSource, subject: &str, rule: &ExtractionRule) -> Result<FieldValue, ResolveError> {
    let raw = source.resolve_document(subject).map_err(|reason| {
        warn!(subject, field = rule.name, %reason, "document unavailable");
        ResolveError::DocumentUnavailable { subject: subject.to_string(), reason }
    })?;

    let text = normalize(&raw);
    let value = extract(&text, rule);
    match &value {
        Ok(v) => debug!(subject, field = rule.name, value = %v, "field resolved"),
        Err(err) => debug!(subject, field = rule.name, %err, "field missing"),
    }
    value
}

pub fn country_capital(source: &dyn DocumentSource, country: &str) -> Result<String, ResolveError> {
    resolve(source, country, &fields::capital()).map(FieldValue::into_scalar)
}

/// Population with grouping separators removed, e.g. `"126014024"`.
pub fn country_population(source: &dyn DocumentSource, country: &str) -> Result<String, ResolveError> {
    resolve(source, country, &fields::population()).map(FieldValue::into_scalar)
}

pub fn country_languages(source: &dyn DocumentSource, country: &str) -> Result<Vec<String>, ResolveError> {
    resolve(source, country, &fields::official_languages()).map(FieldValue::into_list)
}

/// Birth date as `YYYY-MM-DD`.
pub fn birth_date(source: &dyn DocumentSource, name: &str) -> Result<String, ResolveError> {
    resolve(source, name, &fields::birth_date()).map(FieldValue::into_scalar)
}

/// Polar radius in kilometres, as written in the infobox.
pub fn polar_radius(source: &dyn DocumentSource, body: &str) -> Result<String, ResolveError> {
    resolve(source, body, &fields::polar_radius()).map(FieldValue::into_scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceError, StaticSource};

    fn source() -> StaticSource {
        StaticSource::new()
            .with("tanzania", "Capital\u{a0}\u{a0}Dodoma\n\n\nPopulation (2022) 61,741,120\nOfficial languages Swahili, English")
            .with("atlantis", "Motto Glub glub")
    }

    #[test]
    fn resolves_each_field_from_the_same_document() {
        let source = source();

        assert_eq!(country_capital(&source, "tanzania"), Ok("Dodoma".to_string()));
        assert_eq!(country_population(&source, "tanzania"), Ok("61741120".to_string()));
        assert_eq!(country_languages(&source, "tanzania"), Ok(vec!["Swahili".to_string(), "English".to_string()]));
    }

    #[test]
    fn unknown_subject_is_document_unavailable() {
        let err = country_capital(&source(), "narnia").unwrap_err();

        assert_eq!(
            err,
            ResolveError::DocumentUnavailable { subject: "narnia".to_string(), reason: SourceError::NoResults }
        );
        assert_eq!(err.to_string(), "could not retrieve information for narnia: no matching page");
    }

    #[test]
    fn missing_field_is_field_not_found() {
        let err = country_population(&source(), "atlantis").unwrap_err();

        assert_eq!(err, ResolveError::FieldNotFound("Page infobox has no population information"));
        assert_eq!(err.to_string(), "Page infobox has no population information");
    }

    #[test]
    fn missing_infobox_is_document_unavailable() {
        struct NoInfobox;
        impl DocumentSource for NoInfobox {
            fn resolve_document(&self, _subject: &str) -> Result<String, SourceError> {
                Err(SourceError::NoInfobox)
            }
        }

        let err = birth_date(&NoInfobox, "someone").unwrap_err();

        assert!(matches!(err, ResolveError::DocumentUnavailable { reason: SourceError::NoInfobox, .. }));
    }
}
