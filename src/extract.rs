//! Field extraction from document text.
//!
//! ```text
//! raw text ── normalize ──▶ clean text ── extract(rule) ──▶ FieldValue
//!            (normalize.rs)               (field.rs)
//!                                          - search pattern, named group
//!                                          - shape: text/number/list/date
//! ```
//!
//! Both steps are pure. Fetching the raw text is the job of a
//! `DocumentSource`; composing the three is done by the resolvers in
//! `src/rules/resolvers.rs`.

#[path = "extract/field.rs"]
mod field;
#[path = "extract/normalize.rs"]
mod normalize;

pub use field::{ExtractionRule, FieldValue, Shape, extract, split_list, strip_grouping};
pub use normalize::normalize;
