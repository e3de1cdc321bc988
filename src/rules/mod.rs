//! The standard question set.
//!
//! - `fields`: extraction rules, one per answerable fact.
//! - `resolvers`: subject → document → normalized text → field.
//! - `questions`: templates and handlers, in dispatch order.
//!
//! Adding a fact means one new extraction rule, one resolver and a rule (or a
//! few) in `questions::get`.

pub mod fields;
pub mod questions;
pub mod resolvers;

#[cfg(test)]
mod tests;
