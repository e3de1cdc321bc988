//! Backtracking template matcher.
//!
//! `match_template` aligns a [`Template`] with a query and, on success,
//! returns one span per wildcard marker.
//!
//! The alignment walks both sequences from the left:
//!
//! ```text
//! template: [what] [is] [the] [capital] [of] [%]
//! query:    [what] [is] [the] [capital] [of] [united] [republic] [of] [tanzania]
//!            lit    lit   lit    lit      lit  └────────── wildcard ──────────┘
//! ```
//!
//! - A literal consumes exactly one token, compared ignoring case.
//! - A wildcard consumes a non-empty prefix of what is left, then the rest of
//!   the template is aligned with the rest of the query. If that fails the
//!   wildcard is retried with one more token.
//! - The match must consume the whole query; there is no substring search.
//!
//! ## Tie-break
//!
//! When several splits would succeed, the first one found wins, and splits are
//! tried **shortest wildcard span first**:
//!
//! ```text
//! template: [%] [and] [%]
//! query:    [a] [and] [b] [and] [c]
//! binding:  ["a", "b and c"]
//! ```
//!
//! A wildcard never tries more tokens than the remaining segments can spare
//! (each needs at least one), which keeps hopeless branches short.

use super::template::{Segment, Template};
use crate::Binding;
use tracing::trace;

/// Match `query` against `template`.
///
/// Returns `None` when the query does not conform. This is an ordinary
/// outcome, used by the dispatcher to move on to the next rule.
pub fn match_template<S: AsRef<str>>(template: &Template, query: &[S]) -> Option<Binding> {
    let query: Vec<&str> = query.iter().map(AsRef::as_ref).collect();
    let mut spans = Vec::with_capacity(template.wildcards());

    if align(template.segments(), &query, &mut spans) { Some(Binding::new(spans)) } else { None }
}

/// Align `segments` with `query`, pushing wildcard spans onto `spans`.
///
/// On failure `spans` is left as it was on entry.
fn align(segments: &[Segment], query: &[&str], spans: &mut Vec<String>) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return query.is_empty();
    };

    match segment {
        Segment::Literal(literal) => match query.split_first() {
            Some((token, tail)) if token.to_lowercase() == *literal => align(rest, tail, spans),
            _ => false,
        },
        Segment::Wildcard { suffix } => {
            let longest = query.len().saturating_sub(rest.len());
            for len in 1..=longest {
                let Some(span) = bind_span(&query[..len], suffix.as_deref()) else {
                    continue;
                };
                trace!(span = %span, remaining = query.len() - len, "wildcard split");
                spans.push(span);
                if align(rest, &query[len..], spans) {
                    return true;
                }
                spans.pop();
            }
            false
        }
    }
}

/// Join the tokens a wildcard consumed. With a suffix, the last token must end
/// with it (and be longer than it); the suffix is cut off.
fn bind_span(tokens: &[&str], suffix: Option<&str>) -> Option<String> {
    let Some(suffix) = suffix else {
        return Some(tokens.join(" "));
    };

    let (last, head) = tokens.split_last()?;
    let cut = last.len().checked_sub(suffix.len())?;
    if cut == 0 || !last.is_char_boundary(cut) || !last[cut..].eq_ignore_ascii_case(suffix) {
        return None;
    }

    let mut words = head.to_vec();
    words.push(&last[..cut]);
    Some(words.join(" "))
}
