//! Extraction rules for infobox fields.
//!
//! Patterns are written against normalized infobox text, where a label and
//! its value are separated by spaces or a single newline and footnote markers
//! look like `[12]`.

use crate::{ExtractionRule, Shape};

/// `Capital Dodoma` → `Dodoma`. The value stops at the end of its line.
pub fn capital() -> ExtractionRule {
    ExtractionRule {
        name: "capital",
        pattern: r"Capital\s*(?:\[\d+\])?\s*(?P<capital>[A-Za-z ,\(\)\-]+)",
        group: "capital",
        missing: "Page infobox has no capital city information",
        shape: Shape::Text,
    }
}

/// `Population (2020) [3] 126,014,024` → `126014024`.
///
/// Only comma-grouped numbers count, which skips census years and footnotes.
pub fn population() -> ExtractionRule {
    ExtractionRule {
        name: "population",
        pattern: r"Population(?:\s*\([^)]*\))?\s*(?:\[\d+\])?.*?(?P<population>\d{1,3}(?:,\d{3})+)",
        group: "population",
        missing: "Page infobox has no population information",
        shape: Shape::Number,
    }
}

/// `Official languages English and French` → `["English", "French"]`.
pub fn official_languages() -> ExtractionRule {
    ExtractionRule {
        name: "official languages",
        pattern: r"Official languages?\s*(?:\[\d+\])?\s*(?P<languages>[A-Za-z, \(\)\-]+)",
        group: "languages",
        missing: "Page infobox has no official language information",
        shape: Shape::List,
    }
}

/// `Born Barack Obama (1961-08-04)` → `1961-08-04`.
pub fn birth_date() -> ExtractionRule {
    ExtractionRule {
        name: "birth date",
        pattern: r"Born\D*(?P<birth>\d{4}-\d{2}-\d{2})",
        group: "birth",
        missing: "Page infobox has no birth information (at least none in xxxx-xx-xx format)",
        shape: Shape::Date,
    }
}

/// `Polar radius 6356.752 km` → `6356.752`.
///
/// The optional leading number skips a figure given in another unit before
/// the kilometre value.
pub fn polar_radius() -> ExtractionRule {
    ExtractionRule {
        name: "polar radius",
        pattern: r"Polar radius.*?(?: ?\d+ )?(?P<radius>[\d,.]+).*?km",
        group: "radius",
        missing: "Page infobox has no polar radius information",
        shape: Shape::Text,
    }
}
