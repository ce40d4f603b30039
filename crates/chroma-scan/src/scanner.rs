//! Document scanning and result helpers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::ColorKind;
use crate::extract::{clean_name, extract_colors_from_line};

/// Values longer than this are shortened for display.
pub const DISPLAY_MAX_CHARS: usize = 50;

/// One color found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOccurrence {
    /// 1-based line number.
    pub line: usize,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: ColorKind,
}

/// Scan a whole document.
///
/// Lines are split on `\n` and numbered from 1. Results are ordered by line,
/// then by position within the line. Every call starts from scratch.
#[must_use]
pub fn scan(text: &str) -> Vec<ColorOccurrence> {
    let mut occurrences = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        occurrences.extend(extract_colors_from_line(line).into_iter().map(|c| ColorOccurrence {
            line: idx + 1,
            name: c.name,
            value: c.value,
            kind: c.kind,
        }));
    }
    debug!(lines = text.split('\n').count(), colors = occurrences.len(), "scan complete");
    occurrences
}

// ----------------------------------------------------------------------------
// Statistics
// ----------------------------------------------------------------------------

/// Per-kind counts over a list of occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub total: usize,
    pub solid: usize,
    pub gradient: usize,
    pub transparent: usize,
}

impl ScanStats {
    #[must_use]
    pub fn from_occurrences(occurrences: &[ColorOccurrence]) -> Self {
        occurrences.iter().fold(Self::default(), |mut stats, occ| {
            stats.total += 1;
            match occ.kind {
                ColorKind::Solid => stats.solid += 1,
                ColorKind::Gradient => stats.gradient += 1,
                ColorKind::Transparent => stats.transparent += 1,
            }
            stats
        })
    }
}

// ----------------------------------------------------------------------------
// Filtering and display
// ----------------------------------------------------------------------------

/// Occurrences whose name, value or type contains `query`, ignoring case.
/// An empty query keeps everything.
#[must_use]
pub fn filter<'a>(occurrences: &'a [ColorOccurrence], query: &str) -> Vec<&'a ColorOccurrence> {
    let query = query.trim().to_lowercase();
    occurrences
        .iter()
        .filter(|occ| {
            query.is_empty()
                || occ.name.to_lowercase().contains(&query)
                || occ.value.to_lowercase().contains(&query)
                || occ.kind.as_str().contains(&query)
        })
        .collect()
}

/// Name as shown to a user: sigils stripped, `Color` when empty.
#[must_use]
pub fn display_name(name: &str) -> String {
    clean_name(name)
}

/// Shorten values over [`DISPLAY_MAX_CHARS`] characters to 47 plus `...`.
#[must_use]
pub fn truncate_value(value: &str) -> String {
    if value.chars().count() <= DISPLAY_MAX_CHARS {
        return value.to_owned();
    }
    let mut out: String = value.chars().take(DISPLAY_MAX_CHARS - 3).collect();
    out.push_str("...");
    out
}
