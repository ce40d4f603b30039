//! Single-line color extraction.
//!
//! A line is split into a declaration name and a value region, then the
//! recognizer passes run over the region in priority order. Every accepted
//! match *claims* its byte range; later passes see a masked copy of the
//! region where claimed bytes are blanked, so a color inside a gradient is
//! never reported twice. A later match that touches a claimed range is
//! dropped, since the blanks would let it span the claimed text.

use std::ops::Range;

use chroma_color::named;

use crate::classify::{ColorKind, classify};
use crate::recognize::{NAME_SEPARATORS, Pass, rules_for};
use crate::validate::is_valid_color;

/// Name used when a line has no usable declaration name.
pub const DEFAULT_NAME: &str = "Color";

/// A color found on one line, before a line number is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineColor {
    pub name: String,
    pub value: String,
    pub kind: ColorKind,
}

/// Strip one leading `--`, `$` or `@` sigil and trim; empty becomes
/// [`DEFAULT_NAME`].
#[must_use]
pub fn clean_name(raw: &str) -> String {
    let raw = raw.trim();
    let stripped = raw
        .strip_prefix("--")
        .or_else(|| raw.strip_prefix('$'))
        .or_else(|| raw.strip_prefix('@'))
        .unwrap_or(raw)
        .trim();
    if stripped.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        stripped.to_owned()
    }
}

/// Split a line into `(name, value region)`.
///
/// With a `:`, the name is the text before the first one and the region
/// is the rest, trimmed, with one trailing `;` and every `!important`
/// removed. Without one, the whole trimmed line is the region.
fn split_declaration(line: &str) -> (String, String) {
    let Some((before, after)) = line.split_once(':') else {
        return (DEFAULT_NAME.to_owned(), line.trim().to_owned());
    };
    let region = after.trim();
    let region = region.strip_suffix(';').unwrap_or(region);
    (clean_name(before), remove_important(region).trim().to_owned())
}

/// Remove every `!important` (ASCII case-insensitive).
fn remove_important(text: &str) -> String {
    const NEEDLE: &str = "!important";
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (idx, _) in lower.match_indices(NEEDLE) {
        out.push_str(&text[last..idx]);
        last = idx + NEEDLE.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Byte ranges of the value region already taken by accepted matches.
#[derive(Debug, Default)]
struct Claims {
    spans: Vec<Range<usize>>,
}

impl Claims {
    fn claim(&mut self, span: Range<usize>) {
        self.spans.push(span);
    }

    fn contains(&self, pos: usize) -> bool {
        self.spans.iter().any(|s| s.contains(&pos))
    }

    fn overlaps(&self, span: &Range<usize>) -> bool {
        self.spans.iter().any(|s| s.start < span.end && span.start < s.end)
    }

    /// `region` with every claimed character replaced by spaces, keeping
    /// byte offsets intact.
    fn mask(&self, region: &str) -> String {
        let mut masked = String::with_capacity(region.len());
        for (pos, ch) in region.char_indices() {
            if self.contains(pos) {
                masked.extend(std::iter::repeat_n(' ', ch.len_utf8()));
            } else {
                masked.push(ch);
            }
        }
        masked
    }
}

/// Extract every color on `line`, in pass order then left to right.
///
/// Blank lines and lines starting with `//`, `/*` or `*` yield nothing.
#[must_use]
pub fn extract_colors_from_line(line: &str) -> Vec<LineColor> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        return Vec::new();
    }

    let (name, region) = split_declaration(line);
    let mut claims = Claims::default();
    let mut found: Vec<(String, ColorKind)> = Vec::new();

    for pass in [Pass::Gradient, Pass::Functional, Pass::Hex] {
        let masked = claims.mask(&region);
        let mut accepted: Vec<(Range<usize>, ColorKind)> = Vec::new();

        for rule in rules_for(pass) {
            for m in rule.pattern.find_iter(&masked) {
                let span = m.range();
                if claims.overlaps(&span) {
                    continue;
                }
                if accepted.iter().any(|(s, _)| s.start < span.end && span.start < s.end) {
                    continue;
                }
                let value = m.as_str();
                // Gradients are kept even when repeated; scalar colors are not.
                let duplicate = pass != Pass::Gradient
                    && (found.iter().any(|(v, _)| v == value)
                        || accepted.iter().any(|(s, _)| &masked[s.clone()] == value));
                if duplicate || !is_valid_color(value) {
                    continue;
                }
                accepted.push((span, rule.hint.unwrap_or_else(|| classify(value))));
            }
        }

        accepted.sort_by_key(|(span, _)| span.start);
        for (span, kind) in accepted {
            found.push((region[span.clone()].trim().to_owned(), kind));
            claims.claim(span);
        }
    }

    extract_named(&claims.mask(&region), &mut found);

    found
        .into_iter()
        .map(|(value, kind)| LineColor { name: name.clone(), value, kind })
        .collect()
}

/// Named-color pass over the unclaimed text.
fn extract_named(masked: &str, found: &mut Vec<(String, ColorKind)>) {
    let lower = masked.to_lowercase();
    for word in NAME_SEPARATORS.split(&lower) {
        let word = word.trim();
        if word.is_empty() || word == "inherit" || word == "currentcolor" {
            continue;
        }
        if !named::is_named_color(word) {
            continue;
        }
        if found.iter().any(|(v, _)| v.to_lowercase() == word) {
            continue;
        }
        found.push((word.to_owned(), classify(word)));
    }
}
