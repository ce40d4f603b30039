//! Export templates.
//!
//! Renders a list of occurrences as a stylesheet or module in one of five
//! layouts. Keys are `slugify(name)-N` with `N` the 1-based position in the
//! list, so they are unique even when names repeat.

use std::fmt;
use std::str::FromStr;

use chroma_scan::ColorOccurrence;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// Output layout for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `:root { --key: value; }`
    Css,
    /// `$key: value;`
    Scss,
    /// Pretty-printed JSON object.
    Json,
    /// `module.exports` with `theme.extend.colors`.
    Tailwind,
    /// ES module exporting an array of values.
    Array,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown export format {0:?} (expected css, scss, json, tailwind or array)")]
pub struct UnknownFormat(pub String);

impl ExportFormat {
    pub const ALL: [Self; 5] = [Self::Css, Self::Scss, Self::Json, Self::Tailwind, Self::Array];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind => "tailwind",
            Self::Array => "array",
        }
    }

    /// File extension of the rendered output.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind | Self::Array => "js",
        }
    }

    /// Suggested file name, `colors.<ext>`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("colors.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

// ----------------------------------------------------------------------------
// Keys
// ----------------------------------------------------------------------------

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("slug pattern is valid"));
static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("slug pattern is valid"));

/// Lower-case, drop punctuation, join words with `-`. Empty becomes `color`.
///
/// ```
/// use chroma_palette::export::slugify;
///
/// assert_eq!(slugify("Brand Primary!"), "brand-primary");
/// assert_eq!(slugify("--"), "color");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lower, "");
    let joined = SLUG_SEPARATORS.replace_all(&cleaned, "-");
    let slug = joined.trim_matches('-');
    if slug.is_empty() { "color".to_owned() } else { slug.to_owned() }
}

/// Key for the occurrence at `index` (0-based).
#[must_use]
pub fn key(name: &str, index: usize) -> String {
    let base = name.strip_prefix("--").or_else(|| name.strip_prefix('$')).unwrap_or(name);
    format!("{}-{}", slugify(base), index + 1)
}

fn quote_single(value: &str) -> String {
    value.replace('\'', "\\'")
}

// ----------------------------------------------------------------------------
// Rendering
// ----------------------------------------------------------------------------

/// Render `occurrences` in `format`, in list order.
#[must_use]
pub fn render(occurrences: &[ColorOccurrence], format: ExportFormat) -> String {
    let keyed = occurrences.iter().enumerate().map(|(i, occ)| (key(&occ.name, i), occ.value.as_str()));

    match format {
        ExportFormat::Css => {
            let mut out = String::from(":root {\n");
            for (k, v) in keyed {
                out.push_str(&format!("  --{k}: {v};\n"));
            }
            out.push('}');
            out
        }
        ExportFormat::Scss => keyed.map(|(k, v)| format!("${k}: {v};\n")).collect(),
        ExportFormat::Json => {
            let map: Map<String, Value> = keyed.map(|(k, v)| (k, Value::from(v))).collect();
            format!("{:#}", Value::Object(map))
        }
        ExportFormat::Tailwind => {
            let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
            for (k, v) in keyed {
                out.push_str(&format!("        '{k}': '{}',\n", quote_single(v)));
            }
            out.push_str("      },\n    },\n  },\n}");
            out
        }
        ExportFormat::Array => {
            let items: Vec<String> = occurrences
                .iter()
                .map(|occ| format!("  '{}'", quote_single(&occ.value)))
                .collect();
            format!("const colors = [\n{}\n];\n\nexport default colors;", items.join(",\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_scan::ColorKind;
    use pretty_assertions::assert_eq;

    fn occ(name: &str, value: &str) -> ColorOccurrence {
        ColorOccurrence {
            line: 1,
            name: name.to_owned(),
            value: value.to_owned(),
            kind: ColorKind::Solid,
        }
    }

    fn sample() -> Vec<ColorOccurrence> {
        vec![occ("primary", "#ff2c2c"), occ("primary", "tomato")]
    }

    #[test]
    fn parse_format_names() {
        assert_eq!("css".parse::<ExportFormat>(), Ok(ExportFormat::Css));
        assert_eq!("Tailwind".parse::<ExportFormat>(), Ok(ExportFormat::Tailwind));
        assert_eq!(
            "xml".parse::<ExportFormat>(),
            Err(UnknownFormat("xml".to_owned()))
        );
    }

    #[test]
    fn extensions_and_file_names() {
        let exts: Vec<_> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
        assert_eq!(exts, ["css", "scss", "json", "js", "js"]);
        assert_eq!(ExportFormat::Tailwind.file_name(), "colors.js");
    }

    #[test]
    fn slugify_rules() {
        assert_eq!(slugify("Primary Color"), "primary-color");
        assert_eq!(slugify("  __a--b__  "), "a-b");
        assert_eq!(slugify("héllo"), "hllo");
        assert_eq!(slugify("!!!"), "color");
    }

    #[test]
    fn css_layout() {
        assert_eq!(
            render(&sample(), ExportFormat::Css),
            ":root {\n  --primary-1: #ff2c2c;\n  --primary-2: tomato;\n}"
        );
    }

    #[test]
    fn scss_layout() {
        assert_eq!(
            render(&sample(), ExportFormat::Scss),
            "$primary-1: #ff2c2c;\n$primary-2: tomato;\n"
        );
    }

    #[test]
    fn json_layout() {
        assert_eq!(
            render(&sample(), ExportFormat::Json),
            "{\n  \"primary-1\": \"#ff2c2c\",\n  \"primary-2\": \"tomato\"\n}"
        );
    }

    #[test]
    fn tailwind_escapes_quotes() {
        let out = render(&[occ("x", "it's")], ExportFormat::Tailwind);
        assert_eq!(
            out,
            "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n        'x-1': 'it\\'s',\n      },\n    },\n  },\n}"
        );
    }

    #[test]
    fn array_layout() {
        assert_eq!(
            render(&sample(), ExportFormat::Array),
            "const colors = [\n  '#ff2c2c',\n  'tomato'\n];\n\nexport default colors;"
        );
    }

    #[test]
    fn empty_lists_still_render() {
        assert_eq!(render(&[], ExportFormat::Css), ":root {\n}");
        assert_eq!(render(&[], ExportFormat::Scss), "");
        assert_eq!(render(&[], ExportFormat::Json), "{}");
    }
}
