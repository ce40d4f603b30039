//! Recognizer table.
//!
//! Recognizers are deliberately permissive: they find *candidates* that
//! look like colors. [`crate::validate::is_valid_color`] decides whether a
//! candidate is real. Patterns are compiled once, on first use.
//!
//! ```text
//! Pass::Gradient    six gradient functions, two levels of nested parens
//! Pass::Functional  oklch → oklab → lch → lab → hwb → color() → hsl → rgb
//! Pass::Hex         8 → 6 → 4 → 3 digits, ASCII word-bounded
//! (named colors)    token split, see NAME_SEPARATORS
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::ColorKind;

/// The extraction pass a recognizer belongs to. Passes run in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pass {
    Gradient,
    Functional,
    Hex,
}

/// One recognizer: a family name, its pattern and an optional kind hint.
#[derive(Debug)]
pub struct RecognizerRule {
    pub family: &'static str,
    pub pass: Pass,
    pub pattern: Regex,
    /// Kind every match of this rule has, when it is known up front.
    pub hint: Option<ColorKind>,
}

impl RecognizerRule {
    fn new(family: &'static str, pass: Pass, pattern: &str, hint: Option<ColorKind>) -> Self {
        Self {
            family,
            pass,
            pattern: Regex::new(pattern).expect("recognizer pattern is valid"),
            hint,
        }
    }
}

const GRADIENT: &str = r"(?i)(?:linear-gradient|radial-gradient|conic-gradient|repeating-linear-gradient|repeating-radial-gradient|repeating-conic-gradient)\s*\((?:[^()]+|\((?:[^()]+|\([^()]*\))*\))*\)";

const OKLCH: &str = r"(?i)oklch\s*\(\s*([\d.]+(?:%)?)\s*[, ]\s*([\d.]+)\s*[, ]\s*([\d.]+(?:deg)?)\s*(?:/\s*([\d.]+(?:%)?))?\s*\)";
const OKLAB: &str = r"(?i)oklab\s*\(\s*([\d.]+(?:%)?)\s*[, ]\s*(-?[\d.]+)\s*[, ]\s*(-?[\d.]+)\s*(?:/\s*([\d.]+(?:%)?))?\s*\)";
const LCH: &str = r"(?i)lch\s*\(\s*([\d.]+(?:%)?)\s*[, ]\s*([\d.]+)\s*[, ]\s*([\d.]+(?:deg)?)\s*(?:/\s*([\d.]+(?:%)?))?\s*\)";
const LAB: &str = r"(?i)lab\s*\(\s*([\d.]+(?:%)?)\s*[, ]\s*(-?[\d.]+)\s*[, ]\s*(-?[\d.]+)\s*(?:/\s*([\d.]+(?:%)?))?\s*\)";
const HWB: &str = r"(?i)hwb\s*\(\s*([\d.]+(?:deg|rad|grad|turn)?)\s*[, ]\s*([\d.]+(?:%)?)\s*[, ]\s*([\d.]+(?:%)?)\s*(?:/\s*([\d.]+(?:%)?))?\s*\)";
const COLOR_FN: &str = r"(?i)color\s*\(\s*([\w-]+)\s+([-\d.]+(?:%)?)\s+([-\d.]+(?:%)?)\s+([-\d.]+(?:%)?)\s*(?:/\s*([\d.]+(?:%)?))?\s*\)";
const HSL: &str = r"(?i)hsla?\s*\(\s*([\d.]+(?:deg|rad|grad|turn)?)\s*[, ]\s*([\d.]+(?:%)?)\s*[, ]\s*([\d.]+(?:%)?)\s*(?:/\s*([\d.]+(?:%)?)|(?:,\s*([\d.]+(?:%)?)))?\s*\)";
const RGB: &str = r"(?i)rgba?\s*\(\s*([\d.]+(?:%)?)\s*[, ]\s*([\d.]+(?:%)?)\s*[, ]\s*([\d.]+(?:%)?)\s*(?:/\s*([\d.]+(?:%)?)|(?:,\s*([\d.]+(?:%)?)))?\s*\)";

/// Every recognizer, in the order the extractor applies them.
pub static RULES: Lazy<Vec<RecognizerRule>> = Lazy::new(|| {
    use ColorKind::{Gradient, Transparent};
    use Pass::{Functional, Hex};

    vec![
        RecognizerRule::new("gradient", Pass::Gradient, GRADIENT, Some(Gradient)),
        RecognizerRule::new("oklch", Functional, OKLCH, None),
        RecognizerRule::new("oklab", Functional, OKLAB, None),
        RecognizerRule::new("lch", Functional, LCH, None),
        RecognizerRule::new("lab", Functional, LAB, None),
        RecognizerRule::new("hwb", Functional, HWB, None),
        RecognizerRule::new("color", Functional, COLOR_FN, None),
        RecognizerRule::new("hsl", Functional, HSL, None),
        RecognizerRule::new("rgb", Functional, RGB, None),
        RecognizerRule::new("hex8", Hex, r"#[0-9A-Fa-f]{8}(?-u:\b)", Some(Transparent)),
        RecognizerRule::new("hex6", Hex, r"#[0-9A-Fa-f]{6}(?-u:\b)", None),
        RecognizerRule::new("hex4", Hex, r"#[0-9A-Fa-f]{4}(?-u:\b)", Some(Transparent)),
        RecognizerRule::new("hex3", Hex, r"#[0-9A-Fa-f]{3}(?-u:\b)", None),
    ]
});

/// Separators for the named-color pass.
pub static NAME_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s:;,(){}'"]+"#).expect("separator pattern is valid"));

/// The rules belonging to `pass`, in priority order.
pub fn rules_for(pass: Pass) -> impl Iterator<Item = &'static RecognizerRule> {
    RULES.iter().filter(move |rule| rule.pass == pass)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(family: &str) -> &'static RecognizerRule {
        RULES.iter().find(|r| r.family == family).unwrap()
    }

    fn first_match(family: &str, text: &str) -> Option<String> {
        rule(family).pattern.find(text).map(|m| m.as_str().to_owned())
    }

    #[test]
    fn table_order() {
        let families: Vec<_> = RULES.iter().map(|r| r.family).collect();
        assert_eq!(
            families,
            [
                "gradient", "oklch", "oklab", "lch", "lab", "hwb", "color", "hsl", "rgb", "hex8",
                "hex6", "hex4", "hex3",
            ]
        );
        assert!(RULES.windows(2).all(|w| w[0].pass <= w[1].pass));
    }

    #[test]
    fn gradient_spans_nested_functions() {
        let text = "background: linear-gradient(90deg, rgba(0, 0, 0, 0.5) 0%, #fff 100%);";
        assert_eq!(
            first_match("gradient", text).as_deref(),
            Some("linear-gradient(90deg, rgba(0, 0, 0, 0.5) 0%, #fff 100%)")
        );
        assert_eq!(
            first_match("gradient", "Repeating-Radial-Gradient(red, blue)").as_deref(),
            Some("Repeating-Radial-Gradient(red, blue)")
        );
    }

    #[test]
    fn functional_patterns_accept_both_separators() {
        assert!(first_match("rgb", "rgb(255, 44, 44)").is_some());
        assert!(first_match("rgb", "rgb(255 44 44 / 0.5)").is_some());
        assert!(first_match("rgb", "RGBA(255 44 44, 0.5)").is_some());
        assert!(first_match("hsl", "hsl(280deg 100% 59% / 0.5)").is_some());
        assert!(first_match("oklch", "oklch(70% 0.1 200)").is_some());
        assert!(first_match("oklab", "oklab(0.5 -0.1 0.1)").is_some());
        assert!(first_match("color", "color(display-p3 1 0 0)").is_some());
        assert!(first_match("hwb", "hwb(120 10% 20%)").is_some());
    }

    #[test]
    fn hex_requires_word_boundary() {
        assert_eq!(first_match("hex6", "#ff2c2c80"), None);
        assert_eq!(first_match("hex8", "#ff2c2c80").as_deref(), Some("#ff2c2c80"));
        assert_eq!(first_match("hex3", "#fff;").as_deref(), Some("#fff"));
    }

    #[test]
    fn hex_boundary_is_ascii_only() {
        assert_eq!(first_match("hex3", "#abcé").as_deref(), Some("#abc"));
        assert_eq!(first_match("hex6", "#ff2c2cé").as_deref(), Some("#ff2c2c"));
        assert_eq!(first_match("hex3", "#abcd"), None);
    }

    #[test]
    fn separators_split_declarations() {
        let words: Vec<_> = NAME_SEPARATORS
            .split("border: 1px solid red; color:'blue'")
            .filter(|w| !w.is_empty())
            .collect();
        assert_eq!(words, ["border", "1px", "solid", "red", "color", "blue"]);
    }
}
