//! Candidate validation.

use chroma_color::css::{self, CssColorError};
use tracing::trace;

/// CSS keywords that show up in color positions but are not colors.
const NON_COLOR_KEYWORDS: [&str; 7] = ["none", "inherit", "initial", "unset", "auto", "normal", "solid"];

/// Whether `candidate` is a color (or gradient) a stylesheet would accept
/// as a `background` value.
///
/// Bare keywords like `none`, and purely numeric text (`50%`, `1, 2, 3`),
/// are rejected up front. Everything else goes through the CSS grammar.
#[must_use]
pub fn is_valid_color(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    if NON_COLOR_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(trimmed)) {
        return false;
    }
    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%') || c.is_whitespace())
    {
        return false;
    }

    match grammar_check(trimmed) {
        Ok(()) => true,
        Err(error) => {
            trace!(candidate = trimmed, %error, "rejected color candidate");
            false
        }
    }
}

fn grammar_check(value: &str) -> Result<(), CssColorError> {
    match css::parse_gradient(value) {
        Ok(_) => Ok(()),
        Err(CssColorError::NotAGradient) => css::parse_color(value).map(|_| ()),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_keywords() {
        assert!(!is_valid_color(""));
        assert!(!is_valid_color("   "));
        for keyword in NON_COLOR_KEYWORDS {
            assert!(!is_valid_color(keyword), "{keyword}");
            assert!(!is_valid_color(&keyword.to_uppercase()), "{keyword}");
        }
    }

    #[test]
    fn rejects_bare_numbers() {
        assert!(!is_valid_color("42"));
        assert!(!is_valid_color("50%"));
        assert!(!is_valid_color("1, 2.5, 3"));
    }

    #[test]
    fn accepts_colors_and_gradients() {
        for value in [
            "#ff2c2c",
            "tomato",
            "transparent",
            "currentColor",
            "rgb(255 44 44 / 0.5)",
            "hsla(280, 100%, 59%, 0.5)",
            "oklch(70% 0.1 200)",
            "linear-gradient(to right, #fff, #000)",
        ] {
            assert!(is_valid_color(value), "{value}");
        }
    }

    #[test]
    fn rejects_malformed_functions() {
        assert!(!is_valid_color("rgb(999 abc)"));
        assert!(!is_valid_color("linear-gradient(red)"));
        assert!(!is_valid_color("blurple"));
    }
}
