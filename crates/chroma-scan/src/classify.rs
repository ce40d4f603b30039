//! Color kind classification.
//!
//! A purely textual check on the recognized value. It never parses the
//! color, so it agrees with what a reader sees in the source: `rgba(0 0 0)`
//! is reported as transparent even though its alpha is 1.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of color an occurrence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Solid,
    Transparent,
    Gradient,
}

impl ColorKind {
    pub const ALL: [Self; 3] = [Self::Solid, Self::Transparent, Self::Gradient];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Transparent => "transparent",
            Self::Gradient => "gradient",
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Functions whose modern syntax carries alpha after a `/`.
const SLASH_ALPHA_FUNCTIONS: [&str; 8] = [
    "rgb(", "hsl(", "oklch(", "oklab(", "lch(", "lab(", "hwb(", "color(",
];

/// Classify a recognized color value. First matching rule wins.
#[must_use]
pub fn classify(value: &str) -> ColorKind {
    let lower = value.to_lowercase();

    if lower.contains("gradient") {
        return ColorKind::Gradient;
    }
    if lower == "transparent" || lower.contains("rgba") || lower.contains("hsla") {
        return ColorKind::Transparent;
    }
    if lower.contains('/') && SLASH_ALPHA_FUNCTIONS.iter().any(|f| lower.contains(f)) {
        return ColorKind::Transparent;
    }
    // #rgba and #rrggbbaa
    if lower.starts_with('#') && matches!(lower.len(), 5 | 9) {
        return ColorKind::Transparent;
    }
    ColorKind::Solid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_win_over_everything() {
        assert_eq!(classify("linear-gradient(rgba(0,0,0,.5), red)"), ColorKind::Gradient);
        assert_eq!(classify("Repeating-Conic-Gradient(red, blue)"), ColorKind::Gradient);
    }

    #[test]
    fn alpha_spellings_are_transparent() {
        for value in [
            "transparent",
            "rgba(255, 44, 44, 0.5)",
            "hsla(280, 100%, 59%, 0.5)",
            "hsl(280 100% 59% / 0.5)",
            "oklch(70% 0.1 200 / 50%)",
            "color(srgb 1 0 0 / 0.4)",
            "#ff2c2c80",
            "#f0f8",
        ] {
            assert_eq!(classify(value), ColorKind::Transparent, "{value}");
        }
    }

    #[test]
    fn textual_rgba_is_transparent_regardless_of_alpha() {
        assert_eq!(classify("rgba(0 0 0)"), ColorKind::Transparent);
    }

    #[test]
    fn solids() {
        for value in ["#fff", "#ff2c2c", "rgb(255, 44, 44)", "hsl(280 100% 59%)", "tomato"] {
            assert_eq!(classify(value), ColorKind::Solid, "{value}");
        }
    }

    #[test]
    fn display_matches_serde_names() {
        for kind in ColorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
