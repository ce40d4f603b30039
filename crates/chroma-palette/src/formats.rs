//! Format conversion for a single color occurrence.
//!
//! Every display format is derived from one [`CanonicalColor`], which is
//! what a browser canvas would report for the value: channels clipped and
//! rounded to bytes, alpha rounded to two decimals. Gradients have no single
//! canonical color; they list the colors they are built from instead.

use chroma_color::CanonicalColor;
use chroma_color::color::round_to;
use chroma_color::css::parse_color;
use chroma_scan::{ColorKind, ColorOccurrence, classify};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::ramp::{Harmony, harmonies, shades};

/// One labelled representation of a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    pub label: &'static str,
    pub value: String,
}

impl Format {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

/// Everything shown for one occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorDetails {
    pub formats: Vec<Format>,
    pub shades: Vec<String>,
    pub harmonies: Vec<Harmony>,
}

/// Resolve a scalar color value to the canonical model.
///
/// `None` for gradients, for text that is not a color, and for colors with
/// no concrete value here (`currentcolor`, `color(rec2020 ...)`).
#[must_use]
pub fn to_canonical(value: &str) -> Option<CanonicalColor> {
    if classify(value) == ColorKind::Gradient {
        return None;
    }
    let parsed = match parse_color(value.trim()) {
        Ok(parsed) => parsed,
        Err(error) => {
            trace!(value, %error, "value does not parse as a color");
            return None;
        }
    };
    let canonical = parsed.to_canonical();
    if canonical.is_none() {
        trace!(value, "color has no sRGB conversion");
    }
    canonical
}

/// The format list for `value`: `Original` first, then the derived ones.
#[must_use]
pub fn formats(value: &str, kind: ColorKind) -> Vec<Format> {
    let mut out = vec![Format::new("Original", value)];

    if kind == ColorKind::Gradient {
        let colors = gradient_colors(value);
        if !colors.is_empty() {
            out.push(Format::new("Colors", colors.join(", ")));
        }
        return out;
    }

    let Some(color) = to_canonical(value) else {
        return out;
    };
    let (r, g, b) = color.rgb();
    let (h, s, l) = (color.hue().round(), color.saturation().round(), color.lightness().round());

    out.push(Format::new("HEX", color.to_hex()));
    out.push(Format::new("RGB", format!("rgb({r}, {g}, {b})")));
    out.push(Format::new("HSL", format!("hsl({h}, {s}%, {l}%)")));

    if color.alpha() < 1.0 {
        let a = round_to(color.alpha(), 2);
        out.push(Format::new("RGBA", format!("rgba({r}, {g}, {b}, {a})")));
        out.push(Format::new("HSLA", format!("hsla({h}, {s}%, {l}%, {a})")));
        out.push(Format::new("HEX8", color.to_hex8()));
    }
    out
}

static GRADIENT_STOP_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        r"#[0-9A-Fa-f]{3,8}(?-u:\b)",
        r"(?i)rgba?\s*\([^)]+\)",
        r"(?i)hsla?\s*\([^)]+\)",
    ]
    .map(|p| Regex::new(p).expect("gradient stop pattern is valid"))
});

/// Hex, then `rgb(a)`, then `hsl(a)` colors mentioned in a gradient,
/// de-duplicated, in that order.
#[must_use]
pub fn gradient_colors(gradient: &str) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for pattern in GRADIENT_STOP_PATTERNS.iter() {
        for m in pattern.find_iter(gradient) {
            if !colors.iter().any(|c| c == m.as_str()) {
                colors.push(m.as_str().to_owned());
            }
        }
    }
    colors
}

/// Formats, shades and harmonies for one occurrence. Gradients and
/// unconvertible values get no shades or harmonies.
#[must_use]
pub fn details(occurrence: &ColorOccurrence) -> ColorDetails {
    let formats = formats(&occurrence.value, occurrence.kind);
    let canonical = match occurrence.kind {
        ColorKind::Gradient => None,
        ColorKind::Solid | ColorKind::Transparent => to_canonical(&occurrence.value),
    };
    ColorDetails {
        formats,
        shades: canonical.as_ref().map(shades).unwrap_or_default(),
        harmonies: canonical.as_ref().map(harmonies).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(formats: &[Format]) -> Vec<&str> {
        formats.iter().map(|f| f.label).collect()
    }

    fn value_of<'a>(formats: &'a [Format], label: &str) -> Option<&'a str> {
        formats.iter().find(|f| f.label == label).map(|f| f.value.as_str())
    }

    #[test]
    fn opaque_hex() {
        let f = formats("#ff2c2c", ColorKind::Solid);
        assert_eq!(labels(&f), ["Original", "HEX", "RGB", "HSL"]);
        assert_eq!(value_of(&f, "HEX"), Some("#ff2c2c"));
        assert_eq!(value_of(&f, "RGB"), Some("rgb(255, 44, 44)"));
        assert_eq!(value_of(&f, "HSL"), Some("hsl(0, 100%, 59%)"));
    }

    #[test]
    fn translucent_adds_alpha_formats() {
        let f = formats("rgba(255, 44, 44, 0.5)", ColorKind::Transparent);
        assert_eq!(labels(&f), ["Original", "HEX", "RGB", "HSL", "RGBA", "HSLA", "HEX8"]);
        assert_eq!(value_of(&f, "RGBA"), Some("rgba(255, 44, 44, 0.5)"));
        assert_eq!(value_of(&f, "HSLA"), Some("hsla(0, 100%, 59%, 0.5)"));
        assert_eq!(value_of(&f, "HEX8"), Some("#ff2c2c80"));
    }

    #[test]
    fn fully_transparent_keyword() {
        let f = formats("transparent", ColorKind::Transparent);
        assert_eq!(value_of(&f, "RGBA"), Some("rgba(0, 0, 0, 0)"));
        assert_eq!(value_of(&f, "HEX8"), Some("#00000000"));
    }

    #[test]
    fn unconvertible_values_keep_only_original() {
        assert_eq!(labels(&formats("currentColor", ColorKind::Solid)), ["Original"]);
        assert_eq!(
            labels(&formats("color(rec2020 0.5 0.5 0.5)", ColorKind::Solid)),
            ["Original"]
        );
        assert_eq!(to_canonical("linear-gradient(red, blue)"), None);
    }

    #[test]
    fn modern_spaces_convert() {
        let f = formats("oklch(100% 0 0)", ColorKind::Solid);
        assert_eq!(value_of(&f, "HEX"), Some("#ffffff"));
        let f = formats("color(display-p3 1 1 1)", ColorKind::Solid);
        assert_eq!(value_of(&f, "RGB"), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn gradient_colors_in_family_order() {
        let g = "linear-gradient(90deg, hsl(10, 50%, 50%), #fff 10%, rgba(0,0,0,.5), #fff)";
        assert_eq!(gradient_colors(g), ["#fff", "rgba(0,0,0,.5)", "hsl(10, 50%, 50%)"]);
        let f = formats(g, ColorKind::Gradient);
        assert_eq!(labels(&f), ["Original", "Colors"]);
        assert_eq!(
            value_of(&f, "Colors"),
            Some("#fff, rgba(0,0,0,.5), hsl(10, 50%, 50%)")
        );
    }

    #[test]
    fn gradient_without_literal_colors_has_no_colors_entry() {
        let f = formats("linear-gradient(red, blue)", ColorKind::Gradient);
        assert_eq!(labels(&f), ["Original"]);
    }

    #[test]
    fn details_for_gradient_skip_ramps() {
        let occ = ColorOccurrence {
            line: 1,
            name: "hero".into(),
            value: "linear-gradient(#000, #fff)".into(),
            kind: ColorKind::Gradient,
        };
        let d = details(&occ);
        assert!(d.shades.is_empty());
        assert!(d.harmonies.is_empty());
    }

    #[test]
    fn details_for_solid() {
        let occ = ColorOccurrence {
            line: 1,
            name: "brand".into(),
            value: "#ff2c2c".into(),
            kind: ColorKind::Solid,
        };
        let d = details(&occ);
        assert_eq!(d.shades.len(), 10);
        assert_eq!(d.harmonies.len(), 5);
    }
}
