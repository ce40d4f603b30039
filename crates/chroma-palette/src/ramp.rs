//! Shade ramps and hue harmonies.
//!
//! Both work in HSL on the canonical color: shades keep hue and
//! saturation and walk lightness, harmonies keep saturation and lightness
//! and rotate the hue.

use chroma_color::CanonicalColor;
use serde::Serialize;

/// Lightness stops of the shade ramp, in percent.
pub const SHADE_LIGHTNESS: [u8; 10] = [5, 15, 25, 35, 45, 55, 65, 75, 85, 95];

/// Hue rotations of the harmony set, with their labels.
pub const HARMONY_OFFSETS: [(&str, f64); 5] = [
    ("Original", 0.0),
    ("Complementary", 180.0),
    ("Triadic", 120.0),
    ("Triadic", 240.0),
    ("Analogous", 30.0),
];

/// One harmony entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Harmony {
    pub label: &'static str,
    /// Rotated hue in degrees, unrounded.
    pub hue: f64,
    pub value: String,
}

/// Ten `hsl()` shades from dark to light.
#[must_use]
pub fn shades(color: &CanonicalColor) -> Vec<String> {
    let h = color.hue().round();
    let s = color.saturation().round();
    SHADE_LIGHTNESS
        .iter()
        .map(|l| format!("hsl({h}, {s}%, {l}%)"))
        .collect()
}

/// Original, complementary, two triadic and one analogous hue.
#[must_use]
pub fn harmonies(color: &CanonicalColor) -> Vec<Harmony> {
    let s = color.saturation().round();
    let l = color.lightness().round();
    HARMONY_OFFSETS
        .iter()
        .map(|&(label, offset)| {
            let hue = (color.hue() + offset) % 360.0;
            Harmony { label, hue, value: format!("hsl({}, {s}%, {l}%)", hue.round()) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shades_walk_lightness() {
        let red = CanonicalColor::from_rgb(255, 44, 44);
        let ramp = shades(&red);
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp[0], "hsl(0, 100%, 5%)");
        assert_eq!(ramp[9], "hsl(0, 100%, 95%)");
    }

    #[test]
    fn harmonies_rotate_hue() {
        let blue = CanonicalColor::from_rgb(0, 0, 255);
        let set = harmonies(&blue);
        let values: Vec<_> = set.iter().map(|h| h.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "hsl(240, 100%, 50%)",
                "hsl(60, 100%, 50%)",
                "hsl(0, 100%, 50%)",
                "hsl(120, 100%, 50%)",
                "hsl(270, 100%, 50%)",
            ]
        );
        let labels: Vec<_> = set.iter().map(|h| h.label).collect();
        assert_eq!(labels, ["Original", "Complementary", "Triadic", "Triadic", "Analogous"]);
    }

    #[test]
    fn harmony_hues_stay_in_range() {
        let c = CanonicalColor::from_rgb(255, 0, 200);
        assert!(harmonies(&c).iter().all(|h| (0.0..360.0).contains(&h.hue)));
    }
}
