// SPDX-License-Identifier: MIT
//
// chroma-color canonical model: 8-bit sRGB with derived HSL.
//
// Single-character variable names (r, g, b, l, c, h, a, s, w) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Every output representation (hex, rgb(), hsl(), ramps, harmonies) is
// derived from one `CanonicalColor`. Source syntaxes that live in other
// spaces (Lab, LCH, Oklab, OKLCH, HWB, display-p3, XYZ) are converted
// to floating-point sRGB first and then quantized the way a browser
// canvas does: clip to the gamut, round each channel to a byte.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ 8-bit canonical
//   LCH   ↔ Lab (D50) → XYZ D50 → XYZ D65 → Linear sRGB
//   HSL / HWB → sRGB

use std::fmt;

use serde::Serialize;

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// Floating-point sRGB with alpha, before quantization.
///
/// Channels are gamma-encoded sRGB in the nominal range 0.0–1.0. Values
/// outside that range are legal here (out-of-gamut Lab or P3 input) and
/// are clipped only when a [`CanonicalColor`] is built from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Rgba {
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Build from linear-light sRGB components (applies the sRGB gamma).
    #[must_use]
    pub fn from_linear(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b), alpha)
    }
}

// ─── CanonicalColor ──────────────────────────────────────────────────────────

/// The canonical numeric model every display format is derived from.
///
/// RGB channels are bytes, alpha is a real in `[0, 1]` rounded to two
/// decimals, and hue/saturation/lightness are always recomputed from the
/// RGB bytes. Fields are private so the two representations can never
/// disagree.
///
/// ```
/// use chroma_color::color::CanonicalColor;
///
/// let c = CanonicalColor::from_hex("#ff2c2c").unwrap();
/// assert_eq!(c.rgb(), (255, 44, 44));
/// assert_eq!(c.hue().round(), 0.0);
/// assert_eq!(c.to_hex(), "#ff2c2c");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CanonicalColor {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
    h: f64,
    s: f64,
    l: f64,
}

impl CanonicalColor {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Color from 8-bit channels and an alpha in `[0, 1]` (clamped).
    #[must_use]
    pub fn from_rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self { r, g, b, a: a.clamp(0.0, 1.0), h, s, l }
    }

    /// Quantize floating-point sRGB the way a 2D canvas readback does.
    ///
    /// Each channel is clipped to `[0, 1]` and rounded to a byte. Alpha is
    /// rounded to a byte as well and then to two decimal places.
    #[must_use]
    pub fn from_srgb(rgba: Rgba) -> Self {
        let a = f64::from(to_u8(rgba.alpha)) / 255.0;
        Self::from_rgba(
            to_u8(rgba.r),
            to_u8(rgba.g),
            to_u8(rgba.b),
            round_to(a, 2),
        )
    }

    /// Color from HSL (`h` in degrees, `s`/`l` in percent) and alpha.
    #[must_use]
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(h, s / 100.0, l / 100.0);
        Self::from_srgb(Rgba::new(r, g, b, a))
    }

    /// Parse a hex literal.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.r
    }

    #[inline]
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.g
    }

    #[inline]
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// The channels as an `(r, g, b)` tuple.
    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Alpha in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.a
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.h
    }

    /// Saturation in percent, `[0, 100]`.
    #[inline]
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.s
    }

    /// Lightness in percent, `[0, 100]`.
    #[inline]
    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.l
    }

    /// Whether alpha is 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    // ─── Hex output ──────────────────────────────────────────────────────

    /// `#rrggbb`, always six lowercase digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbbaa`, alpha scaled to a byte.
    #[must_use]
    pub fn to_hex8(&self) -> String {
        format!("{}{:02x}", self.to_hex(), to_u8(self.a))
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ─── HSL / HWB ───────────────────────────────────────────────────────────────

/// Convert 8-bit sRGB to `(h°, s%, l%)`.
///
/// The standard normalized-channel algorithm: `l` is the mid-range of the
/// channels, achromatic colors get `h = s = 0`, and the hue sextant is
/// chosen by whichever channel is the maximum.
#[must_use]
pub fn rgb_to_hsl(r8: u8, g8: u8, b8: u8) -> (f64, f64, f64) {
    let r = f64::from(r8) / 255.0;
    let g = f64::from(g8) / 255.0;
    let b = f64::from(b8) / 255.0;

    let max8 = r8.max(g8).max(b8);
    let min8 = r8.min(g8).min(b8);
    let max = f64::from(max8) / 255.0;
    let min = f64::from(min8) / 255.0;
    let l = (max + min) / 2.0;

    if max8 == min8 {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let sixths = if max8 == r8 {
        (g - b) / d + if g8 < b8 { 6.0 } else { 0.0 }
    } else if max8 == g8 {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ((sixths * 60.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

/// Convert HSL to floating-point sRGB.
///
/// `h` in degrees (any value, wrapped), `s` and `l` in `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        a.mul_add(-(k - 3.0).min(9.0 - k).clamp(-1.0, 1.0), l)
    };
    (f(0.0), f(8.0), f(4.0))
}

/// Convert HWB to floating-point sRGB.
///
/// `h` in degrees, `w` and `b` (whiteness, blackness) in `[0, 1]`.
#[must_use]
pub fn hwb_to_rgb(h: f64, w: f64, b: f64) -> (f64, f64, f64) {
    let w = w.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return (gray, gray, gray);
    }
    let (r, g, bl) = hsl_to_rgb(h, 1.0, 0.5);
    let x = 1.0 - w - b;
    (r.mul_add(x, w), g.mul_add(x, w), bl.mul_add(x, w))
}

// ─── Oklab / OKLCH ───────────────────────────────────────────────────────────
//
// Björn Ottosson's Oklab, via the LMS cone-response intermediate.
// Reference: https://bottosson.github.io/posts/oklab/

/// Convert polar chroma/hue to rectangular `a`, `b`.
#[inline]
#[must_use]
pub fn polar_to_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab (L, a, b) to linear sRGB.
#[must_use]
pub fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

// ─── CIE Lab / LCH ───────────────────────────────────────────────────────────

const D50_WHITE: [f64; 3] = [0.3457 / 0.3585, 1.0, (1.0 - 0.3457 - 0.3585) / 0.3585];

/// Convert CIE Lab (D50) to XYZ (D50).
#[must_use]
pub fn lab_to_xyz_d50(l: f64, a: f64, b: f64) -> [f64; 3] {
    const KAPPA: f64 = 24_389.0 / 27.0;
    const EPSILON: f64 = 216.0 / 24_389.0;

    let f1 = (l + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let x = if f0.powi(3) > EPSILON { f0.powi(3) } else { 116.0f64.mul_add(f0, -16.0) / KAPPA };
    let y = if l > KAPPA * EPSILON { f1.powi(3) } else { l / KAPPA };
    let z = if f2.powi(3) > EPSILON { f2.powi(3) } else { 116.0f64.mul_add(f2, -16.0) / KAPPA };

    [x * D50_WHITE[0], y * D50_WHITE[1], z * D50_WHITE[2]]
}

/// Bradford chromatic adaptation from D50 to D65.
#[must_use]
pub fn xyz_d50_to_d65(xyz: [f64; 3]) -> [f64; 3] {
    mul3(
        &[
            [0.955_473_421_488_075, -0.023_098_454_948_764_71, 0.063_259_243_200_570_72],
            [-0.028_369_709_333_863_7, 1.009_995_398_081_304_1, 0.021_041_441_191_917_323],
            [0.012_314_014_864_481_998, -0.020_507_649_298_898_964, 1.330_365_926_242_124],
        ],
        xyz,
    )
}

/// Convert XYZ (D65) to linear sRGB.
#[must_use]
pub fn xyz_d65_to_linear_srgb(xyz: [f64; 3]) -> [f64; 3] {
    mul3(
        &[
            [3.240_969_941_904_522_6, -1.537_383_177_570_094, -0.498_610_760_293_003_4],
            [-0.969_243_636_280_879_6, 1.875_967_501_507_720_2, 0.041_555_057_407_175_59],
            [0.055_630_079_696_993_66, -0.203_976_958_888_976_52, 1.056_971_514_242_878_6],
        ],
        xyz,
    )
}

/// Convert linear display-p3 to XYZ (D65).
#[must_use]
pub fn linear_p3_to_xyz_d65(rgb: [f64; 3]) -> [f64; 3] {
    mul3(
        &[
            [0.486_570_948_648_216_2, 0.265_667_693_169_093_06, 0.198_217_285_234_362_5],
            [0.228_974_564_069_748_8, 0.691_738_521_836_506_4, 0.079_286_914_093_745],
            [0.0, 0.045_113_381_858_902_64, 1.043_944_368_900_976],
        ],
        rgb,
    )
}

#[inline]
fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[2].mul_add(v[2], r[0].mul_add(v[0], r[1] * v[1]));
    [row(&m[0]), row(&m[1]), row(&m[2])]
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────
//
// Sign-preserving so out-of-gamut (negative) components survive the
// round trip until they are clipped at quantization.

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    let encoded = if abs <= 0.003_130_8 {
        abs * 12.92
    } else {
        1.055f64.mul_add(abs.powf(1.0 / 2.4), -0.055)
    };
    encoded.copysign(c)
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    let abs = c.abs();
    let decoded = if abs <= 0.040_45 {
        abs / 12.92
    } else {
        ((abs + 0.055) / 1.055).powf(2.4)
    };
    decoded.copysign(c)
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<CanonicalColor> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(CanonicalColor::from_rgb(r * 17, g * 17, b * 17))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(CanonicalColor::from_rgba(r * 17, g * 17, b * 17, alpha_from_byte(a * 17)))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(CanonicalColor::from_rgb(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(CanonicalColor::from_rgba(r, g, b, alpha_from_byte(a)))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Alpha byte to the two-decimal real the canonical model stores.
#[inline]
fn alpha_from_byte(a: u8) -> f64 {
    round_to(f64::from(a) / 255.0, 2)
}

/// Round `v` to `places` decimal places.
#[inline]
#[must_use]
pub fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // Helper: assert RGB values are close (within ±1 out of 255).
    fn assert_rgb8_close(actual: (u8, u8, u8), expected: (u8, u8, u8)) {
        let (ar, ag, ab) = actual;
        let (er, eg, eb) = expected;
        assert!(
            (i16::from(ar) - i16::from(er)).unsigned_abs() <= 1
                && (i16::from(ag) - i16::from(eg)).unsigned_abs() <= 1
                && (i16::from(ab) - i16::from(eb)).unsigned_abs() <= 1,
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── HSL derivation ───────────────────────────────────────────────────

    #[test]
    fn primaries_have_expected_hues() {
        assert!(approx_eq(CanonicalColor::from_rgb(255, 0, 0).hue(), 0.0, 1e-9));
        assert!(approx_eq(CanonicalColor::from_rgb(0, 255, 0).hue(), 120.0, 1e-9));
        assert!(approx_eq(CanonicalColor::from_rgb(0, 0, 255).hue(), 240.0, 1e-9));
    }

    #[test]
    fn gray_is_achromatic() {
        let gray = CanonicalColor::from_rgb(128, 128, 128);
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
        assert!(approx_eq(gray.lightness(), 50.196, 0.01));
    }

    #[test]
    fn magenta_side_hue_wraps_below_360() {
        // Red is max and blue > green: the +6 sextant branch.
        let c = CanonicalColor::from_rgb(255, 0, 128);
        assert!(c.hue() > 300.0 && c.hue() < 360.0, "hue was {}", c.hue());
    }

    #[test]
    fn known_hsl_for_ff2c2c() {
        let c = CanonicalColor::from_rgb(255, 44, 44);
        assert_eq!(c.hue().round(), 0.0);
        assert_eq!(c.saturation().round(), 100.0);
        assert_eq!(c.lightness().round(), 59.0);
    }

    #[test]
    fn light_colors_use_upper_saturation_branch() {
        // l > 0.5 → s = d / (2 - max - min)
        let c = CanonicalColor::from_rgb(255, 200, 200);
        assert!(c.lightness() > 50.0);
        assert!(approx_eq(c.saturation(), 100.0, 1e-9));
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test]
    fn hsl_to_rgb_primaries() {
        let (r, g, b) = hsl_to_rgb(120.0, 1.0, 0.5);
        assert!(approx_eq(r, 0.0, 1e-9) && approx_eq(g, 1.0, 1e-9) && approx_eq(b, 0.0, 1e-9));
        let (r, g, b) = hsl_to_rgb(-120.0, 1.0, 0.5);
        assert!(approx_eq(r, 0.0, 1e-9) && approx_eq(g, 0.0, 1e-9) && approx_eq(b, 1.0, 1e-9));
    }

    #[test]
    fn hsl_roundtrip_reproduces_bytes() {
        for (r, g, b) in [(255, 44, 44), (12, 200, 99), (0, 0, 0), (255, 255, 255), (17, 34, 51)] {
            let c = CanonicalColor::from_rgb(r, g, b);
            let back = CanonicalColor::from_hsla(c.hue(), c.saturation(), c.lightness(), 1.0);
            assert_rgb8_close(back.rgb(), (r, g, b));
        }
    }

    #[test]
    fn hwb_extremes() {
        assert_eq!(hwb_to_rgb(0.0, 1.0, 1.0), (0.5, 0.5, 0.5));
        let (r, g, b) = hwb_to_rgb(0.0, 0.0, 0.0);
        assert!(approx_eq(r, 1.0, 1e-9) && approx_eq(g, 0.0, 1e-9) && approx_eq(b, 0.0, 1e-9));
    }

    // ── Perceptual spaces ────────────────────────────────────────────────

    #[test]
    fn oklab_white_is_white() {
        let (r, g, b) = oklab_to_linear_srgb(1.0, 0.0, 0.0);
        assert!(approx_eq(r, 1.0, 1e-3) && approx_eq(g, 1.0, 1e-3) && approx_eq(b, 1.0, 1e-3));
    }

    #[test]
    fn oklch_red_lands_on_red() {
        // oklch(62.8% 0.2577 29.23) is sRGB red.
        let (a, b) = polar_to_ab(0.257_683, 29.233_9);
        let (r, g, bl) = oklab_to_linear_srgb(0.627_955, a, b);
        let c = CanonicalColor::from_srgb(Rgba::from_linear(r, g, bl, 1.0));
        assert_rgb8_close(c.rgb(), (255, 0, 0));
    }

    #[test]
    fn lab_white_is_white() {
        let xyz = xyz_d50_to_d65(lab_to_xyz_d50(100.0, 0.0, 0.0));
        let [r, g, b] = xyz_d65_to_linear_srgb(xyz);
        let c = CanonicalColor::from_srgb(Rgba::from_linear(r, g, b, 1.0));
        assert_rgb8_close(c.rgb(), (255, 255, 255));
    }

    #[test]
    fn lab_black_is_black() {
        let [r, g, b] = xyz_d65_to_linear_srgb(xyz_d50_to_d65(lab_to_xyz_d50(0.0, 0.0, 0.0)));
        let c = CanonicalColor::from_srgb(Rgba::from_linear(r, g, b, 1.0));
        assert_eq!(c.rgb(), (0, 0, 0));
    }

    #[test]
    fn gamma_is_sign_preserving() {
        assert!(linear_to_srgb(-0.5) < 0.0);
        assert!(approx_eq(srgb_to_linear(linear_to_srgb(0.25)), 0.25, 1e-9));
    }

    // ── Quantization ─────────────────────────────────────────────────────

    #[test]
    fn out_of_gamut_is_clipped() {
        let c = CanonicalColor::from_srgb(Rgba::new(1.4, -0.2, 0.5, 1.0));
        assert_eq!(c.rgb(), (255, 0, 128));
    }

    #[test]
    fn alpha_is_quantized_to_two_decimals() {
        let c = CanonicalColor::from_srgb(Rgba::new(0.0, 0.0, 0.0, 0.333));
        assert!(approx_eq(c.alpha(), 0.33, 1e-9));
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_short() {
        let c = CanonicalColor::from_hex("#f80").unwrap();
        assert_eq!(c.rgb(), (255, 136, 0));
        assert!(c.is_opaque());
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let c = CanonicalColor::from_hex("#ff2c2c80").unwrap();
        assert_eq!(c.rgb(), (255, 44, 44));
        assert!(approx_eq(c.alpha(), 0.5, 1e-9));
        assert_eq!(c.to_hex8(), "#ff2c2c80");
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(CanonicalColor::from_hex("xyz").is_none());
        assert!(CanonicalColor::from_hex("#12345").is_none());
        assert!(CanonicalColor::from_hex("").is_none());
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        let c = CanonicalColor::from_hex(original).unwrap();
        assert_eq!(c.to_hex(), original);
        assert_eq!(format!("{c}"), original);
    }
}
