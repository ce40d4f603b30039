// SPDX-License-Identifier: MIT
//
// CSS color grammar: the authoritative "is this a color?" check.
//
// The recognizers in chroma-scan are loose so they catch comma-separated,
// space-separated and slash-alpha spellings alike. A candidate only counts
// when it parses here as a CSS `<color>` (or a `<gradient>` built from
// them) under the rules a browser applies to a `background` declaration.
#![allow(clippy::many_single_char_names)]
//
// Pipeline:
//
//   &str ──cssparser──▶ Token stream ──parse_color──▶ CssColor ──to_rgba──▶ Rgba
//                                    ╰─parse_gradient─▶ [CssColor] (stops)
//
// Tokenizing and block nesting belong to `cssparser`. This module owns the
// color-level rules on top of it: which functions exist, how many components
// each takes, legacy comma syntax versus modern `/ alpha` syntax, and the
// gradient argument grammar.
//
// Supported syntax:
//
//   #rgb #rgba #rrggbb #rrggbbaa          keyword colors, transparent, currentcolor
//   rgb()/rgba()  legacy + modern         hsl()/hsla()  legacy + modern
//   hwb() lab() lch() oklab() oklch()     modern (space separated, `/ alpha`)
//   color(<space> c1 c2 c3 [/ alpha])
//   {repeating-,}{linear,radial,conic}-gradient(...)
//
// `calc()`, `var()` and relative color syntax are not supported and are
// rejected like any other nested function.

use std::f64::consts::PI;

use cssparser::{
    BasicParseErrorKind, Delimiter, ParseError, ParseErrorKind, Parser, ParserInput, ToCss, Token,
};
use thiserror::Error;

use crate::color::{
    CanonicalColor, Rgba, hsl_to_rgb, hwb_to_rgb, lab_to_xyz_d50, linear_p3_to_xyz_d65,
    oklab_to_linear_srgb, polar_to_ab, srgb_to_linear, xyz_d50_to_d65, xyz_d65_to_linear_srgb,
};
use crate::named;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a candidate failed to parse as a CSS color or gradient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssColorError {
    #[error("empty color value")]
    Empty,

    #[error("unexpected {token} at column {column}")]
    UnexpectedToken { token: String, column: u32 },

    #[error("color value ends too early")]
    UnexpectedEnd,

    #[error("unexpected input after the color value")]
    TrailingInput,

    #[error("invalid hex color #{0}")]
    InvalidHex(String),

    #[error("unknown color keyword {0:?}")]
    UnknownKeyword(String),

    #[error("unknown color function {0}()")]
    UnknownFunction(String),

    #[error("nested function {0}() is not supported inside a color")]
    NestedFunction(String),

    #[error("{function}() expects {expected}")]
    BadArguments {
        function: String,
        expected: &'static str,
    },

    #[error("unknown color space {0:?}")]
    UnknownColorSpace(String),

    #[error("not a color value")]
    NotAColor,

    #[error("not a gradient function")]
    NotAGradient,

    #[error("invalid gradient argument at position {0}")]
    BadGradientArgument(usize),

    #[error("a gradient needs at least two color stops, found {0}")]
    TooFewStops(usize),
}

type Result<T> = std::result::Result<T, CssColorError>;

/// Result inside a `cssparser` callback; the error still points into the input.
type ParseResult<'i, T> = std::result::Result<T, ParseError<'i, CssColorError>>;

impl From<ParseError<'_, CssColorError>> for CssColorError {
    fn from(err: ParseError<'_, CssColorError>) -> Self {
        match err.kind {
            ParseErrorKind::Custom(inner) => inner,
            ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
                Self::UnexpectedToken { token: token.to_css_string(), column: err.location.column }
            }
            ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => Self::UnexpectedEnd,
            ParseErrorKind::Basic(_) => Self::NotAColor,
        }
    }
}

// ─── Token helpers ───────────────────────────────────────────────────────────

/// Widen a `cssparser` number, dropping the noise `f32` adds to decimals
/// such as `0.4`.
fn widen(value: f32) -> f64 {
    (f64::from(value) * 1e6).round() / 1e6
}

// ─── CssColor ────────────────────────────────────────────────────────────────

/// Predefined color spaces accepted by `color()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    SrgbLinear,
    DisplayP3,
    A98Rgb,
    ProphotoRgb,
    Rec2020,
    XyzD50,
    XyzD65,
}

impl ColorSpace {
    /// Look up a color space by its CSS identifier.
    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        Some(match ident.to_ascii_lowercase().as_str() {
            "srgb" => Self::Srgb,
            "srgb-linear" => Self::SrgbLinear,
            "display-p3" => Self::DisplayP3,
            "a98-rgb" => Self::A98Rgb,
            "prophoto-rgb" => Self::ProphotoRgb,
            "rec2020" => Self::Rec2020,
            "xyz-d50" => Self::XyzD50,
            "xyz" | "xyz-d65" => Self::XyzD65,
            _ => return None,
        })
    }
}

/// A parsed CSS color, still in the space it was written in.
///
/// `none` components are read as zero. Alpha is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    /// Gamma-encoded sRGB, channels in `[0, 1]` (hex, keywords, `rgb()`).
    Rgb { r: f64, g: f64, b: f64, alpha: f64 },
    /// Hue in degrees, saturation and lightness in `[0, 1]`.
    Hsl { h: f64, s: f64, l: f64, alpha: f64 },
    /// Hue in degrees, whiteness and blackness in `[0, 1]`.
    Hwb { h: f64, w: f64, b: f64, alpha: f64 },
    /// CIE Lab (D50), `l` in `[0, 100]`.
    Lab { l: f64, a: f64, b: f64, alpha: f64 },
    /// CIE LCH (D50).
    Lch { l: f64, c: f64, h: f64, alpha: f64 },
    /// Oklab, `l` in `[0, 1]`.
    Oklab { l: f64, a: f64, b: f64, alpha: f64 },
    /// OKLCH.
    Oklch { l: f64, c: f64, h: f64, alpha: f64 },
    /// `color(<space> c1 c2 c3 / alpha)`.
    ColorFn { space: ColorSpace, c: [f64; 3], alpha: f64 },
    /// `currentcolor`: valid, but has no value of its own.
    CurrentColor,
}

impl CssColor {
    /// The alpha component (`currentcolor` reports 1.0).
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        match *self {
            Self::Rgb { alpha, .. }
            | Self::Hsl { alpha, .. }
            | Self::Hwb { alpha, .. }
            | Self::Lab { alpha, .. }
            | Self::Lch { alpha, .. }
            | Self::Oklab { alpha, .. }
            | Self::Oklch { alpha, .. }
            | Self::ColorFn { alpha, .. } => alpha,
            Self::CurrentColor => 1.0,
        }
    }

    /// Convert to floating-point sRGB (possibly out of gamut).
    ///
    /// Returns `None` for `currentcolor` and for `color()` spaces without a
    /// conversion (`a98-rgb`, `prophoto-rgb`, `rec2020`).
    #[must_use]
    pub fn to_rgba(&self) -> Option<Rgba> {
        Some(match *self {
            Self::Rgb { r, g, b, alpha } => Rgba::new(r, g, b, alpha),
            Self::Hsl { h, s, l, alpha } => {
                let (r, g, b) = hsl_to_rgb(h, s, l);
                Rgba::new(r, g, b, alpha)
            }
            Self::Hwb { h, w, b, alpha } => {
                let (r, g, bl) = hwb_to_rgb(h, w, b);
                Rgba::new(r, g, bl, alpha)
            }
            Self::Lab { l, a, b, alpha } => lab_to_rgba(l, a, b, alpha),
            Self::Lch { l, c, h, alpha } => {
                let (a, b) = polar_to_ab(c, h);
                lab_to_rgba(l, a, b, alpha)
            }
            Self::Oklab { l, a, b, alpha } => {
                let (r, g, bl) = oklab_to_linear_srgb(l, a, b);
                Rgba::from_linear(r, g, bl, alpha)
            }
            Self::Oklch { l, c, h, alpha } => {
                let (a, b) = polar_to_ab(c, h);
                let (r, g, bl) = oklab_to_linear_srgb(l, a, b);
                Rgba::from_linear(r, g, bl, alpha)
            }
            Self::ColorFn { space, c, alpha } => {
                let [r, g, b] = match space {
                    ColorSpace::Srgb => return Some(Rgba::new(c[0], c[1], c[2], alpha)),
                    ColorSpace::SrgbLinear => c,
                    ColorSpace::DisplayP3 => {
                        xyz_d65_to_linear_srgb(linear_p3_to_xyz_d65(c.map(srgb_to_linear)))
                    }
                    ColorSpace::XyzD65 => xyz_d65_to_linear_srgb(c),
                    ColorSpace::XyzD50 => xyz_d65_to_linear_srgb(xyz_d50_to_d65(c)),
                    ColorSpace::A98Rgb | ColorSpace::ProphotoRgb | ColorSpace::Rec2020 => {
                        return None;
                    }
                };
                Rgba::from_linear(r, g, b, alpha)
            }
            Self::CurrentColor => return None,
        })
    }

    /// Convert and quantize to the canonical 8-bit model.
    #[must_use]
    pub fn to_canonical(&self) -> Option<CanonicalColor> {
        self.to_rgba().map(CanonicalColor::from_srgb)
    }
}

fn lab_to_rgba(l: f64, a: f64, b: f64, alpha: f64) -> Rgba {
    let [r, g, bl] = xyz_d65_to_linear_srgb(xyz_d50_to_d65(lab_to_xyz_d50(l, a, b)));
    Rgba::from_linear(r, g, bl, alpha)
}

// ─── Color parsing ───────────────────────────────────────────────────────────

/// Parse a complete CSS `<color>` value.
///
/// ```
/// use chroma_color::css::{parse_color, CssColor};
///
/// assert!(parse_color("rgb(255 44 44 / 50%)").is_ok());
/// assert!(parse_color("rgb(255, 44 44)").is_err()); // mixed separators
/// assert_eq!(parse_color("currentColor"), Ok(CssColor::CurrentColor));
/// ```
///
/// # Errors
///
/// Returns the first grammar violation found.
pub fn parse_color(input: &str) -> Result<CssColor> {
    let mut input = ParserInput::new(input);
    let mut parser = Parser::new(&mut input);
    if parser.is_exhausted() {
        return Err(CssColorError::Empty);
    }
    let color = parse_color_value(&mut parser)?;
    if !parser.is_exhausted() {
        return Err(CssColorError::TrailingInput);
    }
    Ok(color)
}

/// Consume one `<color>` from `p`.
fn parse_color_value<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, CssColor> {
    let location = p.current_source_location();
    let token = p.next()?.clone();
    match token {
        Token::Hash(ref hex) | Token::IDHash(ref hex) => {
            parse_hash(hex).map_err(|e| location.new_custom_error(e))
        }
        Token::Ident(ref name) => parse_keyword(name).map_err(|e| location.new_custom_error(e)),
        Token::Function(ref name) => p.parse_nested_block(|p| {
            let args = collect_args(p)?;
            parse_function(name, &args).map_err(|e| p.new_custom_error(e))
        }),
        _ => Err(location.new_custom_error(CssColorError::NotAColor)),
    }
}

fn parse_hash(hex: &str) -> Result<CssColor> {
    let color = match hex.len() {
        3 | 4 | 6 | 8 => CanonicalColor::from_hex(hex),
        _ => None,
    }
    .ok_or_else(|| CssColorError::InvalidHex(hex.to_owned()))?;
    let (r, g, b) = color.rgb();
    Ok(CssColor::Rgb {
        r: f64::from(r) / 255.0,
        g: f64::from(g) / 255.0,
        b: f64::from(b) / 255.0,
        alpha: color.alpha(),
    })
}

fn parse_keyword(name: &str) -> Result<CssColor> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "transparent" => Ok(CssColor::Rgb { r: 0.0, g: 0.0, b: 0.0, alpha: 0.0 }),
        "currentcolor" => Ok(CssColor::CurrentColor),
        _ => named::lookup(&lower)
            .map(|(r, g, b)| CssColor::Rgb {
                r: f64::from(r) / 255.0,
                g: f64::from(g) / 255.0,
                b: f64::from(b) / 255.0,
                alpha: 1.0,
            })
            .ok_or_else(|| CssColorError::UnknownKeyword(name.to_ascii_lowercase())),
    }
}

fn parse_function(name: &str, args: &[Arg]) -> Result<CssColor> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "rgb" | "rgba" => parse_rgb(&lower, args),
        "hsl" | "hsla" => parse_hsl(&lower, args),
        "hwb" => parse_hwb(args),
        "lab" | "oklab" => parse_lab_like(&lower, args),
        "lch" | "oklch" => parse_lch_like(&lower, args),
        "color" => parse_color_fn(args),
        _ => Err(CssColorError::UnknownFunction(lower)),
    }
}

// ─── Component model ─────────────────────────────────────────────────────────

/// One component of a color function, after unit resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    /// `50%` is stored as `0.5`.
    Percentage(f64),
    /// Angle already converted to degrees.
    Angle(f64),
    None,
}

impl Component {
    fn from_token(token: &Token<'_>) -> Option<Self> {
        match *token {
            Token::Number { value, .. } => Some(Self::Number(widen(value))),
            Token::Percentage { unit_value, .. } => Some(Self::Percentage(widen(unit_value))),
            Token::Dimension { value, ref unit, .. } => {
                angle_to_degrees(widen(value), unit).map(Self::Angle)
            }
            Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Some(Self::None),
            _ => None,
        }
    }
}

fn angle_to_degrees(v: f64, unit: &str) -> Option<f64> {
    Some(match unit.to_ascii_lowercase().as_str() {
        "deg" => v,
        "grad" => v * 360.0 / 400.0,
        "rad" => v * 180.0 / PI,
        "turn" => v * 360.0,
        _ => return None,
    })
}

/// A color function's block, flattened into values and separators.
#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Value(Component),
    /// Any identifier other than `none` (the `color()` space name).
    Ident(String),
    Comma,
    Slash,
}

/// Read the rest of a function block. Nested functions and blocks are
/// rejected here; argument shape is checked by [`channels`].
fn collect_args<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<Arg>> {
    let mut args = Vec::new();
    while !p.is_exhausted() {
        let location = p.current_source_location();
        let arg = match p.next()? {
            Token::Comma => Arg::Comma,
            Token::Delim('/') => Arg::Slash,
            Token::Function(name) => {
                return Err(location.new_custom_error(CssColorError::NestedFunction(name.to_string())));
            }
            Token::Ident(ident) if !ident.eq_ignore_ascii_case("none") => Arg::Ident(ident.to_string()),
            token => match Component::from_token(token) {
                Some(component) => Arg::Value(component),
                None => return Err(location.new_unexpected_token_error(token.clone())),
            },
        };
        args.push(arg);
    }
    Ok(args)
}

/// An argument list split into three channel components plus alpha.
struct Channels {
    values: [Component; 3],
    alpha: Option<Component>,
    legacy: bool,
}

fn bad_args(function: &str, expected: &'static str) -> CssColorError {
    CssColorError::BadArguments { function: function.to_owned(), expected }
}

/// Split into `a, b, c[, alpha]` (legacy) or `a b c [/ alpha]` (modern).
fn channels(function: &str, args: &[Arg], allow_legacy: bool) -> Result<Channels> {
    let legacy = args.iter().any(|a| *a == Arg::Comma);

    if legacy && !allow_legacy {
        return Err(bad_args(function, "space-separated components"));
    }

    let parsed = if legacy {
        match args {
            [Arg::Value(a), Arg::Comma, Arg::Value(b), Arg::Comma, Arg::Value(c)] => {
                Some(([*a, *b, *c], None))
            }
            [
                Arg::Value(a),
                Arg::Comma,
                Arg::Value(b),
                Arg::Comma,
                Arg::Value(c),
                Arg::Comma,
                Arg::Value(alpha),
            ] => Some(([*a, *b, *c], Some(*alpha))),
            _ => None,
        }
    } else {
        match args {
            [Arg::Value(a), Arg::Value(b), Arg::Value(c)] => Some(([*a, *b, *c], None)),
            [Arg::Value(a), Arg::Value(b), Arg::Value(c), Arg::Slash, Arg::Value(alpha)] => {
                Some(([*a, *b, *c], Some(*alpha)))
            }
            _ => None,
        }
    };

    let (values, alpha) = parsed.ok_or_else(|| bad_args(function, "three components and an optional alpha"))?;
    Ok(Channels { values, alpha, legacy })
}

fn hue(function: &str, c: Component, legacy: bool) -> Result<f64> {
    match c {
        Component::Number(v) | Component::Angle(v) => Ok(v),
        Component::None if !legacy => Ok(0.0),
        _ => Err(bad_args(function, "a hue (number or angle)")),
    }
}

/// Percentage-like component as a fraction. Bare numbers are read as
/// percentages in the modern syntax (`hsl(280 100 59)`).
fn fraction(function: &str, c: Component, legacy: bool) -> Result<f64> {
    match c {
        Component::Percentage(v) => Ok(v),
        Component::Number(v) if !legacy => Ok(v / 100.0),
        Component::None if !legacy => Ok(0.0),
        _ => Err(bad_args(function, "percentages")),
    }
}

/// Number-or-percentage component where `100%` maps to `full`.
fn scaled(function: &str, c: Component, full: f64) -> Result<f64> {
    match c {
        Component::Number(v) => Ok(v),
        Component::Percentage(v) => Ok(v * full),
        Component::None => Ok(0.0),
        Component::Angle(_) => Err(bad_args(function, "numbers or percentages")),
    }
}

fn alpha(function: &str, c: Option<Component>, legacy: bool) -> Result<f64> {
    let value = match c {
        None => return Ok(1.0),
        Some(Component::Number(v) | Component::Percentage(v)) => v,
        Some(Component::None) if !legacy => 0.0,
        Some(_) => return Err(bad_args(function, "a number or percentage alpha")),
    };
    Ok(value.clamp(0.0, 1.0))
}

// ─── Color functions ─────────────────────────────────────────────────────────

fn parse_rgb(function: &str, args: &[Arg]) -> Result<CssColor> {
    let ch = channels(function, args, true)?;

    if ch.legacy {
        let all_numbers = ch.values.iter().all(|c| matches!(c, Component::Number(_)));
        let all_percentages = ch.values.iter().all(|c| matches!(c, Component::Percentage(_)));
        if !(all_numbers || all_percentages) {
            return Err(bad_args(function, "all numbers or all percentages"));
        }
    }

    let channel = |c: Component| match c {
        Component::Number(v) => Ok((v / 255.0).clamp(0.0, 1.0)),
        Component::Percentage(v) => Ok(v.clamp(0.0, 1.0)),
        Component::None => Ok(0.0),
        Component::Angle(_) => Err(bad_args(function, "numbers or percentages")),
    };

    Ok(CssColor::Rgb {
        r: channel(ch.values[0])?,
        g: channel(ch.values[1])?,
        b: channel(ch.values[2])?,
        alpha: alpha(function, ch.alpha, ch.legacy)?,
    })
}

fn parse_hsl(function: &str, args: &[Arg]) -> Result<CssColor> {
    let ch = channels(function, args, true)?;
    let [h, s, l] = ch.values;
    Ok(CssColor::Hsl {
        h: hue(function, h, ch.legacy)?,
        s: fraction(function, s, ch.legacy)?.clamp(0.0, 1.0),
        l: fraction(function, l, ch.legacy)?.clamp(0.0, 1.0),
        alpha: alpha(function, ch.alpha, ch.legacy)?,
    })
}

fn parse_hwb(args: &[Arg]) -> Result<CssColor> {
    let function = "hwb";
    let ch = channels(function, args, false)?;
    let [h, w, b] = ch.values;
    Ok(CssColor::Hwb {
        h: hue(function, h, false)?,
        w: fraction(function, w, false)?.clamp(0.0, 1.0),
        b: fraction(function, b, false)?.clamp(0.0, 1.0),
        alpha: alpha(function, ch.alpha, false)?,
    })
}

/// `lab()` and `oklab()`: lightness plus two opponent axes.
fn parse_lab_like(function: &str, args: &[Arg]) -> Result<CssColor> {
    let ch = channels(function, args, false)?;
    let [l, a, b] = ch.values;
    let alpha = alpha(function, ch.alpha, false)?;

    if function == "oklab" {
        Ok(CssColor::Oklab {
            l: scaled(function, l, 1.0)?.clamp(0.0, 1.0),
            a: scaled(function, a, 0.4)?,
            b: scaled(function, b, 0.4)?,
            alpha,
        })
    } else {
        Ok(CssColor::Lab {
            l: scaled(function, l, 100.0)?.clamp(0.0, 100.0),
            a: scaled(function, a, 125.0)?,
            b: scaled(function, b, 125.0)?,
            alpha,
        })
    }
}

/// `lch()` and `oklch()`: lightness, chroma, hue.
fn parse_lch_like(function: &str, args: &[Arg]) -> Result<CssColor> {
    let ch = channels(function, args, false)?;
    let [l, c, h] = ch.values;
    let h = hue(function, h, false)?;
    let alpha = alpha(function, ch.alpha, false)?;

    if function == "oklch" {
        Ok(CssColor::Oklch {
            l: scaled(function, l, 1.0)?.clamp(0.0, 1.0),
            c: scaled(function, c, 0.4)?.max(0.0),
            h,
            alpha,
        })
    } else {
        Ok(CssColor::Lch {
            l: scaled(function, l, 100.0)?.clamp(0.0, 100.0),
            c: scaled(function, c, 150.0)?.max(0.0),
            h,
            alpha,
        })
    }
}

fn parse_color_fn(args: &[Arg]) -> Result<CssColor> {
    let function = "color";
    let Some((Arg::Ident(space_name), rest)) = args.split_first() else {
        return Err(bad_args(function, "a color space name"));
    };
    let space = ColorSpace::from_ident(space_name)
        .ok_or_else(|| CssColorError::UnknownColorSpace(space_name.clone()))?;

    let ch = channels(function, rest, false)?;
    let mut c = [0.0; 3];
    for (slot, &component) in c.iter_mut().zip(ch.values.iter()) {
        *slot = scaled(function, component, 1.0)?;
    }
    Ok(CssColor::ColorFn { space, c, alpha: alpha(function, ch.alpha, false)? })
}

// ─── Gradients ───────────────────────────────────────────────────────────────

/// The gradient functions accepted as `background` images.
pub const GRADIENT_FUNCTIONS: [&str; 6] = [
    "linear-gradient",
    "radial-gradient",
    "conic-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
    "repeating-conic-gradient",
];

const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "rex", "ch", "rch", "cap", "ic", "lh", "rlh", "vw", "vh", "vi",
    "vb", "vmin", "vmax", "svw", "svh", "lvw", "lvh", "dvw", "dvh", "cqw", "cqh", "cqi",
    "cqb", "cqmin", "cqmax", "cm", "mm", "q", "in", "pt", "pc",
];

const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

/// Keywords allowed in the configuration argument that precedes the stops.
const PRELUDE_KEYWORDS: &[&str] = &[
    "to", "left", "right", "top", "bottom", "center", "at", "from", "circle", "ellipse",
    "closest-side", "closest-corner", "farthest-side", "farthest-corner", "in", "srgb",
    "srgb-linear", "display-p3", "a98-rgb", "prophoto-rgb", "rec2020", "lab", "oklab", "xyz",
    "xyz-d50", "xyz-d65", "hsl", "hwb", "lch", "oklch", "shorter", "longer", "increasing",
    "decreasing", "hue",
];

/// One top-level argument of a gradient function.
enum GradientArg {
    Stop(CssColor),
    Prelude,
    Hint,
}

fn is_position(token: &Token<'_>) -> bool {
    match *token {
        Token::Percentage { .. } => true,
        Token::Number { value, .. } => value == 0.0,
        Token::Dimension { ref unit, .. } => {
            let unit = unit.to_ascii_lowercase();
            LENGTH_UNITS.contains(&unit.as_str()) || ANGLE_UNITS.contains(&unit.as_str())
        }
        _ => false,
    }
}

fn parse_position<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, ()> {
    let location = p.current_source_location();
    let token = p.next()?;
    if is_position(token) {
        Ok(())
    } else {
        Err(location.new_unexpected_token_error(token.clone()))
    }
}

/// `<color> <position>{0,2}`.
fn parse_color_stop<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, CssColor> {
    let color = parse_color_value(p)?;
    for _ in 0..2 {
        if p.try_parse(parse_position).is_err() {
            break;
        }
    }
    p.expect_exhausted()?;
    Ok(color)
}

/// Direction, angle, shape, `at <position>`, `from <angle>`, `in <space>`.
fn parse_prelude<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, ()> {
    let mut count = 0usize;
    let mut only_percentages = true;
    while !p.is_exhausted() {
        let location = p.current_source_location();
        let token = p.next()?;
        let ok = match *token {
            Token::Ident(ref ident) => {
                PRELUDE_KEYWORDS.contains(&ident.to_ascii_lowercase().as_str())
            }
            Token::Number { .. } => true,
            ref other => is_position(other),
        };
        if !ok {
            return Err(location.new_unexpected_token_error(token.clone()));
        }
        only_percentages &= matches!(token, Token::Percentage { .. });
        count += 1;
    }
    // A lone percentage is a misplaced hint, not a configuration.
    if count == 0 || (count == 1 && only_percentages) {
        return Err(p.new_custom_error(CssColorError::BadGradientArgument(0)));
    }
    Ok(())
}

/// A color hint: exactly one position between two stops.
fn parse_hint<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, ()> {
    parse_position(p)?;
    p.expect_exhausted()?;
    Ok(())
}

fn parse_gradient_arg<'i>(p: &mut Parser<'i, '_>, first: bool) -> ParseResult<'i, GradientArg> {
    if let Ok(color) = p.try_parse(parse_color_stop) {
        return Ok(GradientArg::Stop(color));
    }
    if first && p.try_parse(parse_prelude).is_ok() {
        return Ok(GradientArg::Prelude);
    }
    parse_hint(p).map(|()| GradientArg::Hint)
}

/// The comma-separated arguments inside a gradient function.
fn parse_gradient_args<'i>(p: &mut Parser<'i, '_>) -> ParseResult<'i, Vec<CssColor>> {
    let mut stops = Vec::new();
    // Starts true so a leading hint is rejected.
    let mut after_hint = true;
    let mut idx = 0;

    loop {
        let location = p.current_source_location();
        let arg = p.parse_until_before(Delimiter::Comma, |p| parse_gradient_arg(p, idx == 0));
        match arg {
            Ok(GradientArg::Stop(color)) => {
                stops.push(color);
                after_hint = false;
            }
            Ok(GradientArg::Prelude) => {}
            Ok(GradientArg::Hint) if !after_hint => after_hint = true,
            Ok(GradientArg::Hint) | Err(_) => {
                return Err(location.new_custom_error(CssColorError::BadGradientArgument(idx)));
            }
        }
        if p.is_exhausted() {
            break;
        }
        p.expect_comma()?;
        idx += 1;
    }

    if after_hint && !stops.is_empty() {
        // Trailing hint with no stop after it.
        return Err(p.new_custom_error(CssColorError::BadGradientArgument(idx)));
    }
    if stops.len() < 2 {
        return Err(p.new_custom_error(CssColorError::TooFewStops(stops.len())));
    }
    Ok(stops)
}

/// Whether `name` is one of [`GRADIENT_FUNCTIONS`] (case-insensitive).
#[must_use]
pub fn is_gradient_function(name: &str) -> bool {
    GRADIENT_FUNCTIONS.iter().any(|g| g.eq_ignore_ascii_case(name))
}

/// Parse a gradient and return its color stops in order.
///
/// The first argument may be a configuration (direction, angle, shape,
/// `at <position>`, `from <angle>`, `in <space>`). After it come color
/// stops, each `<color> <position>{0,2}`, with optional single-position
/// hints between stops. At least two stops are required.
///
/// # Errors
///
/// Returns [`CssColorError::NotAGradient`] if `input` is not a gradient
/// function, or the grammar violation that made it invalid.
pub fn parse_gradient(input: &str) -> Result<Vec<CssColor>> {
    let mut input = ParserInput::new(input);
    let mut parser = Parser::new(&mut input);
    match parser.next() {
        Ok(Token::Function(name)) if is_gradient_function(name) => {}
        _ => return Err(CssColorError::NotAGradient),
    }
    let stops = parser.parse_nested_block(parse_gradient_args)?;
    if !parser.is_exhausted() {
        return Err(CssColorError::TrailingInput);
    }
    Ok(stops)
}

/// Whether `input` is accepted as a `background` value made of a single
/// color or a single gradient.
#[must_use]
pub fn is_css_background(input: &str) -> bool {
    parse_color(input).is_ok() || parse_gradient(input).is_ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
