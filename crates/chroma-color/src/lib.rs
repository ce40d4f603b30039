//! # chroma-color: color model and CSS color grammar
//!
//! The leaf crate of the workspace. It knows what a CSS color *is* and
//! how to turn one into numbers; it knows nothing about lines, files or
//! where a color was found.
//!
//! # Architecture
//!
//! ```text
//! "oklch(62.8% 0.26 29)"
//!     │
//!     ▼
//! css.rs:    cssparser tokens + color grammar (the authoritative validator)
//!     │
//!     ▼
//! CssColor:  source space preserved (Rgb/Hsl/Hwb/Lab/Lch/Oklab/Oklch/color())
//!     │
//!     ▼
//! color.rs:  float sRGB → clip → CanonicalColor { r, g, b, a, h, s, l }
//! ```
//!
//! `named.rs` holds the 148 keyword colors shared by the grammar and by the
//! named-color recognizer in chroma-scan.

// Byte quantization and integer-to-float conversions are intentional.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// r/g/b and l/c/h style names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod css;
pub mod named;

pub use color::{CanonicalColor, Rgba};
pub use css::{CssColor, CssColorError, is_css_background, parse_color, parse_gradient};
