//! # chroma-palette: conversion and export
//!
//! Turns scanned occurrences into things a person copies somewhere else:
//! alternate notations (`formats`), shade ramps and hue harmonies (`ramp`),
//! and whole-palette templates (`export`).

// Byte and percentage formatting casts are intentional.
#![allow(clippy::cast_possible_truncation)]

pub mod export;
pub mod formats;
pub mod ramp;

pub use export::{ExportFormat, UnknownFormat, render, slugify};
pub use formats::{ColorDetails, Format, details, formats, gradient_colors, to_canonical};
pub use ramp::{Harmony, harmonies, shades};
