//! # chroma-scan: color extraction engine
//!
//! Finds the colors in free-form stylesheet text (CSS, SCSS, LESS or
//! anything that looks like it) without ever reporting the same color twice.
//!
//! ```text
//! text ──split '\n'──▶ line
//!                       │  extract.rs: name / value region
//!                       ▼
//!         recognize.rs passes ── gradient → functional → hex → named
//!                       │  each candidate checked by validate.rs
//!                       ▼
//!         classify.rs ──▶ ColorOccurrence { line, name, value, type }
//! ```
//!
//! Every function here is pure. The recognizer table is compiled lazily
//! and shared read-only.

pub mod classify;
pub mod extract;
pub mod recognize;
pub mod scanner;
pub mod validate;

pub use classify::{ColorKind, classify};
pub use extract::{LineColor, extract_colors_from_line};
pub use scanner::{ColorOccurrence, ScanStats, display_name, filter, scan, truncate_value};
pub use validate::is_valid_color;
