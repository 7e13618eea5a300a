//! # swatchgrid
//!
//! Core library for generating labeled SVG square swatches and the
//! design-grid catalogs built from them.
//!
//! Everything in this crate is a pure string transformation: specs in,
//! SVG documents (or base64 data URIs) out. No I/O, no platform calls.

pub mod catalog;
pub mod encode;
pub mod swatch;

// Re-export common types at crate root for convenience.
pub use catalog::{build_catalog, GridEntry, DEFAULT_BASE_UNIT, GRID_SCALE, PALETTE};
pub use encode::{svg_data_uri, svg_from_data_uri};
pub use swatch::{fmt_number, generate, generate_rect, RectSpec, SwatchSpec};
