//! Grid catalog building - one swatch per scale step of a design grid.
//!
//! A catalog is the full family of swatches for a base unit (commonly 5 or
//! 8px) multiplied through a fixed scale table. Each entry carries both the
//! copy-ready raw document and a padded preview encoded as a data URI for
//! thumbnail display.

use crate::encode::svg_data_uri;
use crate::swatch::{generate, SwatchSpec};

/// Default design-grid base unit in px.
pub const DEFAULT_BASE_UNIT: f64 = 8.0;

/// The fixed multiplier table shared by every catalog build.
pub const GRID_SCALE: &[f64] = &[
    0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
    16.0,
];

/// Preview padding as a fraction of the swatch size. Proportional padding
/// keeps small and large swatches equally legible in a fixed-aspect grid.
const PREVIEW_PADDING_RATIO: f64 = 0.3;

/// Rotating (fill, stroke) pairs for multicolor mode, period 5.
pub const PALETTE: &[(&str, &str)] = &[
    ("#FFD6E0", "#E63946"), // Rose
    ("#CDEAC0", "#2A9D8F"), // Mint
    ("#BDE0FE", "#3A86FF"), // Sky
    ("#FFF3B0", "#E09F3E"), // Gold
    ("#E0C3FC", "#8338EC"), // Lavender
];

/// Fixed pair used when multicolor mode is off.
const DEFAULT_PAIR: (&str, &str) = ("pink", "red");

/// One catalog entry: a swatch at a single scale step.
#[derive(Debug, Clone, PartialEq)]
pub struct GridEntry {
    /// Position in the scale table. Stable: drives both display order
    /// and palette rotation.
    pub index: usize,
    /// Logical pixel size (`base_unit * scale`), for display titles.
    pub size: f64,
    /// Copy-ready document, no padding, no backdrop rect.
    pub raw_svg: String,
    /// Padded preview document as a base64 SVG data URI.
    pub preview_data_uri: String,
}

/// Build the full swatch catalog for a base unit.
///
/// Pure and idempotent: identical inputs yield structurally identical
/// output. Entries come back in scale-table order with `index == position`.
pub fn build_catalog(base_unit: f64, scales: &[f64], multicolor: bool) -> Vec<GridEntry> {
    scales
        .iter()
        .enumerate()
        .map(|(index, scale)| {
            let size = base_unit * scale;
            let (fill, stroke) = if multicolor {
                PALETTE[index % PALETTE.len()]
            } else {
                DEFAULT_PAIR
            };

            let raw_svg = generate(&SwatchSpec::new(size).with_colors(fill, stroke));
            let preview = generate(
                &SwatchSpec::new(size)
                    .with_colors(fill, stroke)
                    .with_padding(size * PREVIEW_PADDING_RATIO),
            );

            GridEntry {
                index,
                size,
                raw_svg,
                preview_data_uri: svg_data_uri(&preview),
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
