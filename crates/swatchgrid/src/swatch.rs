//! SVG swatch generation - labeled square rectangles for design reference.
//!
//! A swatch is a single SVG document: one styled rectangle with a centered
//! text label equal to its logical pixel size. An optional padding turns the
//! same spec into a "preview" variant with breathing room around the square
//! (for thumbnail grids) without changing the label.

/// Default fill when the caller doesn't pick one.
const DEFAULT_FILL: &str = "pink";
/// Default stroke when the caller doesn't pick one.
const DEFAULT_STROKE: &str = "red";
/// Root background-color for unpadded documents without a caller override.
const DEFAULT_BACKGROUND: &str = "red";

/// Parameters for a single square swatch.
///
/// Only `size` is required; everything else has a sensible default. When
/// `stroke_width` is `None` it is derived from the size (thin stroke for
/// small swatches, thick for large ones).
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchSpec {
    /// Logical side length in px. The label always shows this value,
    /// even when padding makes the rendered canvas larger.
    pub size: f64,
    /// Extra canvas on every side. Presentation-only: preview variants
    /// use it so thumbnails don't touch the frame edge.
    pub padding: f64,
    pub fill_color: String,
    pub stroke_color: String,
    /// `None` = derived: 1.0 for sizes up to 24, else 4.0.
    pub stroke_width: Option<f64>,
    /// Opaque backdrop color. Padded documents emit it as a rect behind
    /// the swatch (white if unset); unpadded documents put it on the root
    /// element's style instead.
    pub background_color: Option<String>,
    /// Nonzero origins inset the rectangle symmetrically, e.g. to keep a
    /// wide stroke inside the canvas instead of clipped at the edges.
    pub origin_x: f64,
    pub origin_y: f64,
}

impl SwatchSpec {
    pub fn new(size: f64) -> Self {
        SwatchSpec {
            size,
            padding: 0.0,
            fill_color: DEFAULT_FILL.to_string(),
            stroke_color: DEFAULT_STROKE.to_string(),
            stroke_width: None,
            background_color: None,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_colors(mut self, fill: &str, stroke: &str) -> Self {
        self.fill_color = fill.to_string();
        self.stroke_color = stroke.to_string();
        self
    }

    fn effective_stroke_width(&self) -> f64 {
        match self.stroke_width {
            Some(w) => w,
            None => {
                if self.size <= 24.0 {
                    1.0
                } else {
                    4.0
                }
            }
        }
    }
}

/// Format a numeric attribute value: whole numbers print without a
/// fractional part ("8", not "8.0"), everything else prints trimmed ("2.4").
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Label font size for a swatch of the given logical size.
///
/// Proportional rule: half the size for small swatches, a quarter with a
/// 16px floor for large ones. The floor keeps labels legible without ever
/// reaching zero for tiny swatches.
fn font_size_for(size: f64) -> f64 {
    if size <= 32.0 {
        size / 2.0
    } else {
        (size / 4.0).max(16.0)
    }
}

/// Generate a complete SVG document for one swatch.
///
/// The root element is `size + 2*padding` on each side. The label is the
/// decimal value of `size` regardless of padding. With `padding > 0` an
/// opaque background rect is emitted behind the styled rect so a
/// semi-transparent fill stays legible on any thumbnail backdrop; with
/// `padding == 0` the root's own background-color style covers that job.
pub fn generate(spec: &SwatchSpec) -> String {
    let rendered = spec.size + 2.0 * spec.padding;
    let rect_x = spec.padding + spec.origin_x;
    let rect_y = spec.padding + spec.origin_y;
    let rect_w = spec.size - 2.0 * spec.origin_x;
    let rect_h = spec.size - 2.0 * spec.origin_y;

    let mut svg = String::new();

    if spec.padding > 0.0 {
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            fmt_number(rendered),
            fmt_number(rendered)
        ));
        let backdrop = spec.background_color.as_deref().unwrap_or("white");
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" />\n",
            fmt_number(rect_x),
            fmt_number(rect_y),
            fmt_number(rect_w),
            fmt_number(rect_h),
            backdrop
        ));
    } else {
        let background = spec.background_color.as_deref().unwrap_or(DEFAULT_BACKGROUND);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" style=\"background-color: {}\">\n",
            fmt_number(rendered),
            fmt_number(rendered),
            background
        ));
    }

    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />\n",
        fmt_number(rect_x),
        fmt_number(rect_y),
        fmt_number(rect_w),
        fmt_number(rect_h),
        spec.fill_color,
        spec.stroke_color,
        fmt_number(spec.effective_stroke_width())
    ));

    svg.push_str(&format!(
        "  <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"Arial\" font-size=\"{}\" fill=\"black\">{}</text>\n",
        fmt_number(font_size_for(spec.size)),
        fmt_number(spec.size)
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Parameters for a free-form (generally non-square) rectangle.
///
/// Unlike [`SwatchSpec`] every field is explicit: this backs the manual
/// entry surface where the user types each value.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub width: f64,
    pub height: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub background_color: String,
}

impl Default for RectSpec {
    fn default() -> Self {
        RectSpec {
            width: 64.0,
            height: 64.0,
            fill_color: DEFAULT_FILL.to_string(),
            stroke_color: DEFAULT_STROKE.to_string(),
            stroke_width: 4.0,
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Generate an SVG document for an arbitrary rectangle.
///
/// The rect is inset by half the stroke width on each side so the stroke
/// stays fully inside the canvas. Label is `"<width> x <height>"` at a
/// fixed 14px font.
pub fn generate_rect(spec: &RectSpec) -> String {
    let inset = spec.stroke_width / 2.0;

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" style=\"background-color: {bg}\">\n  \
         <rect x=\"{x}\" y=\"{y}\" width=\"{rw}\" height=\"{rh}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{sw}\" />\n  \
         <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"Arial\" font-size=\"14\">{lw} x {lh}</text>\n\
         </svg>\n",
        w = fmt_number(spec.width),
        h = fmt_number(spec.height),
        bg = spec.background_color,
        x = fmt_number(inset),
        y = fmt_number(inset),
        rw = fmt_number(spec.width - 2.0 * inset),
        rh = fmt_number(spec.height - 2.0 * inset),
        fill = spec.fill_color,
        stroke = spec.stroke_color,
        sw = fmt_number(spec.stroke_width),
        lw = fmt_number(spec.width),
        lh = fmt_number(spec.height),
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a generated document and return its declared (width, height).
    fn declared_size(svg: &str) -> (f32, f32) {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg, &options).expect("generated SVG should parse");
        (tree.size().width(), tree.size().height())
    }

    #[test]
    fn unpadded_document_matches_logical_size() {
        let svg = generate(&SwatchSpec::new(8.0));
        let (w, h) = declared_size(&svg);
        assert_eq!(w, 8.0);
        assert_eq!(h, 8.0);
        assert!(svg.contains(">8</text>"), "label should be the logical size");
    }

    #[test]
    fn padded_document_grows_by_twice_the_padding() {
        let svg = generate(&SwatchSpec::new(10.0).with_padding(3.0));
        let (w, h) = declared_size(&svg);
        assert_eq!(w, 16.0);
        assert_eq!(h, 16.0);
        // Padding is presentation-only: label keeps the logical size
        assert!(svg.contains(">10</text>"));
    }

    #[test]
    fn unpadded_document_has_no_background_rect() {
        let svg = generate(&SwatchSpec::new(8.0));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains("style=\"background-color: red\""));
    }

    #[test]
    fn padded_document_emits_opaque_backdrop_first() {
        let svg = generate(&SwatchSpec::new(20.0).with_padding(6.0));
        assert_eq!(svg.matches("<rect").count(), 2);
        let backdrop = svg.find("fill=\"white\"").expect("white backdrop rect");
        let styled = svg.find("fill=\"pink\"").expect("styled rect");
        assert!(backdrop < styled, "backdrop must come before the styled rect");
        assert!(!svg.contains("background-color"), "padded root carries no style");
    }

    #[test]
    fn caller_background_overrides_backdrop_color() {
        let mut spec = SwatchSpec::new(20.0).with_padding(6.0);
        spec.background_color = Some("#202020".to_string());
        let svg = generate(&spec);
        assert!(svg.contains("fill=\"#202020\""));
    }

    #[test]
    fn origin_insets_rect_symmetrically() {
        let mut spec = SwatchSpec::new(40.0);
        spec.origin_x = 2.0;
        spec.origin_y = 2.0;
        let svg = generate(&spec);
        assert!(svg.contains("<rect x=\"2\" y=\"2\" width=\"36\" height=\"36\""));
        // Canvas itself is unchanged
        let (w, h) = declared_size(&svg);
        assert_eq!(w, 40.0);
        assert_eq!(h, 40.0);
    }

    #[test]
    fn derived_stroke_width_switches_at_24() {
        let thin = generate(&SwatchSpec::new(24.0));
        let thick = generate(&SwatchSpec::new(25.0));
        assert!(thin.contains("stroke-width=\"1\""));
        assert!(thick.contains("stroke-width=\"4\""));

        let mut spec = SwatchSpec::new(8.0);
        spec.stroke_width = Some(2.5);
        assert!(generate(&spec).contains("stroke-width=\"2.5\""));
    }

    #[test]
    fn font_size_is_proportional_with_floor() {
        // size/2 up to 32
        assert!(generate(&SwatchSpec::new(8.0)).contains("font-size=\"4\""));
        assert!(generate(&SwatchSpec::new(32.0)).contains("font-size=\"16\""));
        // floor of 16 between 32 and 64
        assert!(generate(&SwatchSpec::new(40.0)).contains("font-size=\"16\""));
        // size/4 beyond the floor
        assert!(generate(&SwatchSpec::new(128.0)).contains("font-size=\"32\""));
    }

    #[test]
    fn fractional_sizes_print_trimmed() {
        let svg = generate(&SwatchSpec::new(2.4));
        assert!(svg.contains("width=\"2.4\""));
        assert!(svg.contains(">2.4</text>"));
        assert_eq!(fmt_number(8.0), "8");
        assert_eq!(fmt_number(12.0), "12");
        assert_eq!(fmt_number(4.5), "4.5");
    }

    #[test]
    fn rect_generator_insets_by_half_stroke() {
        let spec = RectSpec {
            width: 64.0,
            height: 32.0,
            stroke_width: 4.0,
            ..RectSpec::default()
        };
        let svg = generate_rect(&spec);
        let (w, h) = declared_size(&svg);
        assert_eq!(w, 64.0);
        assert_eq!(h, 32.0);
        assert!(svg.contains("<rect x=\"2\" y=\"2\" width=\"60\" height=\"28\""));
        assert!(svg.contains(">64 x 32</text>"));
    }
}
