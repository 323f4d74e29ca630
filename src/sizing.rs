//! Adaptive font sizing for a fixed character grid.
//!
//! Finds the largest font size at which a row of the grid fits the viewport
//! width, and in expanded mode spreads the rows over the viewport height.
//! Glyph measurement is supplied by the caller through [`GlyphMetrics`].

use serde::{Deserialize, Serialize};

/// Measures the reference glyph of a monospace font.
pub trait GlyphMetrics {
    /// Advance width of the reference glyph at `font_size`.
    fn glyph_width(&self, font_size: f32) -> f32;

    /// Line height at `font_size`.
    fn line_height(&self, font_size: f32) -> f32;
}

/// Metrics that scale linearly with the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMetrics {
    /// Glyph width per unit of font size
    pub width_ratio: f32,
    /// Line height per unit of font size
    pub height_ratio: f32,
}

impl LinearMetrics {
    /// Create linear metrics.
    pub const fn new(width_ratio: f32, height_ratio: f32) -> Self {
        Self {
            width_ratio,
            height_ratio,
        }
    }
}

impl Default for LinearMetrics {
    /// Typical monospace proportions.
    fn default() -> Self {
        Self::new(0.6, 1.2)
    }
}

impl GlyphMetrics for LinearMetrics {
    fn glyph_width(&self, font_size: f32) -> f32 {
        font_size * self.width_ratio
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.height_ratio
    }
}

/// How rows use the vertical space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Rows packed at the natural line height
    #[default]
    Normal,
    /// Rows spread to fill the viewport height
    Expanded,
}

/// Available drawing area in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are positive.
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Search bounds and tuning for [`fit_grid`].
#[derive(Debug, Clone)]
pub struct SizingOptions {
    /// Smallest font size tried
    pub min_font_size: f32,

    /// Largest font size tried
    pub max_font_size: f32,

    /// Search stops once the bracket is this narrow
    pub tolerance: f32,

    /// Extra shrink applied when expanded rows overflow the height
    pub safety_factor: f32,

    /// Spacing below this is dropped; larger spacing is reduced by it
    pub gap_epsilon: f32,
}

impl SizingOptions {
    /// Create new sizing options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size bounds.
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }

    /// Set the search tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for SizingOptions {
    fn default() -> Self {
        Self {
            min_font_size: 8.0,
            max_font_size: 30.0,
            tolerance: 0.5,
            safety_factor: 0.98,
            gap_epsilon: 0.5,
        }
    }
}

/// Chosen font size and extra spacing between rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sizing {
    /// Font size
    pub font_size: f32,
    /// Extra pixels between consecutive rows
    pub line_spacing: f32,
}

/// Fit a `rows` × `columns` grid into `viewport`.
///
/// Returns `None` for a non-positive viewport or an empty grid.
pub fn fit_grid(
    viewport: Viewport,
    rows: usize,
    columns: usize,
    mode: LayoutMode,
    metrics: &dyn GlyphMetrics,
    options: &SizingOptions,
) -> Option<Sizing> {
    if !viewport.is_usable() || rows == 0 || columns == 0 {
        return None;
    }

    let cell_width = viewport.width / columns as f32;
    let mut low = options.min_font_size;
    let mut high = options.max_font_size;
    while high - low > options.tolerance {
        let mid = (low + high) / 2.0;
        if metrics.glyph_width(mid) <= cell_width {
            low = mid;
        } else {
            high = mid;
        }
    }

    let mut font_size = low;
    log::debug!(
        "Font size {:.2} fits {} columns in {:.0}px",
        font_size,
        columns,
        viewport.width
    );

    if mode == LayoutMode::Normal {
        return Some(Sizing {
            font_size,
            line_spacing: 0.0,
        });
    }

    let rows_f = rows as f32;
    let content = metrics.line_height(font_size) * rows_f;
    if content <= 0.0 {
        return Some(Sizing {
            font_size,
            line_spacing: 0.0,
        });
    }

    if content > viewport.height {
        font_size *= (viewport.height / content) * options.safety_factor;
        log::debug!("Rows overflow {:.0}px; font size reduced to {:.2}", viewport.height, font_size);
    }

    let spare = viewport.height - metrics.line_height(font_size) * rows_f;
    let line_spacing = if rows > 1 {
        let gap = spare / (rows_f - 1.0);
        if gap > options.gap_epsilon {
            gap - options.gap_epsilon
        } else {
            0.0
        }
    } else {
        0.0
    };

    Some(Sizing {
        font_size,
        line_spacing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(viewport: Viewport, mode: LayoutMode) -> Option<Sizing> {
        fit_grid(
            viewport,
            25,
            40,
            mode,
            &LinearMetrics::default(),
            &SizingOptions::default(),
        )
    }

    #[test]
    fn test_width_fit_converges() {
        let sizing = fit(Viewport::new(400.0, 2000.0), LayoutMode::Normal).unwrap();
        let metrics = LinearMetrics::default();
        let largest = 10.0 / 0.6;

        assert!(metrics.glyph_width(sizing.font_size) <= 10.0);
        assert!(largest - sizing.font_size <= 0.5);
        assert_eq!(sizing.line_spacing, 0.0);
    }

    #[test]
    fn test_font_size_stays_in_bounds() {
        let tiny = fit(Viewport::new(40.0, 100.0), LayoutMode::Normal).unwrap();
        assert_eq!(tiny.font_size, 8.0);

        let huge = fit(Viewport::new(4000.0, 4000.0), LayoutMode::Normal).unwrap();
        assert!(huge.font_size <= 30.0 && huge.font_size > 29.5);
    }

    #[test]
    fn test_expanded_spreads_rows() {
        let sizing = fit(Viewport::new(400.0, 1000.0), LayoutMode::Expanded).unwrap();
        let line_height = 1.2 * sizing.font_size;
        let expected = (1000.0 - line_height * 25.0) / 24.0 - 0.5;
        assert!((sizing.line_spacing - expected).abs() < 1e-3);
    }

    #[test]
    fn test_expanded_shrinks_on_overflow() {
        let normal = fit(Viewport::new(400.0, 300.0), LayoutMode::Normal).unwrap();
        let expanded = fit(Viewport::new(400.0, 300.0), LayoutMode::Expanded).unwrap();

        assert!(expanded.font_size < normal.font_size);
        assert!(1.2 * expanded.font_size * 25.0 <= 300.0);
        assert_eq!(expanded.line_spacing, 0.0);
    }

    #[test]
    fn test_unusable_viewport() {
        assert!(fit(Viewport::new(0.0, 100.0), LayoutMode::Normal).is_none());
        assert!(fit(Viewport::new(100.0, -1.0), LayoutMode::Expanded).is_none());
    }

    #[test]
    fn test_single_row_has_no_spacing() {
        let sizing = fit_grid(
            Viewport::new(400.0, 500.0),
            1,
            40,
            LayoutMode::Expanded,
            &LinearMetrics::default(),
            &SizingOptions::default(),
        )
        .unwrap();
        assert_eq!(sizing.line_spacing, 0.0);
    }
}
