//! Drawing-surface abstraction.
//!
//! A [`RenderSurface`] is whatever finally shows the grid: a terminal, a
//! canvas, an image. [`present`] replays a composed page onto one, resolving
//! color codes through a [`Theme`].

use std::ops::Range;

use crate::model::PageFormat;
use crate::sizing::{fit_grid, GlyphMetrics, LayoutMode, Sizing, SizingOptions, Viewport};
use crate::theme::{Rgb, Theme};

use super::ComposedPage;

/// Target for painted cells and clickable spans.
pub trait RenderSurface {
    /// Current drawing area.
    fn viewport(&self) -> Viewport;

    /// Select the font family.
    fn set_font(&mut self, family: &str);

    /// Apply a font size and row spacing.
    fn apply_sizing(&mut self, sizing: Sizing);

    /// Paint one cell.
    fn paint_cell(&mut self, row: usize, column: usize, ch: char, foreground: Rgb, background: Rgb);

    /// Register a clickable span on `row` leading to `page_number`.
    fn register_link(&mut self, row: usize, span: Range<usize>, page_number: u32);

    /// Called after the last cell of a row.
    fn end_row(&mut self, _row: usize) {}
}

/// Paint a composed page onto `surface`.
pub fn present<S>(page: &PageFormat, composed: &ComposedPage, theme: &dyn Theme, surface: &mut S)
where
    S: RenderSurface + ?Sized,
{
    surface.set_font(&page.global_styles.default_font);

    let grid = composed.grid();
    for row in 0..grid.height() {
        for column in 0..grid.width() {
            let ch = grid.get(row, column).map_or(' ', |c| c.ch);
            let (fg, bg) = composed.cell_colors(row, column, theme);
            surface.paint_cell(row, column, ch, fg, bg);
        }
        surface.end_row(row);
    }

    for (&row, link) in composed.links() {
        surface.register_link(row, link.span.clone(), link.page_number);
    }
}

/// Size the font for `composed` against the surface's viewport and apply it.
///
/// Returns the sizing, or `None` when the viewport is not usable.
pub fn fit_surface<S>(
    composed: &ComposedPage,
    mode: LayoutMode,
    metrics: &dyn GlyphMetrics,
    options: &SizingOptions,
    surface: &mut S,
) -> Option<Sizing>
where
    S: RenderSurface + ?Sized,
{
    let grid = composed.grid();
    let sizing = fit_grid(
        surface.viewport(),
        grid.height(),
        grid.width(),
        mode,
        metrics,
        options,
    )?;
    surface.apply_sizing(sizing);
    Some(sizing)
}
