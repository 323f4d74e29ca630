//! Rendering: composing page documents into grids and writing them out.

mod compositor;
mod grid;
mod json;
mod options;
pub mod surface;
mod text;

pub use compositor::{compose, ComposedPage, PageLink, STATUS_ROW};
pub use grid::{Cell, CellColors, CellGrid};
pub use json::{page_to_json, to_json, JsonFormat};
pub use options::ComposeOptions;
pub use surface::{fit_surface, present, RenderSurface};
pub use text::{page_text, to_text};
