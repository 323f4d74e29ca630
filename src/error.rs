//! Error types for the teletext library.

use std::io;
use thiserror::Error;

/// Result type alias for teletext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading feeds or handling page sets.
///
/// Pagination, compositing and sizing never fail; only the edges that touch
/// files, JSON or page lookups return this type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed parsed but does not describe an article list.
    #[error("Invalid feed: {0}")]
    InvalidFeed(String),

    /// A palette file contains an unusable entry.
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// No page with this number exists in the page set.
    #[error("Page {0} not found")]
    PageNotFound(u32),

    /// Error while producing rendered output.
    #[error("Rendering error: {0}")]
    Render(String),
}
