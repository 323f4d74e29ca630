//! JSON output for page sets.

use crate::error::{Error, Result};
use crate::model::{PageFormat, PageSet};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a page set as a JSON array of pages.
pub fn to_json(pages: &PageSet, format: JsonFormat) -> Result<String> {
    serialize(pages, format)
}

/// Serialize a single page.
pub fn page_to_json(page: &PageFormat, format: JsonFormat) -> Result<String> {
    serialize(page, format)
}

fn serialize<T: serde::Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
