//! # teletext
//!
//! Teletext-style news pages from a ranked article feed.
//!
//! The crate turns a JSON article feed into a set of fixed 40x25 character
//! pages: a main page with top and latest stories, directory pages, and one
//! page per article. Pages are plain documents of positioned, styled
//! sections; the compositor paints them into a character/color grid with
//! clickable page numbers, ready for any [`render::RenderSurface`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use teletext::{build_pages, render, PaginateOptions};
//!
//! fn main() -> teletext::Result<()> {
//!     let json = std::fs::read_to_string("feed.json")?;
//!     let pages = build_pages(&json, &PaginateOptions::default())?;
//!
//!     let main = pages.main_page().expect("main page is always generated");
//!     let composed = render::compose(main, &render::ComposeOptions::default());
//!     println!("{}", composed.text());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Stable numbering**: every article gets one page number from its rank
//! - **Link markers**: `{{110}}` page links and `{{URL:...}}` source markers
//! - **Themes**: sections carry color roles resolved by a caller's [`Theme`]
//! - **Adaptive sizing**: font fitting for any viewport
//! - **Parallel processing**: article pages built on Rayon (`parallel` feature)

pub mod error;
pub mod link;
pub mod model;
pub mod paginate;
pub mod render;
pub mod sizing;
mod text;
pub mod theme;
pub mod timestamp;

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

// Re-export commonly used types
pub use error::{Error, Result};
pub use link::{extract_links, extract_page_number, extract_url, has_link, strip_markers, LinkInfo};
pub use model::{
    Article, Feed, GlobalStyles, Metadata, PageFormat, PageSet, Paragraph, Position, Section,
    SectionContent, SectionKind, SectionStyles, TextAlign,
};
pub use paginate::{paginate, PaginateOptions, Pagination, Paginator};
pub use render::{compose, ComposeOptions, ComposedPage, JsonFormat, PageLink, RenderSurface};
pub use sizing::{fit_grid, GlyphMetrics, LayoutMode, LinearMetrics, Sizing, SizingOptions, Viewport};
pub use theme::{ColorRole, Palette, Rgb, Theme};

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Wrapped(Feed),
    Bare(Vec<Article>),
}

/// Parse a feed from JSON.
///
/// Accepts `{"articles": [...]}` or a bare article array.
pub fn parse_feed(json: &str) -> Result<Feed> {
    let document: FeedDocument = serde_json::from_str(json).map_err(|e| {
        log::debug!("Feed rejected: {}", e);
        Error::InvalidFeed(e.to_string())
    })?;

    let feed = match document {
        FeedDocument::Wrapped(feed) => feed,
        FeedDocument::Bare(articles) => Feed::new(articles),
    };
    log::debug!("Parsed feed with {} article(s)", feed.len());
    Ok(feed)
}

/// Parse a feed from a file.
pub fn parse_feed_file<P: AsRef<Path>>(path: P) -> Result<Feed> {
    let json = fs::read_to_string(path)?;
    parse_feed(&json)
}

/// Parse a feed from a reader.
pub fn parse_feed_reader<R: Read>(mut reader: R) -> Result<Feed> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_feed(&json)
}

/// Parse a feed and paginate it in one step.
pub fn build_pages(json: &str, options: &PaginateOptions) -> Result<PageSet> {
    let feed = parse_feed(json)?;
    Ok(paginate(&feed.articles, options).into_page_set())
}
