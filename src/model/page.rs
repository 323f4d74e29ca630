//! Page document types.
//!
//! A [`PageFormat`] is one teletext page: global styles plus an ordered list
//! of positioned [`Section`]s. Sections are painted in order, so later ones
//! overwrite earlier ones cell by cell.

use serde::{Deserialize, Serialize};

/// Page number of the main page.
pub const MAIN_PAGE: u32 = 100;

/// Page numbers reserved for directory pages.
pub const INDEX_PAGES: std::ops::RangeInclusive<u32> = 101..=109;

/// First page number handed to article pages.
pub const FIRST_ARTICLE_PAGE: u32 = 110;

/// Standard teletext grid width in columns.
pub const PAGE_WIDTH: usize = 40;

/// Standard teletext grid height in rows.
pub const PAGE_HEIGHT: usize = 25;

/// A single page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFormat {
    /// Page number as a digit string
    pub page_id: String,

    /// Page title
    pub title: String,

    /// Format version
    pub version: String,

    /// Publication timestamp (ISO-8601)
    pub published_at: String,

    /// Page-wide defaults and grid size
    pub global_styles: GlobalStyles,

    /// Sections in paint order
    pub sections: Vec<Section>,

    /// Declared links (not consumed by the compositor)
    #[serde(default)]
    pub links: Vec<Link>,

    /// Descriptive metadata
    pub metadata: Metadata,
}

impl PageFormat {
    /// Numeric page number, if the id is made of plain digits.
    pub fn number(&self) -> Option<u32> {
        if self.page_id.is_empty() || !self.page_id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.page_id.parse().ok()
    }

    /// Grid height in rows.
    pub fn rows(&self) -> usize {
        self.global_styles.max_page_height
    }

    /// Grid width in columns.
    pub fn columns(&self) -> usize {
        self.global_styles.max_page_width
    }

    /// Whether this is the main page.
    pub fn is_main(&self) -> bool {
        self.page_id == MAIN_PAGE.to_string()
    }

    /// Whether this is a directory page.
    pub fn is_index(&self) -> bool {
        self.number().is_some_and(|n| INDEX_PAGES.contains(&n))
    }

    /// Whether this is an article page.
    pub fn is_article(&self) -> bool {
        self.number().is_some_and(|n| n >= FIRST_ARTICLE_PAGE)
    }

    /// Best-fitting display title from the metadata variants.
    ///
    /// Picks the longest variant of at most `max_len` characters. When none
    /// fits, the shortest variant is returned so the caller can truncate it.
    pub fn display_title(&self, max_len: usize) -> &str {
        let variants: Vec<&str> = [
            self.metadata.long_title.as_deref(),
            self.metadata.medium_title.as_deref(),
            self.metadata.short_title.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut best: Option<&str> = None;
        for &candidate in &variants {
            let len = candidate.chars().count();
            if len <= max_len && best.map_or(true, |b| len > b.chars().count()) {
                best = Some(candidate);
            }
        }
        if let Some(best) = best {
            return best;
        }

        variants
            .iter()
            .copied()
            .min_by_key(|v| v.chars().count())
            .unwrap_or(&self.title)
    }
}

/// Page-wide defaults and grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    /// Color code for unpainted foreground
    pub default_foreground: String,

    /// Color code for unpainted background
    pub default_background: String,

    /// Font family name
    pub default_font: String,

    /// Grid width in columns
    pub max_page_width: usize,

    /// Grid height in rows
    pub max_page_height: usize,
}

impl GlobalStyles {
    /// Standard 40x25 monospace page with the given default colors.
    pub fn standard(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            default_foreground: foreground.into(),
            default_background: background.into(),
            default_font: "monospace".to_string(),
            max_page_width: PAGE_WIDTH,
            max_page_height: PAGE_HEIGHT,
        }
    }
}

/// A styled, positioned block of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier (not required to be unique)
    pub id: String,

    /// Semantic type
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Top-left anchor
    pub position: Position,

    /// Colors, width and alignment
    pub styles: SectionStyles,

    /// Text payload
    pub content: SectionContent,
}

impl Section {
    /// Create a single-line section.
    pub fn text(
        id: impl Into<String>,
        kind: SectionKind,
        position: Position,
        styles: SectionStyles,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            styles,
            content: SectionContent::Text(text.into()),
        }
    }

    /// Create a multi-line block section.
    pub fn block<I, S>(
        id: impl Into<String>,
        kind: SectionKind,
        position: Position,
        styles: SectionStyles,
        lines: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            kind,
            position,
            styles,
            content: SectionContent::Lines(lines.into_iter().map(Into::into).collect()),
        }
    }
}

/// Semantic section type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Page header
    Header,
    /// Status line
    Status,
    /// Article title
    Title,
    /// Body line
    Line,
    /// Generic text block
    TextBlock,
    /// Any type this crate does not know about
    #[serde(other)]
    Other,
}

/// Zero-based grid anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Column 0 of the given row.
    pub const fn row(row: usize) -> Self {
        Self { row, column: 0 }
    }
}

/// Per-section styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyles {
    /// Foreground color code
    pub foreground: String,

    /// Background color code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Width the text is padded to; defaults to the page width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,

    /// Declared block height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<usize>,

    /// Alignment inside the effective width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl SectionStyles {
    /// Foreground and background colors.
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: Some(background.into()),
            max_width: None,
            block_height: None,
            text_align: None,
        }
    }

    /// Set the effective width.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }
}

/// Horizontal alignment of section text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Pad at the start
    Right,
    /// Pad both sides, odd space on the right
    Center,
    /// Pad at the end; unknown values fall back here
    #[default]
    #[serde(other)]
    Left,
}

/// Section payload: one line, or a block of lines on consecutive rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// A single line
    Text(String),
    /// Lines anchored at the section row, one per row
    Lines(Vec<String>),
}

impl SectionContent {
    /// Content as a slice of lines.
    pub fn lines(&self) -> &[String] {
        match self {
            SectionContent::Text(text) => std::slice::from_ref(text),
            SectionContent::Lines(lines) => lines,
        }
    }
}

/// Declared page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Link label
    pub text: String,
    /// Target page id
    pub page_id: String,
}

/// Descriptive page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Content language
    pub language: String,

    /// Category (`main`, `index`, `sport`, ...)
    pub category: String,

    /// Source name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// External URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Long title variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_title: Option<String>,

    /// Medium title variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_title: Option<String>,

    /// Short title variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
}
