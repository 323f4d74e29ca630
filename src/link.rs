//! Link marker parsing.
//!
//! Page content carries navigation markup inline as plain text:
//!
//! - `{{105}}` links to page 105
//! - `{{URL:Example News}}` marks text backed by an external URL
//!
//! Both forms are single-line and never nested. At most one marker kind is
//! recognized per line, page markers first.
//!
//! # Example
//!
//! ```
//! use teletext::link::LinkParser;
//!
//! let parser = LinkParser::new();
//! assert_eq!(parser.extract_page_number("Sports {{105}} update"), Some(105));
//! assert_eq!(parser.strip_markers("Sports {{105}} update"), "Sports  update");
//! ```

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;

/// A link found on one line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkInfo {
    /// Index of the line (or grid row) the link was found on
    pub line_index: usize,

    /// Linked page number
    pub page_number: Option<u32>,

    /// URL marker payload
    pub url: Option<String>,

    /// The line as written
    pub original_text: String,

    /// The line with markers stripped
    pub display_text: String,
}

/// Recognizes page and URL markers.
#[derive(Debug, Clone)]
pub struct LinkParser {
    page_marker: Regex,
    url_marker: Regex,
}

impl LinkParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self {
            page_marker: Regex::new(r"\{\{(\d+)\}\}").unwrap(),
            url_marker: Regex::new(r"\{\{URL:(.+?)\}\}").unwrap(),
        }
    }

    /// Page number of the first page marker.
    ///
    /// Digits that do not fit a page number yield `None`.
    pub fn extract_page_number(&self, line: &str) -> Option<u32> {
        self.page_digits(line)?.parse().ok()
    }

    /// Digits of the first page marker, whether or not they parse.
    pub fn page_digits<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.page_marker
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Payload of the first URL marker.
    pub fn extract_url<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.url_marker
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Whether the line carries either marker kind.
    pub fn has_link(&self, line: &str) -> bool {
        self.page_marker.is_match(line) || self.url_marker.is_match(line)
    }

    /// Remove page markers and unwrap URL markers to their text.
    ///
    /// Repeats until nothing changes, so the result never contains a marker
    /// and stripping twice equals stripping once.
    pub fn strip_markers(&self, line: &str) -> String {
        let mut current = line.to_string();
        loop {
            let next = self.strip_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Replace the first page marker, and identical copies of it, with its
    /// bare digits.
    ///
    /// Returns the rewritten line and the digits, or `None` when the line has
    /// no page marker.
    pub fn inline_page_marker(&self, line: &str) -> Option<(String, String)> {
        let caps = self.page_marker.captures(line)?;
        let whole = caps.get(0)?;
        let digits = caps.get(1)?.as_str().to_string();
        Some((line.replace(whole.as_str(), &digits), digits))
    }

    /// Replace the first URL marker, and identical copies of it, with its
    /// bare text.
    pub fn inline_url_marker(&self, line: &str) -> Option<String> {
        let caps = self.url_marker.captures(line)?;
        let whole = caps.get(0)?;
        let text = caps.get(1)?.as_str();
        Some(line.replace(whole.as_str(), text))
    }

    /// Collect link records for a block of lines.
    pub fn extract_links<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LinkInfo> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| self.link_at(index, line.as_ref()))
            .collect()
    }

    /// Link record for a single line.
    pub fn link_at(&self, line_index: usize, line: &str) -> Option<LinkInfo> {
        if let Some(page_number) = self.extract_page_number(line) {
            return Some(LinkInfo {
                line_index,
                page_number: Some(page_number),
                url: None,
                original_text: line.to_string(),
                display_text: self.page_marker.replace_all(line, "").into_owned(),
            });
        }

        self.extract_url(line).map(|url| LinkInfo {
            line_index,
            page_number: None,
            url: Some(url.to_string()),
            original_text: line.to_string(),
            display_text: self
                .url_marker
                .replace_all(line, |caps: &Captures| caps[1].to_string())
                .into_owned(),
        })
    }

    fn strip_once(&self, line: &str) -> String {
        let without_pages = self.page_marker.replace_all(line, "");
        self.url_marker
            .replace_all(&without_pages, |caps: &Captures| caps[1].to_string())
            .into_owned()
    }
}

impl Default for LinkParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared parser instance.
pub fn parser() -> &'static LinkParser {
    static PARSER: OnceLock<LinkParser> = OnceLock::new();
    PARSER.get_or_init(LinkParser::new)
}

/// Page number of the first page marker in `line`.
pub fn extract_page_number(line: &str) -> Option<u32> {
    parser().extract_page_number(line)
}

/// Payload of the first URL marker in `line`.
pub fn extract_url(line: &str) -> Option<&str> {
    parser().extract_url(line)
}

/// `line` with all markers stripped.
pub fn strip_markers(line: &str) -> String {
    parser().strip_markers(line)
}

/// Whether `line` carries a marker.
pub fn has_link(line: &str) -> bool {
    parser().has_link(line)
}

/// Link records for a block of lines.
pub fn extract_links<S: AsRef<str>>(lines: &[S]) -> Vec<LinkInfo> {
    parser().extract_links(lines)
}

/// Page marker for `page`, e.g. `{{110}}`.
pub fn page_marker(page: &str) -> String {
    format!("{{{{{}}}}}", page)
}
