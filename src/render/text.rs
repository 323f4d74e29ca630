//! Plain text output for pages.

use crate::error::{Error, Result};
use crate::model::{PageFormat, PageSet};

use super::{compose, ComposeOptions};

/// Compose a page and return its rows as plain text.
pub fn to_text(page: &PageFormat, options: &ComposeOptions) -> String {
    compose(page, options).text()
}

/// Plain text of page `number` in `pages`.
pub fn page_text(pages: &PageSet, number: u32, options: &ComposeOptions) -> Result<String> {
    pages
        .get(number)
        .map(|page| to_text(page, options))
        .ok_or(Error::PageNotFound(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Paragraph};
    use crate::paginate::{paginate, PaginateOptions};

    #[test]
    fn test_to_text() {
        let article = Article::new("a", "Inland", "Hello", "2025-01-01T00:00:00Z")
            .with_paragraph(Paragraph::new(["Hello, world!", "Second line."]));
        let pages = paginate(&[article], &PaginateOptions::default()).into_page_set();

        let text = page_text(&pages, 110, &ComposeOptions::default()).unwrap();
        let rows: Vec<_> = text.lines().collect();
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|r| r.chars().count() == 40));
        assert!(rows[0].starts_with(" INLAND"));
        assert!(rows[3].starts_with("Hello, world!"));
    }

    #[test]
    fn test_missing_page() {
        let pages = PageSet::default();
        let err = page_text(&pages, 123, &ComposeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::PageNotFound(123)));
    }
}
