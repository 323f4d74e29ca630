//! Pagination options and configuration.

use chrono::{DateTime, Utc};

use crate::model::FIRST_ARTICLE_PAGE;

/// Default banner painted on the first five rows of the main page.
pub const DEFAULT_BANNER: [&str; 5] = [
    "  _   _ _______     ___   _ _   _ ",
    " | \\ | | ____\\ \\   / (_) (_) \\ | |",
    " |  \\| |  _|  \\ \\ / /| | | |  \\| |",
    " | |\\  | |___  \\ V / | |_| | |\\  |",
    " |_| \\_|_____|  \\_/   \\___/|_| \\_|  AI",
];

/// Options controlling article selection and page layout.
#[derive(Debug, Clone)]
pub struct PaginateOptions {
    /// Number of articles in the main page's top list
    pub top_count: usize,

    /// Number of articles in the main page's latest list
    pub latest_count: usize,

    /// Score thresholds tried in order when filling the top list
    pub score_thresholds: Vec<f32>,

    /// Page number of the highest-ranked article
    pub first_article_page: u32,

    /// Maximum number of directory pages
    pub max_index_pages: usize,

    /// Entries per directory page
    pub entries_per_index_page: usize,

    /// Language tag written into page metadata
    pub language: String,

    /// Main page banner lines
    pub banner: Vec<String>,

    /// Timestamp stamped on generated pages (`None` = now)
    pub generated_at: Option<DateTime<Utc>>,

    /// Build article pages on the rayon pool
    pub parallel: bool,
}

impl PaginateOptions {
    /// Create new pagination options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top list size.
    pub fn with_top_count(mut self, count: usize) -> Self {
        self.top_count = count;
        self
    }

    /// Set the latest list size.
    pub fn with_latest_count(mut self, count: usize) -> Self {
        self.latest_count = count;
        self
    }

    /// Set the score thresholds for the top list.
    pub fn with_thresholds(mut self, thresholds: Vec<f32>) -> Self {
        self.score_thresholds = thresholds;
        self
    }

    /// Set the metadata language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replace the main page banner.
    ///
    /// Only the first five lines are shown; shorter banners leave the
    /// remaining rows empty.
    pub fn with_banner<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banner = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Fix the timestamp of generated pages.
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Enable or disable parallel page construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build pages on the calling thread only.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            top_count: 6,
            latest_count: 8,
            score_thresholds: vec![8.0, 7.0, 6.0, 5.0],
            first_article_page: FIRST_ARTICLE_PAGE,
            max_index_pages: 9,
            entries_per_index_page: 10,
            language: "de".to_string(),
            banner: DEFAULT_BANNER.iter().map(|s| s.to_string()).collect(),
            generated_at: None,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PaginateOptions::default();
        assert_eq!(options.top_count, 6);
        assert_eq!(options.latest_count, 8);
        assert_eq!(options.score_thresholds, vec![8.0, 7.0, 6.0, 5.0]);
        assert_eq!(options.first_article_page, 110);
        assert_eq!(options.max_index_pages, 9);
        assert!(options.parallel);
    }

    #[test]
    fn test_banner_fits_page() {
        for line in DEFAULT_BANNER {
            assert!(line.chars().count() <= 40, "{:?}", line);
        }
    }

    #[test]
    fn test_default_banner_signature() {
        assert!(DEFAULT_BANNER[4].ends_with("  AI"));
        assert_eq!(DEFAULT_BANNER[0], "  _   _ _______     ___   _ _   _ ");
    }

    #[test]
    fn test_builder() {
        let options = PaginateOptions::new()
            .with_top_count(3)
            .with_latest_count(2)
            .with_language("en")
            .with_banner(["ONE", "TWO"])
            .sequential();

        assert_eq!(options.top_count, 3);
        assert_eq!(options.latest_count, 2);
        assert_eq!(options.language, "en");
        assert_eq!(options.banner, vec!["ONE", "TWO"]);
        assert!(!options.parallel);
    }
}
