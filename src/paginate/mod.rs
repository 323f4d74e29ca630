//! Feed-to-pages pipeline.
//!
//! Articles are ranked once; the rank fixes each article's page number. The
//! article pages, the directory pages and the main page are then built from
//! that ranking and collected into a [`PageSet`].

mod article;
mod directory;
mod options;
mod ranking;

pub use article::extract_category;
pub use directory::{entry_line, BANNER_ROWS, ENTRY_TITLE_WIDTH};
pub use options::{PaginateOptions, DEFAULT_BANNER};
pub use ranking::{rank_articles, select_latest, select_top, RankedArticle};

use chrono::Utc;

use crate::model::{Article, PageFormat, PageSet};
use crate::timestamp::to_iso;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of paginating a feed.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// All generated pages, sorted by number
    pub pages: PageSet,

    /// Page numbers in the main page's top list
    pub top: Vec<u32>,

    /// Page numbers in the main page's latest list
    pub latest: Vec<u32>,
}

impl Pagination {
    /// Drop the selection details and keep the pages.
    pub fn into_page_set(self) -> PageSet {
        self.pages
    }
}

/// Turns an article list into a page set.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    options: PaginateOptions,
}

impl Paginator {
    /// Create a paginator with the given options.
    pub fn new(options: PaginateOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &PaginateOptions {
        &self.options
    }

    /// Build the main page, the directory pages and one page per article.
    ///
    /// Articles without body lines are dropped. An empty input still yields
    /// a main page.
    pub fn paginate(&self, articles: &[Article]) -> Pagination {
        let options = &self.options;
        let generated_at = to_iso(options.generated_at.unwrap_or_else(Utc::now));

        let ranked = rank_articles(articles, options.first_article_page);
        log::debug!(
            "Ranked {} of {} article(s) starting at page {}",
            ranked.len(),
            articles.len(),
            options.first_article_page
        );

        let article_pages = self.article_pages(&ranked);

        let top = select_top(&ranked, &options.score_thresholds, options.top_count);
        let latest = select_latest(&ranked, &top, options.latest_count);

        // Article pages line up with `ranked`, so a rank indexes its page.
        let top_pages: Vec<&PageFormat> = top.iter().map(|r| &article_pages[r.rank]).collect();
        let latest_pages: Vec<&PageFormat> =
            latest.iter().map(|r| &article_pages[r.rank]).collect();

        let main = directory::main_page(&top_pages, &latest_pages, options, &generated_at);
        let index = directory::index_pages(&article_pages, options, &generated_at);

        let top = top.iter().map(|r| r.page_number).collect();
        let latest = latest.iter().map(|r| r.page_number).collect();

        let mut pages = Vec::with_capacity(article_pages.len() + index.len() + 1);
        pages.push(main);
        pages.extend(index);
        pages.extend(article_pages);

        log::debug!("Generated {} page(s)", pages.len());

        Pagination {
            pages: PageSet::new(pages),
            top,
            latest,
        }
    }

    #[cfg(feature = "parallel")]
    fn article_pages(&self, ranked: &[RankedArticle<'_>]) -> Vec<PageFormat> {
        if self.options.parallel && ranked.len() > 1 {
            ranked
                .par_iter()
                .map(|r| article::article_page(r.article, r.page_number, &self.options))
                .collect()
        } else {
            self.article_pages_sequential(ranked)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn article_pages(&self, ranked: &[RankedArticle<'_>]) -> Vec<PageFormat> {
        self.article_pages_sequential(ranked)
    }

    fn article_pages_sequential(&self, ranked: &[RankedArticle<'_>]) -> Vec<PageFormat> {
        ranked
            .iter()
            .map(|r| article::article_page(r.article, r.page_number, &self.options))
            .collect()
    }
}

/// Paginate `articles` with `options`.
pub fn paginate(articles: &[Article], options: &PaginateOptions) -> Pagination {
    Paginator::new(options.clone()).paginate(articles)
}
