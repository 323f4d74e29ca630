//! Main page and directory (index) page layout.

use crate::link::page_marker;
use crate::model::{
    GlobalStyles, Metadata, PageFormat, Position, Section, SectionKind, SectionStyles,
    INDEX_PAGES, MAIN_PAGE, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::text::{char_len, truncate};
use crate::theme::ColorRole;

use super::PaginateOptions;

/// Longest title shown in a directory entry.
pub const ENTRY_TITLE_WIDTH: usize = 32;

/// Rows reserved for the main page banner.
pub const BANNER_ROWS: usize = 5;

const INDEX_GROUP: usize = 5;

/// One directory line: `prefix + title + dots + {{page}}`.
///
/// Dots fill up to `budget` characters in total for title, dots and page
/// digits; they never go negative.
pub fn entry_line(prefix: &str, page: &PageFormat, budget: usize) -> String {
    let title = truncate(page.display_title(ENTRY_TITLE_WIDTH), ENTRY_TITLE_WIDTH);
    let dots = budget.saturating_sub(char_len(&title) + char_len(&page.page_id));
    format!(
        "{}{}{}{}",
        prefix,
        title,
        ".".repeat(dots),
        page_marker(&page.page_id)
    )
}

/// Build the main page from the selected top and latest article pages.
pub(crate) fn main_page(
    top: &[&PageFormat],
    latest: &[&PageFormat],
    options: &PaginateOptions,
    generated_at: &str,
) -> PageFormat {
    let mut sections = Vec::with_capacity(PAGE_HEIGHT);
    let banner_styles = SectionStyles::new(ColorRole::HeaderFg, ColorRole::MainPageBg);

    for row in 0..BANNER_ROWS {
        let line = options.banner.get(row).map(String::as_str).unwrap_or_default();
        sections.push(Section::text(
            format!("banner-{}", row),
            SectionKind::Header,
            Position::row(row),
            banner_styles.clone(),
            line,
        ));
    }

    // Row 5 is left empty for the "last updated" overlay.
    sections.push(Section::text(
        "status",
        SectionKind::Status,
        Position::row(BANNER_ROWS),
        banner_styles.clone(),
        "",
    ));
    sections.push(Section::text(
        "spacer",
        SectionKind::Line,
        Position::row(BANNER_ROWS + 1),
        banner_styles,
        " ".repeat(PAGE_WIDTH),
    ));

    let mut row = BANNER_ROWS + 2;
    for page in top {
        sections.push(Section::text(
            format!("top-{}", page.page_id),
            SectionKind::TextBlock,
            Position::row(row),
            SectionStyles::new(ColorRole::TopArticlesFg, ColorRole::TopArticlesBg),
            entry_line(" ", page, PAGE_WIDTH - 2),
        ));
        row += 1;
    }

    sections.push(Section::text(
        "latest-header",
        SectionKind::Header,
        Position::row(row),
        SectionStyles::new(ColorRole::LatestNewsHeaderFg, ColorRole::LatestNewsHeaderBg),
        " LATEST NEWS ",
    ));
    row += 1;

    for page in latest {
        sections.push(Section::text(
            format!("latest-{}", page.page_id),
            SectionKind::TextBlock,
            Position::row(row),
            SectionStyles::new(ColorRole::LatestNewsFg, ColorRole::LatestNewsBg),
            entry_line(" ", page, PAGE_WIDTH - 2),
        ));
        row += 1;
    }

    while row < PAGE_HEIGHT {
        sections.push(Section::text(
            "filler",
            SectionKind::Line,
            Position::row(row),
            SectionStyles::new(ColorRole::ArticlePageFg, ColorRole::MainPageBg),
            "",
        ));
        row += 1;
    }

    PageFormat {
        page_id: MAIN_PAGE.to_string(),
        title: "Main Page".to_string(),
        version: "1.0".to_string(),
        published_at: generated_at.to_string(),
        global_styles: GlobalStyles::standard(ColorRole::ArticlePageFg, ColorRole::MainPageBg),
        sections,
        links: Vec::new(),
        metadata: Metadata {
            language: options.language.clone(),
            category: "main".to_string(),
            ..Default::default()
        },
    }
}

/// Build the directory pages listing every article page in number order.
///
/// Article pages beyond the last directory page are not listed.
pub(crate) fn index_pages(
    articles: &[PageFormat],
    options: &PaginateOptions,
    generated_at: &str,
) -> Vec<PageFormat> {
    let mut listed: Vec<&PageFormat> = articles.iter().collect();
    listed.sort_by_key(|p| p.number());

    let per_page = options.entries_per_index_page.max(1);
    let max_pages = options.max_index_pages.min(INDEX_PAGES.count());
    let capacity = per_page * max_pages;
    if listed.len() > capacity {
        log::warn!(
            "{} article page(s) do not fit the directory and are not listed",
            listed.len() - capacity
        );
    }

    listed
        .chunks(per_page)
        .take(max_pages)
        .enumerate()
        .map(|(i, chunk)| index_page(i + 1, chunk, options, generated_at))
        .collect()
}

fn index_page(
    ordinal: usize,
    entries: &[&PageFormat],
    options: &PaginateOptions,
    generated_at: &str,
) -> PageFormat {
    let number = MAIN_PAGE + ordinal as u32;
    let mut sections = Vec::with_capacity(PAGE_HEIGHT);
    let item_styles = SectionStyles::new(ColorRole::IndexItemFg, ColorRole::IndexItemBg);

    sections.push(Section::text(
        "index-header",
        SectionKind::Header,
        Position::row(0),
        SectionStyles::new(ColorRole::IndexHeaderFg, ColorRole::IndexHeaderBg)
            .with_max_width(PAGE_WIDTH),
        format!("INDEX {}", number),
    ));

    let mut row = 2;
    for (group_index, group) in entries.chunks(INDEX_GROUP).enumerate() {
        if group_index > 0 {
            row += 1;
        }
        for page in group {
            sections.push(Section::text(
                format!("entry-{}", page.page_id),
                SectionKind::TextBlock,
                Position::row(row),
                item_styles.clone(),
                entry_line("", page, PAGE_WIDTH - 1),
            ));
            row += 1;
        }
    }

    while row < PAGE_HEIGHT {
        sections.push(Section::text(
            "filler",
            SectionKind::Line,
            Position::row(row),
            item_styles.clone(),
            " ".repeat(PAGE_WIDTH),
        ));
        row += 1;
    }

    PageFormat {
        page_id: number.to_string(),
        title: format!("Index {}", number),
        version: "1.0".to_string(),
        published_at: generated_at.to_string(),
        global_styles: GlobalStyles::standard(ColorRole::IndexItemFg, ColorRole::IndexItemBg),
        sections,
        links: Vec::new(),
        metadata: Metadata {
            language: options.language.clone(),
            category: "index".to_string(),
            ..Default::default()
        },
    }
}
