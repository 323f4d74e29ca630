//! Article page layout.

use crate::model::{
    Article, GlobalStyles, Metadata, PageFormat, Position, Section, SectionKind, SectionStyles,
    PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::text::{char_len, pad_end, truncate};
use crate::theme::ColorRole;
use crate::timestamp::format_published;

use super::PaginateOptions;

const TOPIC_WIDTH: usize = 22;

/// Body lines in one color before a sentence end may switch it.
const COLOR_RUN: usize = 5;

/// Build the page for one article.
pub(crate) fn article_page(article: &Article, number: u32, options: &PaginateOptions) -> PageFormat {
    let mut sections = Vec::with_capacity(PAGE_HEIGHT + 4);
    header(article, &mut sections);

    let title = if char_len(&article.medium_title) <= PAGE_WIDTH {
        &article.medium_title
    } else {
        &article.short_title
    };
    sections.push(Section::text(
        "title",
        SectionKind::Title,
        Position::row(1),
        SectionStyles::new(ColorRole::TitleText, ColorRole::ArticlePageBg),
        truncate(title, PAGE_WIDTH),
    ));
    sections.push(Section::text(
        "spacer",
        SectionKind::Line,
        Position::row(2),
        SectionStyles::new(ColorRole::ArticlePageBg, ColorRole::ArticlePageBg),
        "",
    ));

    let mut row = body(article, 3, &mut sections);
    if row > PAGE_HEIGHT - 1 {
        log::debug!(
            "Article {} body runs to row {}; lines past row {} are clipped",
            article.id,
            row,
            PAGE_HEIGHT - 1
        );
    }

    while row < PAGE_HEIGHT {
        if row == PAGE_HEIGHT - 1 {
            sections.push(source_line(article, row));
        } else {
            sections.push(Section::text(
                "filler",
                SectionKind::Line,
                Position::row(row),
                SectionStyles::new(ColorRole::NavigationBg, ColorRole::NavigationBg),
                " ".repeat(PAGE_WIDTH),
            ));
        }
        row += 1;
    }

    PageFormat {
        page_id: number.to_string(),
        title: article.short_title.clone(),
        version: "1.0".to_string(),
        published_at: article.published_at.clone(),
        global_styles: GlobalStyles::standard(ColorRole::ArticlePageFg, ColorRole::ArticlePageBg),
        sections,
        links: Vec::new(),
        metadata: Metadata {
            language: options.language.clone(),
            category: extract_category(&article.topic).to_string(),
            source: article.source.clone(),
            url: article.url.clone(),
            long_title: Some(article.long_title.clone()),
            medium_title: Some(article.medium_title.clone()),
            short_title: Some(article.short_title.clone()),
        },
    }
}

/// Map a topic line onto a page category.
pub fn extract_category(topic: &str) -> &'static str {
    let topic = topic.to_uppercase();
    if topic.contains("INLAND") {
        "inland"
    } else if topic.contains("AUSLAND") {
        "ausland"
    } else if topic.contains("SPORT") {
        "sport"
    } else if topic.contains("WIRTSCHAFT") || topic.contains("ECONOMY") {
        "wirtschaft"
    } else {
        "general"
    }
}

fn header(article: &Article, sections: &mut Vec<Section>) {
    sections.push(Section::text(
        "header-background",
        SectionKind::Header,
        Position::row(0),
        SectionStyles::new(ColorRole::HeaderBg, ColorRole::HeaderBg),
        " ".repeat(PAGE_WIDTH),
    ));

    let topic = truncate(&article.topic.to_uppercase(), TOPIC_WIDTH);
    sections.push(Section::text(
        "topic",
        SectionKind::Header,
        Position::row(0),
        SectionStyles::new(ColorRole::HeaderFg, ColorRole::HeaderBg)
            .with_max_width(TOPIC_WIDTH + 2),
        format!(" {} ", pad_end(&topic, TOPIC_WIDTH)),
    ));

    let date = format_published(&article.published_at).unwrap_or_else(|| "NO DATE".to_string());
    let date = format!(" {} ", date);
    let width = char_len(&date);
    sections.push(Section::text(
        "date",
        SectionKind::Header,
        Position::new(0, PAGE_WIDTH.saturating_sub(width)),
        SectionStyles::new(ColorRole::DateTimeFg, ColorRole::TopArticlesBg).with_max_width(width),
        date,
    ));
}

/// Emit one section per body line starting at `row`; returns the next free row.
///
/// Paragraphs alternate between the two body colors. Inside a long paragraph
/// the color also flips after a sentence end once more than [`COLOR_RUN`]
/// lines were printed in the current color.
fn body(article: &Article, mut row: usize, sections: &mut Vec<Section>) -> usize {
    let mut primary = true;

    for paragraph in &article.paragraphs {
        let mut color = if primary {
            ColorRole::BodyText
        } else {
            ColorRole::BodyTextAlt
        };
        let mut run = 0;
        let mut flip_next = false;

        for line in &paragraph.lines {
            if flip_next {
                color = alternate(color);
                run = 0;
                flip_next = false;
            }

            sections.push(Section::text(
                format!("line-{}", row),
                SectionKind::Line,
                Position::row(row),
                SectionStyles::new(color, ColorRole::ArticlePageBg),
                line.clone(),
            ));
            row += 1;
            run += 1;

            if run > COLOR_RUN && line.trim_end().ends_with(['.', '!', '?']) {
                flip_next = true;
            }
        }

        primary = !primary;
    }

    row
}

fn alternate(color: ColorRole) -> ColorRole {
    if color == ColorRole::BodyText {
        ColorRole::BodyTextAlt
    } else {
        ColorRole::BodyText
    }
}

fn source_line(article: &Article, row: usize) -> Section {
    let source = truncate(article.source.as_deref().unwrap_or_default(), PAGE_WIDTH);
    let text = if article.url.is_some() && !source.is_empty() {
        format!("{{{{URL:{}}}}}", source)
    } else {
        pad_end(&source, PAGE_WIDTH)
    };

    Section::text(
        "source",
        SectionKind::Line,
        Position::row(row),
        SectionStyles::new(ColorRole::NavigationDisabledFg, ColorRole::ArticlePageBg),
        text,
    )
}
