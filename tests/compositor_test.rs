//! Integration tests for composing generated pages.

use teletext::render::{compose, ComposeOptions, STATUS_ROW};
use teletext::theme::{ColorRole, Palette, Rgb};
use teletext::{paginate, Article, PageSet, PaginateOptions, Paragraph};

fn pages() -> PageSet {
    let articles: Vec<_> = (0..12)
        .map(|i| {
            Article::new(
                format!("a{}", i),
                if i % 2 == 0 { "Sport" } else { "Ausland" },
                format!("Headline {}", i),
                format!("2025-03-{:02}T08:30:00Z", i + 1),
            )
            .with_ranking(10.0 - i as f32)
            .with_source("Newsdesk")
            .with_url(format!("https://example.org/{}", i))
            .with_paragraph(Paragraph::new(["First paragraph.", "Still first."]))
            .with_paragraph(Paragraph::new(["Second paragraph."]))
        })
        .collect();
    paginate(&articles, &PaginateOptions::default()).into_page_set()
}

#[test]
fn test_every_page_composes_to_full_grid() {
    let pages = pages();
    for page in &pages {
        let composed = compose(page, &ComposeOptions::default());
        assert_eq!(composed.grid().height(), 25);
        assert_eq!(composed.grid().width(), 40);
        assert_eq!(composed.text().lines().count(), 25);
    }
}

#[test]
fn test_main_page_links_match_entries() {
    let pages = pages();
    let main = pages.main_page().unwrap();
    let composed = compose(main, &ComposeOptions::default());

    // 6 top entries and 6 remaining articles in the latest list.
    assert_eq!(composed.links().len(), 12);

    let first = composed.link_at(7).unwrap();
    assert_eq!(first.page_number, 110);
    assert_eq!(first.span, 36..39);
    assert_eq!(&composed.row_text(7)[36..39], "110");
    assert!(composed.row_text(7).starts_with(" Headline 0....."));

    let (fg, _) = composed.cell_codes(7, 37);
    assert_eq!(fg, "PAGE_NUMBERS_FG");
}

#[test]
fn test_main_page_last_updated() {
    let pages = pages();
    let main = pages.main_page().unwrap();
    let options = ComposeOptions::new().with_last_updated("2025-03-14T09:26:53+01:00");
    let composed = compose(main, &options);

    assert!(composed
        .row_text(STATUS_ROW)
        .starts_with(" Last updated: 2025/03/14 08:26"));
    assert_eq!(composed.cell_codes(STATUS_ROW, 3), ("MAIN_PAGE_FG", "MAIN_PAGE_BG"));
}

#[test]
fn test_index_page_margin_and_links() {
    let pages = pages();
    let index = pages.get(101).unwrap();
    let composed = compose(index, &ComposeOptions::default());

    assert!(composed.row_text(0).starts_with("INDEX 101 "));
    assert_eq!(index.title, "Index 101");
    for row in 0..25 {
        assert_eq!(composed.cell_codes(row, 39), ("MARGIN_FG", "MARGIN_BG"));
    }

    // Entries on rows 2-6 and 8-12.
    let rows: Vec<_> = composed.links().keys().copied().collect();
    assert_eq!(rows, vec![2, 3, 4, 5, 6, 8, 9, 10, 11, 12]);

    for (row, link) in composed.links() {
        let text = composed.row_text(*row);
        assert_eq!(&text[link.span.clone()], link.page_number.to_string());
    }
}

#[test]
fn test_article_page_header_and_source() {
    let pages = pages();
    let article = pages.get(110).unwrap();
    let composed = compose(article, &ComposeOptions::default());

    let header = composed.row_text(0);
    assert!(header.starts_with(" SPORT "));
    assert!(header.ends_with(" 2025/03/01 08:30 "));
    assert_eq!(composed.cell_codes(0, 30), ("DATE_TIME_FG", "TOP_ARTICLES_BG"));
    assert_eq!(composed.cell_codes(0, 5), ("HEADER_FG", "HEADER_BG"));

    assert!(composed.row_text(1).starts_with("Headline 0"));
    assert!(composed.row_text(3).starts_with("First paragraph."));
    assert_eq!(composed.cell_codes(3, 0).0, "BODY_TEXT");
    assert_eq!(composed.cell_codes(5, 0).0, "BODY_TEXT_ALT");

    // URL markers are shown as text and never become links.
    assert!(composed.row_text(24).starts_with("Newsdesk"));
    assert!(composed.links().is_empty());
}

#[test]
fn test_theme_resolution() {
    let pages = pages();
    let article = pages.get(111).unwrap();
    let composed = compose(article, &ComposeOptions::default());

    let palette = Palette::new("night")
        .with_color(ColorRole::TitleText, Rgb::new(0xFF, 0xD7, 0x00))
        .with_color(ColorRole::ArticlePageBg, Rgb::BLACK);

    let (fg, bg) = composed.cell_colors(1, 0, &palette);
    assert_eq!(fg, Rgb::new(0xFF, 0xD7, 0x00));
    assert_eq!(bg, Rgb::BLACK);

    // Roles missing from the palette fall back to white.
    let (fg, _) = composed.cell_colors(3, 0, &palette);
    assert_eq!(fg, Rgb::WHITE);
}
