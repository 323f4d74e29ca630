//! Integration tests for article selection and page generation.

use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use teletext::{paginate, Article, PaginateOptions, Paragraph};

fn options() -> PaginateOptions {
    PaginateOptions::default().generated_at(Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap())
}

fn article(id: &str, score: Option<f32>, published: &str) -> Article {
    let mut article = Article::new(id, "Inland", format!("Story {}", id), published)
        .with_paragraph(Paragraph::new(["Something happened."]));
    article.ranking = score;
    article
}

fn feed(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| {
            article(
                &format!("{:03}", i),
                Some((count - i) as f32 / count as f32 * 10.0),
                &format!("2025-02-{:02}T10:00:00Z", i % 28 + 1),
            )
        })
        .collect()
}

#[test]
fn test_page_ids_unique_and_ascending() {
    let result = paginate(&feed(40), &options());
    let numbers: Vec<u32> = result.pages.iter().map(|p| p.number().unwrap()).collect();

    let unique: HashSet<_> = numbers.iter().collect();
    assert_eq!(unique.len(), numbers.len());
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(numbers[0], 100);
}

#[test]
fn test_index_limits() {
    let result = paginate(&feed(120), &options());
    let index: Vec<_> = result.pages.index_pages().collect();
    assert_eq!(index.len(), 9);

    for page in index {
        let entries = page
            .sections
            .iter()
            .filter(|s| s.id.starts_with("entry-"))
            .count();
        assert!(entries <= 10);
    }
}

#[test]
fn test_top_selection_by_thresholds() {
    let articles = vec![
        article("a", Some(9.0), "2025-01-01T00:00:00Z"),
        article("b", Some(7.5), "2025-01-01T00:00:00Z"),
        article("c", Some(4.0), "2025-01-01T00:00:00Z"),
    ];
    let result = paginate(&articles, &options());
    assert_eq!(result.top, vec![110, 111, 112]);
    assert!(result.latest.is_empty());
}

#[test]
fn test_top_and_latest_disjoint() {
    let result = paginate(&feed(30), &options());
    assert_eq!(result.top.len(), 6);
    assert_eq!(result.latest.len(), 8);
    for number in &result.latest {
        assert!(!result.top.contains(number));
    }
}

#[test]
fn test_top_count_limited_by_valid_articles() {
    let mut articles = feed(4);
    articles.push(Article::new("empty", "Inland", "Nothing", "2025-01-01T00:00:00Z"));
    let result = paginate(&articles, &options());
    assert_eq!(result.top.len(), 4);
    assert!(result.pages.get(114).is_none());
}

#[test]
fn test_main_page_references_article_numbers() {
    let articles = vec![
        article("old", Some(1.0), "2024-01-01T00:00:00Z"),
        article("top", Some(9.5), "2025-01-01T00:00:00Z"),
        article("new", Some(0.5), "2025-02-01T00:00:00Z"),
    ];
    let result = paginate(&articles, &options().with_top_count(1));
    let main = result.pages.main_page().unwrap();

    let top_entry = main.sections.iter().find(|s| s.id == "top-110").unwrap();
    assert!(top_entry.content.lines()[0].starts_with(" Story top"));
    assert!(top_entry.content.lines()[0].ends_with("{{110}}"));

    // Latest is sorted by date, newest first; "new" ranks last so it is 112.
    assert_eq!(result.latest, vec![112, 111]);
    let article = result.pages.get(112).unwrap();
    assert_eq!(article.title, "Story new");
}

#[test]
fn test_unparseable_timestamps_sort_last() {
    let articles = vec![
        article("top", Some(9.0), "2025-01-01T00:00:00Z"),
        article("nodate", Some(2.0), "whenever"),
        article("dated", Some(1.0), "2020-01-01T00:00:00Z"),
    ];
    let result = paginate(&articles, &options().with_top_count(1));
    assert_eq!(result.latest, vec![112, 111]);

    let page = result.pages.get(111).unwrap();
    let date = page.sections.iter().find(|s| s.id == "date").unwrap();
    assert_eq!(date.content.lines()[0], " NO DATE ");
}

#[test]
fn test_every_generated_page_fills_grid() {
    let result = paginate(&feed(25), &options());
    for page in &result.pages {
        assert_eq!(page.rows(), 25);
        assert_eq!(page.columns(), 40);
        let max_row = page.sections.iter().map(|s| s.position.row).max().unwrap();
        assert_eq!(max_row, 24, "page {}", page.page_id);
    }
}

#[test]
fn test_navigation() {
    let result = paginate(&feed(3), &options());
    let pages = &result.pages;

    assert_eq!(pages.next_number(100), Some(101));
    assert_eq!(pages.previous_number(110), Some(101));
    assert_eq!(pages.next_number(112), None);
    assert_eq!(pages.position_of(999), 0);
    assert_eq!(pages.number_at(99), 100);
}
