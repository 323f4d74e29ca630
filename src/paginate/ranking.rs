//! Article ranking and selection.
//!
//! Ranking assigns every article its page number exactly once. The top and
//! latest selections are views over that ranked list, so an article carries
//! the same page number wherever it appears.

use std::cmp::Reverse;

use crate::model::Article;
use crate::timestamp::parse_published;

/// An article with its rank and assigned page number.
#[derive(Debug, Clone, Copy)]
pub struct RankedArticle<'a> {
    /// The article
    pub article: &'a Article,

    /// Zero-based position in the ranked list
    pub rank: usize,

    /// Page number assigned from the rank
    pub page_number: u32,
}

/// Filter out empty articles, rank the rest and assign page numbers.
///
/// Ranking is by score descending (missing score = 0), then by the
/// `publishedAt` string descending. The sort is stable.
pub fn rank_articles(articles: &[Article], first_page: u32) -> Vec<RankedArticle<'_>> {
    let mut valid: Vec<&Article> = articles.iter().filter(|a| a.has_content()).collect();

    let skipped = articles.len() - valid.len();
    if skipped > 0 {
        log::warn!("Skipping {} article(s) without body lines", skipped);
    }

    valid.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| b.published_at.cmp(&a.published_at))
    });

    valid
        .into_iter()
        .enumerate()
        .map(|(rank, article)| RankedArticle {
            article,
            rank,
            page_number: first_page + rank as u32,
        })
        .collect()
}

/// Pick the top list.
///
/// Thresholds are tried in order; at each one, ranked articles scoring at
/// least the threshold are appended until `count` are collected. If the
/// thresholds run out first, the list is padded from the ranked order.
pub fn select_top<'r, 'a>(
    ranked: &'r [RankedArticle<'a>],
    thresholds: &[f32],
    count: usize,
) -> Vec<&'r RankedArticle<'a>> {
    let mut top: Vec<&RankedArticle<'a>> = Vec::with_capacity(count);

    for &threshold in thresholds {
        if top.len() >= count {
            break;
        }
        for candidate in ranked.iter().filter(|r| r.article.score() >= threshold) {
            if top.len() >= count {
                break;
            }
            if !contains(&top, candidate) {
                top.push(candidate);
            }
        }
        log::debug!("Top list has {} article(s) after threshold {}", top.len(), threshold);
    }

    if top.len() < count {
        for candidate in ranked {
            if top.len() >= count {
                break;
            }
            if !contains(&top, candidate) {
                top.push(candidate);
            }
        }
    }

    top
}

/// Pick the latest list from everything not in `top`.
///
/// Newest first by parsed publication date; unparseable dates sort last.
pub fn select_latest<'r, 'a>(
    ranked: &'r [RankedArticle<'a>],
    top: &[&'r RankedArticle<'a>],
    count: usize,
) -> Vec<&'r RankedArticle<'a>> {
    let mut remaining: Vec<&RankedArticle<'a>> =
        ranked.iter().filter(|r| !contains(top, r)).collect();

    for r in &remaining {
        if parse_published(&r.article.published_at).is_none() {
            log::warn!(
                "Article {} has unparseable timestamp {:?}; treating it as oldest",
                r.article.id,
                r.article.published_at
            );
        }
    }

    remaining.sort_by_cached_key(|r| Reverse(parse_published(&r.article.published_at)));
    remaining.truncate(count);
    remaining
}

fn contains(list: &[&RankedArticle<'_>], candidate: &RankedArticle<'_>) -> bool {
    list.iter().any(|r| r.page_number == candidate.page_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn article(id: &str, score: Option<f32>, published: &str) -> Article {
        let mut a = Article::new(id, "Topic", id, published)
            .with_paragraph(Paragraph::new(["Body line."]));
        a.ranking = score;
        a
    }

    #[test]
    fn test_rank_filters_and_sorts() {
        let empty = Article::new("empty", "t", "Empty", "2025-01-01T00:00:00Z")
            .with_paragraph(Paragraph::default());
        let articles = vec![
            article("low", Some(2.0), "2025-01-05T00:00:00Z"),
            empty,
            article("high", Some(9.0), "2025-01-01T00:00:00Z"),
            article("none", None, "2025-01-09T00:00:00Z"),
            article("tie-new", Some(2.0), "2025-01-07T00:00:00Z"),
        ];

        let ranked = rank_articles(&articles, 110);
        let ids: Vec<_> = ranked.iter().map(|r| r.article.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "tie-new", "low", "none"]);

        let numbers: Vec<_> = ranked.iter().map(|r| r.page_number).collect();
        assert_eq!(numbers, vec![110, 111, 112, 113]);
    }

    #[test]
    fn test_select_top_uses_thresholds_then_pads() {
        let articles = vec![
            article("a", Some(9.0), "2025-01-01T00:00:00Z"),
            article("b", Some(7.5), "2025-01-01T00:00:00Z"),
            article("c", Some(4.0), "2025-01-01T00:00:00Z"),
        ];
        let ranked = rank_articles(&articles, 110);
        let top = select_top(&ranked, &[8.0, 7.0, 6.0, 5.0], 6);

        let numbers: Vec<_> = top.iter().map(|r| r.page_number).collect();
        assert_eq!(numbers, vec![110, 111, 112]);
    }

    #[test]
    fn test_select_top_caps_at_count() {
        let articles: Vec<_> = (0..10)
            .map(|i| article(&format!("a{}", i), Some(9.0 - i as f32 * 0.1), "2025-01-01T00:00:00Z"))
            .collect();
        let ranked = rank_articles(&articles, 110);
        let top = select_top(&ranked, &[8.0, 7.0], 6);
        assert_eq!(top.len(), 6);
        assert_eq!(top[5].page_number, 115);
    }

    #[test]
    fn test_select_latest_sorts_by_date_and_excludes_top() {
        let articles = vec![
            article("top", Some(9.0), "2025-01-01T00:00:00Z"),
            article("old", Some(1.0), "2024-06-01T00:00:00Z"),
            article("broken", Some(1.0), "sometime"),
            article("new", Some(0.5), "2025-02-01T00:00:00Z"),
        ];
        let ranked = rank_articles(&articles, 110);
        let top = select_top(&ranked, &[8.0], 1);
        let latest = select_latest(&ranked, &top, 8);

        let ids: Vec<_> = latest.iter().map(|r| r.article.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "broken"]);
    }
}
