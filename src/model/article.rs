//! Feed-level types: the ranked article list the paginator consumes.

use serde::{Deserialize, Serialize};

/// A parsed article feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feed {
    /// Articles in feed order
    pub articles: Vec<Article>,
}

impl Feed {
    /// Create a feed from an article list.
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Number of articles in the feed, including ones without content.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Check if the feed has no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// A single news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Feed-assigned identifier
    pub id: String,

    /// Topic line (e.g. "Sport", "Inland")
    pub topic: String,

    /// Shortest title variant
    pub short_title: String,

    /// Medium title variant
    pub medium_title: String,

    /// Longest title variant
    pub long_title: String,

    /// Body text
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Publication timestamp, ISO-8601
    pub published_at: String,

    /// Ranking score; missing scores rank as 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<f32>,

    /// Source name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// External article URL
    #[serde(
        default,
        rename = "articleUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

impl Article {
    /// Create an article with the same text for all three title variants.
    pub fn new(
        id: impl Into<String>,
        topic: impl Into<String>,
        title: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            topic: topic.into(),
            short_title: title.clone(),
            medium_title: title.clone(),
            long_title: title,
            paragraphs: Vec::new(),
            published_at: published_at.into(),
            ranking: None,
            source: None,
            url: None,
        }
    }

    /// Set the three title variants.
    pub fn with_titles(
        mut self,
        short: impl Into<String>,
        medium: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        self.short_title = short.into();
        self.medium_title = medium.into();
        self.long_title = long.into();
        self
    }

    /// Set the ranking score.
    pub fn with_ranking(mut self, ranking: f32) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// Set the source name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the external URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append a paragraph.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Ranking score with the missing-score default applied.
    pub fn score(&self) -> f32 {
        self.ranking.unwrap_or(0.0)
    }

    /// Whether the article has at least one non-empty paragraph.
    pub fn has_content(&self) -> bool {
        self.paragraphs.iter().any(|p| !p.lines.is_empty())
    }
}

/// A paragraph of pre-wrapped body lines.
///
/// Feeds spell the field either `lines` or `Lines`; both land here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParagraph")]
pub struct Paragraph {
    /// Lines in display order
    pub lines: Vec<String>,
}

impl Paragraph {
    /// Create a paragraph from lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize)]
struct RawParagraph {
    #[serde(default)]
    lines: Option<Vec<String>>,
    #[serde(default, rename = "Lines")]
    upper_lines: Option<Vec<String>>,
}

impl From<RawParagraph> for Paragraph {
    fn from(raw: RawParagraph) -> Self {
        Self {
            lines: raw.lines.or(raw.upper_lines).unwrap_or_default(),
        }
    }
}
