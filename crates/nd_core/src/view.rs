//! Rendering of a page of articles into display entries.

use chrono::{DateTime, Utc};

use crate::{Article, Result};

pub const DEFAULT_BYLINE_NAME: &str = "STAFF WRITER";

/// Port through which rendered entries open links.
///
/// Implementations must open the URL in a new browsing context that holds
/// no reference back to the reader (no opener, no referrer).
pub trait Navigator: Send + Sync {
    fn open_isolated(&self, url: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub key: String,
    pub date_line: String,
    pub title: String,
    pub description: String,
    pub byline: String,
    pub categories: Vec<String>,
    pub thumbnail: Option<Thumbnail>,
    pub link: String,
}

impl ArticleEntry {
    pub fn from_article(article: &Article) -> Self {
        Self {
            key: article.guid.clone(),
            date_line: format_pub_date(&article.pub_date),
            title: article.title.clone(),
            description: article.description.clone(),
            byline: byline(article.creator.as_deref()),
            categories: article.categories.clone(),
            thumbnail: article.thumbnail_url().map(|url| Thumbnail {
                url: url.to_string(),
                alt: article.title.clone(),
            }),
            link: article.link.clone(),
        }
    }

    /// Activation of the title, description or thumbnail.
    pub fn open(&self, navigator: &dyn Navigator) -> Result<()> {
        tracing::debug!("Opening article {} at {}", self.key, self.link);
        navigator.open_isolated(&self.link)
    }
}

/// Server order is authoritative, entries come back in input order.
pub fn render_articles(articles: &[Article]) -> Vec<ArticleEntry> {
    articles.iter().map(ArticleEntry::from_article).collect()
}

/// `JAN 2, 2024`
pub fn format_pub_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string().to_uppercase()
}

pub fn byline(creator: Option<&str>) -> String {
    match creator {
        Some(name) if !name.is_empty() => format!("BY {}", name),
        _ => format!("BY {}", DEFAULT_BYLINE_NAME),
    }
}
