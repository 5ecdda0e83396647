//! The deepfake-news feed endpoint.
//!
//! The feed is decorative education material, so this endpoint never
//! fails: an unreachable backend or a suspiciously thin result set
//! both degrade to a curated fallback list.

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// Fewer articles than this from the backend is treated as a failed
/// fetch and replaced by the curated list.
pub const MIN_ARTICLES: usize = 3;

/// One news article in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Headline.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Link to the full article.
    pub url: String,
    /// Publication date, ISO 8601.
    pub published_at: String,
    /// Publishing outlet.
    pub source: String,
}

/// Backend that fetches recent deepfake-related news.
pub trait NewsFeed {
    /// Fetch the latest articles.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the backend cannot be reached or
    /// answers with an unusable payload.
    fn latest(&self) -> impl Future<Output = Result<Vec<NewsArticle>, AdapterError>>;
}

/// The curated articles served when the feed is unavailable.
#[must_use]
pub fn fallback_articles() -> Vec<NewsArticle> {
    let curated = [
        (
            "How AI-generated faces are fooling millions online",
            "Researchers find that most people cannot reliably distinguish \
             synthetic portraits from photographs, and explain the telltale \
             artifacts that still give them away.",
            "https://www.bbc.com/news/technology-67928138",
            "2024-01-15T09:00:00Z",
            "BBC News",
        ),
        (
            "Deepfake scams cost victims millions as cloned voices spread",
            "Fraudsters are combining cloned voices with manipulated video to \
             impersonate executives and relatives. Experts share the \
             verification habits that stop these scams.",
            "https://www.reuters.com/technology/deepfake-scams-rise",
            "2024-01-12T14:30:00Z",
            "Reuters",
        ),
        (
            "Watermarking standards aim to label AI-generated media",
            "Major platforms agree on provenance metadata for synthetic \
             images and video, a first step toward making manipulated media \
             easier to trace.",
            "https://www.theverge.com/ai-watermarking-standards",
            "2024-01-10T11:00:00Z",
            "The Verge",
        ),
        (
            "Schools add deepfake literacy to digital safety lessons",
            "Educators are teaching students to slow down and verify before \
             sharing, treating synthetic media the way earlier curricula \
             treated phishing emails.",
            "https://www.npr.org/deepfake-literacy-schools",
            "2024-01-08T16:45:00Z",
            "NPR",
        ),
        (
            "Detection tools race to keep up with generative video",
            "As video generators improve, detection research shifts from \
             spotting visual glitches to verifying capture provenance end \
             to end.",
            "https://www.wired.com/story/deepfake-detection-race",
            "2024-01-05T08:15:00Z",
            "WIRED",
        ),
    ];

    curated
        .into_iter()
        .map(|(title, description, url, published_at, source)| NewsArticle {
            title: title.to_owned(),
            description: description.to_owned(),
            url: url.to_owned(),
            published_at: published_at.to_owned(),
            source: source.to_owned(),
        })
        .collect()
}

/// Handle a news-feed request. Never fails: backend errors and
/// under-filled results both yield [`fallback_articles`].
pub async fn handle_news<F: NewsFeed>(feed: &F) -> Vec<NewsArticle> {
    match feed.latest().await {
        Ok(articles) if articles.len() >= MIN_ARTICLES => articles,
        Ok(_) | Err(_) => fallback_articles(),
    }
}
