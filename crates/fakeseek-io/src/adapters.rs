//! Fetch-backed implementations of the service-layer adapter traits.
//!
//! Each adapter holds its endpoint path and speaks the same JSON wire
//! shapes as the service handlers, so browser-side callers and the
//! sans-IO handlers share one contract.

use fakeseek_api::analysis::{Analysis, AnalysisRequest, AnalysisResponse, ImageAnalyst};
use fakeseek_api::chat::{ChatAssistant, ChatRequest, ChatResponse};
use fakeseek_api::dataurl::encode_jpeg_data_url;
use fakeseek_api::error::AdapterError;
use fakeseek_api::news::{NewsArticle, NewsFeed};
use fakeseek_api::profile::{ProfileEnvelope, ProfileStore, UserProfile};
use fakeseek_api::scan::{SearchHit, SearchProvider};
use serde::Serialize;

use crate::fetch;

/// Chat adapter over `POST /api/chat`.
#[derive(Debug, Clone)]
pub struct HttpChat {
    endpoint: String,
}

impl HttpChat {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpChat {
    fn default() -> Self {
        Self::new("/api/chat")
    }
}

impl ChatAssistant for HttpChat {
    async fn reply(&self, message: &str) -> Result<String, AdapterError> {
        let request = ChatRequest {
            message: message.to_owned(),
        };
        let response: ChatResponse = fetch::post_json(&self.endpoint, &request).await?;
        Ok(response.response)
    }
}

/// Image-pair analysis adapter over `POST /api/analyze-deepfake`.
#[derive(Debug, Clone)]
pub struct HttpAnalyst {
    endpoint: String,
}

impl HttpAnalyst {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpAnalyst {
    fn default() -> Self {
        Self::new("/api/analyze-deepfake")
    }
}

impl ImageAnalyst for HttpAnalyst {
    async fn compare(&self, original: &[u8], candidate: &[u8]) -> Result<Analysis, AdapterError> {
        let request = AnalysisRequest {
            original_image: Some(encode_jpeg_data_url(original)),
            deepfake_image: Some(encode_jpeg_data_url(candidate)),
        };
        let response: AnalysisResponse = fetch::post_json(&self.endpoint, &request).await?;
        Ok(response.analysis)
    }
}

/// News adapter over `GET /api/news`.
#[derive(Debug, Clone)]
pub struct HttpNewsFeed {
    endpoint: String,
}

impl HttpNewsFeed {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpNewsFeed {
    fn default() -> Self {
        Self::new("/api/news")
    }
}

impl NewsFeed for HttpNewsFeed {
    async fn latest(&self) -> Result<Vec<NewsArticle>, AdapterError> {
        fetch::get_json(&self.endpoint).await
    }
}

/// Profile adapter over `GET`/`POST /api/profile`.
#[derive(Debug, Clone)]
pub struct HttpProfileStore {
    endpoint: String,
}

impl HttpProfileStore {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpProfileStore {
    fn default() -> Self {
        Self::new("/api/profile")
    }
}

impl ProfileStore for HttpProfileStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, AdapterError> {
        let url = format!("{}?userId={user_id}", self.endpoint);
        let envelope: ProfileEnvelope = fetch::get_json(&url).await?;
        Ok(envelope.profile)
    }

    async fn upsert(&mut self, profile: UserProfile) -> Result<(), AdapterError> {
        let _: ProfileEnvelope = fetch::post_json(&self.endpoint, &profile).await?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    limit: usize,
}

/// Web-search adapter over `POST /api/search`.
#[derive(Debug, Clone)]
pub struct HttpSearchProvider {
    endpoint: String,
}

impl HttpSearchProvider {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpSearchProvider {
    fn default() -> Self {
        Self::new("/api/search")
    }
}

impl SearchProvider for HttpSearchProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, AdapterError> {
        fetch::post_json(&self.endpoint, &SearchQuery { query, limit }).await
    }
}
