use std::time::Duration;

use tokio::time::timeout;

use crate::error::GramtuiError;
use crate::models::post::{posts_from_envelope, Post, PostsResponse};

/// The PictureGram posts endpoint.
pub const POSTS_ENDPOINT: &str = "https://csc346picturegram.test.apps.uits.arizona.edu/posts";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    endpoint: String,
    request_timeout: Duration,
}

impl FeedClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the post list: one GET, the body parsed as JSON, the
    /// envelope validated. Posts come back in server order.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, GramtuiError> {
        let response = timeout(self.request_timeout, self.http.get(&self.endpoint).send())
            .await
            .map_err(|_| GramtuiError::Http(format!("Timeout fetching {}", self.endpoint)))??;

        let body = timeout(self.request_timeout, response.text())
            .await
            .map_err(|_| GramtuiError::Http("Timeout reading response body".to_string()))??;

        let envelope: Option<PostsResponse> = serde_json::from_str(&body)?;

        posts_from_envelope(envelope)
    }
}
