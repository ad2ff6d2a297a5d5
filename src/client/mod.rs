//! HTTP client for the PagePal backend
//!
//! [`BookApi`] is the seam between the front ends and the network. The
//! reqwest implementation, [`HttpBookApi`], maps every failure onto
//! [`FetchError`] so callers only ever deal with user-facing messages.

use async_trait::async_trait;
use pagepal_core::error::Result as FetchResult;
use pagepal_core::routes::encode_component;
use serde::de::DeserializeOwned;

use crate::types::{
    AppError, Book, BookDetails, ChatRequest, ChatResponse, FetchError, HelloResponse, Result,
};
use crate::utils::config::PagePalConfig;

/// Backend operations used by the PagePal pages.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /api/books?genre={genre}`
    async fn list_books(&self, genre: &str) -> FetchResult<Vec<Book>>;

    /// `GET /api/books/{id}`; a 404 becomes [`FetchError::BookNotFound`].
    async fn get_book(&self, id: &str) -> FetchResult<BookDetails>;

    /// `POST /api/chat`
    async fn chat(&self, request: &ChatRequest) -> FetchResult<ChatResponse>;

    /// `GET /api/genres`
    async fn list_genres(&self) -> FetchResult<Vec<String>>;

    /// `GET /api/hello`
    async fn hello(&self) -> FetchResult<HelloResponse>;
}

/// reqwest-backed [`BookApi`].
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBookApi {
    /// Client for `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            http: reqwest::Client::new(),
        }
    }

    /// Client built from configuration, honouring `api.timeout_secs`.
    pub fn from_config(config: &PagePalConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.api.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: normalize(config.base_url().to_string()),
            http,
        })
    }

    /// Backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> FetchResult<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("HTTP request failed: {}", e);
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(status = status.as_u16(), "Unexpected response body: {}", e);
            FetchError::Decode(format!("Failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self, genre: &str) -> FetchResult<Vec<Book>> {
        let url = self.url(&format!("/api/books?genre={}", encode_component(genre)));
        tracing::debug!(%url, "Fetching books");
        self.send(self.http.get(url)).await
    }

    async fn get_book(&self, id: &str) -> FetchResult<BookDetails> {
        let url = self.url(&format!("/api/books/{}", encode_component(id)));
        tracing::debug!(%url, "Fetching book details");
        match self.send(self.http.get(url)).await {
            Err(FetchError::Http { status: 404, .. }) => Err(FetchError::BookNotFound(id.to_string())),
            other => other,
        }
    }

    async fn chat(&self, request: &ChatRequest) -> FetchResult<ChatResponse> {
        tracing::debug!(query = %request.query, "Sending chat query");
        self.send(self.http.post(self.url("/api/chat")).json(request))
            .await
    }

    async fn list_genres(&self) -> FetchResult<Vec<String>> {
        self.send(self.http.get(self.url("/api/genres"))).await
    }

    async fn hello(&self) -> FetchResult<HelloResponse> {
        self.send(self.http.get(self.url("/api/hello"))).await
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let api = HttpBookApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/api/hello"), "http://localhost:5000/api/hello");
    }

    #[test]
    fn from_config_uses_base_url() {
        let config = PagePalConfig::default()
            .with_base_url("https://books.example.com")
            .unwrap();
        let api = HttpBookApi::from_config(&config).unwrap();
        assert_eq!(api.base_url(), "https://books.example.com");
    }
}
