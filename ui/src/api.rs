//! API client for the PagePal backend
//!
//! Mirrors the terminal client: every failure becomes a
//! [`FetchError`] whose `Display` is the text the page shows.

use gloo_net::http::{Request, RequestBuilder};
use pagepal_core::error::Result;
use pagepal_core::routes::encode_component;
use pagepal_core::{Book, BookDetails, ChatRequest, ChatResponse, FetchError, DEFAULT_API_BASE};
use serde::de::DeserializeOwned;

fn url(path: &str) -> String {
    format!("{}{}", DEFAULT_API_BASE, path)
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T> {
    let resp = request.send().await.map_err(|e| {
        tracing::warn!("Request failed: {}", e);
        FetchError::Network(e.to_string())
    })?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::from_response(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| FetchError::Decode(format!("Failed to parse response: {}", e)))
}

async fn get<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let request = builder
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;
    send(request).await
}

/// `GET /api/books?genre={genre}`
pub async fn list_books(genre: &str) -> Result<Vec<Book>> {
    let url = url(&format!("/api/books?genre={}", encode_component(genre)));
    tracing::debug!(%url, "Fetching books");
    get(Request::get(&url)).await
}

/// `GET /api/books/{id}`
pub async fn get_book(id: &str) -> Result<BookDetails> {
    let url = url(&format!("/api/books/{}", encode_component(id)));
    match get(Request::get(&url)).await {
        Err(FetchError::Http { status: 404, .. }) => Err(FetchError::BookNotFound(id.to_string())),
        other => other,
    }
}

/// `POST /api/chat`
pub async fn chat(body: &ChatRequest) -> Result<ChatResponse> {
    let request = Request::post(&url("/api/chat"))
        .json(body)
        .map_err(|e| FetchError::Network(format!("Failed to serialize request: {}", e)))?;
    send(request).await
}
