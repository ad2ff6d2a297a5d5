//! In-memory [`BookApi`] for tests that do not need HTTP.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pagepal::client::BookApi;
use pagepal_core::error::Result as FetchResult;
use pagepal_core::{Book, BookDetails, ChatRequest, ChatResponse, FetchError, HelloResponse};

/// Scripted backend that records chat requests.
///
/// ```ignore
/// let api = MockBookApi::new()
///     .with_books("Sci-Fi", vec![Book::new("1", "Dune", "Frank Herbert")])
///     .with_answer("Spice.");
/// ```
#[derive(Default)]
pub struct MockBookApi {
    books: HashMap<String, Vec<Book>>,
    answer: Option<String>,
    failing: bool,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockBookApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `books` for `genre`, and each book by id.
    pub fn with_books(mut self, genre: &str, books: Vec<Book>) -> Self {
        self.books.insert(genre.to_string(), books);
        self
    }

    /// Answer every chat question with `answer`.
    pub fn with_answer(mut self, answer: &str) -> Self {
        self.answer = Some(answer.to_string());
        self
    }

    /// Fail every request with a 500.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Chat requests received so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn server_error(&self) -> FetchError {
        FetchError::from_response(500, r#"{"error":"Internal Server Error"}"#)
    }
}

#[async_trait]
impl BookApi for MockBookApi {
    async fn list_books(&self, genre: &str) -> FetchResult<Vec<Book>> {
        if self.failing {
            return Err(self.server_error());
        }
        Ok(self.books.get(genre).cloned().unwrap_or_default())
    }

    async fn get_book(&self, id: &str) -> FetchResult<BookDetails> {
        if self.failing {
            return Err(self.server_error());
        }
        self.books
            .values()
            .flatten()
            .find(|b| b.id == id)
            .cloned()
            .map(BookDetails::from)
            .ok_or_else(|| FetchError::BookNotFound(id.to_string()))
    }

    async fn chat(&self, request: &ChatRequest) -> FetchResult<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match (&self.answer, self.failing) {
            (Some(answer), false) => Ok(ChatResponse {
                answer: answer.clone(),
            }),
            _ => Err(self.server_error()),
        }
    }

    async fn list_genres(&self) -> FetchResult<Vec<String>> {
        Ok(self.books.keys().cloned().collect())
    }

    async fn hello(&self) -> FetchResult<HelloResponse> {
        Ok(HelloResponse {
            message: "Hello from the mock".to_string(),
        })
    }
}
