//! Error types for PagePal fetches.
//!
//! The `Display` output of every variant is the exact text a front end shows
//! to the user, so callers can render `err.to_string()` directly.

use thiserror::Error;

use crate::types::ApiErrorBody;

/// Result type for backend fetches.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while talking to the PagePal backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Non-2xx response.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-provided `error` text, or the generic status message.
        message: String,
    },

    /// `GET /api/books/{id}` answered 404.
    #[error("Book with ID {0} not found.")]
    BookNotFound(String),

    /// Transport failure (connection refused, DNS, reset, timeout).
    #[error("{0}")]
    Network(String),

    /// A 2xx body that does not match the expected shape.
    #[error("{0}")]
    Decode(String),

    /// Chat route entered without a book id; no request is made.
    #[error("No book ID provided.")]
    MissingBookId,
}

impl FetchError {
    /// Build an error for a non-2xx response from its status and raw body.
    ///
    /// The message comes from an `{"error": "..."}` body when it parses and is
    /// non-empty, otherwise it is `HTTP error! status: {status}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if !parsed.error.is_empty() => parsed.error,
            Ok(_) => Self::status_message(status),
            Err(e) => {
                if !body.trim().is_empty() {
                    tracing::error!(status, "Could not parse error response: {}", e);
                }
                Self::status_message(status)
            }
        };
        FetchError::Http { status, message }
    }

    /// Generic message for a status code without a usable body.
    pub fn status_message(status: u16) -> String {
        format!("HTTP error! status: {}", status)
    }

    /// HTTP status, when the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::BookNotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Whether this is a "book not found" condition.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
