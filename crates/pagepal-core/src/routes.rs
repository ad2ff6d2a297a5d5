//! Client-side routes and navigation history.
//!
//! | Path | Page |
//! |------|------|
//! | `/` | genre grid |
//! | `/books/:genreName` | books of one genre |
//! | `/chat/:bookId` | chat about one book |
//!
//! Path parameters are encoded with the same character set as JavaScript's
//! `encodeURIComponent`, so paths produced here match the ones a browser
//! router would produce.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left unescaped by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path segment or query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Decode a percent-encoded segment; invalid UTF-8 is replaced lossily.
pub fn decode_component(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

/// A path that does not name a PagePal page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown route: {0}")]
pub struct ParseRouteError(pub String);

/// A client-side route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Genres,
    /// `/books/:genreName`
    Books {
        /// Decoded genre name.
        genre: String,
    },
    /// `/chat/:bookId`
    ///
    /// An empty id is representable so the chat page can report the missing
    /// parameter itself.
    Chat {
        /// Decoded book id.
        book_id: String,
    },
}

impl Route {
    /// Route to the books of `genre`.
    pub fn books(genre: impl Into<String>) -> Self {
        Route::Books {
            genre: genre.into(),
        }
    }

    /// Route to the chat about `book_id`.
    pub fn chat(book_id: impl Into<String>) -> Self {
        Route::Chat {
            book_id: book_id.into(),
        }
    }

    /// Encoded path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Genres => "/".to_string(),
            Route::Books { genre } => format!("/books/{}", encode_component(genre)),
            Route::Chat { book_id } => format!("/chat/{}", encode_component(book_id)),
        }
    }

    /// Parse a path (query string and fragment are ignored).
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Genres),
            ["books", genre] => Some(Route::books(decode_component(genre))),
            ["chat"] => Some(Route::chat(String::new())),
            ["chat", book_id] => Some(Route::chat(decode_component(book_id))),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| ParseRouteError(s.to_string()))
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Genres
    }
}

/// Navigation history stack. Never empty; the bottom entry is the start route.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl History {
    /// History rooted at `/`.
    pub fn new() -> Self {
        Self::starting_at(Route::Genres)
    }

    /// History whose first entry is `route`.
    pub fn starting_at(route: Route) -> Self {
        Self { stack: vec![route] }
    }

    /// Current route.
    pub fn current(&self) -> &Route {
        // The stack always holds at least the start route.
        &self.stack[self.stack.len() - 1]
    }

    /// Navigate forward. Re-entering the current route is not recorded twice.
    pub fn push(&mut self, route: Route) -> &Route {
        if *self.current() != route {
            tracing::debug!(path = %route, "navigate");
            self.stack.push(route);
        }
        self.current()
    }

    /// Go back one entry. At the first entry this falls back to `/`.
    pub fn back(&mut self) -> &Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else if self.stack[0] != Route::Genres {
            self.stack[0] = Route::Genres;
        }
        self.current()
    }

    /// Return to `/`, dropping everything above it.
    pub fn home(&mut self) -> &Route {
        self.stack.clear();
        self.stack.push(Route::Genres);
        self.current()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
