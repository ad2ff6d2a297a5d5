//! Presentation of a single book in a grid.

use crate::routes::Route;
use crate::types::Book;

/// Title shown when a book has none.
pub const UNTITLED: &str = "Untitled Book";

/// Byline shown when a book has no author.
pub const UNKNOWN_AUTHOR: &str = "by Unknown Author";

/// Display fields for one book. Borrowed from the book, no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookCard<'a> {
    book: &'a Book,
}

impl<'a> BookCard<'a> {
    /// Card for `book`.
    pub fn new(book: &'a Book) -> Self {
        Self { book }
    }

    /// Title, or [`UNTITLED`] when blank.
    pub fn title(&self) -> &'a str {
        non_blank(&self.book.title).unwrap_or(UNTITLED)
    }

    /// `by {author}`, or [`UNKNOWN_AUTHOR`] when blank.
    pub fn byline(&self) -> String {
        match non_blank(&self.book.author) {
            Some(author) => format!("by {}", author),
            None => UNKNOWN_AUTHOR.to_string(),
        }
    }

    /// Genre badge text, when the book has a genre.
    pub fn genre_badge(&self) -> Option<&'a str> {
        self.book.genre.as_deref().and_then(non_blank)
    }

    /// Cover image URL, when present.
    pub fn cover_url(&self) -> Option<&'a str> {
        self.book.cover_url.as_deref().and_then(non_blank)
    }

    /// Alt text for the cover image.
    pub fn cover_alt(&self) -> String {
        format!("Cover of {}", self.title())
    }

    /// Where selecting the card navigates.
    pub fn route(&self) -> Route {
        Route::chat(self.book.id.clone())
    }

    /// The underlying book.
    pub fn book(&self) -> &'a Book {
        self.book
    }
}

impl<'a> From<&'a Book> for BookCard<'a> {
    fn from(book: &'a Book) -> Self {
        Self::new(book)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
