//! Books of one genre.

use crate::card::BookCard;
use crate::error::FetchError;
use crate::pages::{Generation, PageState, Ticket};
use crate::routes::Route;
use crate::types::Book;

/// Shown while books load.
pub const LOADING_TEXT: &str = "Loading books...";

/// Shown when the genre has no books.
pub const EMPTY_TEXT: &str = "No books found for this genre.";

/// `GET /api/books?genre=...` to perform for a page entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooksQuery {
    /// Entry this request belongs to.
    pub ticket: Ticket,
    /// Decoded genre name.
    pub genre: String,
}

/// What the book grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookListView<'a> {
    /// `Loading books...`
    Loading,
    /// `Error: {message}`
    Failed(&'a str),
    /// `No books found for this genre.`
    Empty,
    /// One card per book.
    Books(&'a [Book]),
}

/// View model of the `/books/:genreName` page.
#[derive(Debug, Clone, Default)]
pub struct BookListPage {
    genre: String,
    state: PageState<Vec<Book>>,
    generation: Generation,
}

impl BookListPage {
    /// Page that has not been entered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the page for `genre`. Resets to loading and clears prior results.
    pub fn enter(&mut self, genre: impl Into<String>) -> BooksQuery {
        let ticket = self.generation.next();
        self.genre = genre.into();
        self.state = PageState::Loading;
        tracing::debug!(genre = %self.genre, ticket = ticket.value(), "Fetching books");
        BooksQuery {
            ticket,
            genre: self.genre.clone(),
        }
    }

    /// Apply a fetch outcome. Returns false when `ticket` is stale.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<Book>, FetchError>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "Dropping stale book list response");
            return false;
        }
        if let Err(e) = &result {
            tracing::warn!(genre = %self.genre, "Failed to fetch books: {}", e);
        }
        self.state = result.into();
        true
    }

    /// Current genre (decoded).
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Raw state.
    pub fn state(&self) -> &PageState<Vec<Book>> {
        &self.state
    }

    /// What the grid should render.
    pub fn view(&self) -> BookListView<'_> {
        match &self.state {
            PageState::Loading => BookListView::Loading,
            PageState::Failed(message) => BookListView::Failed(message),
            PageState::Ready(books) if books.is_empty() => BookListView::Empty,
            PageState::Ready(books) => BookListView::Books(books),
        }
    }

    /// `Books in {genre}`.
    pub fn title(&self) -> String {
        let genre = if self.genre.trim().is_empty() {
            "Selected Genre"
        } else {
            &self.genre
        };
        format!("Books in {}", genre)
    }

    /// Text shown instead of the grid, if any.
    pub fn status_text(&self) -> Option<String> {
        match self.view() {
            BookListView::Loading => Some(LOADING_TEXT.to_string()),
            BookListView::Failed(message) => Some(format!("Error: {}", message)),
            BookListView::Empty => Some(EMPTY_TEXT.to_string()),
            BookListView::Books(_) => None,
        }
    }

    /// Cards for the loaded books; empty unless books are shown.
    pub fn cards(&self) -> Vec<BookCard<'_>> {
        match self.view() {
            BookListView::Books(books) => books.iter().map(BookCard::new).collect(),
            _ => Vec::new(),
        }
    }

    /// Chat route for the card at `index`.
    pub fn chat_route(&self, index: usize) -> Option<Route> {
        match self.view() {
            BookListView::Books(books) => books.get(index).map(|b| Route::chat(b.id.clone())),
            _ => None,
        }
    }
}
