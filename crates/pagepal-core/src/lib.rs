//! # pagepal-core
//!
//! Framework-independent building blocks for the PagePal front ends.
//!
//! The crate holds everything a PagePal front end needs except I/O: the wire
//! types exchanged with the backend, the error taxonomy, client-side routes,
//! the fixed genre catalog, and one view model per page. Front ends (the
//! terminal client in the root crate and the browser UI in `ui/`) perform the
//! HTTP calls themselves and feed the results back into the view models.
//!
//! ## Request tickets
//!
//! Every page entry hands out a [`Ticket`]. A completion is only applied when
//! its ticket is still current, so a slow response that lands after the user
//! navigated elsewhere is dropped instead of overwriting the new page.
//!
//! ```rust
//! use pagepal_core::{Book, BookListPage, BookListView};
//!
//! let mut page = BookListPage::new();
//! let query = page.enter("Sci-Fi");
//! assert_eq!(query.genre, "Sci-Fi");
//!
//! let books = vec![Book::new("1", "Dune", "Frank Herbert")];
//! assert!(page.resolve(query.ticket, Ok(books)));
//! assert!(matches!(page.view(), BookListView::Books(b) if b.len() == 1));
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Book, message and chat wire types
//! - [`error`] - Fetch errors with user-facing messages
//! - [`routes`] - Client-side routes and navigation history
//! - [`genres`] - Fixed genre tiles
//! - [`card`] - Book card presentation
//! - [`pages`] - Page view models
//! - [`transcript`] - Append-only chat transcript

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod error;
pub mod genres;
pub mod pages;
pub mod routes;
pub mod transcript;
pub mod types;

pub use card::BookCard;
pub use error::FetchError;
pub use genres::{GenreIcon, GenreTile, FIXED_GENRES};
pub use pages::book_list::{BookListPage, BookListView, BooksQuery};
pub use pages::chat::{BookQuery, ChatPage, PendingChat};
pub use pages::{Generation, PageState, Ticket};
pub use routes::{History, Route};
pub use transcript::Transcript;
pub use types::{
    ApiErrorBody, Book, BookDetails, BookFilter, ChatRequest, ChatResponse, Greeting,
    HelloResponse, Message, Sender,
};

/// Default backend base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Application name shown in headers and the thinking indicator.
pub const APP_NAME: &str = "PagePal";
