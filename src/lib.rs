//! # PagePal
//!
//! Terminal front end for a PagePal backend: browse book genres, list the
//! books of a genre, and chat with an AI about one book.
//!
//! The page logic lives in [`pagepal_core`], shared with the browser UI.
//! This crate adds everything that needs I/O:
//!
//! - [`client`] - reqwest client behind the [`BookApi`] trait
//! - [`app`] - navigation state driving the page view models
//! - [`utils`] - layered configuration and logging setup
//! - [`cli`] - argument parsing and colored output
//! - [`repl`] - line-oriented interactive mode
//! - `tui` - full-screen interface (feature `tui`, on by default)
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use pagepal::{App, HttpBookApi};
//! use pagepal_core::Route;
//!
//! # async fn demo() {
//! let api = HttpBookApi::new("http://localhost:5000");
//! let (mut app, fetch) = App::start(Route::books("Sci-Fi"));
//! app.settle(&api, fetch).await;
//! println!("{:?}", app.books().status_text());
//! # }
//! ```

#![warn(missing_docs)]

/// Navigation state and request plumbing.
pub mod app;
/// Command-line parsing and output.
pub mod cli;
/// Backend HTTP client.
pub mod client;
/// Line-oriented interactive mode.
pub mod repl;
/// Full-screen terminal interface.
#[cfg(feature = "tui")]
pub mod tui;
/// Core types and errors.
pub mod types;
/// Configuration and logging.
pub mod utils;

pub use app::{App, Completion, Fetch};
pub use client::{BookApi, HttpBookApi};
pub use types::{AppError, Result};
pub use utils::config::PagePalConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
