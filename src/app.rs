//! Front-end independent navigation state
//!
//! [`App`] owns the history and one view model per page. Navigation and
//! sending return a [`Fetch`] describing the request to perform; the caller
//! performs it (inline with [`App::settle`], or on a spawned task with
//! [`perform`]) and hands the resulting [`Completion`] back to
//! [`App::apply`]. Completions for superseded requests are ignored.

use pagepal_core::error::Result as FetchResult;
use pagepal_core::genres::{self, GenreTile};
use pagepal_core::{
    Book, BookDetails, BookListPage, BookQuery, BooksQuery, ChatPage, History, PendingChat, Route,
    Ticket,
};

use crate::client::BookApi;

/// A request the current page is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    /// Books of a genre
    Books(BooksQuery),
    /// One book's details
    Book(BookQuery),
    /// A chat question
    Chat(PendingChat),
}

/// Outcome of a [`Fetch`], tagged with its ticket.
#[derive(Debug, Clone)]
pub enum Completion {
    /// Books of a genre
    Books(Ticket, FetchResult<Vec<Book>>),
    /// One book's details
    Book(Ticket, FetchResult<BookDetails>),
    /// A chat answer
    Chat(Ticket, FetchResult<String>),
}

/// Perform `fetch` against the backend.
pub async fn perform(api: &dyn BookApi, fetch: Fetch) -> Completion {
    match fetch {
        Fetch::Books(query) => Completion::Books(query.ticket, api.list_books(&query.genre).await),
        Fetch::Book(query) => Completion::Book(query.ticket, api.get_book(&query.book_id).await),
        Fetch::Chat(pending) => Completion::Chat(
            pending.ticket,
            api.chat(&pending.request).await.map(|r| r.answer),
        ),
    }
}

/// Navigation state of one interactive session.
#[derive(Debug, Clone)]
pub struct App {
    history: History,
    tiles: Vec<GenreTile>,
    books: BookListPage,
    chat: ChatPage,
}

impl App {
    /// Start at `route`, returning the request its page needs.
    pub fn start(route: Route) -> (Self, Option<Fetch>) {
        let mut app = Self {
            history: History::starting_at(route),
            tiles: genres::tiles(),
            books: BookListPage::new(),
            chat: ChatPage::new(),
        };
        let fetch = app.enter_current();
        (app, fetch)
    }

    /// Current route.
    pub fn route(&self) -> &Route {
        self.history.current()
    }

    /// Navigate forward to `route`.
    pub fn navigate(&mut self, route: Route) -> Option<Fetch> {
        self.history.push(route);
        self.enter_current()
    }

    /// Go back. From a book list this always returns to the genre grid.
    pub fn back(&mut self) -> Option<Fetch> {
        if matches!(self.route(), Route::Books { .. }) {
            self.history.home();
        } else {
            self.history.back();
        }
        self.enter_current()
    }

    /// Re-enter the current page, fetching again.
    pub fn reload(&mut self) -> Option<Fetch> {
        self.enter_current()
    }

    /// Return to the genre grid.
    pub fn home(&mut self) -> Option<Fetch> {
        self.history.home();
        self.enter_current()
    }

    /// Open the genre tile at `index` (genre page only).
    pub fn open_genre(&mut self, index: usize) -> Option<Fetch> {
        if *self.route() != Route::Genres {
            return None;
        }
        let route = self.tiles.get(index)?.route();
        self.navigate(route)
    }

    /// Open the book card at `index` (book list only).
    pub fn open_book(&mut self, index: usize) -> Option<Fetch> {
        if !matches!(self.route(), Route::Books { .. }) {
            return None;
        }
        let route = self.books.chat_route(index)?;
        self.navigate(route)
    }

    /// Send the chat input, if the chat page allows it.
    pub fn send(&mut self) -> Option<Fetch> {
        if !matches!(self.route(), Route::Chat { .. }) {
            return None;
        }
        self.chat.begin_send().map(Fetch::Chat)
    }

    /// Apply a completion. Returns false when it was stale.
    pub fn apply(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Books(ticket, result) => self.books.resolve(ticket, result),
            Completion::Book(ticket, result) => self.chat.resolve_book(ticket, result),
            Completion::Chat(ticket, result) => self.chat.finish_send(ticket, result),
        }
    }

    /// Perform `fetch` inline and apply its outcome.
    pub async fn settle(&mut self, api: &dyn BookApi, fetch: Option<Fetch>) -> bool {
        match fetch {
            Some(fetch) => {
                let completion = perform(api, fetch).await;
                self.apply(completion)
            }
            None => false,
        }
    }

    /// Genre tiles.
    pub fn tiles(&self) -> &[GenreTile] {
        &self.tiles
    }

    /// Book list page.
    pub fn books(&self) -> &BookListPage {
        &self.books
    }

    /// Chat page.
    pub fn chat(&self) -> &ChatPage {
        &self.chat
    }

    /// Chat page, for editing the input.
    pub fn chat_mut(&mut self) -> &mut ChatPage {
        &mut self.chat
    }

    /// History depth.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    fn enter_current(&mut self) -> Option<Fetch> {
        let route = self.history.current().clone();
        if !matches!(route, Route::Chat { .. }) {
            self.chat.leave();
        }
        match route {
            Route::Genres => None,
            Route::Books { genre } => Some(Fetch::Books(self.books.enter(genre))),
            Route::Chat { book_id } => self.chat.enter(&book_id).map(Fetch::Book),
        }
    }
}
