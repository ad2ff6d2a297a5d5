//! Chat about one book.

use crate::error::FetchError;
use crate::pages::{Generation, PageState, Ticket};
use crate::transcript::Transcript;
use crate::types::{BookDetails, ChatRequest, Greeting, Message};

/// Label of the back control.
pub const BACK_LABEL: &str = "Back to Books";

/// `GET /api/books/{id}` to perform for a page entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    /// Entry this request belongs to.
    pub ticket: Ticket,
    /// Book id from the route.
    pub book_id: String,
}

/// `POST /api/chat` to perform for a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChat {
    /// Send this request belongs to.
    pub ticket: Ticket,
    /// Request body.
    pub request: ChatRequest,
}

/// View model of the `/chat/:bookId` page.
///
/// Book loading and message sending are tracked separately: the book goes
/// through [`PageState`], while at most one chat request is in flight at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct ChatPage {
    book_id: String,
    book: PageState<BookDetails>,
    transcript: Transcript,
    input: String,
    sending: Option<Ticket>,
    entries: Generation,
    sends: Generation,
}

impl ChatPage {
    /// Text shown while a chat request is in flight.
    pub const THINKING_TEXT: &'static str = "PagePal is thinking...";

    /// Page that has not been entered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the page for `book_id`.
    ///
    /// Clears the transcript, the input and any previous book. A blank id
    /// fails immediately and returns `None`; no request should be made.
    pub fn enter(&mut self, book_id: &str) -> Option<BookQuery> {
        let ticket = self.entries.next();
        self.book_id = book_id.trim().to_string();
        self.transcript = Transcript::new();
        self.input.clear();
        self.sending = None;

        if self.book_id.is_empty() {
            self.book = PageState::Failed(FetchError::MissingBookId.to_string());
            return None;
        }

        self.book = PageState::Loading;
        tracing::debug!(book_id = %self.book_id, ticket = ticket.value(), "Fetching book details");
        Some(BookQuery {
            ticket,
            book_id: self.book_id.clone(),
        })
    }

    /// Apply the book fetch outcome. Returns false when `ticket` is stale.
    ///
    /// On success the greeting becomes the first transcript entry.
    pub fn resolve_book(&mut self, ticket: Ticket, result: Result<BookDetails, FetchError>) -> bool {
        if !self.entries.is_current(ticket) || !self.book.is_loading() {
            tracing::debug!(ticket = ticket.value(), "Dropping stale book response");
            return false;
        }
        match result {
            Ok(details) => {
                self.transcript.push(Message::ai(Greeting::for_title(&details.title)));
                self.book = PageState::Ready(details);
            }
            Err(e) => {
                tracing::warn!(book_id = %self.book_id, "Failed to fetch book details: {}", e);
                self.book = PageState::Failed(e.to_string());
            }
        }
        true
    }

    /// Leave the page. Pending book and chat responses become stale.
    pub fn leave(&mut self) {
        self.entries.next();
        self.sending = None;
    }

    /// Replace the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the input accepts typing.
    pub fn can_edit(&self) -> bool {
        self.sending.is_none() && self.book.ready().is_some()
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        self.can_edit() && !self.input.trim().is_empty()
    }

    /// Start sending the current input.
    ///
    /// Appends the trimmed text as a user message, clears the input and
    /// returns the request to perform. Returns `None` and changes nothing
    /// when sending is not possible.
    pub fn begin_send(&mut self) -> Option<PendingChat> {
        if !self.can_send() {
            return None;
        }
        let title = self.book.ready()?.title.clone();
        let query = self.input.trim().to_string();

        self.transcript.push(Message::user(query.clone()));
        self.input.clear();
        let ticket = self.sends.next();
        self.sending = Some(ticket);

        tracing::debug!(%title, ticket = ticket.value(), "Sending chat query");
        Some(PendingChat {
            ticket,
            request: ChatRequest::about(query, title),
        })
    }

    /// Apply a chat outcome. Returns false when `ticket` is stale.
    ///
    /// Failures become an AI message so the conversation can continue.
    pub fn finish_send(&mut self, ticket: Ticket, result: Result<String, FetchError>) -> bool {
        if self.sending != Some(ticket) {
            tracing::debug!(ticket = ticket.value(), "Dropping stale chat response");
            return false;
        }
        let text = match result {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                format!("Sorry, an error occurred: {}", e)
            }
        };
        self.transcript.push(Message::ai(text));
        self.sending = None;
        true
    }

    /// Whether a chat request is in flight.
    pub fn is_thinking(&self) -> bool {
        self.sending.is_some()
    }

    /// Whether the book is still loading.
    pub fn is_loading_book(&self) -> bool {
        self.book.is_loading()
    }

    /// Book id from the route.
    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    /// Loaded book.
    pub fn book(&self) -> Option<&BookDetails> {
        self.book.ready()
    }

    /// Messages so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// `Loading Book...`, `Chat with: {title}` or `Book Not Found`.
    pub fn heading(&self) -> String {
        match &self.book {
            PageState::Loading => "Loading Book...".to_string(),
            PageState::Ready(book) => format!("Chat with: {}", book.title),
            PageState::Failed(_) => "Book Not Found".to_string(),
        }
    }

    /// `by {author}` when the loaded book has an author.
    pub fn byline(&self) -> Option<String> {
        self.book
            .ready()
            .filter(|b| !b.author.is_empty())
            .map(|b| format!("by {}", b.author))
    }

    /// `Error loading book: {message}` after a failed load.
    pub fn error_banner(&self) -> Option<String> {
        self.book
            .error()
            .map(|message| format!("Error loading book: {}", message))
    }

    /// Input placeholder.
    pub fn placeholder(&self) -> String {
        match self.book.ready() {
            Some(book) => format!("Ask about {}...", book.title),
            None => "Loading book...".to_string(),
        }
    }

    /// Thinking indicator text while a request is in flight.
    pub fn thinking_text(&self) -> Option<&'static str> {
        self.is_thinking().then_some(Self::THINKING_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Book, BookFilter, Sender};

    fn meditations() -> BookDetails {
        Book::new("42", "Meditations", "Marcus Aurelius").into()
    }

    fn loaded() -> ChatPage {
        let mut page = ChatPage::new();
        let query = page.enter("42").unwrap();
        assert!(page.resolve_book(query.ticket, Ok(meditations())));
        page
    }

    #[test]
    fn entering_starts_loading() {
        let mut page = ChatPage::new();
        let query = page.enter("42").unwrap();
        assert_eq!(query.book_id, "42");
        assert_eq!(page.heading(), "Loading Book...");
        assert_eq!(page.placeholder(), "Loading book...");
        assert!(!page.can_edit());
        assert!(page.error_banner().is_none());
    }

    #[test]
    fn loaded_book_greets() {
        let page = loaded();
        assert_eq!(page.heading(), "Chat with: Meditations");
        assert_eq!(page.byline().as_deref(), Some("by Marcus Aurelius"));
        assert_eq!(page.placeholder(), "Ask about Meditations...");
        assert_eq!(page.transcript().len(), 1);
        assert_eq!(
            page.transcript().messages()[0],
            Message::ai("You are now chatting about \"Meditations\". Ask me anything!")
        );
        assert!(page.can_edit());
        assert!(!page.can_send());
    }

    #[test]
    fn missing_id_fails_without_request() {
        let mut page = ChatPage::new();
        assert!(page.enter("  ").is_none());
        assert_eq!(page.heading(), "Book Not Found");
        assert_eq!(
            page.error_banner().as_deref(),
            Some("Error loading book: No book ID provided.")
        );
        assert!(!page.can_edit());
    }

    #[test]
    fn not_found_disables_input() {
        let mut page = ChatPage::new();
        let query = page.enter("nope").unwrap();
        page.resolve_book(query.ticket, Err(FetchError::BookNotFound("nope".into())));

        assert_eq!(page.heading(), "Book Not Found");
        assert_eq!(
            page.error_banner().as_deref(),
            Some("Error loading book: Book with ID nope not found.")
        );
        page.set_input("hello?");
        assert!(!page.can_edit());
        assert!(page.begin_send().is_none());
        assert!(page.transcript().is_empty());
    }

    #[test]
    fn send_appends_user_message_immediately() {
        let mut page = loaded();
        page.set_input("  Who wrote this?  ");
        assert!(page.can_send());

        let pending = page.begin_send().unwrap();
        assert_eq!(pending.request.query, "Who wrote this?");
        assert_eq!(
            pending.request.book_filter,
            Some(BookFilter {
                title: "Meditations".into()
            })
        );
        assert_eq!(page.input(), "");
        assert!(page.is_thinking());
        assert_eq!(page.thinking_text(), Some("PagePal is thinking..."));
        assert_eq!(page.transcript().last(), Some(&Message::user("Who wrote this?")));
        assert!(!page.can_edit());

        assert!(page.finish_send(pending.ticket, Ok("Marcus Aurelius.".into())));
        assert_eq!(page.transcript().last(), Some(&Message::ai("Marcus Aurelius.")));
        assert!(!page.is_thinking());
        assert!(page.can_edit());
    }

    #[test]
    fn send_failure_becomes_ai_message() {
        let mut page = loaded();
        page.set_input("why?");
        let pending = page.begin_send().unwrap();
        page.finish_send(
            pending.ticket,
            Err(FetchError::from_response(500, r#"{"error":"LLM offline"}"#)),
        );

        let last = page.transcript().last().unwrap();
        assert_eq!(last.sender, Sender::Ai);
        assert_eq!(last.text, "Sorry, an error occurred: LLM offline");
        assert!(page.can_edit());
    }

    #[test]
    fn blank_input_or_in_flight_send_is_noop() {
        let mut page = loaded();
        page.set_input("   ");
        assert!(page.begin_send().is_none());
        assert_eq!(page.transcript().len(), 1);

        page.set_input("first");
        let _pending = page.begin_send().unwrap();
        page.set_input("second");
        assert!(page.begin_send().is_none());
        assert_eq!(page.transcript().len(), 2);
    }

    #[test]
    fn stale_book_response_is_dropped() {
        let mut page = ChatPage::new();
        let old = page.enter("1").unwrap();
        let new = page.enter("42").unwrap();

        assert!(!page.resolve_book(old.ticket, Ok(Book::new("1", "Old", "A").into())));
        assert!(page.is_loading_book());
        assert!(page.resolve_book(new.ticket, Ok(meditations())));
        assert_eq!(page.heading(), "Chat with: Meditations");
    }

    #[test]
    fn answer_after_navigation_is_dropped() {
        let mut page = loaded();
        page.set_input("question");
        let pending = page.begin_send().unwrap();

        let query = page.enter("42").unwrap();
        assert!(!page.finish_send(pending.ticket, Ok("late".into())));
        assert!(page.transcript().is_empty());

        page.resolve_book(query.ticket, Ok(meditations()));
        assert_eq!(page.transcript().len(), 1);
    }

    #[test]
    fn leaving_drops_pending_responses() {
        let mut page = loaded();
        page.set_input("question");
        let pending = page.begin_send().unwrap();
        page.leave();

        assert!(!page.is_thinking());
        assert!(!page.finish_send(pending.ticket, Ok("late".into())));
        assert_eq!(page.transcript().len(), 2);

        let mut page = ChatPage::new();
        let query = page.enter("42").unwrap();
        page.leave();
        assert!(!page.resolve_book(query.ticket, Ok(meditations())));
    }
}
