//! Page view models.
//!
//! Each data-fetching page is a small state machine. Entering the page hands
//! out a [`Ticket`] together with the request to perform; the front end does
//! the I/O and passes the outcome back with the same ticket. Outcomes for a
//! ticket that is no longer current are discarded.

pub mod book_list;
pub mod chat;

use crate::error::FetchError;

/// Identifies one page entry or one in-flight send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw generation number.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Counter with no ticket issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh ticket, superseding every earlier one.
    pub fn next(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Whether `ticket` is the latest issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current != 0 && ticket.0 == self.current
    }

    /// Latest ticket, if any.
    pub fn current(&self) -> Option<Ticket> {
        (self.current != 0).then_some(Ticket(self.current))
    }
}

/// `loading → ready | failed` cycle of a fetched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    /// Request in flight.
    Loading,
    /// Fetched successfully.
    Ready(T),
    /// Fetch failed; holds the user-facing message.
    Failed(String),
}

impl<T> PageState<T> {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    /// The value, when ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, when failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

impl<T> From<Result<T, FetchError>> for PageState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => PageState::Ready(value),
            Err(e) => PageState::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut generation = Generation::new();
        assert_eq!(generation.current(), None);

        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn page_state_from_result() {
        let ok: PageState<u8> = Ok(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let err: PageState<u8> = Err(FetchError::Network("offline".into())).into();
        assert_eq!(err.error(), Some("offline"));
        assert!(!err.is_loading());
    }
}
