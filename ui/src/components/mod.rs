//! Reusable UI components

pub mod book_card;
pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod loading;

pub use book_card::BookCardView;
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use header::Header;
pub use loading::{LoadingSpinner, TypingIndicator};
