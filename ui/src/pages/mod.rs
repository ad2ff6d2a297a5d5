//! Route-level pages

pub mod book_list;
pub mod chat;
pub mod genres;
