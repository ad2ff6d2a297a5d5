//! Wire types exchanged with the PagePal backend.

use serde::{Deserialize, Serialize};

// ============= Books =============

/// A book as listed by `GET /api/books`.
///
/// The backend stores books in MongoDB and serialises the id as `_id`;
/// both spellings are accepted, and `_id` wins when a record carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    /// Backend identifier.
    pub id: String,
    /// Title, possibly empty.
    pub title: String,
    /// Author, possibly empty.
    pub author: String,
    /// Genre label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Cover image URL.
    #[serde(rename = "coverUrl", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl Book {
    /// Create a book with no genre or cover.
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: None,
            cover_url: None,
        }
    }

    /// Set the genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

/// A single book as returned by `GET /api/books/{id}`.
///
/// Carries every [`Book`] field plus optional detail-only fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct BookDetails {
    /// Backend identifier.
    pub id: String,
    /// Title, possibly empty.
    pub title: String,
    /// Author, possibly empty.
    pub author: String,
    /// Genre label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Cover image URL.
    #[serde(rename = "coverUrl", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BookDetails {
    /// The listing view of this book.
    pub fn to_book(&self) -> Book {
        Book {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            cover_url: self.cover_url.clone(),
        }
    }
}

/// Book as it arrives on the wire, with every accepted field spelling.
#[derive(Deserialize)]
struct BookRecord {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    genre: Option<String>,
    #[serde(rename = "coverUrl")]
    cover_url_camel: Option<String>,
    cover_url: Option<String>,
    description: Option<String>,
}

impl TryFrom<BookRecord> for BookDetails {
    type Error = String;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let id = record
            .mongo_id
            .or(record.id)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Self {
            id,
            title: record.title,
            author: record.author,
            genre: record.genre,
            cover_url: record.cover_url_camel.or(record.cover_url),
            description: record.description,
        })
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = String;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        BookDetails::try_from(record).map(|details| details.to_book())
    }
}

impl From<Book> for BookDetails {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            cover_url: book.cover_url,
            description: None,
        }
    }
}

// ============= Chat =============

/// Who wrote a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using PagePal.
    User,
    /// The backend's answer, or a synthetic error shown in its place.
    Ai,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message.
    pub sender: Sender,
    /// Message body.
    pub text: String,
}

impl Message {
    /// A message typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// A message attributed to the AI.
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }

    /// Whether the user wrote this message.
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Opening line shown once a book has loaded.
pub struct Greeting;

impl Greeting {
    /// Greeting text for a book title.
    pub fn for_title(title: &str) -> String {
        format!("You are now chatting about \"{}\". Ask me anything!", title)
    }
}

/// Scopes backend retrieval to a single book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFilter {
    /// Exact title of the book.
    pub title: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question.
    pub query: String,
    /// Optional single-book scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_filter: Option<BookFilter>,
}

impl ChatRequest {
    /// Question scoped to one book title.
    pub fn about(query: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            book_filter: Some(BookFilter {
                title: title.into(),
            }),
        }
    }
}

/// Successful `POST /api/chat` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated answer.
    pub answer: String,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// `GET /api/hello` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    /// Greeting from the backend.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_accepts_mongo_id() {
        let book: Book = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Sci-Fi"
        }))
        .unwrap();
        assert_eq!(book.id, "65f0c0ffee");
        assert_eq!(book.genre.as_deref(), Some("Sci-Fi"));
        assert!(book.cover_url.is_none());
    }

    #[test]
    fn book_with_both_id_spellings_prefers_mongo_id() {
        let book: Book = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "id": "legacy",
            "title": "Dune",
            "coverUrl": "http://x/a.png",
            "cover_url": "http://x/b.png"
        }))
        .unwrap();
        assert_eq!(book.id, "65f0c0ffee");
        assert_eq!(book.cover_url.as_deref(), Some("http://x/a.png"));
    }

    #[test]
    fn book_list_survives_record_with_both_ids() {
        let books: Vec<Book> = serde_json::from_value(json!([
            { "_id": "1", "title": "Dune" },
            { "_id": "2", "id": "2", "title": "Emma" }
        ]))
        .unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[1].title, "Emma");
    }

    #[test]
    fn book_without_any_id_is_rejected() {
        let err = serde_json::from_value::<Book>(json!({ "title": "Dune" })).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn book_serialises_canonical_names() {
        let book = Book {
            cover_url: Some("http://x/c.png".into()),
            ..Book::new("1", "Dune", "Frank Herbert")
        };
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({ "id": "1", "title": "Dune", "author": "Frank Herbert", "coverUrl": "http://x/c.png" })
        );
    }

    #[test]
    fn book_missing_title_and_author_default_to_empty() {
        let book: Book = serde_json::from_value(json!({ "id": "7" })).unwrap();
        assert_eq!(book.title, "");
        assert_eq!(book.author, "");
    }

    #[test]
    fn book_cover_url_both_spellings() {
        let camel: Book =
            serde_json::from_value(json!({ "id": "1", "coverUrl": "http://x/c.png" })).unwrap();
        let snake: Book =
            serde_json::from_value(json!({ "id": "1", "cover_url": "http://x/c.png" })).unwrap();
        assert_eq!(camel.cover_url, snake.cover_url);
    }

    #[test]
    fn book_details_accepts_mongo_id() {
        let details: BookDetails = serde_json::from_value(json!({
            "_id": "42",
            "title": "Meditations",
            "author": "Marcus Aurelius",
            "description": "Notes to himself"
        }))
        .unwrap();
        assert_eq!(details.id, "42");
        assert_eq!(details.title, "Meditations");
        assert_eq!(details.description.as_deref(), Some("Notes to himself"));
    }

    #[test]
    fn chat_request_serialises_book_filter() {
        let req = ChatRequest::about("Who is Paul?", "Dune");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "query": "Who is Paul?", "book_filter": { "title": "Dune" } })
        );
    }

    #[test]
    fn chat_request_omits_missing_filter() {
        let req = ChatRequest {
            query: "hi".to_string(),
            book_filter: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "query": "hi" }));
    }

    #[test]
    fn sender_serialises_lowercase() {
        assert_eq!(
            serde_json::to_value(Message::ai("x")).unwrap(),
            json!({ "sender": "ai", "text": "x" })
        );
    }

    #[test]
    fn greeting_quotes_title() {
        assert_eq!(
            Greeting::for_title("Dune"),
            "You are now chatting about \"Dune\". Ask me anything!"
        );
    }
}
