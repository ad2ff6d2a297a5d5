//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod mocks;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Three books in the backend's wire shape (Mongo `_id`).
pub fn sample_books() -> Value {
    json!([
        {
            "_id": "65f0a1",
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Sci-Fi",
            "coverUrl": "https://covers.example/dune.jpg"
        },
        {
            "_id": "65f0a2",
            "title": "Foundation",
            "author": "Isaac Asimov",
            "genre": "Sci-Fi"
        },
        {
            "_id": "65f0a3",
            "title": "",
            "author": ""
        }
    ])
}

/// Detail body for Dune.
pub fn dune_details() -> Value {
    json!({
        "_id": "65f0a1",
        "title": "Dune",
        "author": "Frank Herbert",
        "genre": "Sci-Fi",
        "description": "A desert planet and its spice."
    })
}

/// Mount `GET /api/books/65f0a1` returning Dune.
pub async fn mount_dune(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/books/65f0a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dune_details()))
        .mount(server)
        .await;
}

/// Mount `POST /api/chat` answering every question with `answer`.
pub async fn mount_answer(server: &MockServer, answer: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": answer })))
        .mount(server)
        .await;
}
