//! CLI integration tests for PagePal
//!
//! Tests the command-line interface behavior including:
//! - Help and version output
//! - Offline subcommands
//! - One-shot commands against a mocked backend
//! - Error exits

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the pagepal command, isolated from the caller's environment
fn pagepal_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pagepal").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("PAGEPAL_API_URL")
        .env_remove("PAGEPAL_API__BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PagePal"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_version_output() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagepal"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_ask_requires_question() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir).args(["ask", "42"]).assert().failure();
}

// ============================================================================
// Offline Commands
// ============================================================================

#[test]
fn test_genres_lists_fixed_tiles() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["genres", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse Books by Genre"))
        .stdout(predicate::str::contains("Devotional"))
        .stdout(predicate::str::contains("Sci-Fi"))
        .stdout(predicate::str::contains("Self-Help"));
}

#[test]
fn test_config_full_prints_toml() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["config", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]"))
        .stdout(predicate::str::contains("base_url = \"http://localhost:5000\""));
}

#[test]
fn test_config_file_is_read() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pagepal.toml"),
        "[api]\nbase_url = \"http://books.internal:8080\"\n",
    )
    .unwrap();

    pagepal_cmd(&dir)
        .args(["config", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://books.internal:8080"));
}

#[test]
fn test_api_url_flag_wins() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["config", "--full", "--api-url", "https://pagepal.example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://pagepal.example"));
}

#[test]
fn test_missing_config_file_exits_with_two() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["--config", "nope.toml", "genres"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_api_url_exits_with_two() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["--api-url", "localhost:5000", "genres"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("http://"));
}

#[test]
fn test_unknown_route_is_rejected() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["browse", "--no-tui", "--route", "/nowhere"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown route"));
}

// ============================================================================
// Backend Commands
// ============================================================================

#[test]
fn test_ping_unreachable_fails() {
    let dir = TempDir::new().unwrap();
    pagepal_cmd(&dir)
        .args(["--api-url", "http://127.0.0.1:9", "ping"])
        .assert()
        .failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_books_prints_cards() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "1", "title": "Dune", "author": "Frank Herbert" }
        ])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        pagepal_cmd(&dir)
            .args(["--no-color", "--api-url", uri.as_str(), "books", "Sci-Fi"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Books in Sci-Fi"))
        .stdout(predicate::str::contains("Dune by Frank Herbert"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_books_error_is_rendered_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "db down" })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        pagepal_cmd(&dir)
            .args(["--no-color", "--api-url", uri.as_str(), "books", "Sci-Fi"])
            .assert()
    })
    .await
    .unwrap();

    assert.success().stdout(predicate::str::contains("Error: db down"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_prints_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "1", "title": "Dune", "author": "Frank Herbert"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "Arrakis." })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        pagepal_cmd(&dir)
            .args(["--no-color", "--api-url", uri.as_str(), "ask", "1", "Where", "is", "it?"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Chat with: Dune"))
        .stdout(predicate::str::contains("You: Where is it?"))
        .stdout(predicate::str::contains("PagePal: Arrakis."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ping_prints_greeting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hello"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Hello from backend!" })),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        pagepal_cmd(&dir)
            .args(["--no-color", "--api-url", uri.as_str(), "ping"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Hello from backend!"));
}
