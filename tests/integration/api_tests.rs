//! API integration tests against a running server
//!
//! Start the server with a migrated database, then run with:
//! `cargo test --test integration -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a book and return its ID
async fn create_book(client: &Client, title: &str) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "Integration Test",
            "genre": "Test"
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse create response");
    body["id"].as_i64().expect("No book ID")
}

async fn delete_book(client: &Client, id: i64) {
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let id = create_book(&client, "Lifecycle Test Book").await;

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Lifecycle Test Book");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "genre": "Updated" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["genre"], "Updated");
    assert_eq!(body["title"], "Lifecycle Test Book");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_search_books_by_title() {
    let client = Client::new();
    let id = create_book(&client, "Searchable Zanzibar Chronicle").await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .query(&[("title", "zanzibar")])
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert!(books.iter().any(|b| b["id"].as_i64() == Some(id)));

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_simulate_reading() {
    let client = Client::new();
    let id = create_book(&client, "Simulated Read").await;

    let response = client
        .post(format!("{}/books/simulate", BASE_URL))
        .json(&json!({ "ids": [id, 999999, id], "delay_ms": 10 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let mut results: Vec<String> =
        serde_json::from_value(body["results"].clone()).expect("Expected string results");
    results.sort();
    assert_eq!(
        results,
        vec![
            "Book 999999 not found!",
            "Book Simulated Read read!",
            "Book Simulated Read read!",
        ]
    );

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_book() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchBook");
}
