//! API integration tests
//!
//! These run against a live server (`cargo run`) with the seeded `admin`
//! and `alice` accounts present, so they are ignored by default.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Log in and return a bearer token
async fn get_token(client: &Client, username: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": username,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

async fn get_admin_token(client: &Client) -> String {
    get_token(client, "admin", "admin").await
}

#[tokio::test]
#[ignore]
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
async fn test_create_borrowing_assigns_id_and_location() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "date_borrowed": "2026-08-01",
            "due_date": "2026-08-22",
            "status": false
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .expect("No Location header")
        .to_str()
        .unwrap()
        .to_string();

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No borrowing ID");
    assert!(location.ends_with(&format!("/borrowings/{}", id)));

    // Fetch-by-id is open to anyone
    let response = client
        .get(format!("{}/borrowings/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Cleanup
    let _ = client
        .delete(format!("{}/borrowings/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_create_borrowing_with_preset_id_is_rejected() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "id": 1,
            "status": true
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "idexists");
    assert_eq!(body["entity"], "borrowing");
}

#[tokio::test]
#[ignore]
async fn test_create_borrowing_requires_admin() {
    let client = Client::new();
    let token = get_token(&client, "alice", "alice").await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": false }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_put_borrowing_id_validation() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    // Body without an id
    let response = client
        .put(format!("{}/borrowings/1", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": true }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "idnull");

    // Path and body ids disagree
    let response = client
        .put(format!("{}/borrowings/1", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "id": 2, "status": true }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "idinvalid");

    // Non-existent id
    let response = client
        .put(format!("{}/borrowings/999999999", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "id": 999999999, "status": true }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_patch_preserves_omitted_fields() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    // Create a borrowing with all scalar fields set
    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "date_borrowed": "2026-07-01",
            "due_date": "2026-07-22",
            "return_date": "2026-07-20",
            "status": false
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().expect("No borrowing ID");

    // Patch only the status
    let response = client
        .patch(format!("{}/borrowings/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .header("Content-Type", "application/merge-patch+json")
        .json(&json!({ "id": id, "status": true }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Dates survive, status changed
    let body: Value = client
        .get(format!("{}/borrowings/{}", BASE_URL, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], true);
    assert_eq!(body["date_borrowed"], "2026-07-01");
    assert_eq!(body["due_date"], "2026-07-22");
    assert_eq!(body["return_date"], "2026-07-20");

    // Cleanup
    let _ = client
        .delete(format!("{}/borrowings/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_list_borrowings_scoping() {
    let client = Client::new();

    // Anonymous callers are rejected
    let response = client
        .get(format!("{}/borrowings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    // Admin pages over all records, with pagination headers
    let token = get_admin_token(&client).await;
    let response = client
        .get(format!("{}/borrowings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-total-count"));
    assert!(response.headers().contains_key("link"));
    let body: Value = response.json().await.unwrap();
    assert!(body["items"].is_array());
    assert!(body["total"].is_number());

    // A plain user only sees their own records
    let token = get_token(&client, "alice", "alice").await;
    let response = client
        .get(format!("{}/borrowings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    for item in body["items"].as_array().unwrap() {
        assert_eq!(item["user"]["login"], "alice");
    }
}

#[tokio::test]
#[ignore]
async fn test_delete_borrowing_is_idempotent() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .delete(format!("{}/borrowings/999999999", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_spaces_lifecycle() {
    let client = Client::new();

    // Create with the epoch date; no token needed anywhere on this slice
    let response = client
        .post(format!("{}/spaces", BASE_URL))
        .json(&json!({ "date": "1970-01-01" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().expect("No space ID");
    assert_eq!(body["date"], "1970-01-01");

    let body: Value = client
        .get(format!("{}/spaces/{}", BASE_URL, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["date"], "1970-01-01");

    // Patch to today
    let response = client
        .patch(format!("{}/spaces/{}", BASE_URL, id))
        .header("Content-Type", "application/merge-patch+json")
        .json(&json!({ "id": id, "date": "2026-08-07" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = client
        .get(format!("{}/spaces/{}", BASE_URL, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["date"], "2026-08-07");

    // Delete, then the record is gone
    let response = client
        .delete(format!("{}/spaces/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/spaces/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_spaces_list_is_open_and_unscoped() {
    let client = Client::new();

    let response = client
        .get(format!("{}/spaces", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-total-count"));

    let body: Value = response.json().await.unwrap();
    assert!(body["items"].is_array());
    assert!(body["total"].is_number());
}
