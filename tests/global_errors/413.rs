//! tests/global_errors/413.rs
//! Ensures that oversized request bodies are rejected with HTTP 413.

// Include the helper module defined in tests/common/mod.rs.
#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_413_for_oversized_body() {
    let base_url: String = common::spawn_app();

    // Default body limit is 2MB; send 3MB.
    let oversized: String = "x".repeat(3 * 1024 * 1024);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/user", base_url))
        .header("Content-Type", "application/json")
        .body(oversized)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
