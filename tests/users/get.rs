//! tests/users/get.rs
//! GET /user/{userID} returns the placeholder payload; non-positive ids
//! are rejected with the structured error body.

// Include the helper module defined in tests/common/mod.rs.
#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_placeholder_user() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{base_url}/user/5"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();

    assert_eq!(json["status"], 200);
    assert_eq!(json["message"], "user");
    assert_eq!(json["data"]["firstName"], "jane");
    assert_eq!(json["data"]["lastName"], "doe");
    assert_eq!(json["data"]["phone"], "0902345345");
    assert_eq!(json["data"]["email"], "jane.doe@example.com");
}

#[tokio::test]
async fn rejects_non_positive_user_id() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{base_url}/user/0"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();

    assert_eq!(json["status"], 400);
    assert_eq!(json["path"], "/user/0");
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["errors"][0]["code"], 400);
    assert_eq!(json["errors"][0]["field"], "userID");
    assert_eq!(json["errors"][0]["message"], "must be greater than or equal to 1");
}
