//! tests/users/modify.rs
//! PUT, PATCH and DELETE return plain confirmation strings; their numeric
//! parameters carry a minimum-value constraint.

// Include the helper module defined in tests/common/mod.rs.
#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn updates_user_with_valid_body() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .put(format!("{base_url}/user/7"))
        .json(&json!({
            "firstName": "jane",
            "lastName": "doe",
            "phone": "090-234-4567",
            "dateOfBirth": "01/15/1990",
            "permission": ["user.write"]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "User updated");
}

#[tokio::test]
async fn changes_user_status() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .patch(format!("{base_url}/user/7?status=2"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "User status changed");
}

#[tokio::test]
async fn rejects_non_positive_status() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .patch(format!("{base_url}/user/7?status=0"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();

    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["errors"][0]["field"], "status");
    assert_eq!(json["errors"][0]["message"], "must be greater than or equal to 1");
}

#[tokio::test]
async fn deletes_user() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{base_url}/user/9"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "User deleted");
}
