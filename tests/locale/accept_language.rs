//! tests/locale/accept_language.rs
//! Confirmation messages follow the locale resolved from Accept-Language.

// Include the helper module defined in tests/common/mod.rs.
#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn vietnamese_header_selects_vietnamese_messages() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{base_url}/user/3"))
        .header("Accept-Language", "vi")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "Đã xóa người dùng");
}

#[tokio::test]
async fn french_header_translates_the_envelope_message() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{base_url}/user"))
        .header("Accept-Language", "fr-CA")
        .json(&json!({
            "firstName": "jeanne",
            "lastName": "dupont",
            "phone": "0902345345",
            "dateOfBirth": "03/02/1985",
            "permission": ["user.read"]
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Utilisateur ajouté");
}

#[tokio::test]
async fn highest_quality_supported_language_wins() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{base_url}/user/3"))
        .header("Accept-Language", "da, fr;q=0.8, en;q=0.7")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "Utilisateur supprimé");
}

#[tokio::test]
async fn unsupported_language_falls_back_to_english() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{base_url}/user/3"))
        .header("Accept-Language", "de-DE")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "User deleted");
}
