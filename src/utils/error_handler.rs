// Error mapping: validation failures become a structured 400 JSON body,
// layer-level faults (timeouts, oversized payloads) map to their status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use chrono::Utc;
use serde::Serialize;
use std::error::Error;
// * tower's error type for timeouts
use tower::timeout::error::Elapsed;
// * Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

use crate::validation::Violation;

/// One structured validation violation record; absent members are omitted
/// from the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Uniform 400 error body: `{timestamp, status, path, errors: [...]}`.
/// Built once per failed request, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub path: String,
    pub errors: Vec<ErrorEntry>,
}

impl ErrorResponse {
    /// Maps validation violations to the uniform error body, one entry per
    /// violated constraint, each carrying code 400. The timestamp is captured
    /// here and truncated to whole seconds.
    pub fn of_violations(path: &str, violations: Vec<Violation>) -> Self {
        let errors: Vec<ErrorEntry> = violations
            .into_iter()
            .map(|violation| ErrorEntry {
                code: Some(StatusCode::BAD_REQUEST.as_u16()),
                field: Some(violation.field),
                message: Some(violation.message),
            })
            .collect();

        Self {
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            path: path.to_owned(),
            errors,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status: StatusCode =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST);

        (status, Json(self)).into_response()
    }
}

// ? Maps errors escaping the middleware layers to HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // ! 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // ! 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // ! Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}

// * A small helper function to find a specific cause in a chain of errors
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
