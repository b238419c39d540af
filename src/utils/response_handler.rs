// Uniform success/failure envelope and request logging middleware.

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;
use std::time::Instant;
use tracing::info;

/// Uniform response envelope: `{status, message, data?}`; `data` is omitted
/// from the JSON when absent. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsePayload {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Tagged result envelope, selected explicitly by the handler. Success and
/// failure carry the same payload shape.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Success(ResponsePayload),
    Failure(ResponsePayload),
}

impl ApiResponse {
    pub fn success(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse::Success(ResponsePayload {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        })
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse::Failure(ResponsePayload {
            status: status.as_u16(),
            message: message.into(),
            data: None,
        })
    }

    /// Attaches a JSON data payload to the envelope
    pub fn data(self, data: Value) -> Self {
        match self {
            ApiResponse::Success(payload) => ApiResponse::Success(ResponsePayload {
                data: Some(data),
                ..payload
            }),
            ApiResponse::Failure(payload) => ApiResponse::Failure(ResponsePayload {
                data: Some(data),
                ..payload
            }),
        }
    }

    pub fn payload(&self) -> &ResponsePayload {
        match self {
            ApiResponse::Success(payload) | ApiResponse::Failure(payload) => payload,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> axum::response::Response {
        let payload: ResponsePayload = match self {
            ApiResponse::Success(payload) | ApiResponse::Failure(payload) => payload,
        };

        let status: StatusCode =
            StatusCode::from_u16(payload.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(payload)).into_response()
    }
}

/// Middleware logging method, path, status and duration for every request
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let method: String = req.method().to_string();
    let path: String = req.uri().path().to_owned();
    let start: Instant = Instant::now();

    let response: Response<Body> = next.run(req).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    Ok(response)
}
