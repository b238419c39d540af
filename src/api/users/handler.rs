// User endpoint handlers. No persistence layer: responses carry placeholder
// data, but validation, locale resolution and error mapping are real.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::i18n::RequestLocale;
use crate::utils::error_handler::ErrorResponse;
use crate::utils::response_handler::ApiResponse;
use crate::validation::{self, ValidJson, Violation};
use super::dto::{UserDetail, UserRequest};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: i64,
}

/// Rejects non-positive path/query parameters with the uniform error body
fn require_min(uri: &Uri, field: &'static str, value: i64) -> Result<(), ErrorResponse> {
    match validation::check_min(field, value, 1) {
        Some(violation) => Err(ErrorResponse::of_violations(uri.path(), vec![violation])),
        None => Ok(()),
    }
}

/// Retrieves a user by id (hardcoded placeholder payload)
#[instrument(name = "get_user", skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    uri: Uri,
    Path(user_id): Path<i64>,
) -> Result<ApiResponse, ErrorResponse> {
    info!("Request get user detail, user_id={user_id}");

    require_min(&uri, "userID", user_id)?;

    let user: UserDetail = UserDetail::placeholder();

    Ok(ApiResponse::success(
        StatusCode::OK,
        state.translator.translate(locale, "user.get.success"),
    )
    .data(json!(user)))
}

/// Adds a new user, echoing a subset of the submitted fields
#[instrument(name = "create_user", skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidJson(request): ValidJson<UserRequest>,
) -> ApiResponse {
    info!(
        "Creating user: {} {}",
        request.first_name.as_deref().unwrap_or_default(),
        request.last_name.as_deref().unwrap_or_default()
    );

    ApiResponse::success(
        StatusCode::OK,
        state.translator.translate(locale, "user.add.success"),
    )
    .data(json!({
        "firstName": request.first_name,
        "lastName": request.last_name,
    }))
}

/// Updates a user; returns a plain confirmation string
#[instrument(name = "update_user", skip(state, _request))]
pub async fn update_user(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    uri: Uri,
    Path(user_id): Path<i64>,
    ValidJson(_request): ValidJson<UserRequest>,
) -> Result<String, ErrorResponse> {
    info!("Updating user, user_id={user_id}");

    require_min(&uri, "userID", user_id)?;

    Ok(state.translator.translate(locale, "user.upd.success"))
}

/// Changes a user's status; returns a plain confirmation string
#[instrument(name = "update_user_status", skip(state))]
pub async fn update_user_status(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    uri: Uri,
    Path(user_id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> Result<String, ErrorResponse> {
    info!("Changing user status, user_id={user_id}, status={}", query.status);

    let mut violations: Vec<Violation> = Vec::new();
    violations.extend(validation::check_min("userID", user_id, 1));
    violations.extend(validation::check_min("status", query.status, 1));

    if !violations.is_empty() {
        return Err(ErrorResponse::of_violations(uri.path(), violations));
    }

    Ok(state.translator.translate(locale, "user.sts.success"))
}

/// Deletes a user; returns a plain confirmation string
#[instrument(name = "delete_user", skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    uri: Uri,
    Path(user_id): Path<i64>,
) -> Result<String, ErrorResponse> {
    info!("Deleting user, user_id={user_id}");

    require_min(&uri, "userID", user_id)?;

    Ok(state.translator.translate(locale, "user.del.success"))
}
