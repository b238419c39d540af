// User route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with all user endpoints
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(handler::create_user))
        .route(
            "/user/{user_id}",
            get(handler::get_user)
                .put(handler::update_user)
                .patch(handler::update_user_status)
                .delete(handler::delete_user),
        )
}
