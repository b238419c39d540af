use std::time::Duration;
use axum::serve;

use user_service::config::state::AppState;
use user_service::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: &'static AppState = AppState::instance();

    // Periodically swap in a fresh message-catalog snapshot
    state
        .translator
        .clone()
        .spawn_refresh(Duration::from_secs(state.environment.messages_cache_seconds));

    let app = server::create_app();
    let listener = server::setup_listener().await?;

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
