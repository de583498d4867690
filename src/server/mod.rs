pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;

use crate::{
    config::Config,
    error::{Result, VtoError},
    gemini::GeminiClient,
};

const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gemini: GeminiClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/vto/with-avatar", post(handlers::vto_with_avatar))
        .route("/vto/with-selfie", post(handlers::vto_with_selfie))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

pub async fn serve(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port()));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| VtoError::Internal(format!("failed to bind {}: {}", addr, e)))?;

    log::info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| VtoError::Internal(format!("server error: {}", e)))
}
