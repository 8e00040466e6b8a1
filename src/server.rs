//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::Request,
    http::header,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ColormindClient, PaletteCurator};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub curator: Arc<PaletteCurator>,
    pub config: Arc<AppConfig>,
}

/// Create application state from resolved configuration.
pub fn create_app_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let provider = Arc::new(
        ColormindClient::new(&config)
            .map_err(|e| anyhow::anyhow!("Failed to create upstream client: {e}"))?,
    );
    let curator = Arc::new(PaletteCurator::new(provider));

    Ok(AppState { curator, config })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/api/colors", get(handle_colors))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(middleware::from_fn_with_state(config, enforce_origin))
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin gate: requests pass when the `Origin` header is absent
/// (non-browser or same-origin caller) or matches the single trusted
/// origin; anything else is rejected before reaching the core.
async fn enforce_origin(
    axum::extract::State(config): axum::extract::State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();

    match origin {
        None => next.run(request).await,
        Some(value) if value.as_bytes() == config.allowed_origin.as_bytes() => {
            let mut response = next.run(request).await;
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            response
        }
        Some(value) => {
            tracing::warn!(origin = ?value, "Rejected cross-origin request");
            ApiError::OriginNotAllowed.into_response()
        }
    }
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_colors(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_colors(axum::extract::State(state.curator))
        .await
        .map(IntoResponse::into_response)
}
