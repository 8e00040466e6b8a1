use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Static body returned for all palette failures; the specific cause
/// is logged at the boundary, never exposed to the client.
const FETCH_ERROR_BODY: &str = "Error fetching colors";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned an empty color set")]
    EmptyResult,
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("no acceptable palette after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("palette assembly failed: {0}")]
    Palette(#[from] PaletteError),

    #[error("origin not allowed")]
    OriginNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Palette(_) => (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_BODY),
            ApiError::OriginNotAllowed => (StatusCode::FORBIDDEN, "Origin not allowed"),
        };

        (status, body).into_response()
    }
}
