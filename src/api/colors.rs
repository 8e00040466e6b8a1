use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::PaletteCurator;

/// Fetch a curated color palette
///
/// Queries the upstream generator (retrying up to seven times) and
/// returns a background color plus up to three light accents. Absent
/// accent fields mean the attempt was accepted at a lower tier.
#[utoipa::path(
    get,
    path = "/api/colors",
    responses(
        (status = 200, description = "Curated palette", body = crate::models::Palette),
        (status = 500, description = "Upstream failure or no acceptable palette"),
    ),
    tag = "Palette"
)]
pub async fn handle_colors(
    State(curator): State<Arc<PaletteCurator>>,
) -> Result<impl IntoResponse, ApiError> {
    let palette = curator.assemble().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to assemble palette");
        ApiError::from(e)
    })?;

    Ok(Json(palette))
}
