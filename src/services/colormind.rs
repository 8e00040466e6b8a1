//! Colormind upstream client.
//!
//! The generator returns five arbitrary RGB triples per call with no
//! uniqueness or lightness guarantees; all curation happens downstream.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::UpstreamError;
use crate::models::{AppConfig, Rgb};

/// Source of raw palette candidate sets.
///
/// Seam between the curator and the network; tests substitute a
/// scripted implementation.
#[async_trait]
pub trait PaletteProvider: Send + Sync {
    /// Fetch one candidate set from the generator.
    async fn fetch_palette(&self) -> Result<Vec<Rgb>, UpstreamError>;
}

/// Response shape of the Colormind API
#[derive(Debug, Deserialize)]
struct ColormindResponse {
    result: Vec<Rgb>,
}

/// HTTP client for the Colormind API.
pub struct ColormindClient {
    client: reqwest::Client,
    url: String,
}

impl ColormindClient {
    /// Build a client with the configured endpoint and per-attempt
    /// timeout. A hung upstream call fails that request instead of
    /// stalling it indefinitely.
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.upstream_url.clone(),
        })
    }
}

#[async_trait]
impl PaletteProvider for ColormindClient {
    async fn fetch_palette(&self) -> Result<Vec<Rgb>, UpstreamError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "model": "default" }))
            .send()
            .await?
            .error_for_status()?;

        let body: ColormindResponse = response.json().await?;

        if body.result.is_empty() {
            return Err(UpstreamError::EmptyResult);
        }

        tracing::debug!(colors = body.result.len(), "Fetched upstream palette");
        Ok(body.result)
    }
}
