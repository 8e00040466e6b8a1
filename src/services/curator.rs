//! Palette curation: turning raw upstream triples into a usable theme.
//!
//! One attempt deduplicates the fetched set, picks the background with
//! the highest contrast against white, filters light accent candidates,
//! and applies tiered acceptance (3, then 2, then 1 accents), each tier
//! gated by a duplicate check. Attempts repeat up to a fixed budget.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::PaletteError;
use crate::models::{Palette, Rgb, WHITE};
use crate::services::PaletteProvider;

/// Maximum fetch-and-evaluate cycles per request
pub const MAX_ATTEMPTS: u32 = 7;

/// Remove colors that normalize to an already-seen hex key,
/// preserving first-occurrence order.
pub fn dedup_colors(colors: &[Rgb]) -> Vec<Rgb> {
    let mut seen = HashSet::new();
    colors
        .iter()
        .copied()
        .filter(|color| seen.insert(color.hex_key()))
        .collect()
}

/// Pick the color with the highest contrast ratio against white.
///
/// Stable left-to-right scan; the first color reaching the maximum
/// wins. Returns `None` only for empty input.
pub fn pick_background(colors: &[Rgb]) -> Option<Rgb> {
    let mut best = *colors.first()?;
    let mut best_contrast = 0.0;

    for &color in colors {
        let contrast = Rgb::contrast_ratio(color, WHITE);
        if contrast > best_contrast {
            best_contrast = contrast;
            best = color;
        }
    }

    Some(best)
}

/// Order-preserving subsequence of colors classified as light.
pub fn light_colors(colors: &[Rgb]) -> Vec<Rgb> {
    colors
        .iter()
        .copied()
        .filter(|color| color.is_light())
        .collect()
}

/// True when any two colors in the set share a hex key.
pub fn has_duplicates(colors: &[Rgb]) -> bool {
    let keys: HashSet<String> = colors.iter().map(|color| color.hex_key()).collect();
    keys.len() != colors.len()
}

/// Evaluate one fetched candidate set against the tiered acceptance
/// policy. The background is not excluded from the light filter input,
/// so it can reappear as an accent candidate; the duplicate gate
/// rejects any combination where it actually would.
pub fn evaluate_candidates(colors: &[Rgb]) -> Option<Palette> {
    let unique = dedup_colors(colors);
    let main = pick_background(&unique)?;
    let light = light_colors(&unique);

    if light.len() >= 3 && !has_duplicates(&[main, light[0], light[1], light[2]]) {
        Some(Palette {
            main_color: main,
            secondary_color: Some(light[0]),
            accent_color1: Some(light[1]),
            accent_color2: Some(light[2]),
        })
    } else if light.len() >= 2 && !has_duplicates(&[main, light[0], light[1]]) {
        Some(Palette {
            main_color: main,
            secondary_color: Some(light[0]),
            accent_color1: Some(light[1]),
            accent_color2: None,
        })
    } else if !light.is_empty() && !has_duplicates(&[main, light[0]]) {
        Some(Palette {
            main_color: main,
            secondary_color: Some(light[0]),
            accent_color1: None,
            accent_color2: None,
        })
    } else {
        None
    }
}

/// Orchestrates fetch-and-evaluate attempts against the upstream
/// provider.
pub struct PaletteCurator {
    provider: Arc<dyn PaletteProvider>,
}

impl PaletteCurator {
    pub fn new(provider: Arc<dyn PaletteProvider>) -> Self {
        Self { provider }
    }

    /// Assemble a palette, retrying up to [`MAX_ATTEMPTS`] times.
    ///
    /// A partial palette (fewer than three accents) is a success and is
    /// not retried further. A fetch failure aborts the whole request
    /// immediately rather than consuming an attempt.
    pub async fn assemble(&self) -> Result<Palette, PaletteError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let colors = self.provider.fetch_palette().await?;

            match evaluate_candidates(&colors) {
                Some(palette) => {
                    tracing::info!(
                        attempt,
                        accents = palette.accent_count(),
                        main = %palette.main_color,
                        "Palette accepted"
                    );
                    return Ok(palette);
                }
                None => {
                    tracing::debug!(attempt, "Candidate set rejected, retrying");
                }
            }
        }

        Err(PaletteError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
