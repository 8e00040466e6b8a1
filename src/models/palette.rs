use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Rgb;

/// Curated palette returned from `/api/colors`.
///
/// Accent fields are populated strictly in order: a field is never
/// present unless all earlier ones are, and no two populated fields
/// normalize to the same hex key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Background color with the highest contrast against white
    #[schema(value_type = Vec<u8>, example = json!([52, 58, 64]))]
    pub main_color: Rgb,

    /// First light accent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<u8>>)]
    pub secondary_color: Option<Rgb>,

    /// Second light accent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<u8>>)]
    pub accent_color1: Option<Rgb>,

    /// Third light accent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<u8>>)]
    pub accent_color2: Option<Rgb>,
}

impl Palette {
    /// Number of populated accent fields (0-3).
    pub fn accent_count(&self) -> usize {
        [
            self.secondary_color.is_some(),
            self.accent_color1.is_some(),
            self.accent_color2.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
