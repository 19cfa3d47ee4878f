use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Bounds;

/// Saturation/lightness shared by every generated area color.
const COLOR_SATURATION: u8 = 70;
const COLOR_LIGHTNESS: u8 = 50;

/// A named, saved rectangle on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    pub bounds: Bounds,
    pub created_at: DateTime<Utc>,
    pub color: String,
}

impl Area {
    /// Date part of `created_at`, as shown in the saved-areas list.
    pub fn created_date_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Build the CSS `hsl(...)` color for a hue in degrees.
pub fn hsl_color(hue: f64) -> String {
    let hue = hue.rem_euclid(360.0);
    format!("hsl({hue:.0}, {COLOR_SATURATION}%, {COLOR_LIGHTNESS}%)")
}

/// Derive a display color from an area id.
///
/// The hue is a hash of the id bytes, so every id maps to a stable color and
/// distinct ids spread around the color wheel.
pub fn color_for_id(id: &str) -> String {
    // FNV-1a, 32-bit
    let hash = id.bytes().fold(0x811c_9dc5_u32, |acc, b| {
        (acc ^ b as u32).wrapping_mul(0x0100_0193)
    });
    hsl_color((hash % 360) as f64)
}
