use serde::Serialize;

use crate::geo::{Bounds, LatLng};
use crate::models::Area;

pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 55.7558,
    lng: 37.6176,
};
pub const DEFAULT_ZOOM: u8 = 10;
pub const MAX_ZOOM: u8 = 19;
pub const TILE_SIZE: u32 = 256;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

/// Overlay key used for the in-progress selection rectangle.
pub const ACTIVE_SELECTION_KEY: &str = "active-selection";

const ACTIVE_COLOR: &str = "#ff4444";
const ACTIVE_WEIGHT: f64 = 4.0;
const ACTIVE_FILL_OPACITY: f64 = 0.2;
const ACTIVE_DASH: &str = "5, 5";

const SAVED_WEIGHT: f64 = 2.0;
const SAVED_FILL_OPACITY: f64 = 0.1;

/// Path options handed to the host map when drawing a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    #[serde(rename = "color")]
    pub stroke_color: String,
    pub weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

impl OverlayStyle {
    /// Dashed red outline for the rectangle being dragged.
    pub fn active() -> Self {
        OverlayStyle {
            stroke_color: ACTIVE_COLOR.to_string(),
            weight: ACTIVE_WEIGHT,
            fill_color: ACTIVE_COLOR.to_string(),
            fill_opacity: ACTIVE_FILL_OPACITY,
            dash_array: Some(ACTIVE_DASH.to_string()),
        }
    }

    /// Solid outline in the area's own color.
    pub fn saved(color: &str) -> Self {
        OverlayStyle {
            stroke_color: color.to_string(),
            weight: SAVED_WEIGHT,
            fill_color: color.to_string(),
            fill_opacity: SAVED_FILL_OPACITY,
            dash_array: None,
        }
    }
}

/// One rectangle the host map should draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectangleOverlay {
    pub key: String,
    pub bounds: Bounds,
    pub style: OverlayStyle,
}

impl RectangleOverlay {
    pub fn active(bounds: Bounds) -> Self {
        RectangleOverlay {
            key: ACTIVE_SELECTION_KEY.to_string(),
            bounds,
            style: OverlayStyle::active(),
        }
    }

    pub fn for_area(area: &Area) -> Self {
        RectangleOverlay {
            key: area.id.clone(),
            bounds: area.bounds,
            style: OverlayStyle::saved(&area.color),
        }
    }
}
