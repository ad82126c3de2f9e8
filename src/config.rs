//! Map styling configuration.
//!
//! Every field has a default so that a partial document (or none at all)
//! deserializes into a usable [`MapConfig`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::DEFAULT_MARKER_COLOR;
use crate::utils::hue::REFERENCE_MARKER_HUE;

/// Process-wide default configuration.
pub static DEFAULT_MAP_CONFIG: Lazy<MapConfig> = Lazy::new(MapConfig::default);

/// Top level configuration consumed by the map layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub marker: MarkerConfig,
    pub polyline: PolylineStyle,
    pub user_circle: UserCircleStyle,
}

/// Marker assets and the color math tied to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Intrinsic hue of `icon_url`, in degrees.
    pub reference_hue: f64,

    /// Color for locations that have none.
    pub default_color: String,

    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            reference_hue: REFERENCE_MARKER_HUE,
            default_color: DEFAULT_MARKER_COLOR.to_string(),
            icon_url: "/marker-icon.png".to_string(),
            icon_retina_url: "/marker-icon-2x.png".to_string(),
            shadow_url: "/marker-shadow.png".to_string(),
        }
    }
}

/// Style of the line drawn through the ordered route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub smooth_factor: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        PolylineStyle {
            color: "#3388ff".to_string(),
            weight: 4,
            opacity: 0.7,
            smooth_factor: 1.0,
        }
    }
}

/// Style of the circle marking the user's own position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCircleStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: u32,
}

impl Default for UserCircleStyle {
    fn default() -> Self {
        UserCircleStyle {
            color: "#4285F4".to_string(),
            fill_color: "#4285F4".to_string(),
            fill_opacity: 0.5,
            weight: 2,
        }
    }
}
