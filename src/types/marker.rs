//! Struct definitions for [`MarkerIcon`], the per-location description
//! of how the shared marker image is drawn.

use serde::Serialize;

use crate::config::MarkerConfig;
use crate::utils::hue::hue_rotation_from;

/// Pixel size of the marker image.
pub const ICON_SIZE: [u32; 2] = [25, 41];
/// Point of the image that sits on the coordinate.
pub const ICON_ANCHOR: [i32; 2] = [12, 41];
/// Popup offset relative to the anchor.
pub const POPUP_ANCHOR: [i32; 2] = [1, -34];
/// Pixel size of the shadow image.
pub const SHADOW_SIZE: [u32; 2] = [41, 41];

/// Everything the map layer needs to draw one location's marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcon {
    /// The resolved `#RRGGBB` color.
    pub color: String,
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [u32; 2],
    /// CSS class, `custom-icon-` followed by the color minus its first
    /// character.
    pub class_name: String,
    /// Degrees to feed `hue-rotate`.
    pub hue_rotation: f64,
}

impl MarkerIcon {
    /// Builds the icon for `color`, falling back to the configured
    /// default when the location has no color (or an empty one).
    pub fn for_color(color: Option<&str>, config: &MarkerConfig) -> Self {
        let color = match color {
            Some(color) if !color.is_empty() => color,
            _ => config.default_color.as_str(),
        };
        let mut digits = color.chars();
        digits.next();
        let digits = digits.as_str();

        MarkerIcon {
            color: color.to_string(),
            icon_url: config.icon_url.clone(),
            icon_retina_url: config.icon_retina_url.clone(),
            shadow_url: config.shadow_url.clone(),
            icon_size: ICON_SIZE,
            icon_anchor: ICON_ANCHOR,
            popup_anchor: POPUP_ANCHOR,
            shadow_size: SHADOW_SIZE,
            class_name: format!("custom-icon-{digits}"),
            hue_rotation: hue_rotation_from(Some(color), config.reference_hue),
        }
    }

    /// The CSS `filter` value recoloring the stock image.
    pub fn css_filter(&self) -> String {
        format!("hue-rotate({}deg) saturate(2)", self.hue_rotation)
    }
}
