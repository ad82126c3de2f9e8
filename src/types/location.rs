//! Struct definitions and implementations for [`Coordinate`] and the
//! stored [`Location`] record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point on the globe in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// nothing here validates that. Out of range or NaN values are carried
/// as-is and simply produce meaningless distances downstream.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    /// The latitude of the point.
    pub latitude: f64,

    /// The longitude of the point.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from a latitude/longitude pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

/// A named place saved by the user.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Opaque identifier. Freshly created locations get a v4 UUID, but
    /// any string is accepted so that previously persisted ids survive.
    pub id: String,

    /// Display name, never empty once accepted by the store.
    pub name: String,

    /// Where the location is.
    pub coordinate: Coordinate,

    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `#RRGGBB` marker color. `None` means the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Location {
    /// Creates a location with a freshly generated id.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Location {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            coordinate,
            description: None,
            color: None,
        }
    }

    /// Sets the marker color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let istanbul = Coordinate::new(41.0082, 28.9784);
        let a = Location::new("Galata", istanbul);
        let b = Location::new("Galata", istanbul);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.color, None);
        assert_eq!(a.description, None);
    }

    #[test]
    fn test_builders() {
        let location = Location::new("Kadikoy", Coordinate::new(40.9900, 29.0290))
            .with_color("#FF0000")
            .with_description("ferry pier");

        assert_eq!(location.color.as_deref(), Some("#FF0000"));
        assert_eq!(location.description.as_deref(), Some("ferry pier"));
    }
}
