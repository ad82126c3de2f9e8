//! Struct definitions and implementations for [`Waypoint`].

use serde::{Deserialize, Serialize};

use super::location::{Coordinate, Location};

/// A [`Location`] considered for the route.
///
/// `distance_km` is auxiliary: it is filled in by
/// [`order_by_distance`](crate::order_by_distance) and plays no part in
/// identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: Location,

    /// Whether the user included this location in the route.
    pub is_selected: bool,

    /// Great-circle distance from the route origin, in kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Waypoint {
    /// Wraps a location, selected by default.
    pub fn new(location: Location) -> Self {
        Waypoint {
            location,
            is_selected: true,
            distance_km: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.location.id
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.location.coordinate
    }
}

impl From<Location> for Waypoint {
    fn from(location: Location) -> Self {
        Waypoint::new(location)
    }
}

/// Two waypoints are the same waypoint when they wrap the same location
/// and selection state, whatever distance was last attached.
impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.is_selected == other.is_selected
    }
}

#[cfg(test)]
mod waypoint_tests {
    use super::*;

    #[test]
    fn test_distance_is_not_part_of_identity() {
        let location = Location::new("Moda", Coordinate::new(40.9823, 29.0253));
        let plain = Waypoint::new(location.clone());
        let mut measured = Waypoint::from(location);
        measured.distance_km = Some(12.5);

        assert_eq!(plain, measured);
        assert!(plain.is_selected);
        assert_eq!(plain.id(), measured.id());
    }
}
