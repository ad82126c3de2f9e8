//! Great-circle distance on a spherical Earth.

use crate::location::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the haversine distance between two coordinates in
/// kilometers.
///
/// Inputs are not validated; NaN in either coordinate yields NaN.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod haversine_tests {
    use super::*;

    const ISTANBUL: Coordinate = Coordinate::new(41.0082, 28.9784);
    const ANKARA: Coordinate = Coordinate::new(39.9334, 32.8597);

    #[test]
    fn test_istanbul_to_ankara() {
        let km = distance(&ISTANBUL, &ANKARA);
        assert!((km - 349.0).abs() <= 2.0, "got {km} km");
    }

    #[test]
    fn test_symmetric() {
        assert!((distance(&ISTANBUL, &ANKARA) - distance(&ANKARA, &ISTANBUL)).abs() < 1e-9);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance(&ANKARA, &ANKARA), 0.0);
    }

    /// One degree of latitude along a meridian is R * pi / 180.
    #[test]
    fn test_one_degree_of_latitude() {
        let km = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((km - expected).abs() < 1e-6);
        assert!((km - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_antipodes() {
        let km = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        let km = distance(&Coordinate::new(f64::NAN, 0.0), &ANKARA);
        assert!(km.is_nan());
    }
}
