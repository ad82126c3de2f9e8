//! Generates random waypoints around a coordinate.

use rand::Rng;

use crate::haversine::EARTH_RADIUS_KM;
use crate::location::{Coordinate, Location};
use crate::waypoint::Waypoint;

/// Generates `capacity` selected waypoints scattered inside a square of
/// half-side `radius_km` centered on `location`.
///
/// Useful to fill a store or a route with plausible data. The sign of
/// `radius_km` is ignored; a non-finite radius yields no waypoints.
pub fn generate_waypoints_near(
    location: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Vec<Waypoint> {
    if !radius_km.is_finite() {
        warn!("cannot generate waypoints within radius {}", radius_km);
        return Vec::new();
    }
    let mut rng = rand::thread_rng();
    let lat_span = (radius_km.abs() / EARTH_RADIUS_KM).to_degrees();
    // Longitude degrees shrink towards the poles.
    let lon_span = lat_span / location.latitude.to_radians().cos().abs().max(1e-6);

    (0..capacity)
        .map(|i| {
            let coordinate = Coordinate::new(
                location.latitude + rng.gen_range(-lat_span..=lat_span),
                location.longitude + rng.gen_range(-lon_span..=lon_span),
            );
            let color = format!("#{:06X}", rng.gen_range(0..=0xFF_FFFFu32));
            Waypoint::new(Location::new(format!("waypoint_{i}"), coordinate).with_color(color))
        })
        .collect()
}
