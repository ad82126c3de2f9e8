//! Nearest-first route ordering.
//!
//! Waypoints are ranked by their great-circle distance from a single
//! fixed origin. Distances between waypoints are never considered, so
//! this is not a shortest-tour solver.

use ordered_float::OrderedFloat;

use crate::haversine;
use crate::location::Coordinate;
use crate::waypoint::Waypoint;

/// Orders `waypoints` by increasing distance from `origin`, attaching
/// each distance to its waypoint.
///
/// With no origin, or no waypoints, the input is returned untouched.
/// Equal distances keep their input order. A NaN distance is kept on
/// the waypoint but ranks as 0 km, ahead of every positive distance.
///
/// # Time Complexity
/// *O*(*n* log *n*)
pub fn order_by_distance(
    origin: Option<&Coordinate>,
    mut waypoints: Vec<Waypoint>,
) -> Vec<Waypoint> {
    let origin = match origin {
        Some(origin) if !waypoints.is_empty() => origin,
        _ => return waypoints,
    };

    for waypoint in waypoints.iter_mut() {
        let km = haversine::distance(origin, waypoint.coordinate());
        waypoint.distance_km = Some(km);
    }

    // Vec::sort_by_key is stable.
    waypoints.sort_by_key(|waypoint| OrderedFloat(rank(waypoint.distance_km)));
    debug!(
        "ordered {} waypoints from {:?}: {:?}",
        waypoints.len(),
        origin,
        waypoints.iter().map(Waypoint::id).collect::<Vec<_>>()
    );
    waypoints
}

/// Sort key for a distance: missing or NaN counts as 0 km.
fn rank(distance_km: Option<f64>) -> f64 {
    match distance_km {
        Some(km) if !km.is_nan() => km,
        _ => 0.0,
    }
}
