//! Stores the state of the route view: which saved locations are part
//! of the route, and the ordered route built from them.

use crate::algorithms::nearest::order_by_distance;
use crate::location::Coordinate;
use crate::store::LocationStore;
use crate::waypoint::Waypoint;

/// Selection state over a snapshot of the store.
#[derive(Debug, Clone, Default)]
pub struct RoutePlan {
    waypoints: Vec<Waypoint>,
}

impl RoutePlan {
    /// Starts a plan with every stored location selected.
    pub fn from_store(store: &LocationStore) -> Self {
        debug!("building route plan over {} locations", store.len());
        RoutePlan {
            waypoints: store.locations().iter().cloned().map(Waypoint::new).collect(),
        }
    }

    /// Flips the selection of the waypoint with `id`.
    ///
    /// # Returns
    /// The new selection state, or [`None`] if no waypoint has that id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let waypoint = self.waypoints.iter_mut().find(|w| w.id() == id)?;
        waypoint.is_selected = !waypoint.is_selected;
        Some(waypoint.is_selected)
    }

    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    pub fn deselect_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, selected: bool) {
        for waypoint in self.waypoints.iter_mut() {
            waypoint.is_selected = selected;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.waypoints.iter().filter(|w| w.is_selected).count()
    }

    /// All waypoints in store order, selected or not.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Selected waypoints, nearest to `user` first.
    ///
    /// While the user's position is unknown the selected waypoints come
    /// back in store order.
    pub fn optimized_route(&self, user: Option<&Coordinate>) -> Vec<Waypoint> {
        let selected: Vec<Waypoint> = self
            .waypoints
            .iter()
            .filter(|w| w.is_selected)
            .cloned()
            .collect();
        if user.is_none() {
            info!("user position unknown, keeping store order");
        }
        order_by_distance(user, selected)
    }
}

/// Polyline points for `route`, starting at the user when known.
///
/// An empty route yields no points even if the user position is known.
pub fn full_route(route: &[Waypoint], user: Option<&Coordinate>) -> Vec<Coordinate> {
    let points = route.iter().map(|w| *w.coordinate());
    match user {
        Some(user) if !route.is_empty() => std::iter::once(*user).chain(points).collect(),
        _ => points.collect(),
    }
}

#[cfg(test)]
mod route_state_tests {
    use super::*;
    use crate::location::Location;

    const USER: Coordinate = Coordinate::new(41.0082, 28.9784);

    /// Istanbul user; Ankara, Izmir and Bursa saved in that order.
    fn store() -> LocationStore {
        let mut store = LocationStore::new();
        for (id, name, latitude, longitude) in [
            ("ankara", "Ankara", 39.9334, 32.8597),
            ("izmir", "Izmir", 38.4237, 27.1428),
            ("bursa", "Bursa", 40.1885, 29.0610),
        ] {
            let location = Location {
                id: id.to_string(),
                ..Location::new(name, Coordinate::new(latitude, longitude))
            };
            store.add(location).unwrap();
        }
        store
    }

    fn ids(route: &[Waypoint]) -> Vec<&str> {
        route.iter().map(Waypoint::id).collect()
    }

    #[test]
    fn test_everything_selected_initially() {
        let plan = RoutePlan::from_store(&store());
        assert_eq!(plan.selected_count(), 3);
        assert_eq!(ids(plan.waypoints()), vec!["ankara", "izmir", "bursa"]);
    }

    #[test]
    fn test_optimized_route_orders_selected() {
        let mut plan = RoutePlan::from_store(&store());
        assert_eq!(
            ids(&plan.optimized_route(Some(&USER))),
            vec!["bursa", "izmir", "ankara"]
        );

        assert_eq!(plan.toggle("ankara"), Some(false));
        let route = plan.optimized_route(Some(&USER));
        assert_eq!(ids(&route), vec!["bursa", "izmir"]);
        assert!(route.iter().all(|w| w.distance_km.is_some()));
    }

    #[test]
    fn test_without_user_keeps_store_order() {
        let mut plan = RoutePlan::from_store(&store());
        plan.toggle("izmir");
        assert_eq!(ids(&plan.optimized_route(None)), vec!["ankara", "bursa"]);
    }

    #[test]
    fn test_select_and_deselect_all() {
        let mut plan = RoutePlan::from_store(&store());
        plan.deselect_all();
        assert_eq!(plan.selected_count(), 0);
        assert!(plan.optimized_route(Some(&USER)).is_empty());

        plan.select_all();
        assert_eq!(plan.selected_count(), 3);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut plan = RoutePlan::from_store(&store());
        assert_eq!(plan.toggle("nowhere"), None);
        assert_eq!(plan.selected_count(), 3);
    }

    #[test]
    fn test_full_route_prepends_user() {
        let plan = RoutePlan::from_store(&store());
        let route = plan.optimized_route(Some(&USER));

        let points = full_route(&route, Some(&USER));
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], USER);
        assert_eq!(points[1], *route[0].coordinate());

        assert_eq!(full_route(&route, None).len(), 3);
        assert!(full_route(&[], Some(&USER)).is_empty());
    }
}
