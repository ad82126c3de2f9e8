//! Saved Places Library.
//! Orders saved locations by distance from the user and derives the
//! marker recoloring filters used to draw them on a map.

#[macro_use]
extern crate log;

pub mod config;

pub mod types {
    pub mod color;
    pub mod location;
    pub mod marker;
    pub mod waypoint;
}

pub mod algorithms {
    pub mod nearest;
}

pub mod utils {
    pub mod generator;
    pub mod haversine;
    pub mod hue;
    pub mod route_state;
    pub mod store;
}

pub use algorithms::nearest::order_by_distance;
pub use types::{color, location, marker, waypoint};
pub use utils::hue::hue_rotation_degrees;
pub use utils::{haversine, route_state, store};
