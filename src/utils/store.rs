//! Stores the user's saved locations.
//!
//! The store is an owned value; callers hand it around by reference and
//! mutate it only through [`LocationStore::add`],
//! [`LocationStore::update`] and [`LocationStore::delete`]. Persisting it
//! is up to the caller: it serializes to and from a plain list.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Errors returned by [`LocationStore`] mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("location name must not be empty")]
    EmptyName,
    #[error("location not found: {0}")]
    NotFound(String),
}

/// Ordered list of saved locations, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationStore {
    locations: Vec<Location>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a location.
    pub fn add(&mut self, location: Location) -> Result<(), StoreError> {
        check_name(&location)?;
        info!("adding location {} ({})", location.id, location.name);
        self.locations.push(location);
        Ok(())
    }

    /// Replaces the location sharing `location.id`, keeping its position.
    pub fn update(&mut self, location: Location) -> Result<(), StoreError> {
        check_name(&location)?;
        let slot = self
            .locations
            .iter_mut()
            .find(|existing| existing.id == location.id)
            .ok_or_else(|| StoreError::NotFound(location.id.clone()))?;
        info!("updating location {}", location.id);
        *slot = location;
        Ok(())
    }

    /// Removes and returns the location with `id`.
    pub fn delete(&mut self, id: &str) -> Option<Location> {
        let Some(index) = self.locations.iter().position(|location| location.id == id) else {
            warn!("delete: no location with id {}", id);
            return None;
        };
        info!("deleting location {}", id);
        Some(self.locations.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn check_name(location: &Location) -> Result<(), StoreError> {
    if location.name.trim().is_empty() {
        warn!("rejecting location {} without a name", location.id);
        return Err(StoreError::EmptyName);
    }
    Ok(())
}
