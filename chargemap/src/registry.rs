//! Book-keeping of the markers currently shown on the map.

use std::collections::HashMap;
use std::fmt::Debug;

use thiserror::Error;

use crate::poi::PoiId;

/// Default maximum number of markers kept on the map before the registry is flushed.
pub const DEFAULT_MAX_MARKERS: usize = 200;

/// Surface the registry detaches marker visuals from.
pub trait MarkerSurface<H> {
    /// Removes the marker visual from the map.
    fn remove_marker(&self, handle: H);
}

/// Returned by [`MarkerRegistry::add`] when the POI already has a marker. Carries the rejected
/// handle back so that the caller can detach it.
#[derive(Debug, Error)]
#[error("marker for POI {poi_id} is already registered")]
pub struct DuplicateMarker<H: Debug> {
    /// POI that already has a marker.
    pub poi_id: PoiId,
    /// Handle that was not registered.
    pub handle: H,
}

/// Tracks which POIs have a marker on the map.
///
/// There is at most one entry per POI. The size budget is enforced by eviction: once the
/// registry holds more than `max_markers` entries, [`MarkerRegistry::evict_if_over_budget`]
/// clears all of them so the next render starts from an empty map.
#[derive(Debug)]
pub struct MarkerRegistry<H> {
    entries: HashMap<PoiId, H>,
    max_markers: usize,
    alloc_count: u64,
}

impl<H: Debug> Default for MarkerRegistry<H> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MARKERS)
    }
}

impl<H: Debug> MarkerRegistry<H> {
    /// Creates an empty registry with the given budget.
    pub fn new(max_markers: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_markers,
            alloc_count: 0,
        }
    }

    /// Returns true if the POI has a marker.
    pub fn has(&self, poi_id: PoiId) -> bool {
        self.entries.contains_key(&poi_id)
    }

    /// Registers the marker of a POI. Existing entries are never overwritten.
    pub fn add(&mut self, poi_id: PoiId, handle: H) -> Result<(), DuplicateMarker<H>> {
        use std::collections::hash_map::Entry;

        match self.entries.entry(poi_id) {
            Entry::Occupied(_) => Err(DuplicateMarker { poi_id, handle }),
            Entry::Vacant(entry) => {
                entry.insert(handle);
                self.alloc_count += 1;
                Ok(())
            }
        }
    }

    /// Number of registered markers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no markers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of markers before eviction.
    pub fn max_markers(&self) -> usize {
        self.max_markers
    }

    /// Number of markers registered over the lifetime of the registry.
    pub fn alloc_count(&self) -> u64 {
        self.alloc_count
    }

    /// Returns true if the registry holds more markers than its budget allows.
    pub fn is_over_budget(&self) -> bool {
        self.entries.len() > self.max_markers
    }

    /// Detaches every marker from the surface and empties the registry. Returns the number of
    /// removed markers.
    pub fn clear<S: MarkerSurface<H> + ?Sized>(&mut self, surface: &S) -> usize {
        let count = self.entries.len();
        for (_, handle) in self.entries.drain() {
            surface.remove_marker(handle);
        }

        count
    }

    /// Clears the registry if it is over budget. Returns true if it was cleared.
    pub fn evict_if_over_budget<S: MarkerSurface<H> + ?Sized>(&mut self, surface: &S) -> bool {
        if !self.is_over_budget() {
            return false;
        }

        log::info!(
            "Marker budget of {} exceeded with {} markers, clearing map",
            self.max_markers,
            self.entries.len()
        );
        self.clear(surface);
        true
    }
}
