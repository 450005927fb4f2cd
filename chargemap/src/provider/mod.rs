//! Provider-agnostic map contract.
//!
//! Callers hold a `Box<dyn MapProvider>` (or `Arc`) chosen at construction time by platform
//! capability detection and never depend on the concrete backend. Every provider follows the
//! same degradation policy: operations invoked before the map is ready are logged and do
//! nothing, and operations with a result fail with [`MapError::NotReady`].

use async_trait::async_trait;
use chargemap_types::{GeoBounds, GeoPosition};

use crate::config::{MapOptions, MapType};
use crate::error::MapError;
use crate::poi::Poi;

mod native;

pub use native::NativeMapProvider;

/// Kind of the mapping backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingApi {
    /// Native map plugin of the device.
    GoogleNative,
    /// Web map embedded in the page.
    GoogleWeb,
    /// Leaflet web map.
    Leaflet,
}

/// Lifecycle of a map provider.
///
/// `Uninitialized -> Initializing -> Ready`, or `Uninitialized -> Unavailable` when the native
/// capability is missing. `Ready` and `Unavailable` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapState {
    /// `init_map` was not called yet.
    Uninitialized,
    /// Waiting for the native map to signal readiness.
    Initializing,
    /// The map accepts rendering and camera operations.
    Ready,
    /// The native map could not be acquired. No retry is attempted.
    Unavailable,
}

/// Optional capabilities a provider declares explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// [`MapProvider::move_to_map_bounds`] is implemented.
    pub fit_bounds: bool,
}

/// Operations every map backend implements.
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Kind of the backend.
    fn provider_type(&self) -> MappingApi;
    /// Current lifecycle state.
    fn state(&self) -> MapState;
    /// Returns true once the map accepts rendering and camera operations.
    fn is_ready(&self) -> bool {
        self.state() == MapState::Ready
    }
    /// Capabilities of the backend. Unknown capabilities are reported as unsupported.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Starts the one-time initialization of the map bound to `canvas_id`. `options` replace the
    /// configured baseline options applied on readiness.
    fn init_map(&self, canvas_id: &str, options: Option<MapOptions>);

    /// Renders the POIs as markers, flushing all markers first if the marker budget is exceeded.
    /// POIs that already have a marker are skipped.
    fn show_poi_list_on_map(&self, pois: &[Poi]);
    /// Adds markers for POIs that have a position and no marker yet. With `clear_existing`, all
    /// markers are removed first. Returns the number of added markers.
    fn render_poi_markers(&self, pois: &[Poi], clear_existing: bool) -> usize;
    /// Logs diagnostics about the map state and renders the POIs.
    fn render_map(&self, pois: &[Poi]);
    /// Removes all markers from the map.
    fn clear_markers(&self);

    /// Moves the camera to the position.
    fn set_map_center(&self, position: GeoPosition);
    /// Position the camera looks at.
    async fn get_map_center(&self) -> Result<GeoPosition, MapError>;
    /// Changes the zoom level.
    fn set_map_zoom(&self, zoom: f64);
    /// Current zoom level.
    async fn get_map_zoom(&self) -> Result<f64, MapError>;
    /// Changes the base map type.
    fn set_map_type(&self, map_type: MapType);
    /// Currently visible region.
    async fn get_map_bounds(&self) -> Result<GeoBounds, MapError>;
    /// Fits the camera to the rectangle. Fails with [`MapError::Unsupported`] on backends without
    /// the capability.
    fn move_to_map_bounds(&self, bounds: GeoBounds) -> Result<(), MapError>;

    /// Replaces the route polyline with the decoded path.
    fn render_polyline(&self, encoded_path: &str) -> Result<(), MapError>;
    /// Removes the route polyline, if any.
    fn clear_polyline(&self);

    /// Lets the map surface accept input gestures.
    fn focus_map(&self);
    /// Stops the map surface from accepting input gestures.
    fn unfocus_map(&self);
}
