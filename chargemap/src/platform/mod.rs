//! Narrow interface of the native mapping capability.
//!
//! These traits describe exactly the calls the provider makes into a native map plugin. A
//! platform binding implements them over the real plugin; tests implement them with a recording
//! fake.
//!
//! Native calls are callback based. Listeners and completion callbacks may be invoked
//! synchronously from inside the registering call or later from the platform event loop.
//! Implementations must not hold their own locks while invoking them.

use std::sync::Arc;

use chargemap_types::{GeoBounds, GeoLatLng};

use crate::config::{MapOptions, MapType};
use crate::error::NativeMapError;
use crate::poi::PoiId;
use crate::registry::MarkerSurface;

/// Completion callback of a single-shot native call.
pub type NativeCallback<T> = Box<dyn FnOnce(Result<T, NativeMapError>) + Send>;

/// Listener of the one-time "map ready" signal.
pub type ReadyListener = Box<dyn FnOnce() + Send>;

/// Listener invoked every time the camera stops moving.
pub type CameraListener = Box<dyn Fn() + Send + Sync>;

/// Handler invoked when a marker is clicked.
pub type ClickHandler = Box<dyn Fn() + Send + Sync>;

/// Opaque handle of a marker created by the native map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Opaque handle of a polyline created by the native map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolylineHandle(pub u64);

/// Camera state reported by the native map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPosition {
    /// Point the camera looks at.
    pub target: GeoLatLng,
    /// Zoom level.
    pub zoom: f64,
}

/// Marker icon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    /// Icon url.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Everything the native map needs to draw one POI marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    /// POI the marker represents. Kept as marker metadata.
    pub poi_id: PoiId,
    /// Marker position.
    pub position: GeoLatLng,
    /// Marker title.
    pub title: String,
    /// Secondary text under the title.
    pub snippet: String,
    /// Marker icon.
    pub icon: MarkerIcon,
}

/// Everything the native map needs to draw a route.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineOptions {
    /// Route vertices.
    pub points: Vec<GeoLatLng>,
    /// Color in `#RRGGBB` notation.
    pub color: String,
    /// Width in pixels.
    pub width: u32,
    /// Draw segments as great circle arcs.
    pub geodesic: bool,
}

/// Entry point of the native mapping capability.
pub trait NativeMapPlatform: Send + Sync {
    /// Returns true if the native map plugin is installed and usable.
    fn is_available(&self) -> bool;

    /// Acquires the native map bound to the given canvas.
    fn get_map(&self, canvas_id: &str) -> Result<Arc<dyn NativeMap>, NativeMapError>;
}

/// A native map instance.
pub trait NativeMap: MarkerSurface<MarkerHandle> + Send + Sync {
    /// Registers the one-time "map ready" listener.
    fn on_ready(&self, listener: ReadyListener);
    /// Registers a listener for the end of every camera movement.
    fn on_camera_move_end(&self, listener: CameraListener);

    /// Applies map type, controls and gestures.
    fn set_options(&self, options: &MapOptions);
    /// Shows or hides the map surface.
    fn set_visible(&self, visible: bool);
    /// Toggles whether the map surface accepts input gestures.
    fn set_clickable(&self, clickable: bool);
    /// Changes the base map type.
    fn set_map_type(&self, map_type: MapType) -> Result<(), NativeMapError>;
    /// Recomputes the surface layout after the page around it changed.
    fn refresh_layout(&self);

    /// Creates a marker. `on_click` is invoked every time the marker is clicked.
    fn add_marker(
        &self,
        options: MarkerOptions,
        on_click: ClickHandler,
    ) -> Result<MarkerHandle, NativeMapError>;
    /// Creates a polyline.
    fn add_polyline(&self, options: PolylineOptions) -> Result<PolylineHandle, NativeMapError>;
    /// Removes a polyline.
    fn remove_polyline(&self, handle: PolylineHandle);

    /// Moves the camera to the given point.
    fn set_camera_target(&self, target: GeoLatLng);
    /// Reports the camera state.
    fn get_camera_position(&self, callback: NativeCallback<CameraPosition>);
    /// Changes the zoom level.
    fn set_zoom(&self, zoom: f64);
    /// Reports the zoom level.
    fn get_zoom(&self, callback: NativeCallback<f64>);
    /// Reports the visible region, `None` if the map has no region yet.
    fn get_visible_region(&self, callback: NativeCallback<Option<GeoBounds>>);

    /// Returns true if [`NativeMap::fit_bounds`] is implemented by this backend.
    fn supports_fit_bounds(&self) -> bool;
    /// Moves the camera so that the given rectangle is visible.
    fn fit_bounds(&self, bounds: GeoBounds) -> Result<(), NativeMapError>;
}
