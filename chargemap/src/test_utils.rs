//! Recording fake of the native map capability.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chargemap_types::{GeoBounds, GeoLatLng};
use parking_lot::Mutex;

use crate::config::{MapOptions, MapType};
use crate::error::NativeMapError;
use crate::platform::{
    CameraListener, CameraPosition, ClickHandler, MarkerHandle, MarkerOptions, NativeCallback,
    NativeMap, NativeMapPlatform, PolylineHandle, PolylineOptions, ReadyListener,
};
use crate::poi::PoiId;
use crate::registry::MarkerSurface;

/// How the fake completes single-shot calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Reply {
    #[default]
    Immediate,
    Fail,
    DropCallback,
    Never,
}

struct FakeMarker {
    options: MarkerOptions,
    on_click: Arc<dyn Fn() + Send + Sync>,
}

#[derive(Default)]
struct FakeState {
    ready_listener: Option<ReadyListener>,
    camera_listeners: Vec<Arc<dyn Fn() + Send + Sync>>,
    applied_options: Vec<MapOptions>,
    visible: bool,
    clickable: Option<bool>,
    map_type: Option<MapType>,
    reject_map_type: bool,
    layout_refreshes: usize,
    next_handle: u64,
    markers: HashMap<MarkerHandle, FakeMarker>,
    markers_created: usize,
    removed_markers: Vec<MarkerHandle>,
    failing_pois: HashSet<PoiId>,
    polylines: HashMap<PolylineHandle, PolylineOptions>,
    removed_polylines: Vec<PolylineHandle>,
    camera: CameraPosition,
    camera_targets: Vec<GeoLatLng>,
    visible_region: Option<GeoBounds>,
    reply: Reply,
    parked_callbacks: Vec<Box<dyn Any + Send>>,
    fit_bounds_supported: bool,
    fitted_bounds: Vec<GeoBounds>,
}

#[derive(Default)]
pub(crate) struct FakeNativeMap {
    state: Mutex<FakeState>,
}

impl FakeNativeMap {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn set_reply(&self, reply: Reply) {
        self.state.lock().reply = reply;
    }

    pub(crate) fn set_camera(&self, camera: CameraPosition) {
        self.state.lock().camera = camera;
    }

    pub(crate) fn set_visible_region(&self, region: Option<GeoBounds>) {
        self.state.lock().visible_region = region;
    }

    pub(crate) fn set_fit_bounds_supported(&self, supported: bool) {
        self.state.lock().fit_bounds_supported = supported;
    }

    pub(crate) fn reject_map_type(&self) {
        self.state.lock().reject_map_type = true;
    }

    pub(crate) fn fail_marker_for(&self, poi_id: PoiId) {
        self.state.lock().failing_pois.insert(poi_id);
    }

    /// Invokes the ready listener. Returns false if none is registered.
    pub(crate) fn fire_ready(&self) -> bool {
        let listener = self.state.lock().ready_listener.take();
        match listener {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }

    pub(crate) fn fire_camera_move_end(&self) {
        let listeners = self.state.lock().camera_listeners.clone();
        for listener in listeners {
            listener();
        }
    }

    /// Clicks the marker of the POI. Returns false if the POI has no marker.
    pub(crate) fn click_marker(&self, poi_id: PoiId) -> bool {
        let handler = self
            .state
            .lock()
            .markers
            .values()
            .find(|m| m.options.poi_id == poi_id)
            .map(|m| m.on_click.clone());
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub(crate) fn has_ready_listener(&self) -> bool {
        self.state.lock().ready_listener.is_some()
    }

    pub(crate) fn camera_listener_count(&self) -> usize {
        self.state.lock().camera_listeners.len()
    }

    pub(crate) fn applied_options(&self) -> Vec<MapOptions> {
        self.state.lock().applied_options.clone()
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    pub(crate) fn clickable(&self) -> Option<bool> {
        self.state.lock().clickable
    }

    pub(crate) fn map_type(&self) -> Option<MapType> {
        self.state.lock().map_type
    }

    pub(crate) fn layout_refreshes(&self) -> usize {
        self.state.lock().layout_refreshes
    }

    pub(crate) fn markers_on_map(&self) -> usize {
        self.state.lock().markers.len()
    }

    pub(crate) fn markers_created(&self) -> usize {
        self.state.lock().markers_created
    }

    pub(crate) fn removed_markers(&self) -> usize {
        self.state.lock().removed_markers.len()
    }

    pub(crate) fn marker_options(&self, poi_id: PoiId) -> Option<MarkerOptions> {
        self.state
            .lock()
            .markers
            .values()
            .find(|m| m.options.poi_id == poi_id)
            .map(|m| m.options.clone())
    }

    pub(crate) fn polylines(&self) -> Vec<PolylineOptions> {
        self.state.lock().polylines.values().cloned().collect()
    }

    pub(crate) fn removed_polylines(&self) -> usize {
        self.state.lock().removed_polylines.len()
    }

    pub(crate) fn camera_targets(&self) -> Vec<GeoLatLng> {
        self.state.lock().camera_targets.clone()
    }

    pub(crate) fn zoom(&self) -> f64 {
        self.state.lock().camera.zoom
    }

    pub(crate) fn fitted_bounds(&self) -> Vec<GeoBounds> {
        self.state.lock().fitted_bounds.clone()
    }

    fn next_handle(&self) -> u64 {
        let mut state = self.state.lock();
        state.next_handle += 1;
        state.next_handle
    }

    fn complete<T: Send + 'static>(&self, callback: NativeCallback<T>, value: T) {
        let reply = self.state.lock().reply;
        match reply {
            Reply::Immediate => callback(Ok(value)),
            Reply::Fail => callback(Err(NativeMapError::Failed("fake failure".into()))),
            Reply::DropCallback => drop(callback),
            Reply::Never => self.state.lock().parked_callbacks.push(Box::new(callback)),
        }
    }
}

impl MarkerSurface<MarkerHandle> for FakeNativeMap {
    fn remove_marker(&self, handle: MarkerHandle) {
        let mut state = self.state.lock();
        state.markers.remove(&handle);
        state.removed_markers.push(handle);
    }
}

impl NativeMap for FakeNativeMap {
    fn on_ready(&self, listener: ReadyListener) {
        self.state.lock().ready_listener = Some(listener);
    }

    fn on_camera_move_end(&self, listener: CameraListener) {
        self.state.lock().camera_listeners.push(Arc::from(listener));
    }

    fn set_options(&self, options: &MapOptions) {
        self.state.lock().applied_options.push(*options);
    }

    fn set_visible(&self, visible: bool) {
        self.state.lock().visible = visible;
    }

    fn set_clickable(&self, clickable: bool) {
        self.state.lock().clickable = Some(clickable);
    }

    fn set_map_type(&self, map_type: MapType) -> Result<(), NativeMapError> {
        let mut state = self.state.lock();
        if state.reject_map_type {
            return Err(NativeMapError::Failed(format!("unknown map type {map_type:?}")));
        }
        state.map_type = Some(map_type);
        Ok(())
    }

    fn refresh_layout(&self) {
        self.state.lock().layout_refreshes += 1;
    }

    fn add_marker(
        &self,
        options: MarkerOptions,
        on_click: ClickHandler,
    ) -> Result<MarkerHandle, NativeMapError> {
        if self.state.lock().failing_pois.contains(&options.poi_id) {
            return Err(NativeMapError::Failed("marker rejected".into()));
        }

        let handle = MarkerHandle(self.next_handle());
        let mut state = self.state.lock();
        state.markers_created += 1;
        state.markers.insert(
            handle,
            FakeMarker {
                options,
                on_click: Arc::from(on_click),
            },
        );
        Ok(handle)
    }

    fn add_polyline(&self, options: PolylineOptions) -> Result<PolylineHandle, NativeMapError> {
        let handle = PolylineHandle(self.next_handle());
        self.state.lock().polylines.insert(handle, options);
        Ok(handle)
    }

    fn remove_polyline(&self, handle: PolylineHandle) {
        let mut state = self.state.lock();
        state.polylines.remove(&handle);
        state.removed_polylines.push(handle);
    }

    fn set_camera_target(&self, target: GeoLatLng) {
        let mut state = self.state.lock();
        state.camera.target = target;
        state.camera_targets.push(target);
    }

    fn get_camera_position(&self, callback: NativeCallback<CameraPosition>) {
        let camera = self.state.lock().camera;
        self.complete(callback, camera);
    }

    fn set_zoom(&self, zoom: f64) {
        self.state.lock().camera.zoom = zoom;
    }

    fn get_zoom(&self, callback: NativeCallback<f64>) {
        let zoom = self.state.lock().camera.zoom;
        self.complete(callback, zoom);
    }

    fn get_visible_region(&self, callback: NativeCallback<Option<GeoBounds>>) {
        let region = self.state.lock().visible_region;
        self.complete(callback, region);
    }

    fn supports_fit_bounds(&self) -> bool {
        self.state.lock().fit_bounds_supported
    }

    fn fit_bounds(&self, bounds: GeoBounds) -> Result<(), NativeMapError> {
        let mut state = self.state.lock();
        if !state.fit_bounds_supported {
            return Err(NativeMapError::Unsupported);
        }
        state.fitted_bounds.push(bounds);
        Ok(())
    }
}

pub(crate) struct FakePlatform {
    available: bool,
    fail_acquisition: bool,
    map: Arc<FakeNativeMap>,
    requested_canvases: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub(crate) fn new(map: Arc<FakeNativeMap>) -> Arc<Self> {
        Arc::new(Self {
            available: true,
            fail_acquisition: false,
            map,
            requested_canvases: Mutex::default(),
        })
    }

    pub(crate) fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            available: false,
            fail_acquisition: false,
            map: FakeNativeMap::new(),
            requested_canvases: Mutex::default(),
        })
    }

    pub(crate) fn failing(map: Arc<FakeNativeMap>) -> Arc<Self> {
        Arc::new(Self {
            available: true,
            fail_acquisition: true,
            map,
            requested_canvases: Mutex::default(),
        })
    }

    pub(crate) fn requested_canvases(&self) -> Vec<String> {
        self.requested_canvases.lock().clone()
    }
}

impl NativeMapPlatform for FakePlatform {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get_map(&self, canvas_id: &str) -> Result<Arc<dyn NativeMap>, NativeMapError> {
        self.requested_canvases.lock().push(canvas_id.to_string());
        if self.fail_acquisition {
            return Err(NativeMapError::Failed("canvas not found".into()));
        }

        let map: Arc<dyn NativeMap> = self.map.clone();
        Ok(map)
    }
}

/// Installs the test logger so that provider logs show up in failing tests.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
