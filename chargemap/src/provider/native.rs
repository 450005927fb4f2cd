use std::sync::Arc;

use async_trait::async_trait;
use chargemap_types::{GeoBounds, GeoPosition};
use parking_lot::{Mutex, RwLock};

use super::{MapProvider, MapState, MappingApi, ProviderCapabilities};
use crate::bridge::bridge;
use crate::classifier::PoiClassifier;
use crate::config::{MapOptions, MapProviderConfig, MapType};
use crate::error::MapError;
use crate::messenger::{MapEvent, Messenger};
use crate::platform::{
    MarkerHandle, MarkerIcon, MarkerOptions, NativeMap, NativeMapPlatform, PolylineHandle,
    PolylineOptions,
};
use crate::poi::Poi;
use crate::polyline;
use crate::registry::{MarkerRegistry, MarkerSurface};

/// Map provider backed by the native map plugin of the device.
///
/// The provider owns the native map handle, the readiness state, the marker registry and the
/// route polyline of one map screen. Native listeners hold only weak references to the provider,
/// so dropping it stops all event publishing.
pub struct NativeMapProvider {
    inner: Arc<Inner>,
}

struct Inner {
    platform: Arc<dyn NativeMapPlatform>,
    messenger: Arc<dyn Messenger>,
    config: MapProviderConfig,
    classifier: PoiClassifier,
    lifecycle: RwLock<Lifecycle>,
    markers: Mutex<MarkerRegistry<MarkerHandle>>,
    polyline: Mutex<Option<PolylineHandle>>,
}

struct Lifecycle {
    state: MapState,
    canvas_id: Option<String>,
    provider_error: Option<String>,
    map: Option<Arc<dyn NativeMap>>,
    options: MapOptions,
}

impl NativeMapProvider {
    /// Creates a provider in the `Uninitialized` state.
    pub fn new(
        platform: Arc<dyn NativeMapPlatform>,
        messenger: impl Messenger + 'static,
        config: MapProviderConfig,
    ) -> Self {
        let classifier = PoiClassifier::new(config.icons.base_path.clone());
        let markers = MarkerRegistry::new(config.max_markers);
        let options = config.map_options;

        Self {
            inner: Arc::new(Inner {
                platform,
                messenger: Arc::new(messenger),
                config,
                classifier,
                lifecycle: RwLock::new(Lifecycle {
                    state: MapState::Uninitialized,
                    canvas_id: None,
                    provider_error: None,
                    map: None,
                    options,
                }),
                markers: Mutex::new(markers),
                polyline: Mutex::new(None),
            }),
        }
    }

    /// Configuration of the provider.
    pub fn config(&self) -> &MapProviderConfig {
        &self.inner.config
    }

    /// Canvas the map was initialized on.
    pub fn canvas_id(&self) -> Option<String> {
        self.inner.lifecycle.read().canvas_id.clone()
    }

    /// Reason why the provider is unavailable.
    pub fn provider_error(&self) -> Option<String> {
        self.inner.lifecycle.read().provider_error.clone()
    }

    /// Number of markers currently on the map.
    pub fn marker_count(&self) -> usize {
        self.inner.markers.lock().len()
    }
}

impl Inner {
    fn init_map(self: &Arc<Self>, canvas_id: &str, options: Option<MapOptions>) {
        log::info!("Initializing native map on canvas '{canvas_id}'");

        {
            let mut lifecycle = self.lifecycle.write();
            if lifecycle.state != MapState::Uninitialized {
                log::debug!("Map is already {:?}, init ignored", lifecycle.state);
                return;
            }

            lifecycle.canvas_id = Some(canvas_id.to_string());
            if let Some(options) = options {
                lifecycle.options = options;
            }

            if !self.platform.is_available() {
                log::info!("No native maps plugin available");
                lifecycle.state = MapState::Unavailable;
                lifecycle.provider_error = Some("native maps plugin is not available".to_string());
                return;
            }

            log::info!("Native maps plugin is available");
            lifecycle.state = MapState::Initializing;
        }

        let map = match self.platform.get_map(canvas_id) {
            Ok(map) => map,
            Err(err) => {
                log::error!("Failed to acquire native map for canvas '{canvas_id}': {err}");
                let mut lifecycle = self.lifecycle.write();
                lifecycle.state = MapState::Unavailable;
                lifecycle.provider_error = Some(err.to_string());
                return;
            }
        };
        self.lifecycle.write().map = Some(map.clone());

        let weak = Arc::downgrade(self);
        map.on_camera_move_end(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_camera_move_end();
            }
        }));

        let weak = Arc::downgrade(self);
        map.on_ready(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_map_ready();
            }
        }));
    }

    fn on_map_ready(&self) {
        let (map, options) = {
            let lifecycle = self.lifecycle.read();
            let Some(map) = lifecycle.map.clone() else {
                log::error!("Map ready signalled without a native map");
                return;
            };
            (map, lifecycle.options)
        };

        log::info!("Native mapping ready");
        map.set_options(&options);
        map.set_visible(true);
        self.lifecycle.write().state = MapState::Ready;
        self.messenger.publish(MapEvent::Ready);

        self.set_map_center(self.config.default_center);
    }

    fn on_camera_move_end(&self) {
        if self.lifecycle.read().state != MapState::Ready {
            log::trace!("Camera move before map ready ignored");
            return;
        }

        self.messenger.publish(MapEvent::DragEnd);
        self.messenger.publish(MapEvent::Zoom);
    }

    /// Native map if the provider is ready, otherwise logs the skipped operation.
    fn ready_map(&self, operation: &str) -> Option<Arc<dyn NativeMap>> {
        let lifecycle = self.lifecycle.read();
        match (&lifecycle.map, lifecycle.state) {
            (Some(map), MapState::Ready) => Some(map.clone()),
            (_, state) => {
                log::warn!("{operation}: map is {state:?}, skipping");
                None
            }
        }
    }

    fn require_ready(&self, operation: &str) -> Result<Arc<dyn NativeMap>, MapError> {
        if let Some(map) = self.ready_map(operation) {
            return Ok(map);
        }

        let lifecycle = self.lifecycle.read();
        match (lifecycle.state, &lifecycle.provider_error) {
            (MapState::Unavailable, Some(error)) => Err(MapError::Unavailable(error.clone())),
            _ => Err(MapError::NotReady),
        }
    }

    fn render(&self, map: &Arc<dyn NativeMap>, pois: &[Poi], clear_existing: bool) -> usize {
        {
            let mut markers = self.markers.lock();
            if clear_existing {
                markers.clear(&**map);
            } else {
                markers.evict_if_over_budget(&**map);
            }
        }

        let icons = &self.config.icons;
        let mut added = 0;
        for poi in pois {
            let Some(position) = poi.position() else {
                log::trace!("POI {} has no position, skipping", poi.id);
                continue;
            };
            if self.markers.lock().has(poi.id) {
                continue;
            }

            let style = self.classifier.classify(poi);
            let options = MarkerOptions {
                poi_id: poi.id,
                position,
                title: style.tooltip,
                snippet: icons.snippet.clone(),
                icon: MarkerIcon {
                    url: format!("{}{}", icons.asset_root, style.icon_key),
                    width: icons.width,
                    height: icons.height,
                },
            };

            let poi_id = poi.id;
            let messenger = self.messenger.clone();
            let on_click = Box::new(move || {
                log::debug!("POI clicked: {poi_id}");
                messenger.publish(MapEvent::PoiSelected { poi_id });
            });

            match map.add_marker(options, on_click) {
                Ok(handle) => match self.markers.lock().add(poi_id, handle) {
                    Ok(()) => added += 1,
                    Err(duplicate) => {
                        log::warn!("{duplicate}, removing the new marker");
                        map.remove_marker(duplicate.handle);
                    }
                },
                Err(err) => log::warn!("Failed to add marker for POI {poi_id}: {err}"),
            }
        }

        {
            let markers = self.markers.lock();
            log::debug!(
                "{added} new map markers added out of a total {} [alloc:{}]",
                markers.len(),
                markers.alloc_count()
            );
        }

        map.refresh_layout();
        log::trace!("Refreshed map layout, focusing map");
        map.set_clickable(true);

        added
    }

    fn set_map_center(&self, position: GeoPosition) {
        if let Some(map) = self.ready_map("set_map_center") {
            map.set_camera_target(position.coords());
        }
    }

    fn clear_polyline(&self, map: &dyn NativeMap) {
        if let Some(handle) = self.polyline.lock().take() {
            map.remove_polyline(handle);
        }
    }
}

#[async_trait]
impl MapProvider for NativeMapProvider {
    fn provider_type(&self) -> MappingApi {
        MappingApi::GoogleNative
    }

    fn state(&self) -> MapState {
        self.inner.lifecycle.read().state
    }

    fn capabilities(&self) -> ProviderCapabilities {
        let map = self.inner.lifecycle.read().map.clone();
        ProviderCapabilities {
            fit_bounds: map.is_some_and(|m| m.supports_fit_bounds()),
        }
    }

    fn init_map(&self, canvas_id: &str, options: Option<MapOptions>) {
        self.inner.init_map(canvas_id, options);
    }

    fn show_poi_list_on_map(&self, pois: &[Poi]) {
        let Some(map) = self.inner.ready_map("show_poi_list_on_map") else {
            return;
        };

        map.set_visible(true);
        self.inner.render(&map, pois, false);
    }

    fn render_poi_markers(&self, pois: &[Poi], clear_existing: bool) -> usize {
        match self.inner.ready_map("render_poi_markers") {
            Some(map) => self.inner.render(&map, pois, clear_existing),
            None => 0,
        }
    }

    fn render_map(&self, pois: &[Poi]) {
        {
            let lifecycle = self.inner.lifecycle.read();
            if lifecycle.state != MapState::Ready {
                log::info!("render_map: skipping render, map not ready yet");
            }
            if lifecycle.map.is_none() {
                log::info!("render_map: native map not initialised");
            }
            if lifecycle.canvas_id.is_none() {
                log::info!("render_map: map canvas id not set");
            }
        }

        self.show_poi_list_on_map(pois);
    }

    fn clear_markers(&self) {
        let Some(map) = self.inner.ready_map("clear_markers") else {
            return;
        };

        let removed = self.inner.markers.lock().clear(&*map);
        log::debug!("Cleared {removed} map markers");
    }

    fn set_map_center(&self, position: GeoPosition) {
        self.inner.set_map_center(position);
    }

    async fn get_map_center(&self) -> Result<GeoPosition, MapError> {
        let map = self.inner.require_ready("get_map_center")?;
        let camera = bridge(self.inner.config.bridge_timeout(), |callback| {
            map.get_camera_position(callback)
        })
        .await?;

        Ok(camera.target.into())
    }

    fn set_map_zoom(&self, zoom: f64) {
        if let Some(map) = self.inner.ready_map("set_map_zoom") {
            map.set_zoom(zoom);
        }
    }

    async fn get_map_zoom(&self) -> Result<f64, MapError> {
        let map = self.inner.require_ready("get_map_zoom")?;
        bridge(self.inner.config.bridge_timeout(), |callback| {
            map.get_zoom(callback)
        })
        .await
    }

    fn set_map_type(&self, map_type: MapType) {
        let Some(map) = self.inner.ready_map("set_map_type") else {
            return;
        };

        if let Err(err) = map.set_map_type(map_type) {
            log::warn!("Failed to set map type {map_type:?}: {err}");
        }
    }

    async fn get_map_bounds(&self) -> Result<GeoBounds, MapError> {
        let map = self.inner.require_ready("get_map_bounds")?;
        let region = bridge(self.inner.config.bridge_timeout(), |callback| {
            map.get_visible_region(callback)
        })
        .await?;

        region.ok_or_else(|| {
            log::warn!("Native map returned no visible region");
            MapError::NoVisibleRegion
        })
    }

    fn move_to_map_bounds(&self, bounds: GeoBounds) -> Result<(), MapError> {
        let map = self.inner.require_ready("move_to_map_bounds")?;
        if !map.supports_fit_bounds() {
            log::warn!("Native map does not support fitting bounds");
            return Err(MapError::Unsupported("fit bounds"));
        }

        map.fit_bounds(bounds)?;
        Ok(())
    }

    fn render_polyline(&self, encoded_path: &str) -> Result<(), MapError> {
        let map = self.inner.require_ready("render_polyline")?;
        self.inner.clear_polyline(&*map);
        let points = polyline::decode(encoded_path)?;
        log::debug!("Rendering route polyline with {} points", points.len());

        let style = &self.inner.config.polyline;
        let handle = map.add_polyline(PolylineOptions {
            points,
            color: style.color.clone(),
            width: style.width,
            geodesic: style.geodesic,
        })?;
        *self.inner.polyline.lock() = Some(handle);

        Ok(())
    }

    fn clear_polyline(&self) {
        if let Some(map) = self.inner.ready_map("clear_polyline") {
            self.inner.clear_polyline(&*map);
        }
    }

    fn focus_map(&self) {
        if let Some(map) = self.inner.ready_map("focus_map") {
            map.set_clickable(true);
        }
    }

    fn unfocus_map(&self) {
        if let Some(map) = self.inner.ready_map("unfocus_map") {
            map.set_clickable(false);
        }
    }
}
