//! Configuration of a map provider.
//!
//! Every field has a default, so a partial JSON/TOML document is enough to override single
//! values:
//!
//! ```ignore
//! let config: MapProviderConfig = serde_json::from_str(r#"{"max_markers": 50}"#)?;
//! ```

use std::time::Duration;

use chargemap_types::GeoPosition;
use serde::{Deserialize, Serialize};

use crate::classifier::DEFAULT_ICON_BASE_PATH;
use crate::registry::DEFAULT_MAX_MARKERS;

/// Initial center of the map. Native maps render nothing until a center is set once.
pub const DEFAULT_CENTER: GeoPosition = GeoPosition::new(37.415328, -122.076575);

const DEFAULT_BRIDGE_TIMEOUT_MS: u64 = 10_000;

/// Base map type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MapType {
    /// Road map.
    #[default]
    Roadmap,
    /// Satellite imagery.
    Satellite,
    /// Satellite imagery with roads and labels.
    Hybrid,
    /// Terrain relief.
    Terrain,
    /// No base map.
    None,
}

/// On-screen controls of the native map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MapControls {
    /// Compass button.
    pub compass: bool,
    /// "My location" button.
    pub my_location_button: bool,
    /// Zoom buttons.
    pub zoom: bool,
}

impl Default for MapControls {
    fn default() -> Self {
        Self {
            compass: true,
            my_location_button: true,
            zoom: true,
        }
    }
}

/// Gestures accepted by the native map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MapGestures {
    /// Pan.
    pub scroll: bool,
    /// Tilt.
    pub tilt: bool,
    /// Rotate.
    pub rotate: bool,
    /// Pinch zoom.
    pub zoom: bool,
}

impl Default for MapGestures {
    fn default() -> Self {
        Self {
            scroll: true,
            tilt: true,
            rotate: true,
            zoom: true,
        }
    }
}

/// Baseline options applied to the native map when it becomes ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MapOptions {
    /// Base map type.
    pub map_type: MapType,
    /// On-screen controls.
    pub controls: MapControls,
    /// Accepted gestures.
    pub gestures: MapGestures,
}

/// Where marker icons are found and how large they are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerIconConfig {
    /// Prefix prepended to the icon key to form the icon url.
    pub asset_root: String,
    /// Icon key prefix, followed by the level and the category suffix.
    pub base_path: String,
    /// Icon width in pixels.
    pub width: u32,
    /// Icon height in pixels.
    pub height: u32,
    /// Text shown under the marker title.
    pub snippet: String,
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            asset_root: "www/".to_string(),
            base_path: DEFAULT_ICON_BASE_PATH.to_string(),
            width: 30,
            height: 50,
            snippet: "View details".to_string(),
        }
    }
}

/// Style of the route polyline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PolylineStyle {
    /// Color in `#RRGGBB` notation.
    pub color: String,
    /// Width in pixels.
    pub width: u32,
    /// Draw segments as great circle arcs.
    pub geodesic: bool,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: "#AA00FF".to_string(),
            width: 10,
            geodesic: true,
        }
    }
}

/// Configuration of a [`NativeMapProvider`](crate::NativeMapProvider).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MapProviderConfig {
    /// Marker budget. Exceeding it flushes all markers before the next render.
    pub max_markers: usize,
    /// Center set right after the map becomes ready.
    pub default_center: GeoPosition,
    /// How long a bridged native call may take before it fails with a timeout.
    pub bridge_timeout_ms: u64,
    /// Baseline options applied on readiness, unless overridden in `init_map`.
    pub map_options: MapOptions,
    /// Marker icons.
    pub icons: MarkerIconConfig,
    /// Route polyline style.
    pub polyline: PolylineStyle,
}

impl Default for MapProviderConfig {
    fn default() -> Self {
        Self {
            max_markers: DEFAULT_MAX_MARKERS,
            default_center: DEFAULT_CENTER,
            bridge_timeout_ms: DEFAULT_BRIDGE_TIMEOUT_MS,
            map_options: MapOptions::default(),
            icons: MarkerIconConfig::default(),
            polyline: PolylineStyle::default(),
        }
    }
}

impl MapProviderConfig {
    /// Timeout of bridged native calls.
    pub fn bridge_timeout(&self) -> Duration {
        Duration::from_millis(self.bridge_timeout_ms)
    }
}
