//! Chargemap is the map layer of an EV charging-station app. It hides the concrete mapping
//! backend behind one provider contract and turns charging point records into markers.
//!
//! # Main components
//!
//! * [`MapProvider`] is the contract the rest of the app talks to. It covers the lifecycle of a
//!   map screen (initialization and readiness), marker rendering, camera control and the route
//!   polyline.
//! * [`NativeMapProvider`] implements the contract over a native map plugin. The plugin itself is
//!   described by the narrow [`platform`] traits, so the provider can be driven by the real
//!   binding or by a fake.
//! * [`PoiClassifier`] decides how each [`Poi`] is drawn: its icon and its tooltip.
//! * [`MarkerRegistry`] keeps exactly one marker per POI on the map and flushes the map once the
//!   marker budget is exceeded.
//! * [`Messenger`] receives the [`MapEvent`]s published by the provider: readiness, camera
//!   movement and marker clicks.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use chargemap::{MapProvider, MapProviderConfig, NativeMapProvider};
//!
//! let (tx, mut events) = tokio::sync::mpsc::unbounded_channel();
//! let provider = NativeMapProvider::new(platform, tx, MapProviderConfig::default());
//! provider.init_map("map-view", None);
//!
//! // After `MapEvent::Ready` is received:
//! provider.show_poi_list_on_map(&pois);
//! let bounds = provider.get_map_bounds().await?;
//! ```

mod bridge;
pub mod classifier;
pub mod config;
pub mod error;
mod messenger;
pub mod platform;
pub mod poi;
pub mod polyline;
mod provider;
pub mod registry;

#[cfg(test)]
mod test_utils;

pub use bridge::bridge;
pub use classifier::PoiClassifier;
pub use config::{MapOptions, MapProviderConfig, MapType};
pub use error::{MapError, NativeMapError};
pub use messenger::{DummyMessenger, MapEvent, Messenger};
pub use poi::{Poi, PoiId};
pub use provider::{MapProvider, MapState, MappingApi, NativeMapProvider, ProviderCapabilities};
pub use registry::MarkerRegistry;

// Reexport chargemap_types
pub use chargemap_types;
