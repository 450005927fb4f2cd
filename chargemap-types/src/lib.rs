//! Immutable geographic value types shared by the `chargemap` marker engine: coordinate pairs
//! ([`GeoLatLng`]), camera or device positions ([`GeoPosition`]) and viewport rectangles
//! ([`GeoBounds`]).
//!
//! Values are plain `Copy` data. The unchecked constructors accept anything the native map
//! reports; use [`NewGeoPoint::try_latlng`] when the input comes from an untrusted source.

mod bounds;
pub mod error;
mod point;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use bounds::GeoBounds;
pub use error::GeoTypesError;
pub use point::{GeoLatLng, GeoPoint, GeoPosition, NewGeoPoint};
