//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoTypesError {
    /// Latitude is not a finite value in `[-90, 90]`.
    #[error("invalid latitude: {0}")]
    InvalidLatitude(f64),
    /// Longitude is not a finite value in `[-180, 180]`.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
}
