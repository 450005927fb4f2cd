//! Error types used by the crate.

use std::time::Duration;

use thiserror::Error;

use crate::polyline::PolylineError;

/// Failure reported by the native map collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeMapError {
    /// The native call failed. Details are inside.
    #[error("native map call failed: {0}")]
    Failed(String),
    /// The native call completed but returned nothing.
    #[error("native map returned no data")]
    NoData,
    /// The native backend does not implement the call.
    #[error("operation is not supported by the native map")]
    Unsupported,
}

/// Error returned to the callers of a [`MapProvider`](crate::MapProvider).
#[derive(Debug, Error)]
pub enum MapError {
    /// The map has not signalled readiness yet.
    #[error("map is not ready")]
    NotReady,
    /// Native mapping capability is missing. This state is permanent for the provider instance.
    #[error("native mapping is unavailable: {0}")]
    Unavailable(String),
    /// The native counterpart of a bridged call reported failure.
    #[error(transparent)]
    Native(#[from] NativeMapError),
    /// The map returned no visible region, e.g. because it is not laid out yet.
    #[error("failed to get map bounds")]
    NoVisibleRegion,
    /// The native call did not complete in time.
    #[error("native map call timed out after {0:?}")]
    Timeout(Duration),
    /// The native side dropped the completion callback without invoking it.
    #[error("native map dropped the completion callback")]
    CallbackDropped,
    /// The provider does not support the operation.
    #[error("{0} is not supported by this map provider")]
    Unsupported(&'static str),
    /// The encoded route path could not be decoded.
    #[error("invalid encoded polyline")]
    Polyline(#[from] PolylineError),
}
