use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::GeoTypesError;

/// A point on the Earth surface given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lng(&self) -> f64;
}

/// Geographic points that can be constructed from raw coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point without validating the coordinates.
    fn latlng(lat: f64, lng: f64) -> Self;

    /// Creates a point, failing if the coordinates are out of range or not finite.
    fn try_latlng(lat: f64, lng: f64) -> Result<Self, GeoTypesError> {
        validate(lat, lng)?;
        Ok(Self::latlng(lat, lng))
    }
}

fn validate(lat: f64, lng: f64) -> Result<(), GeoTypesError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(GeoTypesError::InvalidLatitude(lat));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(GeoTypesError::InvalidLongitude(lng));
    }

    Ok(())
}

/// Coordinate pair, used for the corners of a [`GeoBounds`](crate::GeoBounds) and for route
/// vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoLatLng {
    latitude: f64,
    longitude: f64,
}

impl GeoLatLng {
    /// Creates a new coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl GeoPoint for GeoLatLng {
    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lng(&self) -> f64 {
        self.longitude
    }
}

impl NewGeoPoint for GeoLatLng {
    fn latlng(lat: f64, lng: f64) -> Self {
        Self::new(lat, lng)
    }
}

/// Position of the map camera or of a device, as reported by a map provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Creates a new position.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinates of the position as a [`GeoLatLng`].
    pub fn coords(&self) -> GeoLatLng {
        GeoLatLng::new(self.latitude, self.longitude)
    }
}

impl GeoPoint for GeoPosition {
    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lng(&self) -> f64 {
        self.longitude
    }
}

impl NewGeoPoint for GeoPosition {
    fn latlng(lat: f64, lng: f64) -> Self {
        Self::new(lat, lng)
    }
}

impl From<GeoLatLng> for GeoPosition {
    fn from(value: GeoLatLng) -> Self {
        Self::new(value.latitude, value.longitude)
    }
}

impl From<GeoPosition> for GeoLatLng {
    fn from(value: GeoPosition) -> Self {
        value.coords()
    }
}

macro_rules! impl_approx {
    ($t:ty) => {
        impl AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.latitude.abs_diff_eq(&other.latitude, epsilon)
                    && self.longitude.abs_diff_eq(&other.longitude, epsilon)
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.latitude
                    .relative_eq(&other.latitude, epsilon, max_relative)
                    && self
                        .longitude
                        .relative_eq(&other.longitude, epsilon, max_relative)
            }
        }
    };
}

impl_approx!(GeoLatLng);
impl_approx!(GeoPosition);

/// Creates a new [`GeoLatLng`] from latitude and longitude values (in degrees).
///
/// ```
/// use chargemap_types::{latlng, GeoPoint};
///
/// let point = latlng!(51.5, -0.1);
/// assert_eq!(point.lat(), 51.5);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        <$crate::GeoLatLng as $crate::NewGeoPoint>::latlng($lat, $lng)
    };
}
