use serde::{Deserialize, Serialize};

use crate::point::GeoLatLng;

/// Viewport rectangle given by its south-west and north-east corners.
///
/// Bounds crossing the antimeridian have `south_west.lng() > north_east.lng()`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoBounds {
    south_west: GeoLatLng,
    north_east: GeoLatLng,
}

impl GeoBounds {
    /// Creates bounds from the south-west and north-east corners as given.
    pub const fn new(south_west: GeoLatLng, north_east: GeoLatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoLatLng {
        self.south_west
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoLatLng {
        self.north_east
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlng;

    #[test]
    fn keeps_corners_as_given() {
        let bounds = GeoBounds::new(latlng!(-20.0, 170.0), latlng!(-10.0, -170.0));
        assert_eq!(bounds.south_west(), latlng!(-20.0, 170.0));
        assert_eq!(bounds.north_east(), latlng!(-10.0, -170.0));
    }
}
