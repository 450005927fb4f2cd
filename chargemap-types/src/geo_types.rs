use ::geo_types::{coord, Coord, Point, Rect};

use crate::{GeoBounds, GeoLatLng, GeoPoint, GeoPosition};

impl From<GeoLatLng> for Coord<f64> {
    fn from(value: GeoLatLng) -> Self {
        coord!(x: value.lng(), y: value.lat())
    }
}

impl From<Coord<f64>> for GeoLatLng {
    fn from(value: Coord<f64>) -> Self {
        GeoLatLng::new(value.y, value.x)
    }
}

impl From<GeoPosition> for Point<f64> {
    fn from(value: GeoPosition) -> Self {
        Point::new(value.lng(), value.lat())
    }
}

impl From<Point<f64>> for GeoPosition {
    fn from(value: Point<f64>) -> Self {
        GeoPosition::new(value.y(), value.x())
    }
}

impl From<GeoBounds> for Rect<f64> {
    fn from(value: GeoBounds) -> Self {
        Rect::new(Coord::from(value.south_west()), Coord::from(value.north_east()))
    }
}
