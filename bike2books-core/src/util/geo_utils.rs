use geo::{Distance, Euclidean, Haversine, Point};

use crate::util::unit_ops;

/// a location on the earth. all bike2books points use the `geo` axis order,
/// where `x` is longitude and `y` is latitude.
pub type GeoPoint = Point<f64>;

/// builds a point from (longitude, latitude) order
pub fn lon_lat(lon: f64, lat: f64) -> GeoPoint {
    Point::new(lon, lat)
}

/// builds a point from (latitude, longitude) order, which is how most
/// published neighborhood and city-center coordinates are written.
pub fn lat_lon(lat: f64, lon: f64) -> GeoPoint {
    Point::new(lon, lat)
}

pub fn lon(point: &GeoPoint) -> f64 {
    point.x()
}

pub fn lat(point: &GeoPoint) -> f64 {
    point.y()
}

/// euclidean distance between two points treating raw degree coordinates as
/// a flat plane. only meaningful for ranking candidates at city scale, the
/// value itself is not a distance on the earth.
///
/// # Arguments
///
/// * `a` - first point
/// * `b` - second point
///
/// # Returns
///
/// * distance in degree units
pub fn planar_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    Euclidean.distance(*a, *b)
}

/// great-circle distance between two points, in miles.
pub fn geodesic_distance_miles(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let meters = Haversine.distance(*a, *b);
    unit_ops::meters_to_miles(meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lon_is_stored_as_lon_lat() {
        let p = lat_lon(32.75, -117.166667);
        assert_eq!(p.x(), -117.166667);
        assert_eq!(p.y(), 32.75);
        assert_eq!(lat(&p), 32.75);
        assert_eq!(lon(&p), -117.166667);
        assert_eq!(p, lon_lat(-117.166667, 32.75));
    }

    #[test]
    fn test_planar_distance() {
        let a = lon_lat(0.0, 0.0);
        let b = lon_lat(3.0, 4.0);
        assert!((planar_distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_geodesic_distance_zero_for_same_point() {
        let p = lat_lon(32.7157, -117.1611);
        assert!(geodesic_distance_miles(&p, &p).abs() < 1e-9);
    }

    #[test]
    fn test_geodesic_distance_one_degree_of_latitude() {
        // one degree of latitude along a meridian is ~69.1 miles on a spherical earth
        let a = lat_lon(32.0, -117.0);
        let b = lat_lon(33.0, -117.0);
        let miles = geodesic_distance_miles(&a, &b);
        assert!((miles - 69.1).abs() < 0.1, "found {miles}");
    }
}
