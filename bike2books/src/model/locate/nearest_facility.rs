use bike2books_core::util::geo_utils::{self, GeoPoint};
use serde::{Deserialize, Serialize};

use super::Facility;
use crate::error::Bike2BooksError;

/// the facility closest to some query location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NearestFacility {
    pub name: String,
    pub location: GeoPoint,
    /// great-circle distance from the query location, in miles
    pub distance_miles: f64,
}

/// finds the facility closest to `location`.
///
/// candidates are ranked by planar distance over raw coordinates, which
/// preserves ordering at city scale. the reported distance is recomputed as
/// the great-circle distance to the winning facility. when candidates tie,
/// the first one in `facilities` wins.
///
/// # Arguments
///
/// * `location`   - query point
/// * `facilities` - candidates to search
///
/// # Returns
///
/// * the nearest facility's name and distance in miles, or `EmptyCollection`
///   if there are no candidates
pub fn nearest_facility(
    location: &GeoPoint,
    facilities: &[Facility],
) -> Result<NearestFacility, Bike2BooksError> {
    let (nearest, planar) = facilities
        .iter()
        .map(|facility| {
            let distance = geo_utils::planar_distance(location, &facility.location);
            (facility, distance)
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .ok_or(Bike2BooksError::EmptyCollection)?;

    let distance_miles = geo_utils::geodesic_distance_miles(location, &nearest.location);
    log::debug!(
        "nearest of {} facilities is '{}' (planar {planar}, {distance_miles} miles)",
        facilities.len(),
        nearest.name
    );
    Ok(NearestFacility {
        name: nearest.name.clone(),
        location: nearest.location,
        distance_miles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike2books_core::util::geo_utils::{lat_lon, lon_lat};

    fn facilities() -> Vec<Facility> {
        vec![
            Facility::new("A", lon_lat(0.0, 0.0)),
            Facility::new("B", lon_lat(1.0, 1.0)),
        ]
    }

    #[test]
    fn test_nearest_of_two() {
        let query = lon_lat(0.1, 0.1);
        let result = nearest_facility(&query, &facilities()).expect("should find nearest");
        assert_eq!(result.name, "A");
        assert_eq!(result.location, lon_lat(0.0, 0.0));
        let expected = geo_utils::geodesic_distance_miles(&query, &lon_lat(0.0, 0.0));
        assert!((result.distance_miles - expected).abs() < 1e-9);
    }

    #[test]
    fn test_query_at_facility_is_zero_distance() {
        let libraries = vec![
            Facility::new("Central", lat_lon(32.7084, -117.1559)),
            Facility::new("North Park", lat_lon(32.7486, -117.1296)),
            Facility::new("Mission Hills-Hillcrest", lat_lon(32.7491, -117.1713)),
        ];
        for library in libraries.iter() {
            let result =
                nearest_facility(&library.location, &libraries).expect("should find nearest");
            assert_eq!(result.name, library.name);
            assert!(result.distance_miles.abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_facility_always_returned() {
        let only = vec![Facility::new("Only", lat_lon(32.7, -117.1))];
        for query in [
            lat_lon(0.0, 0.0),
            lat_lon(-45.0, 170.0),
            lat_lon(32.7, -117.1),
            lat_lon(89.0, -179.0),
        ] {
            let result = nearest_facility(&query, &only).expect("should find nearest");
            assert_eq!(result.name, "Only");
        }
    }

    #[test]
    fn test_empty_collection() {
        let result = nearest_facility(&lon_lat(0.0, 0.0), &[]);
        assert!(matches!(result, Err(Bike2BooksError::EmptyCollection)));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let tied = vec![
            Facility::new("West", lon_lat(-1.0, 0.0)),
            Facility::new("East", lon_lat(1.0, 0.0)),
        ];
        let result = nearest_facility(&lon_lat(0.0, 0.0), &tied).expect("should find nearest");
        assert_eq!(result.name, "West");
    }
}
