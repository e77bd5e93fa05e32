use bike2books_core::util::geo_utils::{self, GeoPoint};
use uom::si::{
    f64::{Length, Time},
    length::mile,
};

use super::{TravelComparison, TravelMode, TravelSpeeds};
use crate::error::Bike2BooksError;

/// estimates travel time as the great-circle distance between `start` and
/// `finish` divided by the average speed of `mode`. no route, bike lane or
/// parking effects are modeled.
///
/// # Arguments
///
/// * `start`  - trip origin
/// * `finish` - trip destination
/// * `mode`   - travel mode
/// * `speeds` - average speeds per mode
///
/// # Returns
///
/// * estimated travel time, or an error if the speed for `mode` is not positive
pub fn estimate_travel_time(
    start: &GeoPoint,
    finish: &GeoPoint,
    mode: TravelMode,
    speeds: &TravelSpeeds,
) -> Result<Time, Bike2BooksError> {
    speeds.validate()?;
    let distance = direct_distance(start, finish);
    Ok(distance / speeds.velocity(mode))
}

/// estimates both modes between `start` and `finish`
pub fn compare(
    start: &GeoPoint,
    finish: &GeoPoint,
    speeds: &TravelSpeeds,
) -> Result<TravelComparison, Bike2BooksError> {
    speeds.validate()?;
    let distance = direct_distance(start, finish);
    Ok(TravelComparison {
        distance,
        bike: distance / speeds.velocity(TravelMode::Bike),
        drive: distance / speeds.velocity(TravelMode::Drive),
    })
}

fn direct_distance(start: &GeoPoint, finish: &GeoPoint) -> Length {
    Length::new::<mile>(geo_utils::geodesic_distance_miles(start, finish))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike2books_core::util::geo_utils::lat_lon;
    use uom::si::time::{hour, minute};

    #[test]
    fn test_estimate_is_distance_over_speed() {
        let start = lat_lon(32.0, -117.0);
        let finish = lat_lon(33.0, -117.0);
        let miles = geo_utils::geodesic_distance_miles(&start, &finish);
        let speeds = TravelSpeeds::default();

        let bike = estimate_travel_time(&start, &finish, TravelMode::Bike, &speeds)
            .expect("should estimate");
        assert!((bike.get::<hour>() - miles / 10.0).abs() < 1e-9);

        let drive = estimate_travel_time(&start, &finish, TravelMode::Drive, &speeds)
            .expect("should estimate");
        assert!((drive.get::<hour>() - miles / 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_point_takes_no_time() {
        let p = lat_lon(32.75, -117.166667);
        let comparison = compare(&p, &p, &TravelSpeeds::default()).expect("should estimate");
        assert_eq!(comparison.bike.get::<minute>(), 0.0);
        assert_eq!(comparison.drive.get::<minute>(), 0.0);
        assert_eq!(comparison.faster(), TravelMode::Bike);
    }

    #[test]
    fn test_compare_picks_faster_mode() {
        let start = lat_lon(32.75, -117.166667);
        let finish = lat_lon(32.7084, -117.1559);
        let comparison = compare(&start, &finish, &TravelSpeeds::default()).expect("should estimate");
        assert_eq!(comparison.faster(), TravelMode::Drive);
        assert!(comparison.bike > comparison.drive);

        let fast_bike = TravelSpeeds {
            bike_mph: 30.0,
            drive_mph: 25.0,
        };
        let comparison = compare(&start, &finish, &fast_bike).expect("should estimate");
        assert_eq!(comparison.faster(), TravelMode::Bike);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let p = lat_lon(32.75, -117.166667);
        let speeds = TravelSpeeds {
            bike_mph: 0.0,
            drive_mph: 25.0,
        };
        let result = estimate_travel_time(&p, &p, TravelMode::Drive, &speeds);
        assert!(matches!(result, Err(Bike2BooksError::InvalidConfiguration(_))));
    }
}
