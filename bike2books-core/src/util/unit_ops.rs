use uom::si::f64::Length;

/// miles of latitude per degree at any location on a spherical earth.
pub const MILES_PER_DEGREE_LATITUDE: f64 = 69.0;

/// miles of longitude per degree at the equator.
pub const MILES_PER_DEGREE_LONGITUDE_AT_EQUATOR: f64 = 69.17;

pub fn meters_to_miles(meters: f64) -> f64 {
    Length::new::<uom::si::length::meter>(meters).get::<uom::si::length::mile>()
}

/// approximate miles spanned by one degree at the given latitude, taken as
/// the mean of the north-south and east-west spans so that a circle of
/// degrees stays roughly circular in miles.
///
/// # Arguments
///
/// * `latitude` - latitude in degrees
///
/// # Returns
///
/// * miles per degree. approaches `MILES_PER_DEGREE_LATITUDE / 2` at the poles.
pub fn miles_per_degree_at_latitude(latitude: f64) -> f64 {
    let east_west = MILES_PER_DEGREE_LONGITUDE_AT_EQUATOR * latitude.to_radians().cos();
    (MILES_PER_DEGREE_LATITUDE + east_west) / 2.0
}
