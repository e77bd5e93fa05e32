use bike2books_core::util::geo_utils::{self, GeoPoint};
use itertools::Itertools;

use crate::error::Bike2BooksError;

/// approximate centers of San Diego neighborhoods as (name, latitude, longitude)
const NEIGHBORHOODS: [(&str, f64, f64); 24] = [
    ("Bankers Hill", 32.7305, -117.1650),
    ("Barrio Logan", 32.6970, -117.1434),
    ("City Heights", 32.7476, -117.0997),
    ("Clairemont", 32.8203, -117.1887),
    ("Downtown", 32.7157, -117.1611),
    ("East Village", 32.7116, -117.1537),
    ("Gaslamp Quarter", 32.7115, -117.1597),
    ("Golden Hill", 32.7176, -117.1428),
    ("Hillcrest", 32.75, -117.166667),
    ("Kensington", 32.7647, -117.1031),
    ("La Jolla", 32.8328, -117.2713),
    ("Linda Vista", 32.7873, -117.1709),
    ("Little Italy", 32.7237, -117.1686),
    ("Mission Beach", 32.7707, -117.2522),
    ("Mission Hills", 32.7526, -117.1864),
    ("Mission Valley", 32.7708, -117.1590),
    ("Normal Heights", 32.7632, -117.1134),
    ("North Park", 32.7404, -117.1298),
    ("Ocean Beach", 32.7486, -117.2497),
    ("Old Town", 32.7549, -117.1975),
    ("Pacific Beach", 32.7978, -117.2403),
    ("Point Loma", 32.7316, -117.2417),
    ("South Park", 32.7197, -117.1289),
    ("University Heights", 32.7534, -117.1500),
];

/// names of every known neighborhood, in alphabetical order
pub fn neighborhood_names() -> Vec<&'static str> {
    NEIGHBORHOODS.iter().map(|(name, _, _)| *name).sorted().collect()
}

/// center of the named neighborhood. names are matched exactly.
pub fn neighborhood(name: &str) -> Result<GeoPoint, Bike2BooksError> {
    NEIGHBORHOODS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, lat, lon)| geo_utils::lat_lon(*lat, *lon))
        .ok_or_else(|| Bike2BooksError::KeyNotFound(name.to_string()))
}
