use bike2books_core::util::geo_utils::{self, GeoPoint};
use serde::{Deserialize, Serialize};

/// a sampled trip origin, tagged with its position in the batch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trip {
    pub index: usize,
    pub location: GeoPoint,
}

/// flat (index, lon, lat) row used for tabular output
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TripRow {
    pub index: usize,
    pub lon: f64,
    pub lat: f64,
}

impl Trip {
    pub fn new(index: usize, location: GeoPoint) -> Self {
        Self { index, location }
    }

    pub fn lon(&self) -> f64 {
        geo_utils::lon(&self.location)
    }

    pub fn lat(&self) -> f64 {
        geo_utils::lat(&self.location)
    }

    pub fn as_tuple(&self) -> (usize, f64, f64) {
        (self.index, self.lon(), self.lat())
    }
}

impl From<&Trip> for TripRow {
    fn from(trip: &Trip) -> Self {
        TripRow {
            index: trip.index,
            lon: trip.lon(),
            lat: trip.lat(),
        }
    }
}
