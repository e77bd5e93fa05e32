use bike2books_core::util::{
    geo_utils::{self, GeoPoint},
    unit_ops,
};
use serde::{Deserialize, Serialize};

use crate::error::Bike2BooksError;

/// rule of thumb for miles per degree around downtown San Diego.
pub const DEFAULT_MILES_PER_DEGREE: f64 = 66.9;

/// converts a sample radius in miles into a radius in degrees of
/// latitude/longitude.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DegreeConversion {
    /// a constant number of miles per degree, only accurate near the
    /// latitude it was chosen for.
    Fixed { miles_per_degree: f64 },
    /// derives miles per degree from the latitude of the sample center.
    Latitude,
}

impl Default for DegreeConversion {
    fn default() -> Self {
        DegreeConversion::Fixed {
            miles_per_degree: DEFAULT_MILES_PER_DEGREE,
        }
    }
}

impl DegreeConversion {
    pub fn validate(&self) -> Result<(), Bike2BooksError> {
        match self {
            DegreeConversion::Fixed { miles_per_degree } => {
                if miles_per_degree.is_finite() && *miles_per_degree > 0.0 {
                    Ok(())
                } else {
                    Err(Bike2BooksError::InvalidConfiguration(format!(
                        "miles per degree must be strictly positive, found {miles_per_degree}"
                    )))
                }
            }
            DegreeConversion::Latitude => Ok(()),
        }
    }

    /// miles spanned by one degree around the given center. the latitude
    /// conversion fails for centers where the derived value is not strictly
    /// positive.
    pub fn miles_per_degree(&self, center: &GeoPoint) -> Result<f64, Bike2BooksError> {
        self.validate()?;
        match self {
            DegreeConversion::Fixed { miles_per_degree } => Ok(*miles_per_degree),
            DegreeConversion::Latitude => {
                let lat = geo_utils::lat(center);
                let miles_per_degree = unit_ops::miles_per_degree_at_latitude(lat);
                if miles_per_degree.is_finite() && miles_per_degree > 0.0 {
                    Ok(miles_per_degree)
                } else {
                    Err(Bike2BooksError::InvalidConfiguration(format!(
                        "miles per degree at latitude {lat} must be strictly positive, found {miles_per_degree}"
                    )))
                }
            }
        }
    }

    /// converts a distance in miles around `center` into degrees
    pub fn miles_to_degrees(&self, miles: f64, center: &GeoPoint) -> Result<f64, Bike2BooksError> {
        let miles_per_degree = self.miles_per_degree(center)?;
        Ok(miles / miles_per_degree)
    }
}
