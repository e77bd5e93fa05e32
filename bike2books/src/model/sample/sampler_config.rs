use serde::{Deserialize, Serialize};

use super::{DegreeConversion, LocationSampler, DEFAULT_RADIUS_MILES};
use crate::error::Bike2BooksError;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig {
    /// radius around the center to sample, in miles
    pub radius_miles: f64,
    #[serde(default)]
    pub conversion: DegreeConversion,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            conversion: DegreeConversion::default(),
        }
    }
}

impl TryFrom<&SamplerConfig> for LocationSampler {
    type Error = Bike2BooksError;

    fn try_from(value: &SamplerConfig) -> Result<Self, Self::Error> {
        LocationSampler::new(value.radius_miles, value.conversion)
    }
}
