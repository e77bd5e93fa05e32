use serde::{Deserialize, Serialize};
use uom::si::{f64::Velocity, velocity::mile_per_hour};

use super::TravelMode;
use crate::error::Bike2BooksError;

pub const DEFAULT_BIKE_MPH: f64 = 10.0;
pub const DEFAULT_DRIVE_MPH: f64 = 25.0;

/// average door-to-door speeds, in miles per hour
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct TravelSpeeds {
    pub bike_mph: f64,
    pub drive_mph: f64,
}

impl Default for TravelSpeeds {
    fn default() -> Self {
        Self {
            bike_mph: DEFAULT_BIKE_MPH,
            drive_mph: DEFAULT_DRIVE_MPH,
        }
    }
}

impl TravelSpeeds {
    pub fn validate(&self) -> Result<(), Bike2BooksError> {
        for mode in [TravelMode::Bike, TravelMode::Drive] {
            let mph = self.mph(mode);
            if !mph.is_finite() || mph <= 0.0 {
                return Err(Bike2BooksError::InvalidConfiguration(format!(
                    "{mode} speed must be strictly positive, found {mph} mph"
                )));
            }
        }
        Ok(())
    }

    pub fn mph(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Bike => self.bike_mph,
            TravelMode::Drive => self.drive_mph,
        }
    }

    pub fn velocity(&self, mode: TravelMode) -> Velocity {
        Velocity::new::<mile_per_hour>(self.mph(mode))
    }
}
