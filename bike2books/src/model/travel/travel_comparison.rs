use uom::si::f64::{Length, Time};

use super::TravelMode;

/// bike and drive estimates between the same two points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TravelComparison {
    pub distance: Length,
    pub bike: Time,
    pub drive: Time,
}

impl TravelComparison {
    /// the mode with the shorter estimate. biking wins ties.
    pub fn faster(&self) -> TravelMode {
        if self.bike <= self.drive {
            TravelMode::Bike
        } else {
            TravelMode::Drive
        }
    }

    pub fn time(&self, mode: TravelMode) -> Time {
        match mode {
            TravelMode::Bike => self.bike,
            TravelMode::Drive => self.drive,
        }
    }
}
