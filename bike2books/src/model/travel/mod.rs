mod travel_comparison;
mod travel_mode;
mod travel_ops;
mod travel_speeds;

pub use travel_comparison::TravelComparison;
pub use travel_mode::TravelMode;
pub use travel_ops::{compare, estimate_travel_time};
pub use travel_speeds::TravelSpeeds;
