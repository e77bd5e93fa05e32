mod degree_conversion;
mod location_sampler;
mod random_source;
mod sampler_config;
mod trip;
mod trip_format;

pub use degree_conversion::DegreeConversion;
pub use location_sampler::{sample_location, trips, LocationSampler, DEFAULT_RADIUS_MILES};
pub use random_source::{fresh_random_source, seeded_random_source, RandomSource};
pub use sampler_config::SamplerConfig;
pub use trip::{Trip, TripRow};
pub use trip_format::{trips_to_feature_collection, TripFormat};
