use std::f64::consts::PI;

use bike2books_core::util::geo_utils::{self, GeoPoint};

use super::{fresh_random_source, DegreeConversion, RandomSource, Trip};
use crate::error::Bike2BooksError;

pub const DEFAULT_RADIUS_MILES: f64 = 6.0;

/// draws random locations around a center point. a sample is a polar offset
/// from the center: a radius drawn uniformly up to the sample radius (in
/// degrees) followed by an angle drawn uniformly from [0, 2π).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationSampler {
    radius_miles: f64,
    conversion: DegreeConversion,
}

impl Default for LocationSampler {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            conversion: DegreeConversion::default(),
        }
    }
}

impl LocationSampler {
    pub fn new(radius_miles: f64, conversion: DegreeConversion) -> Result<Self, Bike2BooksError> {
        if !radius_miles.is_finite() || radius_miles < 0.0 {
            return Err(Bike2BooksError::InvalidRadius(radius_miles));
        }
        conversion.validate()?;
        Ok(Self {
            radius_miles,
            conversion,
        })
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    pub fn conversion(&self) -> DegreeConversion {
        self.conversion
    }

    /// largest offset, in degrees, that a sample around `center` may have
    pub fn max_offset_degrees(&self, center: &GeoPoint) -> Result<f64, Bike2BooksError> {
        self.conversion.miles_to_degrees(self.radius_miles, center)
    }

    /// samples a single location near `center`.
    ///
    /// # Arguments
    ///
    /// * `center` - point to sample around
    /// * `prng`   - random source. if omitted, a freshly seeded generator is used.
    ///
    /// # Returns
    ///
    /// * the sampled point, which is `center` exactly when the radius is zero
    pub fn sample(
        &self,
        center: &GeoPoint,
        prng: Option<&mut dyn RandomSource>,
    ) -> Result<GeoPoint, Bike2BooksError> {
        match prng {
            Some(source) => self.sample_with(center, source),
            None => {
                let mut source = fresh_random_source();
                self.sample_with(center, &mut source)
            }
        }
    }

    /// samples `n` locations near `center`, all drawn from a single random
    /// source so that a seeded source reproduces the whole batch.
    pub fn trips(
        &self,
        n: usize,
        center: &GeoPoint,
        prng: Option<&mut dyn RandomSource>,
    ) -> Result<Vec<Trip>, Bike2BooksError> {
        match prng {
            Some(source) => self.trips_with(n, center, source),
            None => {
                let mut source = fresh_random_source();
                self.trips_with(n, center, &mut source)
            }
        }
    }

    fn trips_with(
        &self,
        n: usize,
        center: &GeoPoint,
        prng: &mut dyn RandomSource,
    ) -> Result<Vec<Trip>, Bike2BooksError> {
        log::debug!(
            "sampling {n} trips within {} miles of ({}, {})",
            self.radius_miles,
            geo_utils::lon(center),
            geo_utils::lat(center)
        );
        (0..n)
            .map(|index| {
                self.sample_with(center, prng)
                    .map(|location| Trip::new(index, location))
            })
            .collect()
    }

    fn sample_with(
        &self,
        center: &GeoPoint,
        prng: &mut dyn RandomSource,
    ) -> Result<GeoPoint, Bike2BooksError> {
        let max_offset = self.max_offset_degrees(center)?;

        // the draw order (radius, then angle) is part of the contract with seeded sources
        let r = prng.draw_uniform(0.0, max_offset);
        let theta = prng.draw_uniform(0.0, 2.0 * PI);

        let x = r * theta.cos();
        let y = r * theta.sin();
        Ok(geo_utils::lon_lat(center.x() + x, center.y() + y))
    }
}

/// samples a location near `center` with the default degree conversion.
pub fn sample_location(
    center: &GeoPoint,
    radius_miles: f64,
    prng: Option<&mut dyn RandomSource>,
) -> Result<GeoPoint, Bike2BooksError> {
    LocationSampler::new(radius_miles, DegreeConversion::default())?.sample(center, prng)
}

/// samples `n` trips near `center` with the default degree conversion.
pub fn trips(
    n: usize,
    center: &GeoPoint,
    radius_miles: f64,
    prng: Option<&mut dyn RandomSource>,
) -> Result<Vec<Trip>, Bike2BooksError> {
    LocationSampler::new(radius_miles, DegreeConversion::default())?.trips(n, center, prng)
}
