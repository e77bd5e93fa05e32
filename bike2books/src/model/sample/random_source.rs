use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// a source of uniform random draws used by the location sampler. any
/// [`rand::RngCore`] is a random source, so seeded generators can be passed
/// in to make sampling reproducible.
pub trait RandomSource {
    /// draws a value uniformly from `[low, high)`. when `low == high` the
    /// result is exactly `low`.
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn draw_uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit: f64 = self.random();
        low + (high - low) * unit
    }
}

/// creates a generator seeded from the operating system, used whenever a
/// caller does not provide their own random source.
pub fn fresh_random_source() -> StdRng {
    StdRng::from_os_rng()
}

pub fn seeded_random_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
