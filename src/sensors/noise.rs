//! Seeded noise source shared by the simulated sensors

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Uniform};

/// Noise generator with a fixed seed for reproducible sensor streams
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a generator seeded with `seed`.
    ///
    /// Two generators built from the same seed yield the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in the closed interval `[-half_width, half_width]`
    #[inline]
    pub fn symmetric(&mut self, half_width: f64) -> f64 {
        let w = half_width.abs();
        if w == 0.0 {
            return 0.0;
        }
        Uniform::new_inclusive(-w, w).sample(&mut self.rng)
    }
}
