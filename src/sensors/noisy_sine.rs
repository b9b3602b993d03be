//! Sine wave sensor with uniform additive noise

use super::Sensor;
use super::noise::NoiseGenerator;
use parking_lot::Mutex;
use std::time::Instant;

/// Default noise seed
pub const NOISY_SINE_SEED: u64 = 42;

/// Half-width of the additive noise band
const NOISE_AMPLITUDE: f64 = 0.01;

/// Reads `sin(frequency * t) + noise`.
///
/// `t` is the number of seconds on the monotonic clock since the sensor was
/// created, sampled at each call. Back-to-back reads share almost the same
/// sine component and differ mostly by the fresh noise draw.
pub struct NoisySineSensor {
    frequency: f64,
    origin: Instant,
    noise: Mutex<NoiseGenerator>,
}

impl NoisySineSensor {
    /// Sensor with the default seed
    pub fn new(frequency: f64) -> Self {
        Self::with_seed(frequency, NOISY_SINE_SEED)
    }

    pub fn with_seed(frequency: f64, seed: u64) -> Self {
        Self {
            frequency,
            origin: Instant::now(),
            noise: Mutex::new(NoiseGenerator::new(seed)),
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Sensor for NoisySineSensor {
    fn name(&self) -> &'static str {
        "NoisySine"
    }

    fn read(&self) -> f64 {
        let t = self.origin.elapsed().as_secs_f64();
        let noise = self.noise.lock().symmetric(NOISE_AMPLITUDE);
        (self.frequency * t).sin() + noise
    }
}
