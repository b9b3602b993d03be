//! Simulated scalar sensors
//!
//! Every sensor exposes the same capability: a static name and a `read()` that
//! always succeeds. Reads take `&self`; each sensor keeps its generator behind
//! its own lock, so a sensor may be polled from any thread, one read at a time.
//!
//! | Sensor | Reading | Seed |
//! |--------|---------|------|
//! | [`NoisySineSensor`] | `sin(f * t)` + uniform noise in ±0.01 | 42 |
//! | [`RandomWalkSensor`] | previous value + uniform step in ±0.05 | 123 |

mod noise;
mod noisy_sine;
mod random_walk;

pub use noise::NoiseGenerator;
pub use noisy_sine::NoisySineSensor;
pub use random_walk::RandomWalkSensor;

/// Scalar sensor capability
pub trait Sensor: Send + Sync {
    /// Variant name, e.g. `"NoisySine"`
    fn name(&self) -> &'static str;

    /// Take one reading. Advances the sensor's internal state.
    fn read(&self) -> f64;
}
