//! Random walk sensor

use super::Sensor;
use super::noise::NoiseGenerator;
use parking_lot::Mutex;

/// Default step seed
pub const RANDOM_WALK_SEED: u64 = 123;

/// Half-width of the per-read step
const STEP_AMPLITUDE: f64 = 0.05;

struct WalkState {
    value: f64,
    steps: NoiseGenerator,
}

/// Accumulates a uniform step on every read and returns the running value.
///
/// The value is unbounded.
pub struct RandomWalkSensor {
    state: Mutex<WalkState>,
}

impl RandomWalkSensor {
    /// Walk starting at zero with the default seed
    pub fn new() -> Self {
        Self::with_seed(RANDOM_WALK_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Mutex::new(WalkState {
                value: 0.0,
                steps: NoiseGenerator::new(seed),
            }),
        }
    }

    /// Current value without taking a step
    pub fn value(&self) -> f64 {
        self.state.lock().value
    }
}

impl Default for RandomWalkSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for RandomWalkSensor {
    fn name(&self) -> &'static str {
        "RandomWalk"
    }

    fn read(&self) -> f64 {
        let mut state = self.state.lock();
        let step = state.steps.symmetric(STEP_AMPLITUDE);
        state.value += step;
        state.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_instances_agree() {
        let a = RandomWalkSensor::new();
        let b = RandomWalkSensor::new();
        for _ in 0..500 {
            assert_eq!(a.read(), b.read());
        }
    }

    #[test]
    fn test_steps_bounded() {
        let sensor = RandomWalkSensor::new();
        let mut previous = sensor.value();
        assert_eq!(previous, 0.0);

        for _ in 0..1000 {
            let v = sensor.read();
            assert!((v - previous).abs() <= STEP_AMPLITUDE + 1e-12);
            previous = v;
        }
        assert_eq!(sensor.value(), previous);
    }

    #[test]
    fn test_read_is_not_idempotent() {
        let sensor = RandomWalkSensor::new();
        let readings: Vec<f64> = (0..20).map(|_| sensor.read()).collect();
        assert!(readings.windows(2).any(|w| w[0] != w[1]));
    }
}
