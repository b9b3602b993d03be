//! Configuration for robokit
//!
//! Loads a TOML file with one section per component. Every section and key is
//! optional; missing values fall back to the demo robot defaults.

use crate::error::{Result, RobokitError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RobokitConfig {
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub control: ControlConfig,
    #[serde(default)]
    pub sensors: SensorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Robot identity and joint count
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RobotConfig {
    /// Robot name (default: "demo_bot")
    #[serde(default = "default_robot_name")]
    pub name: String,

    /// Degrees of freedom, i.e. number of joints (default: 3)
    #[serde(default = "default_dof")]
    pub dof: usize,
}

/// Occupancy grid dimensions
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlannerConfig {
    /// Grid width in cells (default: 10)
    #[serde(default = "default_grid_size")]
    pub width: usize,

    /// Grid height in cells (default: 10)
    #[serde(default = "default_grid_size")]
    pub height: usize,
}

/// Control loop timing
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ControlConfig {
    /// Tick period in milliseconds (default: 10)
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,

    /// Position increment applied to every joint per tick, radians (default: 0.01)
    #[serde(default = "default_joint_step")]
    pub joint_step: f64,
}

/// Sensor parameters
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SensorsConfig {
    /// Frequency of the noisy sine sensor in rad/s (default: 1.0)
    #[serde(default = "default_noisy_sine_frequency")]
    pub noisy_sine_frequency: f64,

    /// Seed of the noisy sine noise source (default: 42)
    #[serde(default = "default_noisy_sine_seed")]
    pub noisy_sine_seed: u64,

    /// Seed of the random walk step source (default: 123)
    #[serde(default = "default_random_walk_seed")]
    pub random_walk_seed: u64,
}

/// Which logging sink the binary wires into the control loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Forward to the `log` facade
    #[default]
    Log,
    /// Write prefixed lines straight to stdout/stderr
    Console,
}

/// Logging configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Sink used by the control loop
    #[serde(default)]
    pub sink: SinkKind,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            name: default_robot_name(),
            dof: default_dof(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            width: default_grid_size(),
            height: default_grid_size(),
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
            joint_step: default_joint_step(),
        }
    }
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            noisy_sine_frequency: default_noisy_sine_frequency(),
            noisy_sine_seed: default_noisy_sine_seed(),
            random_walk_seed: default_random_walk_seed(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            sink: SinkKind::default(),
        }
    }
}

// Default value functions
fn default_robot_name() -> String {
    "demo_bot".to_string()
}
fn default_dof() -> usize {
    3
}
fn default_grid_size() -> usize {
    10
}
fn default_period_ms() -> u64 {
    10
}
fn default_joint_step() -> f64 {
    0.01
}
fn default_noisy_sine_frequency() -> f64 {
    1.0
}
fn default_noisy_sine_seed() -> u64 {
    42
}
fn default_random_walk_seed() -> u64 {
    123
}
fn default_log_level() -> String {
    "info".to_string()
}

impl ControlConfig {
    /// Tick period as a `Duration`
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl RobokitConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RobokitError::Config(format!("Failed to read config file: {}", e)))?;
        let config: RobokitConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Reject values the control loop cannot run with.
    ///
    /// Zero joints and empty grids are legal. Grid extents must fit the
    /// planner's `i32` coordinates.
    pub fn validate(&self) -> Result<()> {
        let max_extent = i32::MAX as usize;
        if self.planner.width > max_extent || self.planner.height > max_extent {
            return Err(RobokitError::Config(format!(
                "planner grid {}x{} exceeds {} cells per side",
                self.planner.width, self.planner.height, max_extent
            )));
        }
        if self.control.period_ms == 0 {
            return Err(RobokitError::Config(
                "control.period_ms must be greater than zero".to_string(),
            ));
        }
        if !self.control.joint_step.is_finite() {
            return Err(RobokitError::Config(
                "control.joint_step must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RobokitConfig::default();
        assert_eq!(config.robot.name, "demo_bot");
        assert_eq!(config.robot.dof, 3);
        assert_eq!(config.planner.width, 10);
        assert_eq!(config.planner.height, 10);
        assert_eq!(config.control.period(), Duration::from_millis(10));
        assert_eq!(config.control.joint_step, 0.01);
        assert_eq!(config.sensors.noisy_sine_seed, 42);
        assert_eq!(config.sensors.random_walk_seed, 123);
        assert_eq!(config.logging.sink, SinkKind::Log);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_content = r#"
[robot]
dof = 6

[logging]
sink = "console"
"#;

        let config: RobokitConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.robot.name, "demo_bot");
        assert_eq!(config.robot.dof, 6);
        assert_eq!(config.planner.width, 10);
        assert_eq!(config.control.period_ms, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.sink, SinkKind::Console);
    }

    #[test]
    fn test_toml_serialization() {
        let config = RobokitConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[robot]"));
        assert!(toml_string.contains("[planner]"));
        assert!(toml_string.contains("[control]"));
        assert!(toml_string.contains("[sensors]"));
        assert!(toml_string.contains("[logging]"));
        assert!(toml_string.contains("name = \"demo_bot\""));
        assert!(toml_string.contains("sink = \"log\""));
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut config = RobokitConfig::default();
        config.control.period_ms = 0;
        assert!(matches!(config.validate(), Err(RobokitError::Config(_))));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let mut config = RobokitConfig::default();
        config.planner.width = i32::MAX as usize + 1;
        assert!(matches!(config.validate(), Err(RobokitError::Config(_))));

        config.planner.width = i32::MAX as usize;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_sink_rejected() {
        let result: std::result::Result<RobokitConfig, _> =
            toml::from_str("[logging]\nsink = \"syslog\"\n");
        assert!(result.is_err());
    }
}
