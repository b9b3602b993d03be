//! robokit - Simulated robot scaffold
//!
//! A small set of interacting robot components:
//!
//! - [`robot`]: named robot with a fixed joint bank and owned sensors
//! - [`sensors`]: seeded noisy-sine and random-walk scalar sensors
//! - [`kinematics`]: unit-link planar forward / inverse kinematics
//! - [`planner`]: breadth-first reachability on an occupancy grid
//! - [`control_loop`]: periodic background thread advancing joint positions
//! - [`logging`]: injectable, thread-safe logging sinks
//!
//! ```no_run
//! use robokit::{ControlLoop, LogCrateSink, Planner, RandomWalkSensor, Robot, Sensor};
//! use std::sync::Arc;
//!
//! let mut robot = Robot::new("demo_bot", 3);
//! robot.add_sensor(Box::new(RandomWalkSensor::new()));
//! let planner = Planner::new(10, 10);
//!
//! let mut control = ControlLoop::new(&robot, &planner, Arc::new(LogCrateSink));
//! control.start()?;
//! for sensor in robot.sensors() {
//!     println!("{}: {}", sensor.name(), sensor.read());
//! }
//! control.stop();
//! # Ok::<(), robokit::RobokitError>(())
//! ```

pub mod config;
pub mod control_loop;
pub mod error;
pub mod kinematics;
pub mod logging;
pub mod planner;
pub mod robot;
pub mod sensors;

// Re-export commonly used types
pub use config::RobokitConfig;
pub use control_loop::{ControlLoop, ControlLoopConfig};
pub use error::{Result, RobokitError};
pub use kinematics::Pose2D;
pub use logging::{ConsoleSink, LogCrateSink, LogSink, MemorySink, Severity, SharedSink};
pub use planner::Planner;
pub use robot::{JointBank, JointState, Robot};
pub use sensors::{NoisySineSensor, RandomWalkSensor, Sensor};
