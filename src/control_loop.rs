//! Periodic control loop
//!
//! Runs on a dedicated OS thread and advances every joint of the bound robot
//! by a fixed step once per period. The step is a placeholder motion, not a
//! controller; joint velocities are never touched.
//!
//! # State machine
//!
//! ```text
//!            start()                 stop()
//! Stopped ───────────▶ Running ───────────▶ Stopped
//!    ▲ stop(): no-op      │ start(): no-op
//!    └────────────────────┘
//! ```
//!
//! # Timing
//!
//! The thread sleeps until the next deadline rather than spinning. Deadlines
//! advance by exactly one period; if the thread falls more than a period
//! behind, the schedule restarts from "now" instead of bursting to catch up.
//!
//! `stop()` clears the running flag and joins the thread, so no joint is
//! modified after it returns. It waits at most one period plus one tick.

use crate::config::ControlConfig;
use crate::error::{Result, RobokitError};
use crate::logging::SharedSink;
use crate::planner::Planner;
use crate::robot::{JointBank, Robot};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default tick period
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(10);

/// Default per-tick joint increment, radians
pub const DEFAULT_JOINT_STEP: f64 = 0.01;

/// Control loop timing and motion parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlLoopConfig {
    /// Time between ticks
    pub period: Duration,
    /// Added to every joint position on each tick
    pub joint_step: f64,
}

impl Default for ControlLoopConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            joint_step: DEFAULT_JOINT_STEP,
        }
    }
}

impl From<&ControlConfig> for ControlLoopConfig {
    fn from(config: &ControlConfig) -> Self {
        Self {
            period: config.period(),
            joint_step: config.joint_step,
        }
    }
}

/// Background loop bound to one robot and planner.
///
/// The loop borrows both for its whole lifetime; the robot's joints are shared
/// with the background thread through the robot's [`JointBank`]. Dropping a
/// running loop stops it.
pub struct ControlLoop<'a> {
    robot: &'a Robot,
    planner: &'a Planner,
    config: ControlLoopConfig,
    sink: SharedSink,
    running: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl<'a> ControlLoop<'a> {
    /// Loop with the default 10 ms period and 0.01 rad step
    pub fn new(robot: &'a Robot, planner: &'a Planner, sink: SharedSink) -> Self {
        Self::with_config(robot, planner, ControlLoopConfig::default(), sink)
    }

    pub fn with_config(
        robot: &'a Robot,
        planner: &'a Planner,
        config: ControlLoopConfig,
        sink: SharedSink,
    ) -> Self {
        Self {
            robot,
            planner,
            config,
            sink,
            running: Arc::new(AtomicBool::new(false)),
            ticks: Arc::new(AtomicU64::new(0)),
            handle: None,
        }
    }

    pub fn robot(&self) -> &'a Robot {
        self.robot
    }

    pub fn planner(&self) -> &'a Planner {
        self.planner
    }

    pub fn config(&self) -> &ControlLoopConfig {
        &self.config
    }

    /// Whether the background thread is alive
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Ticks applied since construction, across every start/stop cycle
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Spawn the background thread. No-op if already running.
    pub fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            log::debug!("Control loop for {} already running", self.robot.name());
            return Ok(());
        }

        self.running.store(true, Ordering::Release);

        let config = self.config;
        let joints = self.robot.joint_bank();
        let sink = Arc::clone(&self.sink);
        let running = Arc::clone(&self.running);
        let ticks = Arc::clone(&self.ticks);

        let handle = thread::Builder::new()
            .name("control-loop".to_string())
            .spawn(move || run_loop(config, joints, sink, running, ticks))
            .map_err(|source| {
                self.running.store(false, Ordering::Release);
                RobokitError::ThreadSpawn {
                    name: "control-loop",
                    source,
                }
            })?;

        self.handle = Some(handle);
        Ok(())
    }

    /// Signal the thread and wait for it to exit. No-op if not running.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.join() {
                log::error!("Control loop thread panicked: {:?}", e);
            }
        }
    }
}

impl Drop for ControlLoop<'_> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Body of the background thread
fn run_loop(
    config: ControlLoopConfig,
    joints: JointBank,
    sink: SharedSink,
    running: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
) {
    sink.info("Control loop started");

    let mut next = Instant::now();
    while running.load(Ordering::Acquire) {
        next += config.period;

        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        } else if now - next > config.period {
            next = now;
        }

        joints.advance(config.joint_step);
        ticks.fetch_add(1, Ordering::AcqRel);
    }

    sink.info("Control loop stopped");
}
