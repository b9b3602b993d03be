//! robokit demo
//!
//! Builds the demo robot (one noisy sine and one random walk sensor), starts
//! the control loop, polls every sensor a few times, then stops the loop and
//! reports the resulting end-effector pose.
//!
//! Usage:
//! - `robokit` (built-in defaults, or `robokit.toml` if present)
//! - `robokit <path>`
//! - `robokit --config <path>` / `robokit -c <path>`

use robokit::config::RobokitConfig;
use robokit::error::{Result, RobokitError};
use robokit::kinematics;
use robokit::logging::sink_from_config;
use robokit::{
    ControlLoop, ControlLoopConfig, NoisySineSensor, Planner, RandomWalkSensor, Robot, Sensor,
};
use std::env;
use std::path::Path;

/// Number of sensor polling rounds
const POLL_ROUNDS: usize = 5;

/// Parse config path from command line arguments.
///
/// Falls back to `robokit.toml` in the working directory if it exists.
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    Path::new("robokit.toml")
        .exists()
        .then(|| "robokit.toml".to_string())
}

/// Grid extent as a planner coordinate
fn grid_coord(extent: usize) -> Result<i32> {
    i32::try_from(extent)
        .map_err(|_| RobokitError::Config(format!("grid extent {} exceeds i32 range", extent)))
}

fn main() -> Result<()> {
    let (config, source) = match parse_config_path() {
        Some(path) => (RobokitConfig::load(&path)?, path),
        None => (RobokitConfig::default(), "defaults".to_string()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("robokit v{} starting...", env!("CARGO_PKG_VERSION"));
    log::info!("Using config: {}", source);

    let mut robot = Robot::new(config.robot.name.clone(), config.robot.dof);
    robot.add_sensor(Box::new(NoisySineSensor::with_seed(
        config.sensors.noisy_sine_frequency,
        config.sensors.noisy_sine_seed,
    )));
    robot.add_sensor(Box::new(RandomWalkSensor::with_seed(
        config.sensors.random_walk_seed,
    )));
    log::info!(
        "Robot {}: {} joints, {} sensors",
        robot.name(),
        robot.dof(),
        robot.sensor_count()
    );

    let planner = Planner::new(config.planner.width, config.planner.height);
    let corner = (grid_coord(planner.width())? - 1, grid_coord(planner.height())? - 1);
    let reachable = !planner.plan(0, 0, corner.0, corner.1).is_empty();
    log::info!(
        "Planner {}x{}: corner {:?} reachable = {}",
        planner.width(),
        planner.height(),
        corner,
        reachable
    );

    let sink = sink_from_config(&config.logging);
    let mut control = ControlLoop::with_config(
        &robot,
        &planner,
        ControlLoopConfig::from(&config.control),
        sink,
    );
    control.start()?;

    for _ in 0..POLL_ROUNDS {
        for sensor in robot.sensors() {
            println!("{}: {}", sensor.name(), sensor.read());
        }
    }

    control.stop();

    let positions = robot.joint_positions();
    let pose = kinematics::forward(&positions);
    log::info!(
        "Stopped after {} ticks; end effector at ({:.3}, {:.3}, {:.3} rad)",
        control.tick_count(),
        pose.x,
        pose.y,
        pose.theta
    );
    if let Some(joints) = kinematics::inverse(&pose, robot.dof()) {
        log::debug!("Even-split joints for that heading: {:?}", joints);
    }

    Ok(())
}
