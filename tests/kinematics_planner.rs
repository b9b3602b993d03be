//! Kinematics, planner and robot wiring tests
//!
//! Run with: `cargo test --test kinematics_planner`

use approx::assert_relative_eq;
use robokit::kinematics::{self, Pose2D};
use robokit::{NoisySineSensor, Planner, RandomWalkSensor, Robot, Sensor};

// ============================================================================
// Kinematics
// ============================================================================

#[test]
fn test_forward_kinematics_simple() {
    let pose = kinematics::forward(&[0.0, 0.0]);
    assert_relative_eq!(pose.x, 2.0, epsilon = 1e-6);
    assert_relative_eq!(pose.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(pose.theta, 0.0, epsilon = 1e-6);
}

#[test]
fn test_forward_kinematics_empty() {
    assert_eq!(kinematics::forward(&[]), Pose2D::default());
}

#[test]
fn test_inverse_kinematics_trivial() {
    let joints = kinematics::inverse(&Pose2D::new(0.0, 0.0, 1.0), 4).expect("dof > 0");
    assert_eq!(joints, vec![0.25; 4]);
}

#[test]
fn test_inverse_kinematics_no_joints() {
    assert!(kinematics::inverse(&Pose2D::new(0.0, 0.0, 1.0), 0).is_none());
}

#[test]
fn test_robot_joints_feed_forward_kinematics() {
    let robot = Robot::new("arm", 3);
    let angles = kinematics::inverse(&Pose2D::new(0.0, 0.0, 0.9), robot.dof()).unwrap();
    for (joint, angle) in robot.joints_mut().iter_mut().zip(angles) {
        joint.position = angle;
    }
    let pose = kinematics::forward(&robot.joint_positions());
    assert_relative_eq!(pose.theta, 0.9, epsilon = 1e-12);
}

// ============================================================================
// Planner
// ============================================================================

#[test]
fn test_planner_reaches_goal() {
    let planner = Planner::new(5, 5);
    let path = planner.plan(0, 0, 4, 4);
    assert!(path.len() <= 1);
    if let Some(&last) = path.last() {
        assert_eq!(last, (4, 4));
    }
}

#[test]
fn test_planner_goal_on_obstacle() {
    let mut planner = Planner::new(5, 5);
    let idx = 4 * planner.width() + 4;
    planner.grid_mut()[idx] = 1;
    assert!(planner.plan(0, 0, 4, 4).is_empty());
}

#[test]
fn test_planner_enclosed_goal() {
    let mut planner = Planner::new(5, 5);
    // Box in (2, 2)
    for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        planner.set_obstacle(x, y, true);
    }
    assert!(planner.plan(0, 0, 2, 2).is_empty());
    // Reachable from inside the box
    assert_eq!(planner.plan(2, 2, 2, 2), vec![(2, 2)]);
}

// ============================================================================
// Robot and sensors
// ============================================================================

#[test]
fn test_robot_sensor_handles() {
    let mut robot = Robot::new("demo_bot", 3);
    assert_eq!(robot.joints().len(), 3);
    assert!(
        robot
            .joints()
            .iter()
            .all(|j| j.position == 0.0 && j.velocity == 0.0)
    );

    let before = robot.sensors().len();
    robot.add_sensor(Box::new(NoisySineSensor::new(1.0)));
    let sensors = robot.sensors();
    assert_eq!(sensors.len(), before + 1);
    assert_eq!(sensors.last().unwrap().name(), "NoisySine");

    robot.add_sensor(Box::new(RandomWalkSensor::new()));
    assert_eq!(robot.sensors().last().unwrap().name(), "RandomWalk");
}

#[test]
fn test_random_walk_reproducible() {
    let a = RandomWalkSensor::new();
    let b = RandomWalkSensor::new();
    let seq_a: Vec<f64> = (0..50).map(|_| a.read()).collect();
    let seq_b: Vec<f64> = (0..50).map(|_| b.read()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_mounted_sensors_readable_through_handles() {
    let mut robot = Robot::new("demo_bot", 1);
    robot.add_sensor(Box::new(RandomWalkSensor::new()));

    let reference = RandomWalkSensor::new();
    for _ in 0..5 {
        for sensor in robot.sensors() {
            assert_eq!(sensor.read(), reference.read());
        }
    }
}
