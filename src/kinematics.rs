//! Planar serial-arm kinematics with unit-length links.
//!
//! Both directions are intentionally simple: forward kinematics chains unit
//! links, and the inverse spreads the target heading evenly across the joints
//! without looking at the target position. The inverse is an approximation,
//! not a geometric solution.

use serde::{Deserialize, Serialize};

/// Planar pose with heading
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    /// Heading in radians
    pub theta: f64,
}

impl Pose2D {
    #[inline]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }
}

/// End-effector pose of a unit-link planar chain.
///
/// Each link's absolute angle is the running sum of joint angles up to and
/// including its own joint. `theta` is the final absolute angle; an empty
/// chain sits at the origin with zero heading.
pub fn forward(joint_positions: &[f64]) -> Pose2D {
    let mut pose = Pose2D::default();
    let mut acc_angle = 0.0_f64;
    for &angle in joint_positions {
        acc_angle += angle;
        pose.x += acc_angle.cos();
        pose.y += acc_angle.sin();
    }
    pose.theta = acc_angle;
    pose
}

/// Joint angles for `target`, or `None` when `dof` is zero.
///
/// Every joint receives `target.theta / dof`; `x` and `y` are ignored.
pub fn inverse(target: &Pose2D, dof: usize) -> Option<Vec<f64>> {
    if dof == 0 {
        return None;
    }
    Some(vec![target.theta / dof as f64; dof])
}

/// Row-major `rows x cols` matrix times a vector.
///
/// Returns `None` if `v` does not have `cols` entries or `m` is not `rows * cols` long.
pub fn mat_vec(m: &[f64], rows: usize, cols: usize, v: &[f64]) -> Option<Vec<f64>> {
    if v.len() != cols || m.len() != rows * cols {
        return None;
    }
    let out = (0..rows)
        .map(|r| {
            m[r * cols..(r + 1) * cols]
                .iter()
                .zip(v)
                .map(|(a, b)| a * b)
                .sum::<f64>()
        })
        .collect();
    Some(out)
}
