//! Robot state: named joint bank plus owned sensors

use crate::sensors::Sensor;
use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use std::fmt;
use std::sync::Arc;

/// State of a single revolute joint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointState {
    /// Angle in radians
    pub position: f64,
    /// Angular velocity in rad/s
    pub velocity: f64,
}

/// Fixed-length joint sequence shared between a robot and its control loop.
///
/// Access goes through a read/write lock and is handed out as slices, so the
/// number of joints can never change after construction. The lock is not
/// reentrant: do not ask for a write guard while holding a read guard on the
/// same thread.
#[derive(Clone)]
pub struct JointBank {
    joints: Arc<RwLock<Vec<JointState>>>,
}

impl JointBank {
    fn new(dof: usize) -> Self {
        Self {
            joints: Arc::new(RwLock::new(vec![JointState::default(); dof])),
        }
    }

    pub fn len(&self) -> usize {
        self.joints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn read(&self) -> MappedRwLockReadGuard<'_, [JointState]> {
        RwLockReadGuard::map(self.joints.read(), |v| v.as_slice())
    }

    pub fn write(&self) -> MappedRwLockWriteGuard<'_, [JointState]> {
        RwLockWriteGuard::map(self.joints.write(), |v| v.as_mut_slice())
    }

    /// Snapshot of every joint position, in joint order
    pub fn positions(&self) -> Vec<f64> {
        self.joints.read().iter().map(|j| j.position).collect()
    }

    /// Add `step` to every joint position under a single write lock
    pub fn advance(&self, step: f64) {
        for joint in self.joints.write().iter_mut() {
            joint.position += step;
        }
    }
}

impl fmt::Debug for JointBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.read().iter()).finish()
    }
}

/// A named robot with a fixed number of joints and a set of owned sensors.
///
/// The robot is the sole owner of its sensors; they are dropped with it.
/// Not `Clone`: sensor ownership cannot be duplicated.
pub struct Robot {
    name: String,
    joints: JointBank,
    sensors: Vec<Box<dyn Sensor>>,
}

impl Robot {
    /// Create a robot with `dof` zeroed joints and no sensors. `dof == 0` is allowed.
    pub fn new(name: impl Into<String>, dof: usize) -> Self {
        Self {
            name: name.into(),
            joints: JointBank::new(dof),
            sensors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degrees of freedom
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    /// Read-only view of all joints
    pub fn joints(&self) -> MappedRwLockReadGuard<'_, [JointState]> {
        self.joints.read()
    }

    /// Mutable view of all joints; entries may be edited in place.
    ///
    /// Blocks while the control loop is applying a tick.
    pub fn joints_mut(&self) -> MappedRwLockWriteGuard<'_, [JointState]> {
        self.joints.write()
    }

    /// Joint positions in joint order, ready for [`crate::kinematics::forward`]
    pub fn joint_positions(&self) -> Vec<f64> {
        self.joints.positions()
    }

    /// Shared handle to the joint bank, for components that outlive a borrow
    pub fn joint_bank(&self) -> JointBank {
        self.joints.clone()
    }

    /// Take ownership of a sensor
    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        log::debug!("{}: mounted sensor {}", self.name, sensor.name());
        self.sensors.push(sensor);
    }

    /// Borrowed handles to every sensor, in mount order
    pub fn sensors(&self) -> Vec<&dyn Sensor> {
        self.sensors.iter().map(|s| s.as_ref()).collect()
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }
}

impl fmt::Debug for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Robot")
            .field("name", &self.name)
            .field("joints", &self.joints)
            .field(
                "sensors",
                &self.sensors.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
