//! Two-link planar inverse kinematics

mod solver;

pub use solver::{solve, JointAngles, KinematicsError, LOWER_LEG_MM, UPPER_LEG_MM};
