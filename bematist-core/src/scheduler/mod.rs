//! Walk-cycle scheduling
//!
//! Replays the gait table beat by beat, turning foot targets into servo
//! commands through the kinematics solver.

mod walker;

pub use walker::{
    beat_commands, position_limb, walk, zero_legs, CancelToken, LimbCommand, PositionError,
    WalkError, WalkOutcome,
};
