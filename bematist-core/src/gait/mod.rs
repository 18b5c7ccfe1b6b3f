//! Gait table: per-limb, per-beat foot trajectories

mod generator;
mod table;

pub use table::{FootTarget, GaitTable, LimbTrack};
