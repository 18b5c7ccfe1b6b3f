//! Board-agnostic gait and kinematics logic for the Bematist quadruped
//!
//! This crate contains all control logic that does not depend on specific
//! hardware implementations:
//!
//! - Limb and joint identities
//! - Gait configuration (tunable parameters, per-limb phase schedule)
//! - Gait table generation (per-beat foot trajectories)
//! - Two-link planar inverse kinematics
//! - Walk-cycle scheduling
//! - Hardware abstraction trait for the servo bank

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod gait;
pub mod kinematics;
pub mod limb;
pub mod scheduler;
pub mod traits;
