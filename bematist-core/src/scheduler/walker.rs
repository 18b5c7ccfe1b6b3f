//! Table replay and direct limb positioning
//!
//! `walk` drives one blocking control loop: per beat it solves all four
//! limbs, issues the eight servo commands, then waits out the beat delay.
//! The whole beat is solved before anything is written, so an unreachable
//! target aborts with zero partial servo writes. A shared [`CancelToken`]
//! is sampled once per beat.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::config::BEATS_PER_CYCLE;
use crate::engine::GaitEngine;
use crate::gait::FootTarget;
use crate::kinematics::{self, JointAngles};
use crate::limb::Limb;
use crate::traits::{ServoBank, ServoError};

/// Servo angles for one limb at one beat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LimbCommand {
    pub limb: Limb,
    pub angles: JointAngles,
}

/// How a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WalkOutcome {
    /// All requested steps were executed
    Completed,
    /// The cancel token was tripped; stopped at a beat boundary
    Cancelled,
}

/// Errors that abort a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WalkError {
    /// A table cell maps outside the leg's reach envelope
    Unreachable { limb: Limb, beat: u8 },
    /// Servo collaborator failure
    Servo(ServoError),
}

impl From<ServoError> for WalkError {
    fn from(err: ServoError) -> Self {
        WalkError::Servo(err)
    }
}

/// Errors positioning a single foot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionError {
    /// The requested foot position is outside the leg's reach envelope
    Unreachable,
    /// Servo collaborator failure
    Servo(ServoError),
}

impl From<ServoError> for PositionError {
    fn from(err: ServoError) -> Self {
        PositionError::Servo(err)
    }
}

/// Cooperative cancellation flag for an in-progress walk
///
/// Typically held in a `static` and shared between the walking control
/// loop and whatever input source requests a stop.
#[derive(Debug)]
pub struct CancelToken(AtomicBool);

impl CancelToken {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Request the walk to stop at the next beat boundary
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Re-arm the token for the next walk
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Solve all four limbs for one beat
///
/// Nothing is commanded here; callers issue the returned commands only
/// once the whole beat has solved.
pub fn beat_commands(
    engine: &GaitEngine,
    beat: usize,
) -> Result<[LimbCommand; Limb::COUNT], WalkError> {
    let mut commands = [LimbCommand {
        limb: Limb::FrontLeft,
        angles: JointAngles {
            hip_deg: 0,
            knee_deg: 0,
        },
    }; Limb::COUNT];

    for limb in Limb::ALL {
        let angles = engine
            .limb_angles(limb, beat)
            .map_err(|_| WalkError::Unreachable {
                limb,
                beat: beat as u8,
            })?;
        commands[limb.index()] = LimbCommand { limb, angles };
    }
    Ok(commands)
}

/// Walk the configured gait cycle `steps` times
///
/// Per beat: solve all limbs, command hip and knee of each limb in channel
/// order, then block for the configured beat delay. One full cycle issues
/// 128 servo commands and 16 pacing delays.
pub fn walk<S, D>(
    engine: &GaitEngine,
    servos: &mut S,
    delay: &mut D,
    steps: u16,
    cancel: &CancelToken,
) -> Result<WalkOutcome, WalkError>
where
    S: ServoBank,
    D: DelayNs,
{
    for _ in 0..steps {
        for beat in 0..BEATS_PER_CYCLE {
            if cancel.is_cancelled() {
                return Ok(WalkOutcome::Cancelled);
            }

            let commands = beat_commands(engine, beat)?;
            for command in &commands {
                servos.set_angle(command.limb.hip_servo(), command.angles.hip_deg)?;
                servos.set_angle(command.limb.knee_servo(), command.angles.knee_deg)?;
            }
            delay.delay_ms(engine.parameters().beat_delay_ms);
        }
    }
    Ok(WalkOutcome::Completed)
}

/// Place one foot directly at a target position
pub fn position_limb<S>(servos: &mut S, limb: Limb, target: FootTarget) -> Result<(), PositionError>
where
    S: ServoBank,
{
    let angles = kinematics::solve(limb.side(), target.x_mm, target.height_mm)
        .map_err(|_| PositionError::Unreachable)?;
    servos.set_angle(limb.hip_servo(), angles.hip_deg)?;
    servos.set_angle(limb.knee_servo(), angles.knee_deg)?;
    Ok(())
}

/// Command every leg joint to its neutral angle
pub fn zero_legs<S>(servos: &mut S) -> Result<(), ServoError>
where
    S: ServoBank,
{
    for limb in Limb::ALL {
        servos.set_angle(limb.hip_servo(), 0)?;
        servos.set_angle(limb.knee_servo(), 0)?;
    }
    Ok(())
}
