//! Gait configuration types
//!
//! Tunable gait parameters and the per-limb phase schedule. These are the
//! inputs of table generation; the table itself is derived state owned by
//! the engine.

use crate::limb::Limb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of discrete beats in one full gait cycle
pub const BEATS_PER_CYCLE: usize = 16;

/// Tunable gait parameters
///
/// All lengths are millimeters relative to the hip servo shaft. Changes
/// take effect once the table is regenerated (the engine's setters do this
/// in the same call).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaitParameters {
    /// Height of the hip above a foot that is on the ground
    pub stand_height_mm: f32,
    /// Height of the hip above a lifted foot
    pub raised_height_mm: f32,
    /// Total horizontal distance covered in one full cycle
    pub stride_mm: f32,
    /// Forward-most foot position, ahead of the hip shaft
    pub offset_mm: f32,
    /// Pause at the end of each beat
    pub beat_delay_ms: u32,
}

impl Default for GaitParameters {
    fn default() -> Self {
        Self {
            stand_height_mm: 50.0,
            raised_height_mm: 40.0,
            stride_mm: 80.0,
            offset_mm: 20.0,
            beat_delay_ms: 20,
        }
    }
}

/// Errors rejected when configuring a limb's phase schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseError {
    /// Beat index outside `0..BEATS_PER_CYCLE`
    BeatOutOfRange { beat: u8 },
    /// `beat_down == beat_up` would leave the foot airborne (or grounded)
    /// for the whole cycle
    ZeroLengthPhase,
}

/// Lift/stance split of one limb's cycle
///
/// `beat_down` is the beat at which the foot first touches the ground,
/// `beat_up` the beat at which it is first lifted. Both phases wrap modulo
/// [`BEATS_PER_CYCLE`], so `beat_up > beat_down` is a valid schedule.
/// Construction guarantees each phase is at least one beat long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseSchedule {
    beat_down: u8,
    beat_up: u8,
}

impl PhaseSchedule {
    /// Validate and build a schedule
    pub fn new(beat_down: u8, beat_up: u8) -> Result<Self, PhaseError> {
        if beat_down as usize >= BEATS_PER_CYCLE {
            return Err(PhaseError::BeatOutOfRange { beat: beat_down });
        }
        if beat_up as usize >= BEATS_PER_CYCLE {
            return Err(PhaseError::BeatOutOfRange { beat: beat_up });
        }
        if beat_down == beat_up {
            return Err(PhaseError::ZeroLengthPhase);
        }
        Ok(Self { beat_down, beat_up })
    }

    /// Beat at which the foot is first put down
    pub fn beat_down(&self) -> u8 {
        self.beat_down
    }

    /// Beat at which the foot is first lifted
    pub fn beat_up(&self) -> u8 {
        self.beat_up
    }

    /// Number of beats the foot is airborne
    pub fn beats_up(&self) -> u8 {
        (self.beat_down + BEATS_PER_CYCLE as u8 - self.beat_up) % BEATS_PER_CYCLE as u8
    }

    /// Number of beats the foot is on the ground
    pub fn beats_down(&self) -> u8 {
        BEATS_PER_CYCLE as u8 - self.beats_up()
    }
}

/// Canonical diagonal walking gait: touchdown/lift-off beats spaced evenly
/// across the cycle, diagonally opposite limbs half a cycle apart
pub const DEFAULT_WALK_SCHEDULE: [PhaseSchedule; Limb::COUNT] = [
    PhaseSchedule {
        beat_down: 4,
        beat_up: 0,
    },
    PhaseSchedule {
        beat_down: 0,
        beat_up: 12,
    },
    PhaseSchedule {
        beat_down: 8,
        beat_up: 4,
    },
    PhaseSchedule {
        beat_down: 12,
        beat_up: 8,
    },
];
