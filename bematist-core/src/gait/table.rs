//! Gait table storage
//!
//! Derived, disposable state: the table is rebuilt from configuration by
//! the generator whenever parameters or a phase schedule change, and is
//! never edited directly.

use crate::config::{GaitParameters, PhaseSchedule, BEATS_PER_CYCLE};
use crate::limb::Limb;

use super::generator::fill_track;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Desired foot position for one limb at one beat
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootTarget {
    /// Horizontal distance from the hip shaft, forward positive
    pub x_mm: f32,
    /// Height of the hip shaft above the foot
    pub height_mm: f32,
}

/// One limb's foot trajectory over a full cycle, as parallel per-beat rows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LimbTrack {
    pub(crate) height_mm: [f32; BEATS_PER_CYCLE],
    pub(crate) x_mm: [f32; BEATS_PER_CYCLE],
}

impl LimbTrack {
    pub(crate) const fn empty() -> Self {
        Self {
            height_mm: [0.0; BEATS_PER_CYCLE],
            x_mm: [0.0; BEATS_PER_CYCLE],
        }
    }

    /// Foot target at the given beat
    ///
    /// Panics if `beat >= BEATS_PER_CYCLE`.
    pub fn target(&self, beat: usize) -> FootTarget {
        FootTarget {
            x_mm: self.x_mm[beat],
            height_mm: self.height_mm[beat],
        }
    }
}

/// Complete gait table: one track per limb
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaitTable {
    tracks: [LimbTrack; Limb::COUNT],
}

impl GaitTable {
    /// Build the full table from configuration
    pub fn generate(params: &GaitParameters, schedule: &[PhaseSchedule; Limb::COUNT]) -> Self {
        let mut table = Self {
            tracks: [LimbTrack::empty(); Limb::COUNT],
        };
        for limb in Limb::ALL {
            table.regenerate_limb(limb, &schedule[limb.index()], params);
        }
        table
    }

    /// Rebuild a single limb's track
    pub fn regenerate_limb(&mut self, limb: Limb, phase: &PhaseSchedule, params: &GaitParameters) {
        fill_track(&mut self.tracks[limb.index()], phase, params);
    }

    /// Trajectory of one limb
    pub fn track(&self, limb: Limb) -> &LimbTrack {
        &self.tracks[limb.index()]
    }

    /// Foot target of one limb at one beat
    ///
    /// Panics if `beat >= BEATS_PER_CYCLE`.
    pub fn target(&self, limb: Limb, beat: usize) -> FootTarget {
        self.tracks[limb.index()].target(beat)
    }
}
