//! Gait engine: configuration plus the derived trajectory table
//!
//! The engine is an explicit context object owned by the caller. It is
//! fully initialized at construction (canonical defaults, table built), so
//! there is no lazy-init flag and no partially configured state to observe.
//! Every setter mutates its parameters and regenerates the affected limb
//! tracks in the same call.

use crate::config::{
    GaitParameters, PhaseError, PhaseSchedule, DEFAULT_WALK_SCHEDULE,
};
use crate::gait::{FootTarget, GaitTable};
use crate::kinematics::{self, JointAngles, KinematicsError};
use crate::limb::Limb;

/// Gait configuration and the trajectory table derived from it
#[derive(Debug, Clone)]
pub struct GaitEngine {
    params: GaitParameters,
    schedule: [PhaseSchedule; Limb::COUNT],
    table: GaitTable,
}

impl GaitEngine {
    /// Engine with the canonical default gait, table ready to walk
    pub fn new() -> Self {
        Self::with_parameters(GaitParameters::default())
    }

    /// Engine with custom parameters and the default phase schedule
    pub fn with_parameters(params: GaitParameters) -> Self {
        let schedule = DEFAULT_WALK_SCHEDULE;
        let table = GaitTable::generate(&params, &schedule);
        Self {
            params,
            schedule,
            table,
        }
    }

    /// Current gait parameters
    pub fn parameters(&self) -> &GaitParameters {
        &self.params
    }

    /// One limb's phase schedule
    pub fn phase(&self, limb: Limb) -> PhaseSchedule {
        self.schedule[limb.index()]
    }

    /// The current trajectory table
    pub fn table(&self) -> &GaitTable {
        &self.table
    }

    /// Foot target of one limb at one beat
    ///
    /// Panics if `beat >= BEATS_PER_CYCLE`.
    pub fn foot_target(&self, limb: Limb, beat: usize) -> FootTarget {
        self.table.target(limb, beat)
    }

    /// Side-corrected servo angles of one limb at one beat
    pub fn limb_angles(&self, limb: Limb, beat: usize) -> Result<JointAngles, KinematicsError> {
        let target = self.table.target(limb, beat);
        kinematics::solve(limb.side(), target.x_mm, target.height_mm)
    }

    /// Set the standing and lifted foot heights, regenerating all limbs
    pub fn set_heights(&mut self, stand_mm: f32, raised_mm: f32) {
        self.params.stand_height_mm = stand_mm;
        self.params.raised_height_mm = raised_mm;
        self.regenerate_all();
    }

    /// Set stride length, forward offset and beat pacing, regenerating all
    /// limbs
    pub fn configure_gait(&mut self, stride_mm: f32, offset_mm: f32, beat_delay_ms: u32) {
        self.params.stride_mm = stride_mm;
        self.params.offset_mm = offset_mm;
        self.params.beat_delay_ms = beat_delay_ms;
        self.regenerate_all();
    }

    /// Set one limb's touchdown/lift-off beats, regenerating that limb only
    ///
    /// Rejected schedules leave the engine untouched.
    pub fn set_limb_phase(
        &mut self,
        limb: Limb,
        beat_down: u8,
        beat_up: u8,
    ) -> Result<(), PhaseError> {
        let phase = PhaseSchedule::new(beat_down, beat_up)?;
        self.schedule[limb.index()] = phase;
        self.table.regenerate_limb(limb, &phase, &self.params);
        Ok(())
    }

    fn regenerate_all(&mut self) {
        for limb in Limb::ALL {
            self.table
                .regenerate_limb(limb, &self.schedule[limb.index()], &self.params);
        }
    }
}

impl Default for GaitEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BEATS_PER_CYCLE;
    use crate::limb::Side;

    #[test]
    fn test_new_engine_is_ready_to_walk() {
        let engine = GaitEngine::new();

        // Front-left is airborne at beat 0 and grounded at beat 8
        assert_eq!(engine.foot_target(Limb::FrontLeft, 0).height_mm, 40.0);
        assert_eq!(engine.foot_target(Limb::FrontLeft, 8).height_mm, 50.0);

        // Every cell of every limb is populated and solvable
        for limb in Limb::ALL {
            for beat in 0..BEATS_PER_CYCLE {
                engine.limb_angles(limb, beat).unwrap();
            }
        }
    }

    #[test]
    fn test_set_heights_regenerates_all_limbs() {
        let mut engine = GaitEngine::new();
        engine.set_heights(60.0, 45.0);

        assert_eq!(engine.parameters().stand_height_mm, 60.0);
        for limb in Limb::ALL {
            let down_beat = engine.phase(limb).beat_down() as usize;
            let up_beat = engine.phase(limb).beat_up() as usize;
            assert_eq!(engine.foot_target(limb, down_beat).height_mm, 60.0);
            assert_eq!(engine.foot_target(limb, up_beat).height_mm, 45.0);
        }
    }

    #[test]
    fn test_configure_gait_regenerates_positions() {
        let mut engine = GaitEngine::new();
        engine.configure_gait(40.0, 10.0, 35);

        assert_eq!(engine.parameters().beat_delay_ms, 35);
        // Stance start sits at the new offset
        let down_beat = engine.phase(Limb::FrontLeft).beat_down() as usize;
        assert_eq!(engine.foot_target(Limb::FrontLeft, down_beat).x_mm, 10.0);
    }

    #[test]
    fn test_set_limb_phase_touches_only_that_limb() {
        let mut engine = GaitEngine::new();
        let before = *engine.table();

        engine.set_limb_phase(Limb::FrontLeft, 8, 0).unwrap();

        assert_eq!(engine.phase(Limb::FrontLeft).beats_up(), 8);
        // Front-left now spends half the cycle airborne...
        assert_eq!(engine.foot_target(Limb::FrontLeft, 7).height_mm, 40.0);
        // ...while the other limbs kept their tracks
        for limb in [Limb::RearLeft, Limb::RearRight, Limb::FrontRight] {
            assert_eq!(engine.table().track(limb), before.track(limb));
        }
    }

    #[test]
    fn test_rejected_phase_leaves_engine_untouched() {
        let mut engine = GaitEngine::new();
        let before = engine.clone();

        assert_eq!(
            engine.set_limb_phase(Limb::RearLeft, 16, 0),
            Err(PhaseError::BeatOutOfRange { beat: 16 })
        );
        assert_eq!(
            engine.set_limb_phase(Limb::RearLeft, 5, 5),
            Err(PhaseError::ZeroLengthPhase)
        );

        assert_eq!(engine.phase(Limb::RearLeft), before.phase(Limb::RearLeft));
        assert_eq!(engine.table(), before.table());
    }

    #[test]
    fn test_limb_angles_match_solver() {
        let mut engine = GaitEngine::new();
        engine.configure_gait(0.0, 0.0, 20);

        // With zero stride and offset every grounded foot sits straight
        // below the hip at standing height
        let down_beat = engine.phase(Limb::FrontLeft).beat_down() as usize;
        let angles = engine.limb_angles(Limb::FrontLeft, down_beat).unwrap();
        assert_eq!(angles, kinematics::solve(Side::Left, 0.0, 50.0).unwrap());
        assert_eq!(angles.hip_deg, 72);
        assert_eq!(angles.knee_deg, -34);
    }

    #[test]
    fn test_unreachable_configuration_surfaces_from_angles() {
        let mut engine = GaitEngine::new();
        engine.set_heights(200.0, 190.0);

        assert_eq!(
            engine.limb_angles(Limb::FrontLeft, 0),
            Err(KinematicsError::UnreachableTarget)
        );
    }
}
