//! Track generation from gait configuration
//!
//! One limb's cycle splits into an asymmetric lift/stance pair. During
//! stance the foot sweeps backward at a constant rate, pushing the body
//! forward at constant velocity; during the (usually shorter) lift phase
//! the foot must cover the same net horizontal travel in fewer beats, so
//! its per-beat forward step is scaled up by `beats_down / beats_up`.

use crate::config::{GaitParameters, PhaseSchedule, BEATS_PER_CYCLE};

use super::table::LimbTrack;

/// Populate every beat of one limb's track from the schedule and parameters
///
/// Both phases wrap modulo [`BEATS_PER_CYCLE`]; together they cover each
/// beat index exactly once.
pub(crate) fn fill_track(track: &mut LimbTrack, phase: &PhaseSchedule, params: &GaitParameters) {
    let n_beats = BEATS_PER_CYCLE as f32;
    let beats_up = phase.beats_up() as usize;
    let beats_down = phase.beats_down() as usize;

    // Backward sweep per stance beat, and the compensating forward step
    // per lift beat
    let r_step = params.stride_mm / n_beats;
    let f_step = r_step * beats_down as f32 / beats_up as f32;

    let lift_start_x = params.offset_mm - params.stride_mm * (beats_down as f32 / n_beats);
    for i in 0..beats_up {
        let beat = (phase.beat_up() as usize + i) % BEATS_PER_CYCLE;
        track.height_mm[beat] = params.raised_height_mm;
        track.x_mm[beat] = lift_start_x + i as f32 * f_step;
    }

    for i in 0..beats_down {
        let beat = (phase.beat_down() as usize + i) % BEATS_PER_CYCLE;
        track.height_mm[beat] = params.stand_height_mm;
        track.x_mm[beat] = params.offset_mm - i as f32 * r_step;
    }
}
