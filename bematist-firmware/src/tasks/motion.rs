//! Motion task
//!
//! Owns the gait engine and the servo bank. Consumes gait commands from
//! the command channel; walking replays the table one beat at a time with
//! async pacing so the executor is never starved, and samples the shared
//! cancel flag at every beat boundary.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Timer;

use bematist_core::config::BEATS_PER_CYCLE;
use bematist_core::engine::GaitEngine;
use bematist_core::limb::Limb;
use bematist_core::scheduler::{beat_commands, zero_legs};
use bematist_core::traits::ServoBank;
use bematist_drivers::servo::Pca9685ServoBank;

use crate::channels::{GAIT_COMMANDS, WALK_CANCEL};

type Servos = Pca9685ServoBank<I2c<'static, I2C0, Blocking>>;

/// Commands accepted by the motion task
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GaitCommand {
    /// Set standing and lifted foot heights (mm)
    SetHeights { stand_mm: f32, raised_mm: f32 },
    /// Set stride length, forward offset (mm) and beat pacing (ms)
    ConfigureGait {
        stride_mm: f32,
        offset_mm: f32,
        beat_delay_ms: u32,
    },
    /// Change one limb's touchdown/lift-off beats
    SetLimbPhase {
        limb: Limb,
        beat_down: u8,
        beat_up: u8,
    },
    /// Walk the configured cycle a number of times
    Walk { steps: u16 },
    /// Command every leg joint to its neutral angle
    ZeroLegs,
}

/// Motion task - processes gait commands sequentially
#[embassy_executor::task]
pub async fn motion_task(mut servos: Servos) {
    info!("Motion task started");

    let mut engine = GaitEngine::new();

    loop {
        let command = GAIT_COMMANDS.receive().await;
        match command {
            GaitCommand::SetHeights { stand_mm, raised_mm } => {
                engine.set_heights(stand_mm, raised_mm);
            }
            GaitCommand::ConfigureGait {
                stride_mm,
                offset_mm,
                beat_delay_ms,
            } => {
                engine.configure_gait(stride_mm, offset_mm, beat_delay_ms);
            }
            GaitCommand::SetLimbPhase {
                limb,
                beat_down,
                beat_up,
            } => {
                if let Err(err) = engine.set_limb_phase(limb, beat_down, beat_up) {
                    warn!("Rejected phase schedule for {}: {}", limb, err);
                }
            }
            GaitCommand::Walk { steps } => {
                info!("Walking {} steps", steps);
                run_walk(&engine, &mut servos, steps).await;
            }
            GaitCommand::ZeroLegs => {
                if let Err(err) = zero_legs(&mut servos) {
                    warn!("Zeroing legs failed: {}", err);
                }
            }
        }
    }
}

/// Replay the gait cycle `steps` times with async beat pacing
///
/// Mirrors the core's blocking walk loop: the whole beat is solved before
/// any servo write, and the cancel flag stops the walk at beat boundaries.
async fn run_walk(engine: &GaitEngine, servos: &mut Servos, steps: u16) {
    WALK_CANCEL.reset();
    let beat_delay_ms = engine.parameters().beat_delay_ms as u64;

    for _ in 0..steps {
        for beat in 0..BEATS_PER_CYCLE {
            if WALK_CANCEL.is_cancelled() {
                info!("Walk cancelled");
                return;
            }

            let commands = match beat_commands(engine, beat) {
                Ok(commands) => commands,
                Err(err) => {
                    warn!("Walk aborted: {}", err);
                    return;
                }
            };
            for command in &commands {
                let written = servos
                    .set_angle(command.limb.hip_servo(), command.angles.hip_deg)
                    .and_then(|()| {
                        servos.set_angle(command.limb.knee_servo(), command.angles.knee_deg)
                    });
                if let Err(err) = written {
                    warn!("Servo write failed, aborting walk: {}", err);
                    return;
                }
            }

            Timer::after_millis(beat_delay_ms).await;
        }
    }
    info!("Walk complete");
}
