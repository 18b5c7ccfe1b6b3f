//! Bematist - Quadruped Gait Controller Firmware
//!
//! Main firmware binary for RP2040-based quadruped controllers.
//!
//! Named after the Greek "bematist", the surveyors of antiquity who
//! measured distances by counting their paces.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use bematist_drivers::servo::Pca9685ServoBank;

use crate::channels::GAIT_COMMANDS;
use crate::tasks::GaitCommand;

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Bematist firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Servo controller on I2C0
    // Pin assignments are board-specific (SDA=GPIO4, SCL=GPIO5)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let servos = match Pca9685ServoBank::new(i2c) {
        Ok(bank) => bank,
        Err(err) => {
            error!("Servo controller bring-up failed: {}", err);
            core::panic!("servo controller unreachable");
        }
    };
    info!("Servo controller initialized");

    // Stop button grounds GPIO15 when pressed
    let stop_button = Input::new(p.PIN_15, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::motion_task(servos)).unwrap();
    spawner.spawn(tasks::stop_button_task(stop_button)).unwrap();
    info!("All tasks spawned, firmware running");

    // Startup sequence: neutral stance, settle, then walk off
    GAIT_COMMANDS.send(GaitCommand::ZeroLegs).await;
    Timer::after_secs(1).await;
    GAIT_COMMANDS.send(GaitCommand::Walk { steps: 2 }).await;

    // All further work happens in the spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
