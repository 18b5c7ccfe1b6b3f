//! PCA9685 servo bank
//!
//! Implements the core's `ServoBank` trait on top of the `pwm-pca9685`
//! driver crate, which owns the register-level protocol. This layer owns
//! the servo board's pulse law, angle clamping and per-servo trim.
//!
//! The board runs the PWM counter at 60 Hz; a servo's stop tick follows
//! `369 + degrees * 223 / 90`, i.e. 369 ticks (~1.5 ms) at neutral and
//! ±223 ticks across the ±90° range.

use embedded_hal::i2c::I2c;
use pwm_pca9685::{Address, Channel, Pca9685};

use bematist_core::traits::{ServoBank, ServoError, SERVO_COUNT};

/// Prescale value for a 60 Hz PWM period (25 MHz / (4096 * 60) - 1)
const PRESCALE_60_HZ: u8 = 101;

/// Stop tick at 0°
const NEUTRAL_TICK: i32 = 369;

/// Tick swing across 90°
const TICKS_PER_90_DEG: i32 = 223;

const CHANNELS: [Channel; SERVO_COUNT] = [
    Channel::C0,
    Channel::C1,
    Channel::C2,
    Channel::C3,
    Channel::C4,
    Channel::C5,
    Channel::C6,
    Channel::C7,
    Channel::C8,
    Channel::C9,
    Channel::C10,
    Channel::C11,
    Channel::C12,
    Channel::C13,
    Channel::C14,
    Channel::C15,
];

/// Stop tick for a trim-corrected angle, clamped to the 12-bit counter
fn pulse_ticks(degrees: i32) -> u16 {
    (NEUTRAL_TICK + degrees * TICKS_PER_90_DEG / 90).clamp(0, 4095) as u16
}

/// 16-channel servo bank on a PCA9685 controller
///
/// Trim offsets are held in RAM and applied to every commanded angle;
/// persisting them is the caller's concern.
pub struct Pca9685ServoBank<I2C> {
    pwm: Pca9685<I2C>,
    trim_deg: [i16; SERVO_COUNT],
}

impl<I2C: I2c> Pca9685ServoBank<I2C> {
    /// Bring up the controller at its default address: 60 Hz prescale,
    /// oscillator enabled, all pulses starting at tick 0
    pub fn new(i2c: I2C) -> Result<Self, ServoError> {
        let mut pwm = Pca9685::new(i2c, Address::default()).map_err(|_| ServoError::Bus)?;
        // Prescale can only change while the oscillator is asleep, which
        // is the power-on state
        pwm.set_prescale(PRESCALE_60_HZ).map_err(|_| ServoError::Bus)?;
        pwm.set_channel_on(Channel::All, 0).map_err(|_| ServoError::Bus)?;
        pwm.enable().map_err(|_| ServoError::Bus)?;

        Ok(Self {
            pwm,
            trim_deg: [0; SERVO_COUNT],
        })
    }

    /// Set the zero-point correction for one servo, in degrees
    pub fn set_trim(&mut self, servo: u8, trim_deg: i16) -> Result<(), ServoError> {
        let slot = self
            .trim_deg
            .get_mut(servo as usize)
            .ok_or(ServoError::InvalidIndex)?;
        *slot = trim_deg;
        Ok(())
    }

    /// Current zero-point correction for one servo
    pub fn trim(&self, servo: u8) -> Result<i16, ServoError> {
        self.trim_deg
            .get(servo as usize)
            .copied()
            .ok_or(ServoError::InvalidIndex)
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I2C {
        self.pwm.destroy()
    }
}

impl<I2C: I2c> ServoBank for Pca9685ServoBank<I2C> {
    fn set_angle(&mut self, servo: u8, degrees: i16) -> Result<(), ServoError> {
        let channel = *CHANNELS
            .get(servo as usize)
            .ok_or(ServoError::InvalidIndex)?;

        let corrected = degrees.clamp(-90, 90) as i32 + self.trim_deg[servo as usize] as i32;
        self.pwm
            .set_channel_on_off(channel, 0, pulse_ticks(corrected))
            .map_err(|_| ServoError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_law_reference_points() {
        assert_eq!(pulse_ticks(0), 369);
        assert_eq!(pulse_ticks(90), 592);
        assert_eq!(pulse_ticks(-90), 146);
    }

    #[test]
    fn test_pulse_law_is_monotonic() {
        let mut last = pulse_ticks(-120);
        for degrees in -119..=120 {
            let tick = pulse_ticks(degrees);
            assert!(tick >= last);
            last = tick;
        }
    }

    #[test]
    fn test_pulse_law_clamps_to_counter_range() {
        // Even absurd trim-corrected angles stay inside the 12-bit counter
        assert_eq!(pulse_ticks(-10_000), 0);
        assert_eq!(pulse_ticks(10_000), 4095);
    }
}
