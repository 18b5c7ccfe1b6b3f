//! Servo bank driver trait
//!
//! Abstracts over the 16-channel PWM servo controller. Implementations own
//! angle clamping and per-servo trim correction; the gait logic only ever
//! asks for nominal angles.

/// Number of channels on the servo controller
pub const SERVO_COUNT: usize = 16;

/// Errors that can occur commanding a servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError {
    /// Communication error with the servo controller
    Bus,
    /// Servo index outside `0..SERVO_COUNT`
    InvalidIndex,
}

/// Trait for a bank of positional servos
pub trait ServoBank {
    /// Command one servo to an angle
    ///
    /// `servo` is a channel in `0..SERVO_COUNT`; `degrees` is the nominal
    /// angle, -90..=90. Implementations clamp out-of-range angles and apply
    /// any per-servo trim before driving the output.
    fn set_angle(&mut self, servo: u8, degrees: i16) -> Result<(), ServoError>;
}
