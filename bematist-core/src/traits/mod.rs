//! Hardware abstraction traits
//!
//! These traits define the interface between the gait logic and
//! hardware-specific implementations. Beat pacing uses
//! `embedded_hal::delay::DelayNs` directly.

pub mod servo;

pub use servo::{ServoBank, ServoError, SERVO_COUNT};
