//! Servo bank implementations

pub mod pca9685;

pub use pca9685::Pca9685ServoBank;
