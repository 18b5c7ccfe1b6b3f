//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in bematist-core:
//!
//! - PCA9685-backed servo bank (16 channels over I2C)

#![no_std]
#![deny(unsafe_code)]

pub mod servo;
