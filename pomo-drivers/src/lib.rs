//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the sensor traits
//! defined in pomo-core for the Waveshare ESP32-C6-LCD-1.47 board:
//!
//! - Capacitive touch (AXS5106L)
//! - Accelerometer (QMI8658)
//!
//! Both sit on the same I2C bus and are written against the blocking
//! `embedded-hal` 1.0 traits, so any bus sharing adapter works.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod imu;
pub mod touch;

#[cfg(test)]
pub(crate) mod testing;
