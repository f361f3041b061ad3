//! ESP32-C6 HAL implementation for Pomo
//!
//! Implements the traits from `pomo-hal` on top of `esp-hal` and
//! `esp-storage`.

#![no_std]
#![deny(unsafe_code)]

pub mod flash;

// Re-export the HAL traits for convenience
pub use pomo_hal::FlashStorage as FlashStorageTrait;
