//! Board-agnostic core logic for the Pomodoro timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Traits for the consumed capabilities (drawing surface, touch, accelerometer,
//!   settings store, notification outbox)
//! - Timer and view state machines
//! - Touch debouncing and tap/long-press classification
//! - Orientation detection from acceleration
//! - Hit-region registry
//! - Incremental renderer for the home, timer, palette and preview screens
//! - The application loop tying all of the above together
//!
//! Time is always injected as a millisecond counter (`now_ms: u32`), so
//! everything here runs deterministically in host tests.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod app;
pub mod config;
pub mod geometry;
pub mod inbox;
pub mod input;
pub mod notify;
pub mod regions;
pub mod render;
pub mod rotation;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{App, Dispatch, IgnoreReason, Peripherals, StepReport};
pub use geometry::{Orientation, Point, Rect, Size};
