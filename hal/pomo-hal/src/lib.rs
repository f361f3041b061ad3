//! Pomo Hardware Abstraction Layer
//!
//! Chip-independent traits for the peripherals the timer firmware persists
//! state through. Chip-specific crates implement them so the application
//! code stays portable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (pomo-firmware)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pomo-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ pomo-hal-     │
//!             │   esp32c6     │
//!             └───────────────┘
//! ```
//!
//! Display, touch and accelerometer access go through `embedded-hal` and
//! `embedded-graphics` directly, so only storage needs a trait here.
//!
//! # Traits
//!
//! - [`flash::FlashStorage`] - Persistent key-value storage

#![no_std]
#![deny(unsafe_code)]

pub mod flash;

pub use flash::{FlashError, FlashStorage, StorageKey};
