//! Drawing surface for the Pomo timer over embedded-graphics
//!
//! This crate provides:
//! - `Rotated`, a `DrawTarget` adapter that turns the picture in software on
//!   top of a panel driven in its native portrait mounting
//! - `Scaled`, an adapter that magnifies bitmap font glyphs
//! - `GraphicsSurface`, the engine's `DrawSurface` for any RGB565 target
//!
//! The panel itself (ST7789 via mipidsi on the board) is handed in by the
//! firmware; nothing here touches hardware.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod rotated;
pub mod surface;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

pub use rotated::Rotated;
pub use surface::GraphicsSurface;
pub use text::{Scaled, FONT};
