//! Capability traits
//!
//! These traits define the interface between the engine and the
//! hardware-specific implementations it drives.

pub mod outbox;
pub mod sensor;
pub mod settings;
pub mod surface;

pub use outbox::{BoundedOutbox, NullOutbox, Outbox};
pub use sensor::{AccelSample, AccelSource, SensorError, TouchPoints, TouchSource, MAX_TOUCH_POINTS};
pub use settings::SettingsStore;
pub use surface::{DrawSurface, SurfaceError, SurfaceExt};
