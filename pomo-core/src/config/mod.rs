//! Configuration types
//!
//! Board-agnostic configuration structures. `ColorSettings` is stored in
//! flash as postcard binary data; the rest are compile-time defaults.

pub mod layout;
pub mod palette;
pub mod settings;
pub mod timing;

pub use layout::LayoutConfig;
pub use palette::{palette_color, Color, PALETTE, PALETTE_SIZE};
pub use settings::{ColorSelection, ColorSettings, SettingKey, SETTINGS_MAGIC, SETTINGS_VERSION};
pub use timing::TimingConfig;
