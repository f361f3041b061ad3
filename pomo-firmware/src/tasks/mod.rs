//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod console;
pub mod settings;
pub mod ui;

pub use console::{console_rx_task, console_tx_task};
pub use settings::settings_task;
pub use ui::ui_task;
