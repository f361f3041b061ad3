//! Timer and screen state machines
//!
//! Two explicit, finite machines: the timer (Stopped/Running/Paused) and
//! the current screen. Both transition through `transition(self, event)`
//! and ignore events that are invalid in their current state.

pub mod countdown;
pub mod events;
pub mod machine;
pub mod mode;
pub mod view;

pub use countdown::{Countdown, Progress, PROGRESS_SCALE};
pub use events::Event;
pub use machine::TimerState;
pub use mode::{Mode, SessionKind};
pub use view::{ColorEdit, EditTarget, ViewEvent, ViewMode};
