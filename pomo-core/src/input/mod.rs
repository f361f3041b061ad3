//! Touch input processing
//!
//! Raw samples flow through three stages: the interrupt line is debounced
//! into a stable "touch active" signal, the gesture detector classifies
//! each press, and the transform maps panel coordinates into the current
//! display orientation.

pub mod debounce;
pub mod gesture;
pub mod transform;

pub use debounce::Debouncer;
pub use gesture::{DropReason, GestureDetector, TouchEvent};
pub use transform::TouchTransform;
