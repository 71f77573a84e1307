//! External collaborators of the stopwatch
//!
//! The stopwatch core never reads time on its own; it is handed timestamps
//! from one of the clocks in this module.

pub mod clock;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
