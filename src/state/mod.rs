//! State management module
//!
//! This module contains the stopwatch state machine, its read model and the
//! shared application state that owns it.

pub mod app_state;
pub mod phase;
pub mod stopwatch;
pub mod view;

// Re-export main types
pub use app_state::AppState;
pub use phase::{Action, Control, Phase};
pub use stopwatch::{LapEntry, StopwatchState};
pub use view::{LapView, StopwatchView};
