//! Lap Timer - A stopwatch with lap splits served over HTTP
//!
//! This library provides the stopwatch state machine, the ticker that keeps
//! a running stopwatch current, and the HTTP surface that drives and renders
//! it.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, TransitionError};
pub use state::{AppState, Phase, StopwatchState, StopwatchView};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
