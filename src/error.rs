//! Error types for stopwatch transitions and application state access

use thiserror::Error;

use crate::state::{Action, Phase};

/// Raised when an action is invoked outside the phase it is valid in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} while the stopwatch is {phase}")]
    InvalidStateTransition { action: Action, phase: Phase },
}

/// Errors surfaced by the shared application state
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),
}
