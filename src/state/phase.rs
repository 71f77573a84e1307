//! Stopwatch phases and the controls offered in each of them

use std::fmt;

use serde::Serialize;

/// The phase the stopwatch is in, derived from its lap bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Never started since the last reset
    Idle,
    /// A lap segment is open and the ticker is active
    Running,
    /// Stopped with recorded laps
    Paused,
}

/// User actions that drive the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Lap,
    Stop,
    Resume,
    Reset,
}

/// A single button in the control row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: &'static str,
    pub action: Action,
    pub enabled: bool,
}

impl Control {
    fn enabled(label: &'static str, action: Action) -> Self {
        Self { label, action, enabled: true }
    }

    fn disabled(label: &'static str, action: Action) -> Self {
        Self { label, action, enabled: false }
    }
}

impl Phase {
    /// Check whether `action` is a valid transition out of this phase
    pub fn allows(self, action: Action) -> bool {
        matches!(
            (self, action),
            (Phase::Idle, Action::Start)
                | (Phase::Running, Action::Lap)
                | (Phase::Running, Action::Stop)
                | (Phase::Paused, Action::Resume)
                | (Phase::Paused, Action::Reset)
        )
    }

    /// The two buttons shown for this phase, left to right
    pub fn controls(self) -> [Control; 2] {
        match self {
            Phase::Idle => [
                Control::disabled("Reset", Action::Reset),
                Control::enabled("Start", Action::Start),
            ],
            Phase::Running => [
                Control::enabled("Lap", Action::Lap),
                Control::enabled("Stop", Action::Stop),
            ],
            // The resume button keeps the "Start" label
            Phase::Paused => [
                Control::enabled("Reset", Action::Reset),
                Control::enabled("Start", Action::Resume),
            ],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Start => "start",
            Action::Lap => "lap",
            Action::Stop => "stop",
            Action::Resume => "resume",
            Action::Reset => "reset",
        };
        f.write_str(name)
    }
}
