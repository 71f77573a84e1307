//! Read model consumed by the presentation layer

use std::fmt::Write as _;

use serde::Serialize;

use crate::utils::format_interval;

use super::{
    phase::{Control, Phase},
    stopwatch::StopwatchState,
};

/// A lap row ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapView {
    pub number: usize,
    pub duration_ms: u64,
    pub display: String,
}

/// Snapshot of everything the screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchView {
    pub phase: Phase,
    pub elapsed_ms: u64,
    pub display: String,
    pub controls: [Control; 2],
    pub laps: Vec<LapView>,
}

impl StopwatchView {
    pub fn from_state(state: &StopwatchState) -> Self {
        let phase = state.phase();
        let elapsed_ms = state.current_timer_value();
        Self {
            phase,
            elapsed_ms,
            display: format_interval(elapsed_ms),
            controls: phase.controls(),
            laps: state
                .lap_display_list()
                .map(|entry| LapView {
                    number: entry.number,
                    duration_ms: entry.duration_ms,
                    display: format_interval(entry.duration_ms),
                })
                .collect(),
        }
    }

    /// Render the screen as plain text
    ///
    /// Disabled buttons are shown in parentheses instead of brackets.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.display);

        let buttons: Vec<String> = self
            .controls
            .iter()
            .map(|control| {
                if control.enabled {
                    format!("[{}]", control.label)
                } else {
                    format!("({})", control.label)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", buttons.join("  "));

        for lap in &self.laps {
            let _ = writeln!(out, "#{:<4}{}", lap.number, lap.display);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_view() {
        let view = StopwatchView::from_state(&StopwatchState::new());
        assert_eq!(view.phase, Phase::Idle);
        assert_eq!(view.display, "00:00.00");
        assert!(view.laps.is_empty());
        assert_eq!(view.render_text(), "00:00.00\n(Reset)  [Start]\n");
    }

    #[test]
    fn running_view_with_laps() {
        let mut state = StopwatchState::new();
        state.start(0).unwrap();
        state.tick(1_000);
        state.lap(1_000).unwrap();
        state.tick(2_500);

        let view = StopwatchView::from_state(&state);
        assert_eq!(view.display, "00:02.50");
        let numbers: Vec<usize> = view.laps.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![2, 1]);
        assert_eq!(view.laps[0].display, "00:01.50");
        assert_eq!(
            view.render_text(),
            "00:02.50\n[Lap]  [Stop]\n#2   00:01.50\n#1   00:01.00\n"
        );
    }

    #[test]
    fn serializes_controls() {
        let mut state = StopwatchState::new();
        state.start(0).unwrap();
        state.stop().unwrap();
        let json = serde_json::to_value(StopwatchView::from_state(&state)).unwrap();
        assert_eq!(json["phase"], "paused");
        assert_eq!(json["controls"][1]["label"], "Start");
        assert_eq!(json["controls"][1]["action"], "resume");
        assert_eq!(json["controls"][0]["enabled"], true);
    }
}
