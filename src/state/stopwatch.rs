//! Stopwatch state machine with lap bookkeeping
//!
//! All transitions take the current time in epoch milliseconds. The state
//! never reads a clock on its own, so every transition is a pure function of
//! its inputs.

use std::collections::VecDeque;

use crate::error::TransitionError;

use super::phase::{Action, Phase};

/// The open lap segment while the stopwatch is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start_ms: u64,
    now_ms: u64,
}

impl Segment {
    fn at(now_ms: u64) -> Self {
        Self { start_ms: now_ms, now_ms }
    }

    fn elapsed_ms(&self) -> u64 {
        self.now_ms.saturating_sub(self.start_ms)
    }
}

/// One row of the lap list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapEntry {
    /// Ordinal label, counting down from the total lap count to 1
    pub number: usize,
    pub duration_ms: u64,
}

/// Lap timer bookkeeping
///
/// `laps` is ordered most recent first. Entry 0 is the open lap segment while
/// running, or the most recently closed one otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    running: Option<Segment>,
    laps: VecDeque<u64>,
}

impl StopwatchState {
    /// Create an idle stopwatch with no laps
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.running, self.laps.is_empty()) {
            (Some(_), _) => Phase::Running,
            (None, true) => Phase::Idle,
            (None, false) => Phase::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Start timestamp of the open segment, 0 when not running
    pub fn start_timestamp(&self) -> u64 {
        self.running.map_or(0, |s| s.start_ms)
    }

    /// Latest tick of the open segment, 0 when not running
    pub fn now_timestamp(&self) -> u64 {
        self.running.map_or(0, |s| s.now_ms)
    }

    /// Stored lap durations, most recent first
    pub fn laps(&self) -> &VecDeque<u64> {
        &self.laps
    }

    fn ensure(&self, action: Action) -> Result<(), TransitionError> {
        let phase = self.phase();
        if phase.allows(action) {
            Ok(())
        } else {
            Err(TransitionError::InvalidStateTransition { action, phase })
        }
    }

    pub fn start(&mut self, now_ms: u64) -> Result<(), TransitionError> {
        self.ensure(Action::Start)?;
        self.laps.push_front(0);
        self.running = Some(Segment::at(now_ms));
        Ok(())
    }

    /// Advance the "now" reference of the open segment
    ///
    /// Ignored when not running. A tick earlier than the segment start is
    /// clamped to the start.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(segment) = self.running.as_mut() {
            segment.now_ms = now_ms.max(segment.start_ms);
        }
    }

    /// Close the open segment into `laps[0]`
    fn close_segment(&mut self) {
        if let Some(segment) = self.running.take() {
            if let Some(current) = self.laps.front_mut() {
                *current += segment.elapsed_ms();
            }
        }
    }

    pub fn lap(&mut self, now_ms: u64) -> Result<(), TransitionError> {
        self.ensure(Action::Lap)?;
        self.close_segment();
        self.laps.push_front(0);
        self.running = Some(Segment::at(now_ms));
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), TransitionError> {
        self.ensure(Action::Stop)?;
        self.close_segment();
        Ok(())
    }

    pub fn resume(&mut self, now_ms: u64) -> Result<(), TransitionError> {
        self.ensure(Action::Resume)?;
        self.running = Some(Segment::at(now_ms));
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.ensure(Action::Reset)?;
        *self = Self::default();
        Ok(())
    }

    /// Elapsed time of the open segment, 0 when not running
    pub fn running_delta(&self) -> u64 {
        self.running.map_or(0, |s| s.elapsed_ms())
    }

    /// Total elapsed time across all laps plus the open segment
    pub fn current_timer_value(&self) -> u64 {
        self.laps.iter().sum::<u64>() + self.running_delta()
    }

    /// Lap rows as displayed, most recent first
    ///
    /// The first row includes the open segment's elapsed time while running.
    pub fn lap_display_list(&self) -> impl Iterator<Item = LapEntry> + '_ {
        let total = self.laps.len();
        let delta = self.running_delta();
        self.laps.iter().enumerate().map(move |(index, &lap)| LapEntry {
            number: total - index,
            duration_ms: if index == 0 { lap + delta } else { lap },
        })
    }
}
