//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use super::{Action, StopwatchState, StopwatchView};
use crate::{
    config::Config,
    error::{AppError, TransitionError},
    services::{Clock, SystemClock},
    tasks::Ticker,
};

/// Main application state that owns the stopwatch and its ticker
///
/// Locks are always taken in the order ticker, then stopwatch. The tick
/// callback only takes the stopwatch lock.
pub struct AppState {
    /// Lap bookkeeping, shared with the ticker callback
    stopwatch: Arc<Mutex<StopwatchState>>,
    /// Periodic tick source, active only while running
    ticker: Mutex<Ticker>,
    clock: Arc<dyn Clock>,
    /// Server metadata
    pub start_time: Instant,
    /// Last action tracking
    last_action: Mutex<Option<(Action, DateTime<Utc>)>>,
}

impl AppState {
    /// Create a new AppState backed by the system clock
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config.tick_period(), Arc::new(SystemClock))
    }

    pub fn with_clock(tick_period: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            stopwatch: Arc::new(Mutex::new(StopwatchState::new())),
            ticker: Mutex::new(Ticker::new(tick_period)),
            clock,
            start_time: Instant::now(),
            last_action: Mutex::new(None),
        }
    }

    fn lock_ticker(&self) -> Result<MutexGuard<'_, Ticker>, AppError> {
        self.ticker.lock().map_err(|e| {
            error!("Failed to lock ticker: {}", e);
            AppError::LockPoisoned("ticker")
        })
    }

    fn lock_stopwatch(&self) -> Result<MutexGuard<'_, StopwatchState>, AppError> {
        self.stopwatch.lock().map_err(|e| {
            error!("Failed to lock stopwatch: {}", e);
            AppError::LockPoisoned("stopwatch")
        })
    }

    /// Run a transition against the stopwatch and apply its ticker side effect
    fn transition<F>(&self, action: Action, apply: F) -> Result<StopwatchView, AppError>
    where
        F: FnOnce(&mut StopwatchState, u64) -> Result<(), TransitionError>,
    {
        let mut ticker = self.lock_ticker()?;
        let mut stopwatch = self.lock_stopwatch()?;

        let now = self.clock.now_ms();
        if let Err(e) = apply(&mut *stopwatch, now) {
            warn!("Rejected {} action: {}", action, e);
            return Err(e.into());
        }
        let view = StopwatchView::from_state(&stopwatch);
        drop(stopwatch);

        match action {
            Action::Start | Action::Resume => self.acquire_ticker(&mut ticker),
            Action::Stop => ticker.stop(),
            Action::Lap | Action::Reset => {}
        }
        drop(ticker);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action, Utc::now()));
        }

        info!("Stopwatch {} at {} ({} laps)", action, view.display, view.laps.len());
        Ok(view)
    }

    fn acquire_ticker(&self, ticker: &mut Ticker) {
        let stopwatch = Arc::clone(&self.stopwatch);
        let clock = Arc::clone(&self.clock);
        ticker.start(move || match stopwatch.lock() {
            Ok(mut state) => state.tick(clock.now_ms()),
            Err(e) => error!("Failed to lock stopwatch on tick: {}", e),
        });
    }

    pub fn start(&self) -> Result<StopwatchView, AppError> {
        self.transition(Action::Start, |sw, now| sw.start(now))
    }

    pub fn lap(&self) -> Result<StopwatchView, AppError> {
        self.transition(Action::Lap, |sw, now| sw.lap(now))
    }

    pub fn stop(&self) -> Result<StopwatchView, AppError> {
        self.transition(Action::Stop, |sw, _| sw.stop())
    }

    pub fn resume(&self) -> Result<StopwatchView, AppError> {
        self.transition(Action::Resume, |sw, now| sw.resume(now))
    }

    pub fn reset(&self) -> Result<StopwatchView, AppError> {
        self.transition(Action::Reset, |sw, _| sw.reset())
    }

    /// Advance the stopwatch to the clock's current time
    pub fn tick(&self) -> Result<(), AppError> {
        let now = self.clock.now_ms();
        self.lock_stopwatch()?.tick(now);
        Ok(())
    }

    /// Get the current read model
    pub fn view(&self) -> Result<StopwatchView, AppError> {
        Ok(StopwatchView::from_state(&*self.lock_stopwatch()?))
    }

    /// Get a copy of the raw stopwatch state
    pub fn snapshot(&self) -> Result<StopwatchState, AppError> {
        Ok(self.lock_stopwatch()?.clone())
    }

    pub fn ticker_active(&self) -> Result<bool, AppError> {
        Ok(self.lock_ticker()?.is_active())
    }

    /// Release the ticker so no callback outlives the server
    pub fn shutdown(&self) {
        match self.ticker.lock() {
            Ok(mut ticker) => ticker.stop(),
            // The guard is still usable after a panic elsewhere
            Err(poisoned) => poisoned.into_inner().stop(),
        }
        debug!("Ticker released on shutdown");
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<Action>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|a| *a) {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }
}
