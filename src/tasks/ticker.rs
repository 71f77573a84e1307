//! Periodic tick source for the running stopwatch

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Owned handle to a repeating callback
///
/// At most one callback task is alive per ticker. The task is aborted when
/// the ticker is stopped or dropped.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, handle: None }
    }

    /// Spawn a task that runs `on_tick` once per period, starting one period
    /// from now. Any previously started task is stopped first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, mut on_tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.stop();

        let period = self.period;
        debug!("Starting ticker with period {:?}", period);
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick();
            }
        }));
    }

    /// Abort the running task, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Stopping ticker");
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tokio::time::sleep;

    fn counting_ticker(count: &Arc<AtomicUsize>) -> impl FnMut() + Send + 'static {
        let count = Arc::clone(count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.start(counting_ticker(&count));
        assert!(ticker.is_active());

        sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_callbacks() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.start(counting_ticker(&count));

        sleep(Duration::from_millis(250)).await;
        ticker.stop();
        assert!(!ticker.is_active());
        let seen = count.load(Ordering::SeqCst);

        sleep(Duration::from_millis(1_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);

        // Stopping twice is harmless
        ticker.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_previous_task() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.start(counting_ticker(&first));
        ticker.start(counting_ticker(&second));

        sleep(Duration::from_millis(350)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_releases_task() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let mut ticker = Ticker::new(Duration::from_millis(100));
            ticker.start(counting_ticker(&count));
            sleep(Duration::from_millis(150)).await;
        }
        let seen = count.load(Ordering::SeqCst);
        assert_eq!(seen, 1);

        sleep(Duration::from_millis(1_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }
}
