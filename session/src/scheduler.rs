//! Latency scheduling for submissions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// Source of the simulated submission latency.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Suspend the caller for `delay`.
    async fn sleep(&self, delay: Duration);
}

/// Real-time scheduler backed by the tokio timer.
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Scheduler that never waits and records every requested delay.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    requested: Mutex<Vec<Duration>>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, oldest first.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn sleep(&self, delay: Duration) {
        self.requested.lock().push(delay);
    }
}

/// Scheduler whose sleeps end only when released.
///
/// Each call to [`ManualScheduler::release`] lets one parked (or future)
/// sleep finish, regardless of the requested delay.
#[derive(Debug)]
pub struct ManualScheduler {
    gate: Semaphore,
    requested: Mutex<Vec<Duration>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Create a shared handle.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Let one sleep finish.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    /// Delays requested so far, oldest first.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scheduler for ManualScheduler {
    async fn sleep(&self, delay: Duration) {
        self.requested.lock().push(delay);
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}

/// Shared scheduler.
pub type SharedScheduler = Arc<dyn Scheduler>;

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[tokio::test]
    async fn test_immediate_scheduler_records_delays() {
        let scheduler = ImmediateScheduler::new();

        scheduler.sleep(Duration::from_millis(2000)).await;
        scheduler.sleep(Duration::from_millis(5)).await;

        assert_eq!(
            scheduler.requested(),
            vec![Duration::from_millis(2000), Duration::from_millis(5)]
        );
    }

    #[test]
    fn test_manual_scheduler_parks_until_released() {
        let scheduler = ManualScheduler::new();
        let mut sleep = task::spawn(scheduler.sleep(Duration::from_secs(60)));

        assert_pending!(sleep.poll());
        assert_eq!(scheduler.requested(), vec![Duration::from_secs(60)]);

        scheduler.release();
        assert!(sleep.is_woken());
        assert_ready!(sleep.poll());
    }

    #[test]
    fn test_manual_scheduler_release_ahead() {
        let scheduler = ManualScheduler::new();
        scheduler.release();

        let mut sleep = task::spawn(scheduler.sleep(Duration::from_secs(1)));
        assert_ready!(sleep.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_waits() {
        let start = tokio::time::Instant::now();

        TokioScheduler.sleep(Duration::from_millis(2000)).await;

        assert!(start.elapsed() >= Duration::from_millis(2000));
    }
}
