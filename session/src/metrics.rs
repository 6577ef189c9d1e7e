//! Metrics collection for session monitoring.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

/// Session counters.
#[derive(Debug, Default)]
pub struct SessionMetrics {
    /// Submits received, including rejected ones.
    pub submits_total: AtomicU64,
    /// Submits rejected because another one was in flight.
    pub submits_rejected: AtomicU64,
    /// Submits stopped by the validation pipeline.
    pub validation_failures: AtomicU64,
    /// Submits that landed a quote.
    pub quotes_completed: AtomicU64,
    /// Submits that failed after validation.
    pub quotes_failed: AtomicU64,
    /// Quotes dropped because the session moved on.
    pub quotes_discarded: AtomicU64,
    /// Direction reversals.
    pub reversals: AtomicU64,
    /// Resets.
    pub resets: AtomicU64,
}

impl SessionMetrics {
    /// Create new metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment submits received.
    pub fn submit_received(&self) {
        self.submits_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submit rejected while another was in flight.
    pub fn submit_rejected(&self) {
        self.submits_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a validation failure.
    pub fn validation_failed(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a landed quote.
    pub fn quote_completed(&self) {
        self.quotes_completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submit that failed after validation.
    pub fn quote_failed(&self) {
        self.quotes_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dropped quote.
    pub fn quote_discarded(&self) {
        self.quotes_discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment reversals.
    pub fn reversed(&self) {
        self.reversals.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment resets.
    pub fn reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot.
    pub fn snapshot(&self) -> SessionMetricsSnapshot {
        SessionMetricsSnapshot {
            submits_total: self.submits_total.load(Ordering::Relaxed),
            submits_rejected: self.submits_rejected.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            quotes_completed: self.quotes_completed.load(Ordering::Relaxed),
            quotes_failed: self.quotes_failed.load(Ordering::Relaxed),
            quotes_discarded: self.quotes_discarded.load(Ordering::Relaxed),
            reversals: self.reversals.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionMetricsSnapshot {
    pub submits_total: u64,
    pub submits_rejected: u64,
    pub validation_failures: u64,
    pub quotes_completed: u64,
    pub quotes_failed: u64,
    pub quotes_discarded: u64,
    pub reversals: u64,
    pub resets: u64,
}

impl SessionMetricsSnapshot {
    /// Submits that reached a terminal state or were dropped.
    pub fn settled(&self) -> u64 {
        self.validation_failures + self.quotes_completed + self.quotes_failed + self.quotes_discarded
    }
}

/// Shared metrics instance.
pub type SharedSessionMetrics = Arc<SessionMetrics>;
