//! QuoteSwap Session
//!
//! The session is the single piece of mutable state behind the swap form.
//! It records the user's selections and drives the submit state machine:
//! validation, simulated latency, then a quote or a classified error.
//! Reset and direction reversal are accepted at any time and invalidate a
//! submit that is still waiting.

pub mod config;
pub mod controller;
pub mod metrics;
pub mod reversal;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod view;

pub use config::SessionConfig;
pub use controller::{SubmissionController, SubmitOutcome};
pub use metrics::{SessionMetrics, SessionMetricsSnapshot};
pub use reversal::reverse;
pub use scheduler::{ImmediateScheduler, ManualScheduler, Scheduler, SharedScheduler, TokioScheduler};
pub use session::{SessionDefaults, SessionEvent, SwapSession};
pub use state::{InvalidTransition, SessionState};
pub use view::SessionView;
