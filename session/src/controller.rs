//! Submission controller implementation.

use std::sync::Arc;

use parking_lot::Mutex;
use quoteswap_common::{ConversionRequest, CurrencyCode, ErrorKind};
use quoteswap_engine::{Quote, QuoteEngine, ValidatedRequest};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::metrics::{SessionMetrics, SessionMetricsSnapshot, SharedSessionMetrics};
use crate::scheduler::{SharedScheduler, TokioScheduler};
use crate::session::{SessionDefaults, SessionEvent, SwapSession};
use crate::state::{InvalidTransition, SessionState};
use crate::view::SessionView;

/// Result of a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submit was in flight; nothing changed.
    Rejected,
    /// The session recorded this error.
    Failed(ErrorKind),
    /// The quote landed on the session.
    Completed(Quote),
    /// The session was reset or reversed while waiting; the quote was dropped.
    Discarded,
}

impl SubmitOutcome {
    /// Check if a quote landed.
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }

    /// The landed quote, if any.
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            SubmitOutcome::Completed(quote) => Some(quote),
            _ => None,
        }
    }
}

/// A validated submit waiting out the latency.
struct PendingSubmit {
    epoch: u64,
    validated: ValidatedRequest,
}

enum Admission {
    Pending(PendingSubmit),
    Settled(SubmitOutcome),
}

/// Drives one swap session.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct SubmissionController {
    /// Stable across resets.
    session_id: Uuid,
    /// Never locked across an await.
    session: Arc<Mutex<SwapSession>>,
    engine: QuoteEngine,
    scheduler: SharedScheduler,
    config: Arc<SessionConfig>,
    metrics: SharedSessionMetrics,
}

impl SubmissionController {
    /// Create a controller with a fresh session at the configured defaults.
    pub fn new(engine: QuoteEngine, scheduler: SharedScheduler, config: SessionConfig) -> Self {
        let session = SwapSession::new(SessionDefaults::from(&config));

        Self {
            session_id: session.id(),
            session: Arc::new(Mutex::new(session)),
            engine,
            scheduler,
            config: Arc::new(config),
            metrics: Arc::new(SessionMetrics::new()),
        }
    }

    /// Create a controller with default configuration and real-time latency.
    pub fn with_defaults(engine: QuoteEngine) -> Self {
        Self::new(engine, Arc::new(TokioScheduler), SessionConfig::default())
    }

    /// Get the session ID.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Copy of the current session.
    pub fn session(&self) -> SwapSession {
        self.session.lock().clone()
    }

    /// Get current session state.
    pub fn state(&self) -> SessionState {
        self.session.lock().state()
    }

    /// The quote engine.
    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get current metrics snapshot.
    pub fn metrics(&self) -> SessionMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Render-ready view of the current session.
    pub fn view(&self) -> SessionView {
        let session = self.session.lock();
        SessionView::build(&session, &self.engine, &self.config.icon_base_url)
    }

    /// Choose the source currency.
    pub fn select_from(&self, currency: impl Into<CurrencyCode>) {
        self.apply(SessionEvent::SelectFrom(currency.into()));
    }

    /// Choose the target currency.
    pub fn select_to(&self, currency: impl Into<CurrencyCode>) {
        self.apply(SessionEvent::SelectTo(currency.into()));
    }

    /// Replace the amount text.
    pub fn enter_amount(&self, text: impl Into<String>) {
        self.apply(SessionEvent::EnterAmount(text.into()));
    }

    /// Swap direction. Allowed in every state; an in-flight submit is dropped.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn reverse(&self) {
        self.metrics.reversed();
        self.apply(SessionEvent::Reverse);
        debug!("Direction reversed");
    }

    /// Return to defaults. Allowed in every state; an in-flight submit is dropped.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn reset(&self) {
        self.metrics.reset();
        self.apply(SessionEvent::Reset);
        debug!("Session reset");
    }

    /// Submit the session's current fields.
    pub async fn submit_current(&self) -> SubmitOutcome {
        let request = self.session.lock().request();
        self.submit(request).await
    }

    /// Validate the request, wait out the submit latency, then land a quote.
    ///
    /// Rejected without effect while another submit is in flight.
    #[instrument(
        skip(self, request),
        fields(
            session_id = %self.session_id,
            pair = %request.pair(),
            amount = %request.from_amount_text
        )
    )]
    pub async fn submit(&self, request: ConversionRequest) -> SubmitOutcome {
        self.metrics.submit_received();

        let pending = match self.begin_submit(&request) {
            Ok(Admission::Pending(pending)) => pending,
            Ok(Admission::Settled(outcome)) => return self.record(outcome),
            Err(e) => {
                warn!(error = %e, "Submit refused by session state");
                return self.record(SubmitOutcome::Rejected);
            }
        };

        self.scheduler.sleep(self.config.submit_latency).await;

        let outcome = self.finish_submit(pending).unwrap_or_else(|e| {
            warn!(error = %e, "Quote could not be recorded");
            SubmitOutcome::Discarded
        });
        self.record(outcome)
    }

    fn apply(&self, event: SessionEvent) {
        let mut session = self.session.lock();
        let current = std::mem::take(&mut *session);
        *session = current.apply(event);
    }

    fn begin_submit(&self, request: &ConversionRequest) -> Result<Admission, InvalidTransition> {
        let mut session = self.session.lock();

        if !session.state().accepts_submit() {
            return Ok(Admission::Settled(SubmitOutcome::Rejected));
        }

        session.begin_validation(request)?;

        match self.engine.validate(request) {
            Ok(validated) => {
                let epoch = session.mark_submitting()?;
                Ok(Admission::Pending(PendingSubmit { epoch, validated }))
            }
            Err(kind) => {
                session.fail(kind)?;
                Ok(Admission::Settled(SubmitOutcome::Failed(kind)))
            }
        }
    }

    fn finish_submit(&self, pending: PendingSubmit) -> Result<SubmitOutcome, InvalidTransition> {
        let mut session = self.session.lock();

        if session.epoch != pending.epoch || !session.state().is_busy() {
            return Ok(SubmitOutcome::Discarded);
        }

        match self.engine.compute(&pending.validated) {
            Ok(quote) => {
                session.succeed(&quote)?;
                Ok(SubmitOutcome::Completed(quote))
            }
            Err(kind) => {
                session.fail(kind)?;
                Ok(SubmitOutcome::Failed(kind))
            }
        }
    }

    fn record(&self, outcome: SubmitOutcome) -> SubmitOutcome {
        match &outcome {
            SubmitOutcome::Rejected => {
                self.metrics.submit_rejected();
                debug!("Submit rejected, another submit is in flight");
            }
            SubmitOutcome::Failed(kind) if kind.is_validation() => {
                self.metrics.validation_failed();
            }
            SubmitOutcome::Failed(kind) => {
                self.metrics.quote_failed();
                warn!(code = kind.error_code(), "Submit failed");
            }
            SubmitOutcome::Completed(quote) => {
                self.metrics.quote_completed();
                info!(to_amount = %quote.to_amount, "Swap completed");
            }
            SubmitOutcome::Discarded => {
                self.metrics.quote_discarded();
                debug!("Session moved on, quote discarded");
            }
        }
        outcome
    }
}
