//! The swap session value and its synchronous transitions.

use quoteswap_common::{defaults, ConversionRequest, CurrencyCode, CurrencyPair, ErrorKind};
use quoteswap_engine::Quote;
use serde::Serialize;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::reversal::reverse;
use crate::state::{InvalidTransition, SessionState};

/// Values a session starts with and returns to on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub from_amount_text: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            from_currency: CurrencyCode::new(defaults::FROM_CURRENCY),
            to_currency: CurrencyCode::new(defaults::TO_CURRENCY),
            from_amount_text: defaults::FROM_AMOUNT.to_string(),
        }
    }
}

impl From<&SessionConfig> for SessionDefaults {
    fn from(config: &SessionConfig) -> Self {
        Self {
            from_currency: config.default_from.clone(),
            to_currency: config.default_to.clone(),
            from_amount_text: config.default_amount.clone(),
        }
    }
}

/// Synchronous input to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Choose the source currency.
    SelectFrom(CurrencyCode),
    /// Choose the target currency.
    SelectTo(CurrencyCode),
    /// Replace the amount text.
    EnterAmount(String),
    /// Swap direction, mirroring the displayed amounts.
    Reverse,
    /// Return to defaults.
    Reset,
}

/// One user's in-progress conversion.
///
/// Invariants kept by the transition methods:
/// - `Failed` carries an error and `succeeded == false`
/// - `Success` carries `succeeded == true` and no error
/// - `to_amount_text` is written only by a landed quote or by reversal
#[derive(Debug, Clone, Serialize)]
pub struct SwapSession {
    pub(crate) id: Uuid,
    pub(crate) state: SessionState,
    pub(crate) from_currency: CurrencyCode,
    pub(crate) to_currency: CurrencyCode,
    pub(crate) from_amount_text: String,
    pub(crate) to_amount_text: String,
    pub(crate) error: Option<ErrorKind>,
    pub(crate) succeeded: bool,
    /// Bumped by reset and reverse; an in-flight submit from an older epoch
    /// is dropped when it resumes.
    #[serde(skip)]
    pub(crate) epoch: u64,
    #[serde(skip)]
    pub(crate) defaults: SessionDefaults,
}

impl SwapSession {
    /// Create a session at the given defaults.
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            id: Uuid::now_v7(),
            state: SessionState::Idle,
            from_currency: defaults.from_currency.clone(),
            to_currency: defaults.to_currency.clone(),
            from_amount_text: defaults.from_amount_text.clone(),
            to_amount_text: String::new(),
            error: None,
            succeeded: false,
            epoch: 0,
            defaults,
        }
    }

    /// Session identifier, kept across resets.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Currency being sold.
    pub fn from_currency(&self) -> &CurrencyCode {
        &self.from_currency
    }

    /// Currency being bought.
    pub fn to_currency(&self) -> &CurrencyCode {
        &self.to_currency
    }

    /// Amount text as entered.
    pub fn from_amount_text(&self) -> &str {
        &self.from_amount_text
    }

    /// Quoted amount text, empty until a quote lands.
    pub fn to_amount_text(&self) -> &str {
        &self.to_amount_text
    }

    /// Error of the last failed submit.
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Check if the last submit landed a quote.
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Values restored by reset.
    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }

    /// Get the currency pair.
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from_currency.clone(), self.to_currency.clone())
    }

    /// The request a submit of the current fields would carry.
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(
            self.from_currency.clone(),
            self.to_currency.clone(),
            self.from_amount_text.clone(),
        )
    }

    /// Check whether the session still shows its defaults.
    pub fn is_pristine(&self) -> bool {
        self.state == SessionState::Idle
            && self.from_currency == self.defaults.from_currency
            && self.to_currency == self.defaults.to_currency
            && self.from_amount_text == self.defaults.from_amount_text
            && self.to_amount_text.is_empty()
            && self.error.is_none()
            && !self.succeeded
    }

    /// Apply a synchronous event.
    ///
    /// Selecting and typing change fields only. `Reverse` and `Reset` also
    /// invalidate an in-flight submit; a reversed `Submitting` session
    /// returns to `Idle`.
    pub fn apply(self, event: SessionEvent) -> SwapSession {
        let mut session = self;
        match event {
            SessionEvent::SelectFrom(code) => session.from_currency = code,
            SessionEvent::SelectTo(code) => session.to_currency = code,
            SessionEvent::EnterAmount(text) => session.from_amount_text = text,
            SessionEvent::Reverse => {
                session.epoch += 1;
                if session.state.is_busy() {
                    session.state = SessionState::Idle;
                }
                session = reverse(session);
            }
            SessionEvent::Reset => {
                let epoch = session.epoch + 1;
                let id = session.id;
                session = SwapSession::new(session.defaults);
                session.id = id;
                session.epoch = epoch;
            }
        }
        session
    }

    /// Move to `next` if the transition table allows it.
    pub(crate) fn transition_to(&mut self, next: SessionState) -> Result<(), InvalidTransition> {
        if !self.state.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }

    /// Load the submitted request and enter `Validating`.
    pub(crate) fn begin_validation(&mut self, request: &ConversionRequest) -> Result<(), InvalidTransition> {
        self.transition_to(SessionState::Validating)?;
        self.from_currency = request.from_currency.clone();
        self.to_currency = request.to_currency.clone();
        self.from_amount_text = request.from_amount_text.clone();
        self.error = None;
        self.succeeded = false;
        Ok(())
    }

    /// Latch the session in `Submitting` and return the epoch to resume in.
    pub(crate) fn mark_submitting(&mut self) -> Result<u64, InvalidTransition> {
        self.transition_to(SessionState::Submitting)?;
        Ok(self.epoch)
    }

    /// Record a failure; the quoted amount is cleared.
    pub(crate) fn fail(&mut self, kind: ErrorKind) -> Result<(), InvalidTransition> {
        self.transition_to(SessionState::Failed)?;
        self.error = Some(kind);
        self.succeeded = false;
        self.to_amount_text.clear();
        Ok(())
    }

    /// Land a quote.
    pub(crate) fn succeed(&mut self, quote: &Quote) -> Result<(), InvalidTransition> {
        self.transition_to(SessionState::Success)?;
        self.to_amount_text = quote.to_amount.clone();
        self.error = None;
        self.succeeded = true;
        Ok(())
    }
}

impl Default for SwapSession {
    fn default() -> Self {
        Self::new(SessionDefaults::default())
    }
}
