//! Session state definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Submission state of a swap session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Nothing submitted since start or reset.
    #[default]
    Idle,
    /// Validation pipeline running.
    Validating,
    /// Validated, waiting for the quote.
    Submitting,
    /// Last submit failed; the session carries the error.
    Failed,
    /// Last submit produced a quote.
    Success,
}

impl SessionState {
    /// Check if this is a terminal state of a submit.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Failed | SessionState::Success)
    }

    /// Check if a submit is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionState::Submitting)
    }

    /// Check if a new submit may start.
    pub fn accepts_submit(&self) -> bool {
        !self.is_busy()
    }

    /// Get valid next states from current state.
    ///
    /// `Idle` is reachable from every state through reset; it is listed only
    /// where the table needs it for an ordinary transition.
    pub fn valid_transitions(&self) -> &[SessionState] {
        match self {
            SessionState::Idle => &[SessionState::Validating],
            SessionState::Validating => &[SessionState::Failed, SessionState::Submitting],
            SessionState::Submitting => &[
                SessionState::Success,
                SessionState::Failed,
                SessionState::Idle,
            ],
            SessionState::Failed => &[SessionState::Validating, SessionState::Idle],
            SessionState::Success => &[SessionState::Validating, SessionState::Idle],
        }
    }

    /// Check if transition to given state is valid.
    pub fn can_transition_to(&self, next: SessionState) -> bool {
        self.valid_transitions().contains(&next)
    }
}

/// Error when attempting invalid state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid session transition from {from:?} to {to:?}")]
pub struct InvalidTransition {
    pub from: SessionState,
    pub to: SessionState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert!(SessionState::Idle.can_transition_to(SessionState::Validating));
        assert!(SessionState::Validating.can_transition_to(SessionState::Submitting));
        assert!(SessionState::Submitting.can_transition_to(SessionState::Success));
    }

    #[test]
    fn test_resubmit_from_terminal_states() {
        assert!(SessionState::Failed.can_transition_to(SessionState::Validating));
        assert!(SessionState::Success.can_transition_to(SessionState::Validating));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!SessionState::Idle.can_transition_to(SessionState::Success));
        assert!(!SessionState::Validating.can_transition_to(SessionState::Success));
        assert!(!SessionState::Submitting.can_transition_to(SessionState::Validating));
        assert!(!SessionState::Success.can_transition_to(SessionState::Failed));
    }

    #[test]
    fn test_state_flags() {
        assert!(SessionState::Failed.is_terminal());
        assert!(SessionState::Success.is_terminal());
        assert!(!SessionState::Submitting.is_terminal());
        assert!(SessionState::Submitting.is_busy());
        assert!(!SessionState::Submitting.accepts_submit());
        assert!(SessionState::Success.accepts_submit());
    }
}
