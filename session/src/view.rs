//! Render-ready projection of a session.

use quoteswap_common::constants::messages;
use quoteswap_common::{check_amount_field, AmountIssue, CurrencyCode};
use quoteswap_engine::{icon_url, QuoteEngine};
use serde::Serialize;
use uuid::Uuid;

use crate::session::SwapSession;
use crate::state::SessionState;

/// Everything a presentation layer needs to draw the swap form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub state: SessionState,
    pub from_currency: String,
    pub to_currency: String,
    pub from_amount: String,
    pub to_amount: String,
    /// Inline hint for the amount field.
    pub amount_hint: Option<&'static str>,
    pub error_code: Option<&'static str>,
    pub error_message: Option<&'static str>,
    pub success_message: Option<&'static str>,
    /// `1 <from> = <rate> <to>`.
    pub exchange_rate: Option<String>,
    pub from_estimate: Option<String>,
    pub to_estimate: Option<String>,
    pub from_icon: Option<String>,
    pub to_icon: Option<String>,
    pub can_submit: bool,
    pub busy: bool,
}

impl SessionView {
    /// Project a session through the engine's price snapshot.
    pub fn build(session: &SwapSession, engine: &QuoteEngine, icon_base_url: &str) -> Self {
        let from = session.from_currency();
        let to = session.to_currency();
        let from_amount = session.from_amount_text();
        let to_amount = session.to_amount_text();
        let issue = check_amount_field(from_amount);
        let busy = session.state().is_busy();

        let exchange_rate = if from_amount.is_empty() {
            None
        } else {
            engine.exchange_rate_line(from, to)
        };

        let from_estimate = match issue {
            None => engine.reference_estimate(from, from_amount),
            Some(_) => None,
        };

        Self {
            session_id: session.id(),
            state: session.state(),
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            from_amount: from_amount.to_string(),
            to_amount: to_amount.to_string(),
            // an untouched field is not flagged; "required" only blocks submit
            amount_hint: issue
                .filter(|issue| *issue != AmountIssue::Required)
                .map(|issue| issue.message()),
            error_code: session.error().map(|kind| kind.error_code()),
            error_message: session.error().map(|kind| kind.message()),
            success_message: session.succeeded().then_some(messages::SWAP_SUCCEEDED),
            exchange_rate,
            from_estimate,
            to_estimate: engine.reference_estimate(to, to_amount),
            from_icon: icon(icon_base_url, from),
            to_icon: icon(icon_base_url, to),
            can_submit: !busy && !from_amount.is_empty() && issue.is_none(),
            busy,
        }
    }
}

fn icon(base_url: &str, currency: &CurrencyCode) -> Option<String> {
    if currency.is_empty() {
        None
    } else {
        Some(icon_url(base_url, currency))
    }
}
