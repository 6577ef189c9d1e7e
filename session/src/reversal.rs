//! Direction reversal.

use crate::session::SwapSession;

/// Swap the currencies and mirror the displayed amounts.
///
/// The new source amount is the old quoted amount and the new quoted amount
/// is the old source amount. Nothing is validated or recomputed, so after a
/// reversal the quoted amount can disagree with the rate for the new
/// direction until the next submit. State, error and success flags are left
/// as they are.
pub fn reverse(mut session: SwapSession) -> SwapSession {
    std::mem::swap(&mut session.from_currency, &mut session.to_currency);
    std::mem::swap(&mut session.from_amount_text, &mut session.to_amount_text);
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionEvent;
    use proptest::prelude::*;
    use quoteswap_common::ConversionRequest;
    use quoteswap_engine::{PriceCatalog, PriceEntry, QuoteEngine};

    #[test]
    fn test_reverse_swaps_codes_and_mirrors_amounts() {
        let mut session = SwapSession::default().apply(SessionEvent::EnterAmount("1".to_string()));
        session.to_amount_text = "2000.000000".to_string();

        let reversed = reverse(session);

        assert_eq!(reversed.from_currency().code(), "USDC");
        assert_eq!(reversed.to_currency().code(), "ETH");
        assert_eq!(reversed.from_amount_text(), "2000.000000");
        assert_eq!(reversed.to_amount_text(), "1");
    }

    #[test]
    fn test_reverse_does_not_recompute() {
        let engine = QuoteEngine::from_catalog(PriceCatalog::from_entries(vec![
            PriceEntry::new("ETH", 2000.0),
            PriceEntry::new("USDC", 1.0),
        ]));
        let mut session = SwapSession::default().apply(SessionEvent::EnterAmount("1".to_string()));
        session.begin_validation(&session.request()).unwrap();
        session.mark_submitting().unwrap();
        let quote = engine.quote(&session.request()).unwrap();
        session.succeed(&quote).unwrap();

        // user edits the amount after the quote landed
        let session = session.apply(SessionEvent::EnterAmount("5".to_string()));
        let reversed = reverse(session);

        // a fresh quote for USDC -> ETH on "2000.000000" would be "1.000000"
        let fresh = engine
            .quote(&ConversionRequest::new("USDC", "ETH", "2000.000000"))
            .unwrap();
        assert_eq!(fresh.to_amount, "1.000000");
        assert_eq!(reversed.to_amount_text(), "5");
        assert!(reversed.succeeded());
    }

    #[test]
    fn test_reverse_with_empty_quote() {
        let session = SwapSession::default().apply(SessionEvent::EnterAmount("3".to_string()));

        let reversed = reverse(session);

        assert_eq!(reversed.from_amount_text(), "");
        assert_eq!(reversed.to_amount_text(), "3");
    }

    proptest! {
        #[test]
        fn prop_double_reverse_is_identity_without_submit(
            from in "[A-Za-z]{1,8}",
            to in "[A-Za-z]{1,8}",
            amount in "[0-9]{0,6}(\\.[0-9]{0,6})?",
            quoted in "[0-9]{0,6}(\\.[0-9]{6})?",
        ) {
            let mut session = SwapSession::default()
                .apply(SessionEvent::SelectFrom(from.as_str().into()))
                .apply(SessionEvent::SelectTo(to.as_str().into()))
                .apply(SessionEvent::EnterAmount(amount.clone()));
            session.to_amount_text = quoted.clone();

            let twice = reverse(reverse(session));

            prop_assert_eq!(twice.from_currency().code(), from.as_str());
            prop_assert_eq!(twice.to_currency().code(), to.as_str());
            prop_assert_eq!(twice.from_amount_text(), amount.as_str());
            prop_assert_eq!(twice.to_amount_text(), quoted.as_str());
        }
    }
}
