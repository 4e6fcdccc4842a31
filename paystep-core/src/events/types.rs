//! Message and state types exchanged between the status poller and its host.

use paystep_sdk::objects::payment::PaymentRecord;
use serde::Serialize;

/// Command sent from a [`PollerHandle`] to the poll loop.
///
/// [`PollerHandle`]: crate::processors::status_poller::PollerHandle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    /// Re-run the fetch immediately without waiting for the next tick.
    Retry,
}

/// Coarse phase of the payment panel, derived from [`PaymentPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PollPhase {
    /// No fetch has started yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded and a record is available.
    Ready,
    /// The latest fetch failed.
    Error,
}

/// Everything the checkout widget needs to render the payment panel.
///
/// Published through a `watch` channel, so subscribers always observe the
/// latest snapshot and never a partially applied update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentPanel {
    /// Whether a fetch is currently in flight.
    pub loading: bool,
    /// The most recent successfully fetched record. A failed refresh keeps
    /// the previous record so the buyer can still see the address.
    pub payment: Option<PaymentRecord>,
    /// Wallet URI derived from `payment`.
    pub payment_uri: Option<String>,
    /// Buyer-facing error message from the latest failed fetch, if any.
    pub error: Option<String>,
}

impl PaymentPanel {
    /// Coarse phase for hosts that only care about which panel to show.
    ///
    /// `Loading` wins over `Error`, and `Error` wins over `Ready`: a stale
    /// record behind an error banner is still an error panel.
    pub fn phase(&self) -> PollPhase {
        if self.loading {
            PollPhase::Loading
        } else if self.error.is_some() {
            PollPhase::Error
        } else if self.payment.is_some() {
            PollPhase::Ready
        } else {
            PollPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paystep_sdk::objects::payment::PaymentState;

    fn record() -> PaymentRecord {
        PaymentRecord {
            order_id: 1,
            xmr_amount: None,
            address: "4AhmQy".to_string(),
            payment_state: PaymentState::Unpaid,
        }
    }

    #[test]
    fn test_phase_is_idle_before_first_fetch() {
        assert_eq!(PaymentPanel::default().phase(), PollPhase::Idle);
    }

    #[test]
    fn test_phase_loading_wins_over_error_and_record() {
        let panel = PaymentPanel {
            loading: true,
            payment: Some(record()),
            payment_uri: None,
            error: Some("boom".to_string()),
        };
        assert_eq!(panel.phase(), PollPhase::Loading);
    }

    #[test]
    fn test_phase_error_wins_over_retained_record() {
        let panel = PaymentPanel {
            loading: false,
            payment: Some(record()),
            payment_uri: Some("monero:4AhmQy?tx_amount=0".to_string()),
            error: Some("boom".to_string()),
        };
        assert_eq!(panel.phase(), PollPhase::Error);
    }

    #[test]
    fn test_phase_ready_with_record_and_no_error() {
        let panel = PaymentPanel {
            loading: false,
            payment: Some(record()),
            payment_uri: Some("monero:4AhmQy?tx_amount=0".to_string()),
            error: None,
        };
        assert_eq!(panel.phase(), PollPhase::Ready);
    }
}
