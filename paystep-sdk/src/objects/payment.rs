use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Lifecycle state of a payment, as reported by the payment service.
///
/// The service encodes this as a bare integer in JSON, so the discriminants
/// are part of the wire format and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PaymentState {
    /// No funds have been observed for this payment yet.
    Unpaid = 0,
    /// Funds were observed but are not confirmed yet.
    Pending = 1,
    /// The expected amount is confirmed on chain.
    Paid = 2,
    /// The merchant has swept the funds out of the receiving wallet.
    Withdrawn = 3,
    /// The payment was returned to the buyer.
    Refunded = 4,
    /// The payment window closed before funds arrived.
    Expired = 5,
    /// The order was deleted on the service side.
    Deleted = 6,
}

impl std::fmt::Display for PaymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentState::Unpaid => "unpaid",
            PaymentState::Pending => "pending",
            PaymentState::Paid => "paid",
            PaymentState::Withdrawn => "withdrawn",
            PaymentState::Refunded => "refunded",
            PaymentState::Expired => "expired",
            PaymentState::Deleted => "deleted",
        };
        write!(f, "{s}")
    }
}

/// Request payload for the payment-status endpoint.
///
/// The endpoint is idempotent: posting the same order id again returns the
/// current record instead of creating a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub order_id: i64,
}

/// A payment record returned by the payment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// The storefront order this payment belongs to.
    pub order_id: i64,
    /// Amount of XMR expected, once the service has quoted it.
    #[serde(default)]
    pub xmr_amount: Option<rust_decimal::Decimal>,
    /// Receiving wallet address for this payment.
    pub address: String,
    /// Current lifecycle state.
    pub payment_state: PaymentState,
}

/// Error payload the payment service returns on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
