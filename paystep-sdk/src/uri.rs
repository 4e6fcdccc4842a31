//! Wallet URI derivation.
//!
//! Monero wallets accept `monero:{address}?tx_amount={amount}` links, which
//! the checkout widget renders both as a clickable link and as a QR code.

use crate::objects::payment::PaymentRecord;
use rust_decimal::Decimal;

/// Build a `monero:` wallet URI for the given receiving address and amount.
///
/// A missing amount is rendered as `0`, which wallets treat as "let the user
/// type the amount". The address is percent-encoded; for well-formed base58
/// addresses this is the identity.
pub fn wallet_uri(address: &str, amount: Option<Decimal>) -> String {
    let amount = amount.unwrap_or(Decimal::ZERO);
    format!("monero:{}?tx_amount={amount}", urlencoding::encode(address))
}

impl PaymentRecord {
    /// The wallet URI for this record, see [`wallet_uri`].
    pub fn wallet_uri(&self) -> String {
        wallet_uri(&self.address, self.xmr_amount)
    }
}
