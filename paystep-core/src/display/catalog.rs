//! Localized strings for display resolution.
//!
//! The storefront's locale service stays external; the resolver only needs a
//! way to ask for a string by key. [`EnglishCatalog`] ships the defaults so
//! resolution works without any host-provided catalog.

use std::borrow::Cow;

use crate::display::method::PaymentMethodRecord;

/// Source of localized strings, keyed the way storefront locale files are
/// (`payment.credit_card_text`, `payment.zip_display_name_text`, …).
pub trait Catalog {
    /// Translated text for a key, or `None` when the key is unknown.
    fn translate(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// Built-in English strings for every key the default rule table uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl Catalog for EnglishCatalog {
    fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        let text = match key {
            "payment.credit_card_text" => "Credit Card",
            "payment.credit_debit_card_text" => "Credit/Debit Card",
            "payment.bluesnap_direct_electronic_check_label" => "Electronic Check",
            "payment.bluesnap_direct_local_bank_transfer_label" => "Local Bank Transfer",
            "payment.ratepay.payment_method_title" => "Direct Debit via RatePay",
            "payment.affirm_display_name_text" => "Pay over time with Affirm",
            "payment.digitalriver_display_name_text" => "Digital River",
            "payment.quadpay_display_name_text" => "Pay in 4 installments with Quadpay",
            "payment.sezzle_display_name_text" => "4 interest-free payments with Sezzle",
            "payment.zip_display_name_text" => "Own it now, pay later with Zip",
            "payment.stripe_sepa_display_name_text" => "SEPA Direct Debit",
            "payment.paypal_credit_subtitle_text" => "Buy now, pay later with PayPal Credit",
            "payment.monero_name_text" => "Monero",
            _ => return None,
        };
        Some(Cow::Borrowed(text))
    }
}

/// Translate `key` against the host catalog, falling back to the built-in
/// English strings, and finally to the key itself so a missing entry stays
/// visible instead of blanking the title.
pub fn translate(catalog: &dyn Catalog, key: &str) -> String {
    catalog
        .translate(key)
        .or_else(|| EnglishCatalog.translate(key))
        .map(Cow::into_owned)
        .unwrap_or_else(|| key.to_string())
}

/// Canonical human name of a method: the catalog's name entry when present,
/// else the storefront-configured display name, else the raw id.
pub fn method_name(method: &PaymentMethodRecord, catalog: &dyn Catalog) -> String {
    let key = format!("payment.{}_name_text", method.id);
    if let Some(name) = catalog.translate(&key).or_else(|| EnglishCatalog.translate(&key)) {
        return name.into_owned();
    }
    match method.config.display_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => method.id.clone(),
    }
}

/// Merchant-facing display name: the storefront-configured display name wins,
/// then the catalog's display-name entry, then the raw id.
pub fn method_display_name(method: &PaymentMethodRecord, catalog: &dyn Catalog) -> String {
    if let Some(name) = method.config.display_name.as_deref() {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    let key = format!("payment.{}_display_name_text", method.id);
    catalog
        .translate(&key)
        .or_else(|| EnglishCatalog.translate(&key))
        .map(Cow::into_owned)
        .unwrap_or_else(|| method.id.clone())
}
