//! Stored card instruments and selected-brand derivation.

use serde::{Deserialize, Serialize};

use crate::display::card_brand::CardBrand;
use crate::display::method::PaymentMethodRecord;

/// A stored card instrument as the surrounding checkout state provides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardInstrument {
    /// Id of the payment method this instrument belongs to.
    pub provider: String,
    /// Vault token identifying the instrument.
    #[serde(alias = "bigpayToken")]
    pub token: String,
    /// Brand label, e.g. `visa`.
    pub brand: String,
    pub last4: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

/// Card-relevant values of the active payment form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentFormValues {
    /// Token of the stored instrument the buyer picked, if any.
    pub instrument_id: Option<String>,
    /// Card number typed into a direct card field.
    pub cc_number: Option<String>,
    /// Card type reported by a hosted card fieldset.
    pub hosted_card_type: Option<String>,
}

/// Inputs for [`selected_card_brand`].
pub struct BrandRequest<'a> {
    pub method: &'a PaymentMethodRecord,
    /// Whether this method is the selected one; nothing is highlighted for
    /// unselected methods.
    pub selected: bool,
    pub instruments: &'a [CardInstrument],
    pub values: &'a PaymentFormValues,
}

/// The card brand to highlight for a method, if any.
///
/// Priority. A present source short-circuits even when its value does not
/// parse to a known brand, matching how hosted fieldsets behave:
/// 1. the hosted fieldset's reported card type
/// 2. the brand detected from the typed card number
/// 3. the brand of the stored instrument selected for this method
pub fn selected_card_brand(req: &BrandRequest<'_>) -> Option<CardBrand> {
    if !req.selected {
        return None;
    }

    if let Some(card_type) = req.values.hosted_card_type.as_deref() {
        return CardBrand::from_label(card_type);
    }

    if let Some(number) = req.values.cc_number.as_deref() {
        if !number.is_empty() {
            return CardBrand::from_card_number(number);
        }
    }

    instrument_for_method(req.instruments, req.method, req.values)
        .and_then(|instrument| CardBrand::from_label(&instrument.brand))
}

/// The stored instrument the form has selected for this method, if any.
fn instrument_for_method<'a>(
    instruments: &'a [CardInstrument],
    method: &PaymentMethodRecord,
    values: &PaymentFormValues,
) -> Option<&'a CardInstrument> {
    let instrument_id = values.instrument_id.as_deref()?;
    instruments
        .iter()
        .filter(|instrument| instrument.provider == method.id)
        .find(|instrument| instrument.token == instrument_id)
}
