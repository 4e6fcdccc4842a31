//! Precedence-based display resolution.

use crate::display::catalog::{Catalog, translate};
use crate::display::descriptor::DisplayDescriptor;
use crate::display::method::{PaymentMethodRecord, method_id, method_type};
use crate::display::table;

/// Everything a resolution needs; resolution never reaches outside of it.
pub struct ResolveRequest<'a> {
    pub method: &'a PaymentMethodRecord,
    /// Storefront CDN base, prepended to relative logo paths.
    pub cdn_base_path: &'a str,
    pub catalog: &'a dyn Catalog,
}

/// A display rule: computes a descriptor from the resolve request.
pub type Rule = fn(&ResolveRequest<'_>) -> DisplayDescriptor;

/// Resolve the display descriptor for a payment method.
///
/// Pure and total: the same request always yields the same descriptor, and
/// an unknown method falls back to the generic credit-card presentation
/// rather than erroring.
///
/// Precedence, highest first:
/// 1. gateway+id special cases (BlueSnap Direct sub-methods)
/// 2. single-id overrides (Venmo via PayPal Commerce, PayPal Payments Pro
///    cards, RatePay)
/// 3. table lookup by gateway id, then method id, then method type
/// 4. the generic credit-card rule
pub fn resolve_display(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let mut descriptor = resolve_rule(req);
    descriptor.show_monero_mark = req.method.id == method_id::MONERO;
    descriptor
}

fn resolve_rule(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let method = req.method;

    if method.gateway.as_deref() == Some(method_id::BLUESNAP_DIRECT) {
        match method.id.as_str() {
            "credit_card" => {
                return DisplayDescriptor::new("", translate(req.catalog, "payment.credit_card_text"));
            }
            "ecp" => {
                return DisplayDescriptor::new(
                    "",
                    translate(req.catalog, "payment.bluesnap_direct_electronic_check_label"),
                );
            }
            "banktransfer" => {
                return DisplayDescriptor::new(
                    "",
                    translate(
                        req.catalog,
                        "payment.bluesnap_direct_local_bank_transfer_label",
                    ),
                );
            }
            _ => {}
        }
    }

    if method.id == method_id::PAYPAL_COMMERCE_VENMO {
        return table::provider_logo_or_display_name(req);
    }

    // The paypalpaymentspro method is a credit-card method despite its id.
    if method.id == method_id::PAYPAL_PAYMENTS_PRO && method.method_type == method_type::CREDIT_CARD
    {
        return table::credit_card(req);
    }

    if method.id == method_id::RATEPAY {
        return DisplayDescriptor::new(
            method.logo_url.clone().unwrap_or_default(),
            translate(req.catalog, "payment.ratepay.payment_method_title"),
        );
    }

    let keys = [
        method.gateway.as_deref(),
        Some(method.id.as_str()),
        Some(method.method_type.as_str()),
    ];
    for key in keys.into_iter().flatten() {
        if let Some(rule) = table::rule_for(key) {
            return rule(req);
        }
    }

    table::credit_card(req)
}
