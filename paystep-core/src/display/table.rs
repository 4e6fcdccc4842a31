//! The default display-rule table.
//!
//! One flat table serves gateway-id, method-id, and method-type lookups;
//! the three key namespaces are disjoint in storefront method records. Each
//! rule computes a descriptor from the resolve request, so entries stay
//! declarative while logos and titles can still depend on the method.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::display::catalog::{method_display_name, method_name, translate};
use crate::display::descriptor::{DisplayDescriptor, Subtitle, SubtitleContext};
use crate::display::method::{method_id, method_type};
use crate::display::resolver::{ResolveRequest, Rule};

static TABLE_ENTRIES: &[(&str, Rule)] = &[
    (method_id::ADYEN_V2, adyen),
    (method_id::ADYEN_V3, adyen),
    (method_id::AFFIRM, affirm),
    (method_id::AFTERPAY, afterpay),
    (method_id::AMAZON_PAY, amazon_pay),
    (method_id::APPLEPAY, applepay),
    (method_id::BOLT, bolt),
    (method_id::BRAINTREE_ACH, provider_logo_with_display_name),
    (method_id::BRAINTREE_LOCAL_PAYMENT, provider_logo_with_display_name),
    (method_id::BRAINTREE_PAYPAL_CREDIT, braintree_paypal_credit),
    (method_id::BRAINTREE_VENMO, provider_logo_or_display_name),
    (method_id::CHECKOUTCOM, checkoutcom),
    (method_id::CLEARPAY, clearpay),
    (method_id::DIGITAL_RIVER, digital_river),
    (method_id::HUMM, humm),
    (method_id::KLARNA, klarna),
    (method_id::LAYBUY, laybuy),
    (method_id::MASTERPASS, masterpass),
    (method_id::MOLLIE, mollie),
    (method_id::OPY, opy),
    (method_id::PAYPAL_COMMERCE, paypal_commerce),
    (method_id::PAYPAL_COMMERCE_ALTERNATIVE, provider_logo_or_display_name),
    (method_id::PAYPAL_COMMERCE_CREDIT, paypal_commerce_credit),
    (method_id::QUADPAY, quadpay),
    (method_id::SEZZLE, sezzle),
    (method_id::STRIPEV3, stripe),
    (method_id::STRIPE_UPE, stripe),
    (method_id::WORLDPAY_ACCESS, worldpay_access),
    (method_id::ZIP, zip),
    (method_type::BARCLAYCARD, barclaycard),
    (method_type::CREDIT_CARD, credit_card),
    (method_type::GOOGLE_PAY, google_pay),
    (method_type::PAY_WITH_GOOGLE, google_pay),
    (method_type::PAYPAL, paypal),
    (method_type::PAYPAL_CREDIT, paypal_credit),
    (method_type::VISA_CHECKOUT, visa_checkout),
];

lazy_static! {
    static ref TITLE_RULES: HashMap<&'static str, Rule> =
        TABLE_ENTRIES.iter().copied().collect();
}

/// Look up the rule for a gateway id, method id, or method type.
pub(super) fn rule_for(key: &str) -> Option<Rule> {
    TITLE_RULES.get(key).copied()
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn cdn(req: &ResolveRequest<'_>, path: &str) -> String {
    format!("{}{}", req.cdn_base_path, path)
}

fn name(req: &ResolveRequest<'_>) -> String {
    method_name(req.method, req.catalog)
}

fn display_name(req: &ResolveRequest<'_>) -> String {
    method_display_name(req.method, req.catalog)
}

fn provider_logo(req: &ResolveRequest<'_>) -> String {
    req.method.logo_url.clone().unwrap_or_default()
}

fn pay_later_subtitle(ctx: &SubtitleContext<'_>) -> String {
    ctx.translate_or(
        "payment.paypal_credit_subtitle_text",
        "Buy now, pay later with PayPal Credit",
    )
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Generic credit-card presentation; also the resolver's final fallback.
pub(super) fn credit_card(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new("", name(req))
}

/// Provider-pushed logo when present, display name otherwise; never both.
pub(super) fn provider_logo_or_display_name(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let logo = provider_logo(req);
    let title = if logo.is_empty() {
        display_name(req)
    } else {
        String::new()
    };
    DisplayDescriptor::new(logo, title)
}

/// Provider-pushed logo (possibly empty) next to the display name.
fn provider_logo_with_display_name(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(provider_logo(req), display_name(req))
}

fn braintree_paypal_credit(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/paypal_commerce_logo_letter.svg"),
        display_name(req),
    )
    .with_subtitle(Subtitle::Dynamic(pay_later_subtitle))
}

fn paypal_commerce_credit(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/paypal_commerce_logo_letter.svg"),
        display_name(req),
    )
    .with_subtitle(Subtitle::Dynamic(pay_later_subtitle))
}

fn paypal_credit(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/paypal_commerce_logo_letter.svg"),
        display_name(req),
    )
}

fn paypal_commerce(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(cdn(req, "/img/payment-providers/paypal_commerce_logo.svg"), "")
}

fn paypal(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    // Venmo rides the paypal method-type but may push down its own logo.
    let logo = match (req.method.id.as_str(), req.method.logo_url.as_deref()) {
        (method_id::BRAINTREE_VENMO, Some(url)) if !url.is_empty() => url.to_string(),
        _ => cdn(req, "/img/payment-providers/paypalpaymentsprouk.png"),
    };
    DisplayDescriptor::new(logo, "")
}

fn visa_checkout(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(cdn(req, "/img/payment-providers/visa-checkout.png"), name(req))
}

fn affirm(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/affirm-checkout-header.png"),
        translate(req.catalog, "payment.affirm_display_name_text"),
    )
}

fn afterpay(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/afterpay-badge-blackonmint.png"),
        name(req),
    )
}

fn amazon_pay(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(cdn(req, "/img/payment-providers/amazon-header.png"), "")
}

fn applepay(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/modules/checkout/applepay/images/applepay-header@2x.png"),
        "",
    )
}

fn bolt(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new("", display_name(req))
}

fn clearpay(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(cdn(req, "/img/payment-providers/clearpay-header.png"), "")
}

fn google_pay(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(cdn(req, "/img/payment-providers/google-pay.png"), "")
}

fn digital_river(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        "",
        translate(req.catalog, "payment.digitalriver_display_name_text"),
    )
}

fn humm(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(cdn(req, "/img/payment-providers/humm-checkout-header.png"), "")
}

fn klarna(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/klarna-header.png"),
        display_name(req),
    )
}

fn laybuy(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/laybuy-checkout-header.png"),
        "",
    )
}

fn masterpass(_req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        "https://masterpass.com/dyn/img/acc/global/mp_mark_hor_blk.svg",
        "",
    )
}

fn opy(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let logo = req.method.config.logo.as_deref().unwrap_or("opy_default.svg");
    DisplayDescriptor::new(cdn(req, &format!("/img/payment-providers/{logo}")), "")
}

fn quadpay(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/quadpay.png"),
        translate(req.catalog, "payment.quadpay_display_name_text"),
    )
}

fn sezzle(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/sezzle-checkout-header.png"),
        translate(req.catalog, "payment.sezzle_display_name_text"),
    )
}

fn zip(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new(
        cdn(req, "/img/payment-providers/zip.png"),
        translate(req.catalog, "payment.zip_display_name_text"),
    )
}

fn barclaycard(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let id = req.method.id.to_lowercase();
    DisplayDescriptor::new(cdn(req, &format!("/img/payment-providers/barclaycard_{id}.png")), "")
}

fn adyen(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    // Adyen calls the card scheme "scheme"; its logo CDN calls it "card".
    let kind = if req.method.method_type == "scheme" {
        "card"
    } else {
        req.method.method_type.as_str()
    };
    DisplayDescriptor::new(
        format!("https://checkoutshopper-live.adyen.com/checkoutshopper/images/logos/{kind}.svg"),
        display_name(req),
    )
}

fn mollie(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    // Mollie's card sub-method uses "credit_card", underscore included.
    let logo = if req.method.method_type == "credit_card" {
        String::new()
    } else {
        cdn(
            req,
            &format!("/img/payment-providers/mollie_{}.svg", req.method.method_type),
        )
    };
    DisplayDescriptor::new(logo, display_name(req))
}

fn checkoutcom(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let logo = if ["credit_card", "card", "checkoutcom"].contains(&req.method.id.as_str()) {
        String::new()
    } else {
        cdn(
            req,
            &format!(
                "/img/payment-providers/checkoutcom_{}.svg",
                req.method.id.to_lowercase()
            ),
        )
    };
    DisplayDescriptor::new(logo, name(req))
}

fn stripe(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    let logo = if req.method.methods_with_logo.contains(&req.method.id) {
        cdn(
            req,
            &format!(
                "/img/payment-providers/stripe-{}.svg",
                req.method.id.to_lowercase()
            ),
        )
    } else {
        String::new()
    };
    let title = if req.method.method_type == "iban" {
        translate(req.catalog, "payment.stripe_sepa_display_name_text")
    } else {
        name(req)
    };
    DisplayDescriptor::new(logo, title)
}

fn worldpay_access(req: &ResolveRequest<'_>) -> DisplayDescriptor {
    DisplayDescriptor::new("", translate(req.catalog, "payment.credit_debit_card_text"))
}
