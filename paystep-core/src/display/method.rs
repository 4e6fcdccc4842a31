//! Payment-method records as the surrounding checkout state provides them.

use serde::{Deserialize, Serialize};

/// Well-known payment-method ids used by the default rule table.
pub mod method_id {
    pub const ADYEN_V2: &str = "adyenv2";
    pub const ADYEN_V3: &str = "adyenv3";
    pub const AFFIRM: &str = "affirm";
    pub const AFTERPAY: &str = "afterpay";
    pub const AMAZON_PAY: &str = "amazonpay";
    pub const APPLEPAY: &str = "applepay";
    pub const BLUESNAP_DIRECT: &str = "bluesnapdirect";
    pub const BOLT: &str = "bolt";
    pub const BRAINTREE_ACH: &str = "braintreeach";
    pub const BRAINTREE_LOCAL_PAYMENT: &str = "braintreelocalpaymentmethod";
    pub const BRAINTREE_PAYPAL_CREDIT: &str = "braintreepaypalcredit";
    pub const BRAINTREE_VENMO: &str = "braintreevenmo";
    pub const CHECKOUTCOM: &str = "checkoutcom";
    pub const CLEARPAY: &str = "clearpay";
    pub const DIGITAL_RIVER: &str = "digitalriver";
    pub const HUMM: &str = "humm";
    pub const KLARNA: &str = "klarna";
    pub const LAYBUY: &str = "laybuy";
    pub const MASTERPASS: &str = "masterpass";
    pub const MOLLIE: &str = "mollie";
    pub const MONERO: &str = "monero";
    pub const OPY: &str = "opy";
    pub const PAYPAL_COMMERCE: &str = "paypalcommerce";
    pub const PAYPAL_COMMERCE_ALTERNATIVE: &str = "paypalcommercealternativemethods";
    pub const PAYPAL_COMMERCE_CREDIT: &str = "paypalcommercecredit";
    pub const PAYPAL_COMMERCE_VENMO: &str = "paypalcommercevenmo";
    pub const PAYPAL_PAYMENTS_PRO: &str = "paypalpaymentspro";
    pub const QUADPAY: &str = "quadpay";
    pub const RATEPAY: &str = "ratepay";
    pub const SEZZLE: &str = "sezzle";
    pub const STRIPEV3: &str = "stripev3";
    pub const STRIPE_UPE: &str = "stripeupe";
    pub const WORLDPAY_ACCESS: &str = "worldpayaccess";
    pub const ZIP: &str = "zip";
}

/// Well-known payment-method types used by the default rule table.
pub mod method_type {
    pub const BARCLAYCARD: &str = "barclaycard";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const GOOGLE_PAY: &str = "googlepay";
    pub const PAY_WITH_GOOGLE: &str = "paywithgoogle";
    pub const PAYPAL: &str = "paypal";
    pub const PAYPAL_CREDIT: &str = "paypal-credit";
    pub const VISA_CHECKOUT: &str = "visa-checkout";
}

/// Presentation-relevant slice of a payment method's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodConfig {
    /// Merchant-configured display name.
    pub display_name: Option<String>,
    /// Method-specific logo file name, used by e.g. the Opy rule.
    pub logo: Option<String>,
}

/// A payment method as described by the checkout state.
///
/// Field names mirror the checkout SDK's JSON so records can be deserialized
/// straight out of checkout state; `methods_with_logo` is the flattened
/// `initializationData.methodsWithLogo` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodRecord {
    /// Method identifier, e.g. `klarna` or a gateway sub-method like `sepa`.
    pub id: String,
    /// Owning gateway id, when the method belongs to one.
    pub gateway: Option<String>,
    /// Method type, e.g. `credit-card` or `paypal`.
    #[serde(rename = "method")]
    pub method_type: String,
    /// Logo URL pushed down by the provider, when there is one.
    pub logo_url: Option<String>,
    pub config: MethodConfig,
    /// Sub-method ids that ship a provider logo (Stripe).
    pub methods_with_logo: Vec<String>,
    /// Card codes the method accepts (`VISA`, `MC`, `AMEX`, …).
    pub supported_cards: Vec<String>,
}
