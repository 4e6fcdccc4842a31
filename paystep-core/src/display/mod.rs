//! Payment-method display resolution.
//!
//! Given a [`PaymentMethodRecord`] and a CDN base path, [`resolve_display`]
//! produces the [`DisplayDescriptor`] a renderer needs: logo URL, title text,
//! optional subtitle and whether to show the Monero mark. Resolution is a
//! pure precedence lookup over a static rule table keyed by gateway id,
//! method id and method type, with a handful of overrides for methods whose
//! wire shape does not carry enough information on its own.
//!
//! [`selected_card_brand`] and [`supported_card_brands`] cover the card
//! side: which brand to highlight for the selected method and which brands a
//! method accepts at all.

mod card_brand;
mod catalog;
mod descriptor;
mod instrument;
mod method;
mod resolver;
mod table;

pub use card_brand::{CardBrand, supported_card_brands};
pub use catalog::{Catalog, EnglishCatalog, method_display_name, method_name, translate};
pub use descriptor::{DisplayDescriptor, Subtitle, SubtitleContext};
pub use instrument::{BrandRequest, CardInstrument, PaymentFormValues, selected_card_brand};
pub use method::{MethodConfig, PaymentMethodRecord, method_id, method_type};
pub use resolver::{ResolveRequest, Rule, resolve_display};
