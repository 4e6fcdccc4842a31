//! Card brand detection and mapping.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::display::method::PaymentMethodRecord;

/// Card brands the display layer can render an icon for.
///
/// Serialized labels match the lowercase card-validator vocabulary
/// (`american-express`, `diners-club`, …) used across checkout assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DinersClub,
    Jcb,
    Maestro,
    #[serde(rename = "unionpay")]
    UnionPay,
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl CardBrand {
    /// The lowercase asset label for this brand.
    pub fn label(self) -> &'static str {
        match self {
            CardBrand::Visa => "visa",
            CardBrand::Mastercard => "mastercard",
            CardBrand::AmericanExpress => "american-express",
            CardBrand::Discover => "discover",
            CardBrand::DinersClub => "diners-club",
            CardBrand::Jcb => "jcb",
            CardBrand::Maestro => "maestro",
            CardBrand::UnionPay => "unionpay",
        }
    }

    /// Parse an asset label (`visa`, `american-express`, …) back to a brand.
    pub fn from_label(label: &str) -> Option<Self> {
        let brand = match label {
            "visa" => CardBrand::Visa,
            "mastercard" => CardBrand::Mastercard,
            "american-express" => CardBrand::AmericanExpress,
            "discover" => CardBrand::Discover,
            "diners-club" => CardBrand::DinersClub,
            "jcb" => CardBrand::Jcb,
            "maestro" => CardBrand::Maestro,
            "unionpay" => CardBrand::UnionPay,
            _ => return None,
        };
        Some(brand)
    }

    /// Map a storefront supported-card code (`VISA`, `MC`, `AMEX`, …) to a
    /// brand. Unknown codes yield `None` and are dropped by
    /// [`supported_card_brands`].
    pub fn from_supported_code(code: &str) -> Option<Self> {
        let brand = match code {
            "VISA" => CardBrand::Visa,
            "MC" => CardBrand::Mastercard,
            "AMEX" => CardBrand::AmericanExpress,
            "DISCOVER" => CardBrand::Discover,
            "DINERS" => CardBrand::DinersClub,
            "JCB" => CardBrand::Jcb,
            "MAESTRO" => CardBrand::Maestro,
            "CUP" => CardBrand::UnionPay,
            _ => return None,
        };
        Some(brand)
    }

    /// Detect the brand of a (possibly partially typed) card number.
    ///
    /// Spaces and dashes are ignored; any other non-digit input, or a prefix
    /// no brand claims yet, yields `None`.
    pub fn from_card_number(number: &str) -> Option<Self> {
        let digits: String = number
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && *c != '-')
            .collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        BRAND_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(&digits))
            .map(|(brand, _)| *brand)
    }
}

/// The card brands a method accepts, in the order the method lists them,
/// with unknown codes dropped.
pub fn supported_card_brands(method: &PaymentMethodRecord) -> Vec<CardBrand> {
    method
        .supported_cards
        .iter()
        .filter_map(|code| CardBrand::from_supported_code(code))
        .collect()
}

// Prefix patterns so partially typed numbers already resolve; kept in a Vec
// for deterministic match order. BIN ranges per
// https://gist.github.com/michaelkeevildown/9096cd3aac9029c4e6e05588448a8841
static BRAND_PATTERN_SOURCES: &[(CardBrand, &str)] = &[
    (CardBrand::Visa, r"^4"),
    (CardBrand::AmericanExpress, r"^3[47]"),
    (CardBrand::Maestro, r"^(5018|5020|5038|5893|6304|6759|676[1-3])"),
    (CardBrand::Mastercard, r"^(5[1-5]|2[2-7])"),
    (CardBrand::Discover, r"^(6011|64[4-9]|65)"),
    (CardBrand::DinersClub, r"^3(0[0-5]|[68])"),
    (CardBrand::Jcb, r"^35"),
    (CardBrand::UnionPay, r"^62"),
];

lazy_static! {
    static ref BRAND_PATTERNS: Vec<(CardBrand, Regex)> = BRAND_PATTERN_SOURCES
        .iter()
        .filter_map(|(brand, source)| Regex::new(source).ok().map(|re| (*brand, re)))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_brand_patterns_compile() {
        assert_eq!(BRAND_PATTERNS.len(), BRAND_PATTERN_SOURCES.len());
    }

    #[test]
    fn test_detects_full_numbers() {
        let cases = [
            ("4242424242424242", CardBrand::Visa),
            ("5555555555554444", CardBrand::Mastercard),
            ("2223003122003222", CardBrand::Mastercard),
            ("378282246310005", CardBrand::AmericanExpress),
            ("6011111111111117", CardBrand::Discover),
            ("30569309025904", CardBrand::DinersClub),
            ("3530111333300000", CardBrand::Jcb),
            ("6759649826438453", CardBrand::Maestro),
            ("6200000000000005", CardBrand::UnionPay),
        ];
        for (number, brand) in cases {
            assert_eq!(CardBrand::from_card_number(number), Some(brand), "{number}");
        }
    }

    #[test]
    fn test_detects_partial_prefixes() {
        assert_eq!(CardBrand::from_card_number("4"), Some(CardBrand::Visa));
        assert_eq!(CardBrand::from_card_number("37"), Some(CardBrand::AmericanExpress));
        assert_eq!(CardBrand::from_card_number("51"), Some(CardBrand::Mastercard));
    }

    #[test]
    fn test_ignores_separators() {
        assert_eq!(
            CardBrand::from_card_number("4242 4242 4242 4242"),
            Some(CardBrand::Visa)
        );
        assert_eq!(
            CardBrand::from_card_number("5555-5555-5555-4444"),
            Some(CardBrand::Mastercard)
        );
    }

    #[test]
    fn test_rejects_non_digits_and_unknown_prefixes() {
        assert_eq!(CardBrand::from_card_number("4242x"), None);
        assert_eq!(CardBrand::from_card_number(""), None);
        assert_eq!(CardBrand::from_card_number("1"), None);
        assert_eq!(CardBrand::from_card_number("9999"), None);
    }

    #[test]
    fn test_label_round_trip() {
        for brand in [
            CardBrand::Visa,
            CardBrand::Mastercard,
            CardBrand::AmericanExpress,
            CardBrand::Discover,
            CardBrand::DinersClub,
            CardBrand::Jcb,
            CardBrand::Maestro,
            CardBrand::UnionPay,
        ] {
            assert_eq!(CardBrand::from_label(brand.label()), Some(brand));
        }
    }

    #[test]
    fn test_supported_card_brands_drops_unknown_codes() {
        let method = PaymentMethodRecord {
            supported_cards: vec![
                "VISA".to_string(),
                "MC".to_string(),
                "DANKORT".to_string(),
                "AMEX".to_string(),
            ],
            ..PaymentMethodRecord::default()
        };
        assert_eq!(
            supported_card_brands(&method),
            vec![
                CardBrand::Visa,
                CardBrand::Mastercard,
                CardBrand::AmericanExpress
            ]
        );
    }
}
