//! Engine-wide settings that do not travel with a request.

use crate::template::Template;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How prices are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
    /// `4,50 €` when true, `€4,50` when false.
    pub symbol_after: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "€".to_string(),
            decimal_separator: ',',
            thousands_separator: None,
            symbol_after: true,
        }
    }
}

impl CurrencyFormat {
    /// Formats `amount` with two decimals, rounding half away from zero.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut number = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            number.push('-');
        }
        match self.thousands_separator {
            Some(sep) => {
                let digits: Vec<char> = int_part.chars().collect();
                for (i, d) in digits.iter().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        number.push(sep);
                    }
                    number.push(*d);
                }
            }
            None => number.push_str(int_part),
        }
        number.push(self.decimal_separator);
        number.push_str(frac_part);

        if self.symbol.is_empty() {
            number
        } else if self.symbol_after {
            format!("{number} {}", self.symbol)
        } else {
            format!("{}{number}", self.symbol)
        }
    }
}

/// Fixed captions printed on documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub no_items: String,
    pub allergens_title: String,
    pub allergens_prefix: String,
    pub special: String,
    pub popular: String,
    pub vegetarian: String,
    pub vegan: String,
    pub vegetarian_short: String,
    pub vegan_short: String,
    pub call_to_action: String,
    pub table: String,
    pub folding_title: String,
    pub folding_steps: Vec<String>,
    pub fallback_restaurant: String,
    pub minutes: String,
    pub wine_pairing: String,
    pub origin: String,
    pub qr_placeholder: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            no_items: "No items available".into(),
            allergens_title: "Allergens".into(),
            allergens_prefix: "Allergens:".into(),
            special: "Special".into(),
            popular: "Popular".into(),
            vegetarian: "Vegetarian".into(),
            vegan: "Vegan".into(),
            vegetarian_short: "V".into(),
            vegan_short: "VG".into(),
            call_to_action: "Scan to view our menu".into(),
            table: "Table".into(),
            folding_title: "How to fold".into(),
            folding_steps: vec![
                "Print this sheet double-sided.".into(),
                "Fold along the horizontal center line.".into(),
                "Crease firmly and stand the card on the table.".into(),
            ],
            fallback_restaurant: "Restaurant".into(),
            minutes: "min".into(),
            wine_pairing: "Pairs with".into(),
            origin: "Origin".into(),
            qr_placeholder: "QR code".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub currency: CurrencyFormat,
    /// Template used when a request names an unknown one.
    pub default_template: Template,
    pub labels: Labels,
    /// Log a warning when a single block is taller than a page.
    pub warn_on_overflow: bool,
    /// Written into the PDF `Producer` field.
    pub producer: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            default_template: Template::default(),
            labels: Labels::default(),
            warn_on_overflow: true,
            producer: concat!("carta ", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
