use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::money;

// ============================================================================
// Aggregate
// ============================================================================

/// A drink from the storefront menu.
///
/// The same shape is used for menu entries and for cart lines: a cart line
/// has no identity of its own and is addressed only by its position in the
/// cart. Field names on the wire follow the storefront data files
/// (`nombre`, `precio`, `img`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    #[serde(rename = "nombre")]
    pub name: String,

    /// Stored as a JSON number, held as a decimal so sums stay exact.
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Lines without an image are kept, with an empty path.
    #[serde(rename = "img", default)]
    pub image_url: String,
}

/// A line in the cart. Cart lines are plain copies of the menu entry.
pub type CartItem = Drink;

impl Drink {
    pub fn new(name: impl Into<String>, price: Decimal, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }

    /// Price with currency symbol, e.g. `$4.50`
    pub fn display_price(&self, currency_symbol: &str) -> String {
        money::format_price(currency_symbol, self.price)
    }
}
