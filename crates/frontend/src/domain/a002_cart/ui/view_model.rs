use contracts::domain::a002_cart::Cart;
use contracts::shared::money;

pub const DISPLAY_NONE: &str = "none";
pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_FLEX: &str = "flex";

/// `display` value of a count badge
pub fn badge_display(count: usize) -> &'static str {
    if count > 0 {
        DISPLAY_FLEX
    } else {
        DISPLAY_NONE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartRowView {
    pub index: usize,
    pub name: String,
    pub image_url: String,
    pub price: String,
}

/// Everything the cart page shows for one cart state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartPageView {
    pub rows: Vec<CartRowView>,
    pub empty_display: &'static str,
    pub summary_display: &'static str,
    /// `None` for an empty cart or an uncomputable total: the summary fields
    /// keep their last text.
    pub subtotal: Option<String>,
    pub total: Option<String>,
}

impl CartPageView {
    pub fn from_cart(cart: &Cart, currency_symbol: &str) -> Self {
        if cart.is_empty() {
            return Self {
                rows: Vec::new(),
                empty_display: DISPLAY_BLOCK,
                summary_display: DISPLAY_NONE,
                subtotal: None,
                total: None,
            };
        }

        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartRowView {
                index,
                name: item.name.clone(),
                image_url: item.image_url.clone(),
                price: item.display_price(currency_symbol),
            })
            .collect();

        // no tax or shipping: subtotal and total are the same figure
        let total = cart
            .total()
            .map(|total| money::format_price(currency_symbol, total));

        Self {
            rows,
            empty_display: DISPLAY_NONE,
            summary_display: DISPLAY_BLOCK,
            subtotal: total.clone(),
            total,
        }
    }
}
