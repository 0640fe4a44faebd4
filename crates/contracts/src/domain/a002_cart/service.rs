use rust_decimal::Decimal;

use super::aggregate::Cart;
use super::repository::{CartRepository, CartStore};
use crate::domain::a001_drink::CartItem;
use crate::shared::config::WidgetConfig;
use crate::shared::money;

pub const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear your cart?";

/// Blocking user dialogs used by clear and checkout
pub trait UserPrompt {
    /// Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Cart operations over a persisted store.
///
/// Every operation reloads the cart from the store first; nothing is cached
/// between calls, so a write from another tab is picked up on the next call
/// (and overwritten by ours if we write after it).
#[derive(Debug, Clone)]
pub struct CartService<S> {
    repository: CartRepository<S>,
    currency_symbol: String,
}

impl<S: CartStore> CartService<S> {
    pub fn new(repository: CartRepository<S>, currency_symbol: impl Into<String>) -> Self {
        Self {
            repository,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn from_config(store: S, config: &WidgetConfig) -> Self {
        Self::new(
            CartRepository::new(store, config.storage_key.clone()),
            config.currency_symbol.clone(),
        )
    }

    pub fn repository(&self) -> &CartRepository<S> {
        &self.repository
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn cart(&self) -> Cart {
        self.repository.load()
    }

    pub fn count(&self) -> usize {
        self.cart().len()
    }

    /// Appends `item` and persists. Returns the cart as written.
    ///
    /// A line that would push the total past what `Decimal` can hold is
    /// dropped and the stored cart is returned unchanged.
    pub fn add_item(&self, item: CartItem) -> Cart {
        let mut cart = self.repository.load();
        if cart.total().and_then(|total| total.checked_add(item.price)).is_none() {
            log::warn!("Cart total overflows, '{}' was not added", item.name);
            return cart;
        }
        cart.push(item);
        self.persist(&cart);
        cart
    }

    /// Removes the line at `index` and persists.
    ///
    /// Out-of-range indexes return `None` and write nothing.
    pub fn remove_item(&self, index: usize) -> Option<CartItem> {
        let mut cart = self.repository.load();
        let removed = cart.remove(index)?;
        self.persist(&cart);
        Some(removed)
    }

    /// Deletes the persisted cart after the user confirms.
    ///
    /// Returns `true` when the cart was cleared.
    pub fn clear(&self, prompt: &impl UserPrompt) -> bool {
        if !prompt.confirm(CLEAR_CONFIRMATION) {
            return false;
        }
        self.repository.delete();
        true
    }

    /// Simulated checkout: shows the total, then deletes the persisted cart.
    ///
    /// An empty cart, or one whose total cannot be computed, is left alone
    /// and no message is shown.
    pub fn checkout(&self, prompt: &impl UserPrompt) -> Option<Decimal> {
        let cart = self.repository.load();
        if cart.is_empty() {
            return None;
        }

        let total = cart.total()?;
        prompt.alert(&self.checkout_message(total));
        self.repository.delete();
        Some(total)
    }

    pub fn checkout_message(&self, total: Decimal) -> String {
        format!(
            "Thank you for your order! Total: {}",
            money::format_price(&self.currency_symbol, total)
        )
    }

    fn persist(&self, cart: &Cart) {
        if let Err(e) = self.repository.save(cart) {
            log::warn!("Cart was not saved: {}", e);
        }
    }
}
