use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::aggregate::Cart;
use crate::domain::a001_drink::CartItem;

/// Key the storefront has always used for the persisted cart
pub const DEFAULT_CART_KEY: &str = "cart";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// Raw key-value store
// ============================================================================

/// Synchronous string key-value store backing the cart.
///
/// A single `write` replaces the whole value; readers never see a partial write.
pub trait CartStore {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same entries, so a clone handed to a
/// fresh repository behaves like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl CartStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ============================================================================
// Repository
// ============================================================================

/// Loads and saves the cart as a JSON array under one key.
#[derive(Debug, Clone)]
pub struct CartRepository<S> {
    store: S,
    key: String,
}

impl<S: CartStore> CartRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current persisted cart.
    ///
    /// Missing key, `null`, unparseable data and prices whose sum overflows
    /// all yield an empty cart.
    pub fn load(&self) -> Cart {
        let Some(raw) = self.store.read(&self.key) else {
            return Cart::new();
        };

        match serde_json::from_str::<Option<Vec<CartItem>>>(&raw) {
            Ok(items) => {
                let cart = Cart::from_items(items.unwrap_or_default());
                if cart.total().is_none() {
                    log::warn!("Ignoring cart under '{}': total overflows", self.key);
                    return Cart::new();
                }
                cart
            }
            Err(e) => {
                log::warn!(
                    "Ignoring malformed cart data under '{}': {}",
                    self.key,
                    e
                );
                Cart::new()
            }
        }
    }

    /// Overwrites the persisted cart with `cart`.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        self.store.write(&self.key, &raw)
    }

    /// Removes the persisted key entirely.
    pub fn delete(&self) {
        self.store.remove(&self.key);
    }
}
