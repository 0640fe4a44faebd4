pub mod aggregate;
pub mod repository;
pub mod service;

pub use aggregate::Cart;
pub use repository::{CartRepository, CartStore, MemoryStore, StoreError, DEFAULT_CART_KEY};
pub use service::{CartService, UserPrompt, CLEAR_CONFIRMATION};
