pub mod a001_drink;
pub mod a002_cart;
