use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::a001_drink::CartItem;
use crate::shared::money;

/// Ordered cart contents.
///
/// Insertion order is preserved and duplicates are kept as separate lines:
/// adding the same drink twice yields two entries, each removable on its own.
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a line. No duplicate check, no validation.
    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Removes the line at `index`.
    ///
    /// Returns `None` and leaves the cart untouched when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Exact sum of line prices; `None` when the sum overflows `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.price))
    }

    /// Total with exactly two decimals, e.g. `"5.75"`
    pub fn formatted_total(&self) -> Option<String> {
        self.total().map(money::format_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_drink::Drink;

    fn drink(name: &str, cents: i64) -> Drink {
        Drink::new(name, Decimal::new(cents, 2), format!("img/{}.png", name))
    }

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut cart = Cart::new();
        cart.push(drink("latte", 350));
        cart.push(drink("mocha", 425));
        cart.push(drink("latte", 350));

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["latte", "mocha", "latte"]);
    }

    #[test]
    fn test_remove_middle_preserves_relative_order() {
        let mut cart = Cart::from_items(vec![drink("a", 100), drink("b", 200), drink("c", 300)]);

        let removed = cart.remove(1);

        assert_eq!(removed.map(|d| d.name), Some("b".to_string()));
        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::from_items(vec![drink("a", 100)]);

        assert_eq!(cart.remove(1), None);
        assert_eq!(cart.remove(usize::MAX), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_is_exact() {
        let cart = Cart::from_items(vec![drink("a", 350), drink("b", 225)]);
        assert_eq!(cart.total(), Some(Decimal::new(575, 2)));
        assert_eq!(cart.formatted_total().as_deref(), Some("5.75"));

        let cart = Cart::from_items(vec![drink("a", 10), drink("b", 20)]);
        assert_eq!(cart.formatted_total().as_deref(), Some("0.30"));
    }

    #[test]
    fn test_empty_total() {
        assert_eq!(Cart::new().formatted_total().as_deref(), Some("0.00"));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let cart = Cart::from_items(vec![
            Drink::new("a", huge, "a.png"),
            Drink::new("b", huge, "b.png"),
        ]);

        assert_eq!(cart.total(), None);
        assert_eq!(cart.formatted_total(), None);
    }

    #[test]
    fn test_lines_are_menu_drinks() {
        let line: CartItem = drink("latte", 350);
        let mut cart = Cart::new();
        cart.push(line.clone());
        assert_eq!(cart.items(), &[line]);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let cart = Cart::from_items(vec![drink("a", 100)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));
    }
}
