//! Widget configuration.
//!
//! Every field has a default matching the stock storefront pages, so an empty
//! JSON object (or no configuration at all) gives the usual behaviour.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a002_cart::DEFAULT_CART_KEY;
use crate::shared::money::DEFAULT_CURRENCY_SYMBOL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("storageKey must not be empty")]
    EmptyStorageKey,
}

/// Class set used to render rows, cards and notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Semantic classes styled by the site stylesheet
    Classic,
    /// Tailwind utility classes
    #[default]
    Tailwind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub storage_key: String,
    pub drinks_url: String,
    pub currency_symbol: String,
    pub presentation: Presentation,
    pub elements: ElementIds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            drinks_url: "drinks.json".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            presentation: Presentation::default(),
            elements: ElementIds::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}

/// Ids of the page elements the widget reads and writes.
///
/// A missing element only disables the feature that depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub cart_items: String,
    pub cart_empty: String,
    pub cart_summary: String,
    pub cart_subtotal: String,
    pub cart_total: String,
    pub count_badges: Vec<String>,
    pub drinks_container: String,
    pub clear_button: String,
    pub checkout_button: String,
    pub mobile_menu_toggle: String,
    pub mobile_menu: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            cart_items: "cart-items".to_string(),
            cart_empty: "cart-empty".to_string(),
            cart_summary: "cart-summary".to_string(),
            cart_subtotal: "cart-subtotal".to_string(),
            cart_total: "cart-total".to_string(),
            count_badges: vec![
                "cart-count".to_string(),
                "cart-count-mobile".to_string(),
                "cart-count-mobile-icon".to_string(),
            ],
            drinks_container: "drinks-container".to_string(),
            clear_button: "clear-cart-btn".to_string(),
            checkout_button: "checkout-btn".to_string(),
            mobile_menu_toggle: "mobile-menu-toggle".to_string(),
            mobile_menu: "mobile-menu".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.elements.count_badges.len(), 3);
    }

    #[test]
    fn test_partial_override() {
        let raw = r#"{
            "currencySymbol": "€",
            "presentation": "classic",
            "elements": { "countBadges": ["cart-count"] }
        }"#;
        let config = WidgetConfig::from_json(raw).unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.presentation, Presentation::Classic);
        assert_eq!(config.elements.count_badges, vec!["cart-count".to_string()]);
        assert_eq!(config.elements.cart_items, "cart-items");
        assert_eq!(config.drinks_url, "drinks.json");
    }

    #[test]
    fn test_rejects_empty_storage_key() {
        let err = WidgetConfig::from_json(r#"{"storageKey": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStorageKey));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = WidgetConfig::from_json("{storageKey:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_unknown_presentation() {
        assert!(WidgetConfig::from_json(r#"{"presentation": "neon"}"#).is_err());
    }
}
