use contracts::shared::config::WidgetConfig;

use super::dom;

/// Id of the optional `<script type="application/json">` block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "cart-widget-config";

/// Reads the page's widget configuration.
///
/// No config block means defaults; an invalid block is logged and ignored.
pub fn read_page_config() -> WidgetConfig {
    let Some(raw) = dom::element(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return WidgetConfig::default();
    };

    match WidgetConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            WidgetConfig::default()
        }
    }
}
