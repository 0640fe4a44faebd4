use leptos::prelude::*;

use super::view_model::badge_display;
use crate::domain::a002_cart::context::CartWidget;
use crate::shared::dom;

/// Keeps every configured count badge in sync with the cart.
///
/// Badges missing from the page are skipped on each update.
pub fn bind_count_badges(widget: CartWidget) {
    let badge_ids = widget.config().elements.count_badges;
    if badge_ids.is_empty() {
        return;
    }

    Effect::new(move |_| {
        let count = widget.count();
        let text = count.to_string();
        for id in &badge_ids {
            if let Some(badge) = dom::html_element(id) {
                dom::set_text(&badge, &text);
                dom::set_display(&badge, badge_display(count));
            }
        }
    });
}
