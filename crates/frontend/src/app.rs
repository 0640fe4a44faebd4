use leptos::prelude::*;

use crate::domain::a001_drink::ui::bind_drinks_menu;
use crate::domain::a002_cart::ui::{bind_cart_actions, bind_cart_page, bind_count_badges};
use crate::domain::a002_cart::CartWidget;
use crate::exports;
use crate::layout::{bind_mobile_menu, NotificationHost};
use crate::shared::config::read_page_config;

/// Binds the widget to whatever parts of the storefront the current page has.
///
/// The returned view is the notification overlay, appended to `<body>`.
#[component]
pub fn App() -> impl IntoView {
    let config = read_page_config();
    let widget = CartWidget::new(config.clone());

    exports::register(widget);
    provide_context(widget);

    bind_count_badges(widget);
    bind_cart_page(widget);
    bind_drinks_menu(widget);
    bind_cart_actions(widget);
    bind_mobile_menu(&config.elements);

    log::debug!(
        "Cart widget ready (key '{}', {:?} presentation)",
        config.storage_key,
        config.presentation
    );

    view! {
        <NotificationHost widget=widget />
    }
}
