use leptos::prelude::*;

use super::view_model::{CartPageView, CartRowView};
use crate::domain::a002_cart::context::CartWidget;
use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::theme::Theme;

/// Cart line rows, one per item in cart order
#[component]
pub fn CartRows(widget: CartWidget, theme: Theme) -> impl IntoView {
    let symbol = widget.currency_symbol();

    view! {
        {move || {
            CartPageView::from_cart(&widget.cart(), &symbol)
                .rows
                .into_iter()
                .map(|row| {
                    let CartRowView { index, name, image_url, price } = row;
                    let alt = name.clone();
                    view! {
                        <div class=theme.cart_row>
                            <img src=image_url alt=alt class=theme.cart_row_image />
                            <div class=theme.cart_row_details>
                                <h3 class=theme.cart_row_name>{name}</h3>
                                <p class=theme.cart_row_price>{price}</p>
                            </div>
                            <button
                                class=theme.remove_button
                                title="Remove"
                                on:click=move |_| widget.remove_item(index)
                            >
                                {icon("trash", "")}
                            </button>
                        </div>
                    }
                })
                .collect_view()
        }}
    }
}

/// Renders the cart page when its items container is present.
///
/// Rows are mounted into the container; the empty placeholder, summary block
/// and total fields already on the page are updated in place.
pub fn bind_cart_page(widget: CartWidget) {
    let ids = widget.config().elements;
    let Some(container) = dom::html_element(&ids.cart_items) else {
        return;
    };

    let theme = widget.theme();
    leptos::mount::mount_to(container, move || view! { <CartRows widget=widget theme=theme /> })
        .forget();

    let symbol = widget.currency_symbol();
    Effect::new(move |_| {
        let view = CartPageView::from_cart(&widget.cart(), &symbol);

        dom::set_display_by_id(&ids.cart_empty, view.empty_display);
        dom::set_display_by_id(&ids.cart_summary, view.summary_display);
        if let Some(subtotal) = &view.subtotal {
            dom::set_text_by_id(&ids.cart_subtotal, subtotal);
        }
        if let Some(total) = &view.total {
            dom::set_text_by_id(&ids.cart_total, total);
        }
    });
}
