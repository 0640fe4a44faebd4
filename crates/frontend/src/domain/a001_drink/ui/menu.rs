use contracts::domain::a001_drink::Drink;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::domain::a002_cart::CartWidget;
use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::theme::Theme;

/// Product cards with an "Add to Cart" button each
#[component]
pub fn DrinksMenu(drinks: ReadSignal<Vec<Drink>>, widget: CartWidget, theme: Theme) -> impl IntoView {
    let symbol = widget.currency_symbol();

    view! {
        {move || {
            drinks
                .get()
                .into_iter()
                .map(|drink| {
                    let name = drink.name.clone();
                    let alt = drink.name.clone();
                    let image_url = drink.image_url.clone();
                    let price = drink.display_price(&symbol);
                    view! {
                        <article class=theme.drink_card>
                            <div class=theme.drink_image_frame>
                                <img src=image_url alt=alt class=theme.drink_image />
                            </div>
                            <div class=theme.drink_body>
                                <h3 class=theme.drink_name>{name}</h3>
                                <p class=theme.drink_price>{price}</p>
                                <button
                                    class=theme.add_button
                                    on:click=move |_| widget.add_item(drink.clone())
                                >
                                    {icon("cart", theme.add_button_icon)}
                                    " "
                                    <span>"Add to Cart"</span>
                                </button>
                            </div>
                        </article>
                    }
                })
                .collect_view()
        }}
    }
}

/// Loads the drinks list into the menu container, when the page has one.
///
/// A failed fetch is logged and leaves the menu empty; there is no retry.
pub fn bind_drinks_menu(widget: CartWidget) {
    let config = widget.config();
    let Some(container) = dom::html_element(&config.elements.drinks_container) else {
        return;
    };

    let (drinks, set_drinks) = signal(Vec::<Drink>::new());
    let url = config.drinks_url;
    spawn_local(async move {
        match api::fetch_drinks(&url).await {
            Ok(list) => {
                log::debug!("Loaded {} drinks from {}", list.len(), url);
                set_drinks.set(list);
            }
            Err(e) => log::error!("Error loading drinks from {}: {}", url, e),
        }
    });

    let theme = widget.theme();
    leptos::mount::mount_to(container, move || {
        view! { <DrinksMenu drinks=drinks widget=widget theme=theme /> }
    })
    .forget();
}
