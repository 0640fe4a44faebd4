//! Functions exposed to page scripts, for markup that calls the cart from
//! inline handlers.

use std::cell::Cell;

use contracts::domain::a001_drink::Drink;
use wasm_bindgen::prelude::*;

use crate::domain::a002_cart::CartWidget;

thread_local! {
    static WIDGET: Cell<Option<CartWidget>> = const { Cell::new(None) };
}

pub fn register(widget: CartWidget) {
    WIDGET.with(|w| w.set(Some(widget)));
}

fn with_widget(f: impl FnOnce(CartWidget)) {
    match WIDGET.with(Cell::get) {
        Some(widget) => f(widget),
        None => log::warn!("Cart widget is not mounted yet"),
    }
}

/// `addToCart({ nombre, precio, img })`
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(drink: JsValue) -> Result<(), JsValue> {
    let drink: Drink = serde_wasm_bindgen::from_value(drink)?;
    with_widget(|w| w.add_item(drink));
    Ok(())
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(index: usize) {
    with_widget(|w| w.remove_item(index));
}

#[wasm_bindgen(js_name = clearCart)]
pub fn clear_cart() {
    with_widget(|w| w.clear());
}

#[wasm_bindgen]
pub fn checkout() {
    with_widget(|w| w.checkout());
}

/// Re-reads the stored cart and redraws badges and the cart page.
#[wasm_bindgen(js_name = updateCartCount)]
pub fn update_cart_count() {
    with_widget(|w| w.refresh());
}

#[wasm_bindgen(js_name = loadCart)]
pub fn load_cart() {
    with_widget(|w| w.refresh());
}
