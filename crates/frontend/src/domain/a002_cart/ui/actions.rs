use crate::domain::a002_cart::context::CartWidget;
use crate::shared::dom;

/// Wires the clear and checkout buttons, when the page has them.
pub fn bind_cart_actions(widget: CartWidget) {
    let ids = widget.config().elements;

    if let Some(button) = dom::element(&ids.clear_button) {
        dom::on_click(&button, move || widget.clear());
    }
    if let Some(button) = dom::element(&ids.checkout_button) {
        dom::on_click(&button, move || widget.checkout());
    }
}
