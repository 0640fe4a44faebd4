use contracts::shared::config::ElementIds;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::shared::dom;

const HIDDEN_CLASS: &str = "max-sm:hidden";
const OPEN_CLASS: &str = "max-sm:flex";

/// Mobile navigation: the toggle flips the menu open/closed, and following
/// any link inside the menu closes it.
pub fn bind_mobile_menu(ids: &ElementIds) {
    let (Some(toggle), Some(menu)) = (
        dom::element(&ids.mobile_menu_toggle),
        dom::element(&ids.mobile_menu),
    ) else {
        return;
    };

    let menu_for_toggle = menu.clone();
    dom::on_click(&toggle, move || {
        let classes = menu_for_toggle.class_list();
        let _ = classes.toggle(HIDDEN_CLASS);
        let _ = classes.toggle(OPEN_CLASS);
    });

    let Ok(links) = menu.query_selector_all("a") else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let menu = menu.clone();
        dom::on_click(&link, move || close(&menu));
    }
}

fn close(menu: &Element) {
    let classes = menu.class_list();
    let _ = classes.add_1(HIDDEN_CLASS);
    let _ = classes.remove_1(OPEN_CLASS);
}
