use leptos::prelude::*;

/// Phosphor icon by name. The host page loads the Phosphor web font.
///
/// `class` carries sizing or colour from the active theme and may be empty.
pub fn icon(name: &str, class: &str) -> AnyView {
    let class = icon_class(name, class);
    view! { <i class=class aria-hidden="true"></i> }.into_any()
}

fn glyph(name: &str) -> &'static str {
    match name {
        "trash" => "ph-trash",
        "cart" => "ph-shopping-cart",
        _ => "ph-question",
    }
}

fn icon_class(name: &str, class: &str) -> String {
    if class.is_empty() {
        format!("ph {}", glyph(name))
    } else {
        format!("ph {} {}", glyph(name), class)
    }
}
