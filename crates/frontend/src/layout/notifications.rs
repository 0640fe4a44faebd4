use contracts::shared::notification::Notification;
use leptos::prelude::*;

use crate::domain::a002_cart::CartWidget;

/// Overlay messages, one element per live notification.
///
/// Each element keeps its own class in step with its lifecycle phase and is
/// dropped from the page once the phase reaches `Removed`.
#[component]
pub fn NotificationHost(widget: CartWidget) -> impl IntoView {
    let theme = widget.theme();

    view! {
        <For
            each=move || widget.notifications()
            key=|notification: &Notification| notification.id
            children=move |notification: Notification| {
                let id = notification.id;
                let class = move || {
                    widget
                        .notification_phase(id)
                        .map(|phase| theme.notification_class(phase))
                        .unwrap_or_default()
                };
                view! {
                    <div class=class role="status">
                        {notification.message}
                    </div>
                }
            }
        />
    }
}
