use contracts::domain::a001_drink::CartItem;
use contracts::domain::a002_cart::{Cart, CartService};
use contracts::shared::config::WidgetConfig;
use contracts::shared::notification::{self, Notification, NotificationBoard, NotificationPhase};
use leptos::prelude::*;

use crate::shared::dialogs::BrowserPrompt;
use crate::shared::storage::LocalStorageStore;
use crate::shared::theme::Theme;
use crate::shared::timers::TimeoutScheduler;

/// Handle to the cart shared by every binding on the page.
///
/// The cart itself is never held here: reads go to localStorage each time.
/// `revision` is bumped after every mutation so reactive readers re-run.
#[derive(Clone, Copy)]
pub struct CartWidget {
    config: StoredValue<WidgetConfig>,
    revision: RwSignal<u64>,
    notifications: RwSignal<NotificationBoard>,
}

impl CartWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            revision: RwSignal::new(0),
            notifications: RwSignal::new(NotificationBoard::new()),
        }
    }

    pub fn config(&self) -> WidgetConfig {
        self.config.get_value()
    }

    pub fn theme(&self) -> Theme {
        self.config
            .with_value(|c| Theme::for_presentation(c.presentation))
    }

    pub fn currency_symbol(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    fn service(&self) -> CartService<LocalStorageStore> {
        self.config
            .with_value(|c| CartService::from_config(LocalStorageStore, c))
    }

    // ------------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------------

    pub fn cart(&self) -> Cart {
        self.revision.track();
        self.service().cart()
    }

    pub fn count(&self) -> usize {
        self.cart().len()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.with(|board| board.items().to_vec())
    }

    pub fn notification_phase(&self, id: u64) -> Option<NotificationPhase> {
        self.notifications.with(|board| board.phase(id))
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Re-renders everything that reads the cart.
    pub fn refresh(&self) {
        self.revision.update(|r| *r += 1);
    }

    pub fn add_item(&self, item: CartItem) {
        let message = notification::added_message(&item.name);
        self.service().add_item(item);
        self.refresh();
        self.notify(message);
    }

    pub fn remove_item(&self, index: usize) {
        if self.service().remove_item(index).is_none() {
            log::debug!("remove_item: index {} is out of range", index);
        }
        self.refresh();
    }

    pub fn clear(&self) {
        if self.service().clear(&BrowserPrompt) {
            self.refresh();
        }
    }

    pub fn checkout(&self) {
        if self.service().checkout(&BrowserPrompt).is_some() {
            self.refresh();
        }
    }

    fn notify(&self, message: String) {
        let board = self.notifications;
        let Some(id) = board.try_update(|b| b.push(message)) else {
            return;
        };
        notification::schedule_lifecycle(&TimeoutScheduler, move |phase| {
            board.try_update(|b| b.advance(id, phase));
        });
    }
}
