//! Presentation class sets.
//!
//! The storefront ships two page designs that share all cart behaviour: a
//! classic one styled by the site stylesheet and a Tailwind one. A `Theme`
//! holds the classes each rendered piece gets under one of them.

use contracts::shared::config::Presentation;
use contracts::shared::notification::NotificationPhase;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub cart_row: &'static str,
    pub cart_row_image: &'static str,
    pub cart_row_details: &'static str,
    pub cart_row_name: &'static str,
    pub cart_row_price: &'static str,
    pub remove_button: &'static str,

    pub drink_card: &'static str,
    pub drink_image_frame: &'static str,
    pub drink_image: &'static str,
    pub drink_body: &'static str,
    pub drink_name: &'static str,
    pub drink_price: &'static str,
    pub add_button: &'static str,
    pub add_button_icon: &'static str,

    notification_base: &'static str,
    notification_shown: &'static str,
    notification_hidden: &'static str,
}

impl Theme {
    pub const CLASSIC: Theme = Theme {
        cart_row: "cart-item",
        cart_row_image: "",
        cart_row_details: "cart-item-details",
        cart_row_name: "",
        cart_row_price: "cart-item-price",
        remove_button: "remove-btn",

        drink_card: "drink-card",
        drink_image_frame: "drink-card-image",
        drink_image: "",
        drink_body: "drink-card-body",
        drink_name: "",
        drink_price: "drink-card-price",
        add_button: "add-to-cart-btn",
        add_button_icon: "",

        notification_base: "notification",
        notification_shown: "show",
        notification_hidden: "",
    };

    pub const TAILWIND: Theme = Theme {
        cart_row: "relative grid grid-cols-[100px_1fr_auto] gap-6 items-center bg-white p-6 rounded-lg mb-4 shadow-[0_2px_8px_rgba(0,0,0,0.1)] md:grid-cols-[80px_1fr_auto] md:gap-4",
        cart_row_image: "w-[100px] h-[100px] object-cover rounded-lg md:w-20 md:h-20",
        cart_row_details: "",
        cart_row_name: "mb-2 text-xl",
        cart_row_price: "text-[#1d0f08] font-semibold",
        remove_button: "bg-transparent border-none text-[#d32f2f] cursor-pointer text-2xl transition-transform duration-200 hover:scale-110 md:absolute md:right-4",

        drink_card: "group p-4 rounded-3xl transition-all duration-300 hover:-translate-y-2",
        drink_image_frame: "relative overflow-visible mb-6 flex items-center justify-center h-[300px]",
        drink_image: "w-full h-full object-contain transition-transform duration-500 group-hover:scale-110 drop-shadow-xl filter",
        drink_body: "text-center",
        drink_name: "playfair-display text-3xl font-bold text-[#1b1107] mb-2 tracking-wide",
        drink_price: "text-xl font-medium text-[#1b1107]/80 mb-6",
        add_button: "w-full bg-[#1b1107] text-[#fdfbf8] py-4 px-6 rounded-full font-sans text-base font-semibold tracking-wide transition-all duration-300 hover:bg-[#b89d84] hover:shadow-lg flex items-center justify-center gap-2 cursor-pointer border-none transform active:scale-95",
        add_button_icon: "text-xl",

        notification_base: "fixed top-5 right-5 bg-[#1b1107] text-white px-6 py-4 rounded-lg shadow-[0_4px_12px_rgba(0,0,0,0.3)] z-[1000] transition-all duration-300",
        notification_shown: "opacity-100 translate-y-0",
        notification_hidden: "opacity-0 -translate-y-5",
    };

    pub fn for_presentation(presentation: Presentation) -> Self {
        match presentation {
            Presentation::Classic => Self::CLASSIC,
            Presentation::Tailwind => Self::TAILWIND,
        }
    }

    /// Class attribute of a notification in `phase`.
    pub fn notification_class(&self, phase: NotificationPhase) -> String {
        let state = if phase.is_shown() {
            self.notification_shown
        } else {
            self.notification_hidden
        };
        if state.is_empty() {
            self.notification_base.to_string()
        } else {
            format!("{} {}", self.notification_base, state)
        }
    }
}
