pub mod menu;

pub use menu::bind_drinks_menu;
