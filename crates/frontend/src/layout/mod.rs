pub mod mobile_menu;
pub mod notifications;

pub use mobile_menu::bind_mobile_menu;
pub use notifications::NotificationHost;
