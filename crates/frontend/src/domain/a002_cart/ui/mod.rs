pub mod actions;
pub mod badges;
pub mod page;
pub mod view_model;

pub use actions::bind_cart_actions;
pub use badges::bind_count_badges;
pub use page::bind_cart_page;
