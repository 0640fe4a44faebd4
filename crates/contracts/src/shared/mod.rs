pub mod config;
pub mod money;
pub mod notification;
