pub mod config;
pub mod dialogs;
pub mod dom;
pub mod icons;
pub mod storage;
pub mod theme;
pub mod timers;
