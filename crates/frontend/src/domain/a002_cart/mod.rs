pub mod context;
pub mod ui;

pub use context::CartWidget;
