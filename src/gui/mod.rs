pub mod actions;
pub mod app;
pub mod cards;
pub mod error_modal;
pub mod theme;
pub mod ticker;
pub mod top_bar;

pub use app::LexicardApp;
