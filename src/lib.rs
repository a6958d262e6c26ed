pub mod api;
pub mod config;
pub mod core;
pub mod gui;
pub mod player;

#[cfg(test)]
mod test_support;
