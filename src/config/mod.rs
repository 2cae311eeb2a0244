//! Persistent user preferences for the trip wizard CLI.

pub mod manager;
pub mod model;

pub use manager::ConfigManager;
pub use model::Config;
