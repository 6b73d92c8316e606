//! upkeep-config
//!
//! Reminder and display preferences plus the logging directive, kept in a
//! single JSON file under the application data directory.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, MAX_RENEWAL_DAYS};
