#![doc(test(attr(deny(warnings))))]

//! Upkeep derives renewal deadlines, category summaries and vehicle cost
//! figures for a personal contracts, purchases and vehicles record keeper.
//!
//! The storage and presentation layers hand complete record lists to the
//! functions re-exported here; nothing is cached between calls.

pub mod build_info;
pub mod errors;
pub mod utils;

pub use upkeep_config as config;
pub use upkeep_core as core;
pub use upkeep_domain as domain;

pub use build_info::build_info;
pub use errors::UpkeepError;

use std::path::PathBuf;
use std::sync::Once;

use upkeep_config::{Config, ConfigManager};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup info log.
pub fn init() {
    init_with_filter(&Config::default_log_filter());
}

/// Initializes global tracing using the configured filter directive.
pub fn init_with_config(config: &Config) {
    init_with_filter(&config.log_filter);
}

fn init_with_filter(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!(build = %build_info::BUILD.hash, "Upkeep tracing initialized.");
    });
}

/// Loads the configuration stored under `base`, creating the directory layout if needed.
pub fn load_config(base: PathBuf) -> Result<Config, UpkeepError> {
    let manager = ConfigManager::with_base_dir(base)?;
    Ok(manager.load()?)
}
