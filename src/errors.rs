use thiserror::Error;
use upkeep_config::ConfigError;
use upkeep_core::CoreError;

/// Error type spanning the crates behind the facade.
#[derive(Debug, Error)]
pub enum UpkeepError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
