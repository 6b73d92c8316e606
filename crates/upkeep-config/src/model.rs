use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use upkeep_domain::{ReminderFrequency, UserSettings, DEFAULT_RENEWAL_DAYS};

use crate::ConfigError;

/// Upper bound for the upcoming-renewals window, in days.
pub const MAX_RENEWAL_DAYS: u32 = 365;

/// Stores user-configurable preferences for the record keeper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_renewal_days")]
    pub renewal_days: u32,
    #[serde(default)]
    pub reminder_frequency: ReminderFrequency,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for application data. Defaults to the platform data dir.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "EUR".into(),
            renewal_days: Self::default_renewal_days(),
            reminder_frequency: ReminderFrequency::default(),
            log_filter: Self::default_log_filter(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_renewal_days() -> u32 {
        DEFAULT_RENEWAL_DAYS
    }

    pub fn default_log_filter() -> String {
        "upkeep=info".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("upkeep")
    }

    /// Seeds per-user settings from the configured defaults.
    pub fn user_settings(&self) -> UserSettings {
        UserSettings {
            renewal_days: self.renewal_days,
            reminder_frequency: self.reminder_frequency,
            last_reminder_sent: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.renewal_days == 0 || self.renewal_days > MAX_RENEWAL_DAYS {
            return Err(ConfigError::Invalid(format!(
                "renewal_days must be between 1 and {MAX_RENEWAL_DAYS}, got {}",
                self.renewal_days
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".into()));
        }
        Ok(())
    }
}
