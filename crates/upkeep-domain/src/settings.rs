//! Per-user settings that drive renewal windows and reminder digests.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RENEWAL_DAYS: u32 = 90;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// How far ahead (in days) a cancellation deadline counts as upcoming.
    #[serde(default = "UserSettings::default_renewal_days")]
    pub renewal_days: u32,
    #[serde(default)]
    pub reminder_frequency: ReminderFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reminder_sent: Option<DateTime<Utc>>,
}

impl UserSettings {
    pub fn default_renewal_days() -> u32 {
        DEFAULT_RENEWAL_DAYS
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            renewal_days: DEFAULT_RENEWAL_DAYS,
            reminder_frequency: ReminderFrequency::default(),
            last_reminder_sent: None,
        }
    }
}

/// How often a reminder digest may be sent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFrequency {
    #[default]
    Disabled,
    Weekly,
    Biweekly,
    Monthly,
}

impl ReminderFrequency {
    /// Minimum spacing between two digests; `None` when reminders are off.
    pub fn interval(self) -> Option<Duration> {
        match self {
            ReminderFrequency::Disabled => None,
            ReminderFrequency::Weekly => Some(Duration::days(7)),
            ReminderFrequency::Biweekly => Some(Duration::days(14)),
            ReminderFrequency::Monthly => Some(Duration::days(30)),
        }
    }
}

impl fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReminderFrequency::Disabled => "disabled",
            ReminderFrequency::Weekly => "weekly",
            ReminderFrequency::Biweekly => "biweekly",
            ReminderFrequency::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for ReminderFrequency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "disabled" => Ok(ReminderFrequency::Disabled),
            "weekly" => Ok(ReminderFrequency::Weekly),
            "biweekly" => Ok(ReminderFrequency::Biweekly),
            "monthly" => Ok(ReminderFrequency::Monthly),
            other => Err(format!("unknown reminder frequency `{other}`")),
        }
    }
}
