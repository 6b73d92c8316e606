//! Decides when a renewal reminder digest is due and what it contains.
//!
//! Delivery is left to the caller; this module only plans the message.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use upkeep_domain::{Contract, UserSettings};

use crate::renewal_service::RenewalService;

pub const REMINDER_SUBJECT: &str = "Upcoming contract renewals";

/// One contract with a deadline inside the reminder window.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderItem {
    pub contract_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub cancellation_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDigest {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<ReminderItem>,
}

impl ReminderDigest {
    pub fn subject(&self) -> &'static str {
        REMINDER_SUBJECT
    }

    /// Plain-text body listing every contract, earliest deadline first.
    pub fn body(&self) -> String {
        let mut body = String::from("The following contracts have upcoming renewal deadlines:\n\n");
        for item in &self.items {
            let line = match item.company.as_deref().filter(|c| !c.is_empty()) {
                Some(company) => format!(
                    "- {} ({company}): cancellation by {}\n",
                    item.name, item.cancellation_date
                ),
                None => format!("- {}: cancellation by {}\n", item.name, item.cancellation_date),
            };
            body.push_str(&line);
        }
        body.push_str("\nPlease review these contracts and take action if needed.");
        body
    }
}

pub struct ReminderService;

impl ReminderService {
    /// Returns `true` when reminders are enabled and the last digest is old enough.
    pub fn is_due(settings: &UserSettings, now: DateTime<Utc>) -> bool {
        let Some(interval) = settings.reminder_frequency.interval() else {
            return false;
        };
        settings
            .last_reminder_sent
            .map_or(true, |sent| now - sent >= interval)
    }

    /// Builds the digest for contracts whose deadline lies within the user's renewal window.
    ///
    /// Returns `None` when no digest is due or nothing falls inside the window.
    pub fn plan(
        settings: &UserSettings,
        contracts: &[Contract],
        now: DateTime<Utc>,
    ) -> Option<ReminderDigest> {
        if !Self::is_due(settings, now) {
            return None;
        }

        let items: Vec<ReminderItem> =
            RenewalService::due_within(contracts, now.date_naive(), settings.renewal_days)
                .into_iter()
                .filter_map(|view| {
                    Some(ReminderItem {
                        cancellation_date: view.cancellation_date?,
                        contract_id: view.contract.id,
                        name: view.contract.name,
                        company: view.contract.company,
                    })
                })
                .collect();
        if items.is_empty() {
            return None;
        }

        info!(
            contracts = items.len(),
            frequency = %settings.reminder_frequency,
            "assembled renewal reminder digest"
        );
        Some(ReminderDigest {
            generated_at: now,
            items,
        })
    }

    /// Records that a digest went out at `now`.
    pub fn mark_sent(settings: &mut UserSettings, now: DateTime<Utc>) {
        settings.last_reminder_sent = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use upkeep_domain::ReminderFrequency;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekly() -> UserSettings {
        UserSettings {
            reminder_frequency: ReminderFrequency::Weekly,
            ..UserSettings::default()
        }
    }

    #[test]
    fn disabled_reminders_are_never_due() {
        assert!(!ReminderService::is_due(&UserSettings::default(), now()));
    }

    #[test]
    fn reminder_is_due_after_interval_elapses() {
        let mut settings = weekly();
        assert!(ReminderService::is_due(&settings, now()));

        ReminderService::mark_sent(&mut settings, now());
        assert!(!ReminderService::is_due(&settings, now() + Duration::days(6)));
        assert!(ReminderService::is_due(&settings, now() + Duration::days(7)));
    }

    #[test]
    fn plan_lists_contracts_inside_the_window() {
        let mut settings = weekly();
        settings.renewal_days = 20;
        let contracts = vec![
            Contract::new(Uuid::new_v4(), "Phone", date(2022, 9, 15))
                .with_terms(12, 12, 3)
                .with_company("Telco"),
            Contract::new(Uuid::new_v4(), "Gym", date(2023, 11, 1)).with_terms(10, 1, 2),
            Contract::new(Uuid::new_v4(), "Power", date(2023, 6, 1)).with_terms(24, 12, 3),
        ];

        let digest = ReminderService::plan(&settings, &contracts, now()).expect("digest");
        assert_eq!(digest.items.len(), 1);
        assert_eq!(digest.items[0].cancellation_date, date(2024, 6, 15));
        assert_eq!(
            digest.body(),
            "The following contracts have upcoming renewal deadlines:\n\n\
             - Phone (Telco): cancellation by 2024-06-15\n\
             \nPlease review these contracts and take action if needed."
        );
        assert_eq!(digest.subject(), REMINDER_SUBJECT);
    }

    #[test]
    fn plan_skips_when_nothing_is_upcoming() {
        let contracts = vec![
            Contract::new(Uuid::new_v4(), "Power", date(2023, 6, 1)).with_terms(24, 12, 3),
        ];
        assert!(ReminderService::plan(&weekly(), &contracts, now()).is_none());
    }

    #[test]
    fn body_omits_missing_company() {
        let digest = ReminderDigest {
            generated_at: now(),
            items: vec![
                ReminderItem {
                    contract_id: Uuid::new_v4(),
                    name: "Gym".into(),
                    company: None,
                    cancellation_date: date(2024, 7, 1),
                },
                ReminderItem {
                    contract_id: Uuid::new_v4(),
                    name: "Cloud".into(),
                    company: Some(String::new()),
                    cancellation_date: date(2024, 7, 2),
                },
            ],
        };
        let body = digest.body();
        assert!(body.contains("- Gym: cancellation by 2024-07-01\n"));
        assert!(body.contains("- Cloud: cancellation by 2024-07-02\n"));
    }

    #[test]
    fn stored_window_larger_than_a_year_is_capped() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"renewalDays": 4294967295, "reminderFrequency": "weekly"}"#)
                .expect("parse settings");
        let contracts = vec![
            Contract::new(Uuid::new_v4(), "Power", date(2023, 6, 1)).with_terms(24, 12, 3),
            Contract::new(Uuid::new_v4(), "Phone", date(2022, 9, 15)).with_terms(12, 12, 3),
            Contract::new(Uuid::new_v4(), "Gym", date(2023, 11, 1)).with_terms(10, 1, 2),
            // deadline 2025-09-01, beyond a year from now
            Contract::new(Uuid::new_v4(), "Lease", date(2023, 12, 1)).with_terms(24, 12, 3),
        ];

        let digest = ReminderService::plan(&settings, &contracts, now()).expect("digest");
        let names: Vec<&str> = digest.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Phone", "Gym", "Power"]);
    }
}
