//! Contract views and the upcoming-renewals window.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use upkeep_domain::Contract;

use crate::{renewal::compute_cancellation_info, CoreError};

/// Widest upcoming-renewals window callers may request, in days.
pub const MAX_RENEWAL_WINDOW_DAYS: u32 = 365;

/// A contract together with its derived renewal state.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractView {
    #[serde(flatten)]
    pub contract: Contract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<NaiveDate>,
    pub expired: bool,
}

impl ContractView {
    pub fn new(contract: &Contract, today: NaiveDate) -> Self {
        let info = compute_cancellation_info(contract, today);
        Self {
            contract: contract.clone(),
            cancellation_date: info.cancellation_date,
            expired: info.expired,
        }
    }

    fn deadline_within(&self, from: NaiveDate, until: NaiveDate) -> bool {
        self.cancellation_date
            .is_some_and(|date| date >= from && date <= until)
    }
}

pub struct RenewalService;

impl RenewalService {
    /// Derives renewal state for every contract, preserving input order.
    pub fn views(contracts: &[Contract], today: NaiveDate) -> Vec<ContractView> {
        contracts
            .iter()
            .map(|contract| ContractView::new(contract, today))
            .collect()
    }

    /// Contracts whose cancellation deadline falls within `days` days from `today`.
    ///
    /// `days` must be at least one and is capped at [`MAX_RENEWAL_WINDOW_DAYS`].
    /// Results are ordered by deadline, earliest first.
    pub fn upcoming(
        contracts: &[Contract],
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<ContractView>, CoreError> {
        if days == 0 {
            return Err(CoreError::Validation(
                "days must be a positive integer".into(),
            ));
        }
        Ok(Self::due_within(contracts, today, days))
    }

    /// Like [`RenewalService::upcoming`] but a zero-day window is allowed.
    ///
    /// `days` is capped at [`MAX_RENEWAL_WINDOW_DAYS`]; a window ending past the
    /// last representable date is cut off there.
    pub fn due_within(contracts: &[Contract], today: NaiveDate, days: u32) -> Vec<ContractView> {
        let days = days.min(MAX_RENEWAL_WINDOW_DAYS);
        let until = today
            .checked_add_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        let mut due: Vec<ContractView> = contracts
            .iter()
            .map(|contract| ContractView::new(contract, today))
            .filter(|view| view.deadline_within(today, until))
            .collect();
        due.sort_by_key(|view| view.cancellation_date);
        due
    }
}
