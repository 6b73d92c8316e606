//! Cancellation deadlines for open-ended and fixed-term contracts.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use upkeep_domain::{add_months, Contract};

/// Derived renewal state of a contract on a given day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CancellationInfo {
    /// Last day a cancellation notice can be filed to avoid the next renewal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<NaiveDate>,
    pub expired: bool,
}

/// Computes the next actionable cancellation date and the expiry flag.
///
/// Fixed-term contracts (with an end date) only report whether they have
/// lapsed. Open-ended contracts never expire; their deadline is the notice
/// cut-off of the first period boundary whose notice window is still open.
pub fn compute_cancellation_info(contract: &Contract, today: NaiveDate) -> CancellationInfo {
    if contract.end_date.is_some() {
        return CancellationInfo {
            cancellation_date: None,
            expired: is_expired(contract, today),
        };
    }
    CancellationInfo {
        cancellation_date: Some(next_cancellation_date(contract, today)),
        expired: false,
    }
}

/// A fixed-term contract has expired once its end date lies strictly before `today`.
pub fn is_expired(contract: &Contract, today: NaiveDate) -> bool {
    contract.end_date.is_some_and(|end| end < today)
}

fn next_cancellation_date(contract: &Contract, today: NaiveDate) -> NaiveDate {
    let notice = -months(contract.notice_period_months);
    let extension = months(contract.extension_duration_months);
    let min_end = add_months(contract.start_date, months(contract.minimum_duration_months));

    if extension == 0 {
        // Nothing renews, so a deadline in the past means "cancel any time".
        return add_months(min_end, notice).max(today);
    }

    let mut period_end = min_end;
    let mut renewals = 0u32;
    while period_end < today {
        let next = add_months(period_end, extension);
        if next <= period_end {
            break;
        }
        period_end = next;
        renewals += 1;
    }

    let mut cancellation = add_months(period_end, notice);
    if cancellation < today {
        period_end = add_months(period_end, extension);
        cancellation = add_months(period_end, notice);
    }

    debug!(
        contract = %contract.id,
        renewals,
        %period_end,
        %cancellation,
        "rolled contract forward to next period boundary"
    );
    cancellation
}

fn months(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX / 12)
}
