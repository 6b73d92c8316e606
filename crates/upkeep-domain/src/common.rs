//! Shared traits and calendar utilities for record-keeping primitives.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

/// Associates records with the category they are filed under.
pub trait BelongsToCategory {
    fn category_id(&self) -> Uuid;
}

/// Adds `months` calendar months to `date`.
///
/// The day of month is clamped to the last valid day of the target month, so
/// `2023-01-31 + 1` lands on `2023-02-28`. Negative values move backwards.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Number of days in the given month of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Returns the first of January for `year`.
pub fn start_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_months_clamps_to_end_of_month() {
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 8, 31), 1), date(2023, 9, 30));
    }

    #[test]
    fn add_months_crosses_year_boundaries() {
        assert_eq!(add_months(date(2023, 11, 15), 3), date(2024, 2, 15));
        assert_eq!(add_months(date(2024, 2, 15), -3), date(2023, 11, 15));
        assert_eq!(add_months(date(2020, 1, 15), 12), date(2021, 1, 15));
        assert_eq!(add_months(date(2020, 1, 15), -25), date(2017, 12, 15));
    }

    #[test]
    fn add_zero_months_is_identity() {
        assert_eq!(add_months(date(2024, 2, 29), 0), date(2024, 2, 29));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 4), 30);
    }
}
