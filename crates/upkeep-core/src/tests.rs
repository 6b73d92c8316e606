use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    api_contract_views, api_upcoming_renewals, api_vehicle_summary, CoreError, FixedClock,
};
use upkeep_domain::{Contract, CostEntry, CostType, UserSettings, Vehicle};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn contract_views_follow_the_clock() {
    let contract = Contract::new(Uuid::new_v4(), "Insurance", date(2020, 1, 15)).with_terms(12, 12, 3);

    let june = api_contract_views(
        std::slice::from_ref(&contract),
        &FixedClock::at_date(date(2023, 6, 1)),
    );
    assert_eq!(june[0].cancellation_date, Some(date(2023, 10, 15)));

    let november = api_contract_views(&[contract], &FixedClock::at_date(date(2023, 11, 1)));
    assert_eq!(november[0].cancellation_date, Some(date(2024, 10, 15)));
}

#[test]
fn upcoming_renewals_default_to_settings_window() {
    let clock = FixedClock::at_date(date(2023, 6, 1));
    let contracts = vec![
        // deadline 2023-10-15, 136 days away
        Contract::new(Uuid::new_v4(), "Insurance", date(2020, 1, 15)).with_terms(12, 12, 3),
    ];
    let settings = UserSettings::default();

    let default_window =
        api_upcoming_renewals(&contracts, None, &settings, &clock).expect("valid window");
    assert!(default_window.is_empty());

    let wide = api_upcoming_renewals(&contracts, Some(180), &settings, &clock).expect("valid window");
    assert_eq!(wide.len(), 1);

    let err = api_upcoming_renewals(&contracts, Some(0), &settings, &clock)
        .expect_err("zero-day window rejected");
    assert!(err.to_string().contains("positive"));
}

#[test]
fn vehicle_summary_ignores_foreign_entries() {
    let clock = FixedClock::at_date(date(2024, 1, 1));
    let vehicle = Vehicle::new("Van").purchased(date(2023, 1, 1), Some(30_000.0), Some(5_000.0));
    let other = Uuid::new_v4();
    let entries = vec![
        CostEntry::new(vehicle.id, CostType::Service, date(2023, 5, 1)).with_amount(250.0),
        CostEntry::new(other, CostType::Service, date(2023, 5, 1)).with_amount(900.0),
    ];

    let summary = api_vehicle_summary(std::slice::from_ref(&vehicle), &entries, vehicle.id, &clock)
        .expect("vehicle exists");
    assert_eq!(summary.total_cost, 250.0);
    assert_eq!(summary.entry_count, 1);
    assert_eq!(summary.months_owned, 12.0);
}

#[test]
fn vehicle_summary_for_unknown_vehicle_fails() {
    let clock = FixedClock::at_date(date(2024, 1, 1));
    let missing = Uuid::new_v4();
    let err = api_vehicle_summary(&[], &[], missing, &clock).expect_err("missing vehicle");
    assert!(matches!(err, CoreError::VehicleNotFound(id) if id == missing));
}
