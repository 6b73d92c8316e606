//! Cost totals, rates and yearly breakdowns for a single vehicle.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use upkeep_domain::{CostEntry, CostType, Vehicle};

use crate::{
    mileage::{distribute_fuel_costs, mileage_by_year, mileage_history, MileagePoint, YearMileage},
    projection::{project_costs, ObservedCosts, VehicleProjection},
};

/// Spend in one calendar year, split per cost type.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearCosts {
    pub year: i32,
    pub service: f64,
    pub fuel: f64,
    pub insurance: f64,
    pub tax: f64,
    pub inspection: f64,
    pub tires: f64,
    pub misc: f64,
    pub total: f64,
}

impl YearCosts {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    fn add(&mut self, cost_type: CostType, amount: f64) {
        let column = match cost_type {
            CostType::Service => &mut self.service,
            CostType::Fuel => &mut self.fuel,
            CostType::Insurance => &mut self.insurance,
            CostType::Tax => &mut self.tax,
            CostType::Inspection => &mut self.inspection,
            CostType::Tires => &mut self.tires,
            CostType::Misc => &mut self.misc,
            CostType::Mileage => return,
        };
        *column += amount;
        self.total += amount;
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub vehicle_id: Uuid,
    pub current_mileage: f64,
    pub months_owned: f64,
    pub km_per_month: f64,
    pub costs_by_type: BTreeMap<CostType, f64>,
    pub costs_by_year: Vec<YearCosts>,
    pub total_cost: f64,
    pub cost_per_month: f64,
    pub cost_per_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<VehicleProjection>,
    pub mileage_by_year: Vec<YearMileage>,
    pub mileage_history: Vec<MileagePoint>,
    pub entry_count: usize,
}

/// Aggregates a vehicle's cost entries into totals, rates and projections.
///
/// Entries without an amount and odometer-only (`mileage`) entries do not
/// contribute to any cost figure. Rates fall back to zero when there is no
/// ownership time or no distance driven.
pub fn compute_vehicle_summary(
    vehicle: &Vehicle,
    entries: &[CostEntry],
    today: NaiveDate,
) -> VehicleSummary {
    let months_owned = vehicle
        .purchase_date
        .map_or(0.0, |purchased| months_between(purchased, today));
    let current_mileage = entries
        .iter()
        .filter_map(|entry| entry.mileage)
        .reduce(f64::max)
        .or(vehicle.purchase_mileage)
        .unwrap_or(0.0);

    let mut costs_by_type: BTreeMap<CostType, f64> = BTreeMap::new();
    let mut years: BTreeMap<i32, YearCosts> = BTreeMap::new();
    let mut total_cost = 0.0;
    for entry in entries.iter().filter(|entry| entry.is_expense()) {
        let Some(amount) = entry.amount else {
            continue;
        };
        total_cost += amount;
        *costs_by_type.entry(entry.cost_type).or_insert(0.0) += amount;
        let year = entry.date.year();
        years
            .entry(year)
            .or_insert_with(|| YearCosts::new(year))
            .add(entry.cost_type, amount);
    }
    costs_by_type.retain(|_, total| *total != 0.0);

    let distance = (current_mileage - vehicle.purchase_mileage.unwrap_or(0.0)).max(0.0);
    let per_month = |value: f64| {
        if months_owned > 0.0 {
            value / months_owned
        } else {
            0.0
        }
    };
    let cost_per_km = if distance > 0.0 {
        total_cost / distance
    } else {
        0.0
    };

    let history = mileage_history(vehicle, entries);
    let fuel_by_year = distribute_fuel_costs(entries);
    let yearly_mileage = mileage_by_year(&history, &fuel_by_year);

    let projection = vehicle.has_projection_target().then(|| {
        project_costs(
            vehicle,
            ObservedCosts {
                months_owned,
                current_mileage,
                costs_by_type: &costs_by_type,
            },
        )
    });

    debug!(
        vehicle = %vehicle.id,
        entries = entries.len(),
        total_cost,
        months_owned,
        "built vehicle summary"
    );

    VehicleSummary {
        vehicle_id: vehicle.id,
        current_mileage,
        months_owned,
        km_per_month: per_month(distance),
        costs_by_type,
        costs_by_year: years.into_values().collect(),
        total_cost,
        cost_per_month: per_month(total_cost),
        cost_per_km,
        projection,
        mileage_by_year: yearly_mileage,
        mileage_history: history,
        entry_count: entries.len(),
    }
}

/// Whole and fractional months between two dates, counting a day as 1/30 month.
///
/// Rounded to two decimals and never negative.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> f64 {
    let years = to.year() - from.year();
    let months = to.month() as i32 - from.month() as i32;
    let days = to.day() as i32 - from.day() as i32;
    let total = f64::from(years * 12 + months) + f64::from(days) / 30.0;
    if total < 0.0 {
        return 0.0;
    }
    round_cents(total)
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
