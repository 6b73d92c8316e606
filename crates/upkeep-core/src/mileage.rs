//! Odometer series, yearly distances and fuel spend per kilometre.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use upkeep_domain::{start_of_year, CostEntry, CostType, Vehicle};

use crate::vehicle_summary::round_cents;

/// A single odometer reading.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MileagePoint {
    pub date: NaiveDate,
    pub mileage: f64,
}

/// Distance covered in one calendar year and the fuel spend per km in it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearMileage {
    pub year: i32,
    pub km: f64,
    pub fuel_cost_per_km: f64,
}

/// Collects the purchase baseline and every entry reading, ordered by date.
pub fn mileage_history(vehicle: &Vehicle, entries: &[CostEntry]) -> Vec<MileagePoint> {
    let baseline = vehicle
        .purchase_date
        .zip(vehicle.purchase_mileage)
        .map(|(date, mileage)| MileagePoint { date, mileage });

    let mut points: Vec<MileagePoint> = baseline
        .into_iter()
        .chain(entries.iter().filter_map(|entry| {
            entry.mileage.map(|mileage| MileagePoint {
                date: entry.date,
                mileage,
            })
        }))
        .collect();
    points.sort_by(|a, b| a.date.cmp(&b.date).then(a.mileage.total_cmp(&b.mileage)));
    points
}

/// Linearly interpolates the odometer at `target` from a date-sorted series.
///
/// Dates before the first reading take the first value, dates on or after the
/// last reading take the last value.
pub fn interpolate_mileage(points: &[MileagePoint], target: NaiveDate) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;
    if target < first.date {
        return Some(first.mileage);
    }
    if target >= last.date {
        return Some(last.mileage);
    }

    let upper = points.iter().position(|point| target < point.date)?;
    let (before, after) = (points[upper - 1], points[upper]);
    let span = (after.date - before.date).num_days();
    if span <= 0 {
        return Some(before.mileage);
    }
    let elapsed = (target - before.date).num_days() as f64;
    let fraction = elapsed / span as f64;
    Some(before.mileage + fraction * (after.mileage - before.mileage))
}

/// Spreads each fuel purchase over the days since the previous one, per calendar year.
///
/// The first fill-up is booked entirely to its own year.
pub fn distribute_fuel_costs(entries: &[CostEntry]) -> BTreeMap<i32, f64> {
    let mut fills: Vec<(NaiveDate, f64)> = entries
        .iter()
        .filter(|entry| entry.cost_type == CostType::Fuel)
        .filter_map(|entry| entry.amount.map(|amount| (entry.date, amount)))
        .filter(|(_, amount)| *amount > 0.0)
        .collect();
    fills.sort_by_key(|(date, _)| *date);

    let mut by_year = BTreeMap::new();
    let mut previous: Option<NaiveDate> = None;
    for (date, amount) in fills {
        let Some(prev) = previous.replace(date) else {
            *by_year.entry(date.year()).or_insert(0.0) += amount;
            continue;
        };

        let total_days = (date - prev).num_days();
        if total_days <= 0 {
            *by_year.entry(date.year()).or_insert(0.0) += amount;
            continue;
        }

        let mut cursor = prev;
        while cursor < date {
            let segment_end = start_of_year(cursor.year() + 1)
                .map_or(date, |next_year| next_year.min(date));
            let days = (segment_end - cursor).num_days() as f64;
            *by_year.entry(cursor.year()).or_insert(0.0) += amount * days / total_days as f64;
            cursor = segment_end;
        }
    }
    by_year
}

/// Distance per calendar year for every year holding at least one reading.
///
/// Distances come from the odometer interpolated at each 1 January; the fuel
/// spend for that year is divided by the distance when it is positive.
pub fn mileage_by_year(points: &[MileagePoint], fuel_by_year: &BTreeMap<i32, f64>) -> Vec<YearMileage> {
    if points.len() < 2 {
        return Vec::new();
    }

    let years: BTreeSet<i32> = points.iter().map(|point| point.date.year()).collect();
    years
        .into_iter()
        .filter_map(|year| {
            let opening = interpolate_mileage(points, start_of_year(year)?)?;
            let closing = interpolate_mileage(points, start_of_year(year + 1)?)?;
            let km = (closing - opening).max(0.0);
            let fuel_cost_per_km = match fuel_by_year.get(&year) {
                Some(fuel) if km > 0.0 => fuel / km,
                _ => 0.0,
            };
            Some(YearMileage {
                year,
                km: km.round(),
                fuel_cost_per_km: round_cents(fuel_cost_per_km),
            })
        })
        .collect()
}
