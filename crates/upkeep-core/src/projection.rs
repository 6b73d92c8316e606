//! Forward projection of ownership costs to a target age or mileage.

use std::collections::BTreeMap;

use serde::Serialize;

use upkeep_domain::{CostType, Vehicle};

use crate::vehicle_summary::round_cents;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mileage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_months: Option<u32>,
    pub projected_total_cost: f64,
    pub projected_cost_per_month: f64,
    pub projected_cost_per_km: f64,
    #[serde(rename = "theoreticalResidualValue")]
    pub theoretical_residual: f64,
    pub required_sale_price: f64,
}

/// Observed figures the projection extrapolates from.
#[derive(Debug, Clone, Copy)]
pub struct ObservedCosts<'a> {
    pub months_owned: f64,
    pub current_mileage: f64,
    pub costs_by_type: &'a BTreeMap<CostType, f64>,
}

/// Extrapolates running costs to the vehicle's target horizon.
///
/// Missing horizons default to what has been observed so far. Running costs
/// scale linearly with time; maintenance-type costs also get the vehicle's
/// maintenance factor, and declared annual insurance or tax replace the
/// observed amounts for those types. The purchase price is added once.
pub fn project_costs(vehicle: &Vehicle, observed: ObservedCosts<'_>) -> VehicleProjection {
    let mut projection = VehicleProjection {
        target_mileage: vehicle.target_mileage,
        target_months: vehicle.target_months,
        ..VehicleProjection::default()
    };

    let months_owned = observed.months_owned;
    let target_months = vehicle.target_months.map_or(months_owned, f64::from);
    let target_mileage = vehicle.target_mileage.unwrap_or(observed.current_mileage);
    if target_months <= 0.0 || months_owned <= 0.0 {
        return projection;
    }

    let ratio = target_months / months_owned;
    let maintenance_factor = vehicle.maintenance_factor.unwrap_or(1.0);

    let mut running_cost = 0.0;
    for (&cost_type, &amount) in observed.costs_by_type {
        if annual_amount(vehicle, cost_type).is_some() {
            continue;
        }
        let scaled = amount * ratio;
        running_cost += if cost_type.is_maintenance() {
            scaled * maintenance_factor
        } else {
            scaled
        };
    }
    for cost_type in [CostType::Insurance, CostType::Tax] {
        if let Some(annual) = annual_amount(vehicle, cost_type) {
            running_cost += annual * target_months / 12.0;
        }
    }

    let purchase_price = vehicle.purchase_price.unwrap_or(0.0);
    projection.projected_total_cost = purchase_price + running_cost;
    projection.projected_cost_per_month = projection.projected_total_cost / target_months;

    let projected_km = target_mileage - vehicle.purchase_mileage.unwrap_or(0.0);
    if projected_km > 0.0 {
        projection.projected_cost_per_km = projection.projected_total_cost / projected_km;
    }

    if purchase_price > 0.0 {
        let depreciation = purchase_price * (months_owned / target_months);
        projection.theoretical_residual = round_cents((purchase_price - depreciation).max(0.0));
    }

    projection.required_sale_price = (projection.projected_total_cost
        - projection.projected_cost_per_month * target_months)
        .max(0.0);

    projection
}

fn annual_amount(vehicle: &Vehicle, cost_type: CostType) -> Option<f64> {
    match cost_type {
        CostType::Insurance => vehicle.annual_insurance,
        CostType::Tax => vehicle.annual_tax,
        _ => None,
    }
}
