//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Request handlers and other frontends call these with the records they
//! loaded and a [`Clock`]; every call re-reads the clock, so nothing derived
//! here is ever cached.

use uuid::Uuid;

use upkeep_domain::{Contract, CostEntry, UserSettings, Vehicle};

use crate::{
    renewal_service::{ContractView, RenewalService},
    time::Clock,
    vehicle_summary::{compute_vehicle_summary, VehicleSummary},
    CoreError,
};

/// Derives renewal state for every contract as of the clock's current day.
pub fn api_contract_views(contracts: &[Contract], clock: &dyn Clock) -> Vec<ContractView> {
    RenewalService::views(contracts, clock.today())
}

/// Lists contracts with a cancellation deadline inside the requested window.
///
/// Without an explicit `days` the user's configured renewal window is used.
pub fn api_upcoming_renewals(
    contracts: &[Contract],
    days: Option<u32>,
    settings: &UserSettings,
    clock: &dyn Clock,
) -> Result<Vec<ContractView>, CoreError> {
    let days = days.unwrap_or(settings.renewal_days);
    RenewalService::upcoming(contracts, clock.today(), days)
}

/// Summarizes the vehicle identified by `vehicle_id`.
///
/// Entries recorded against other vehicles are ignored.
pub fn api_vehicle_summary(
    vehicles: &[Vehicle],
    entries: &[CostEntry],
    vehicle_id: Uuid,
    clock: &dyn Clock,
) -> Result<VehicleSummary, CoreError> {
    let vehicle = vehicles
        .iter()
        .find(|vehicle| vehicle.id == vehicle_id)
        .ok_or(CoreError::VehicleNotFound(vehicle_id))?;
    let own_entries: Vec<CostEntry> = entries
        .iter()
        .filter(|entry| entry.vehicle_id == vehicle_id)
        .cloned()
        .collect();
    Ok(compute_vehicle_summary(vehicle, &own_entries, clock.today()))
}
