//! Domain types for vehicles and their running-cost entries.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An owned vehicle with its purchase baseline and projection horizons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_insurance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_tax: Option<f64>,
    /// Multiplier applied to maintenance-type costs when projecting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            make: None,
            model: None,
            year: None,
            license_plate: None,
            purchase_date: None,
            purchase_price: None,
            purchase_mileage: None,
            target_mileage: None,
            target_months: None,
            annual_insurance: None,
            annual_tax: None,
            maintenance_factor: None,
            comments: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records the ownership baseline.
    pub fn purchased(mut self, date: NaiveDate, price: Option<f64>, mileage: Option<f64>) -> Self {
        self.purchase_date = Some(date);
        self.purchase_price = price;
        self.purchase_mileage = mileage;
        self
    }

    /// Returns `true` when either projection horizon is declared.
    pub fn has_projection_target(&self) -> bool {
        self.target_mileage.is_some() || self.target_months.is_some()
    }
}

/// One expense or odometer reading recorded against a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostEntry {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    #[serde(rename = "type")]
    pub cost_type: CostType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CostEntry {
    pub fn new(vehicle_id: Uuid, cost_type: CostType, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            cost_type,
            description: None,
            vendor: None,
            amount: None,
            date,
            mileage: None,
            comments: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_mileage(mut self, mileage: f64) -> Self {
        self.mileage = Some(mileage);
        self
    }

    /// Odometer readings carry no spend even when an amount was typed in.
    pub fn is_expense(&self) -> bool {
        self.cost_type != CostType::Mileage
    }
}

/// The fixed set of vehicle cost kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    Service,
    Fuel,
    Insurance,
    Tax,
    Inspection,
    Tires,
    Mileage,
    Misc,
}

impl CostType {
    pub const ALL: [CostType; 8] = [
        CostType::Service,
        CostType::Fuel,
        CostType::Insurance,
        CostType::Tax,
        CostType::Inspection,
        CostType::Tires,
        CostType::Mileage,
        CostType::Misc,
    ];

    /// Cost kinds that scale with wear and receive the maintenance factor.
    pub fn is_maintenance(self) -> bool {
        matches!(
            self,
            CostType::Service | CostType::Inspection | CostType::Tires
        )
    }
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CostType::Service => "service",
            CostType::Fuel => "fuel",
            CostType::Insurance => "insurance",
            CostType::Tax => "tax",
            CostType::Inspection => "inspection",
            CostType::Tires => "tires",
            CostType::Mileage => "mileage",
            CostType::Misc => "misc",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_type_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&CostType::Inspection).expect("serialize");
        assert_eq!(json, "\"inspection\"");
        let parsed: CostType = serde_json::from_str("\"tires\"").expect("parse");
        assert_eq!(parsed, CostType::Tires);
        assert!(serde_json::from_str::<CostType>("\"parking\"").is_err());
    }

    #[test]
    fn mileage_entries_are_not_expenses() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let reading = CostEntry::new(Uuid::new_v4(), CostType::Mileage, date).with_mileage(1.0);
        let fuel = CostEntry::new(Uuid::new_v4(), CostType::Fuel, date).with_amount(60.0);
        assert!(!reading.is_expense());
        assert!(fuel.is_expense());
    }
}
