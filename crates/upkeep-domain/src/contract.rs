//! Domain models for recurring contracts.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A recurring agreement (subscription, insurance, utility) with renewal terms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub billing_interval: BillingInterval,
    pub start_date: NaiveDate,
    /// Fixed-term expiry. Open-ended contracts leave this empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub minimum_duration_months: u32,
    /// `0` means the contract does not renew after the minimum duration.
    #[serde(default)]
    pub extension_duration_months: u32,
    #[serde(default)]
    pub notice_period_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_portal_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paperless_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    pub fn new(category_id: Uuid, name: impl Into<String>, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            category_id,
            name: name.into(),
            product_name: None,
            company: None,
            contract_number: None,
            customer_number: None,
            price: None,
            billing_interval: BillingInterval::default(),
            start_date,
            end_date: None,
            minimum_duration_months: 0,
            extension_duration_months: 0,
            notice_period_months: 0,
            customer_portal_url: None,
            paperless_url: None,
            comments: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets minimum duration, extension and notice period in months.
    pub fn with_terms(mut self, minimum: u32, extension: u32, notice: u32) -> Self {
        self.minimum_duration_months = minimum;
        self.extension_duration_months = extension;
        self.notice_period_months = notice;
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_price(mut self, price: f64, interval: BillingInterval) -> Self {
        self.price = Some(price);
        self.billing_interval = interval;
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Returns `true` when the contract renews silently after each period.
    pub fn auto_renews(&self) -> bool {
        self.end_date.is_none() && self.extension_duration_months > 0
    }

    /// Price normalized to one month.
    pub fn monthly_price(&self) -> f64 {
        match (self.price, self.billing_interval) {
            (None, _) => 0.0,
            (Some(price), BillingInterval::Monthly) => price,
            (Some(price), BillingInterval::Yearly) => price / 12.0,
        }
    }

    /// Price normalized to one year.
    pub fn yearly_price(&self) -> f64 {
        match (self.price, self.billing_interval) {
            (None, _) => 0.0,
            (Some(price), BillingInterval::Monthly) => price * 12.0,
            (Some(price), BillingInterval::Yearly) => price,
        }
    }
}

impl BelongsToCategory for Contract {
    fn category_id(&self) -> Uuid {
        self.category_id
    }
}

/// How often the contract price is charged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillingInterval::Monthly => "monthly",
            BillingInterval::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> Contract {
        Contract::new(
            Uuid::new_v4(),
            "Mobile",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn prices_normalize_between_intervals() {
        let monthly = contract().with_price(30.0, BillingInterval::Monthly);
        assert_eq!(monthly.monthly_price(), 30.0);
        assert_eq!(monthly.yearly_price(), 360.0);

        let yearly = contract().with_price(120.0, BillingInterval::Yearly);
        assert_eq!(yearly.monthly_price(), 10.0);
        assert_eq!(yearly.yearly_price(), 120.0);
    }

    #[test]
    fn missing_price_normalizes_to_zero() {
        let unpriced = contract();
        assert_eq!(unpriced.monthly_price(), 0.0);
        assert_eq!(unpriced.yearly_price(), 0.0);
    }

    #[test]
    fn deserializes_wire_shape_with_defaults() {
        let json = r#"{
            "id": "6f1c1a36-9a51-4a4e-9d1b-0c7c7f1b2a10",
            "categoryId": "1b0f9d0e-2f0c-4a55-8a4a-3c2b1e0d9f88",
            "name": "Internet",
            "startDate": "2023-02-01",
            "minimumDurationMonths": 24,
            "extensionDurationMonths": 12,
            "noticePeriodMonths": 1,
            "createdAt": "2023-02-01T10:00:00Z",
            "updatedAt": "2023-02-01T10:00:00Z"
        }"#;
        let parsed: Contract = serde_json::from_str(json).expect("parse contract");
        assert_eq!(parsed.billing_interval, BillingInterval::Monthly);
        assert_eq!(parsed.end_date, None);
        assert!(parsed.auto_renews());

        let value = serde_json::to_value(&parsed).expect("serialize contract");
        assert_eq!(value["startDate"], "2023-02-01");
        assert_eq!(value["billingInterval"], "monthly");
        assert!(value.get("endDate").is_none());
    }
}
