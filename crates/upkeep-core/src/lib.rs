//! upkeep-core
//!
//! Derived values for contracts, purchases and vehicles.
//! Depends on upkeep-domain. No transport, no storage, no presentation.

pub mod error;
pub mod mileage;
pub mod projection;
pub mod public_api;
pub mod reminder_service;
pub mod renewal;
pub mod renewal_service;
pub mod summary_service;
pub mod time;
pub mod vehicle_summary;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use mileage::*;
pub use projection::*;
pub use public_api::*;
pub use reminder_service::*;
pub use renewal::*;
pub use renewal_service::*;
pub use summary_service::*;
pub use time::*;
pub use vehicle_summary::*;
