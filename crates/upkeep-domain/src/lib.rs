//! upkeep-domain
//!
//! Pure domain models (Category, Contract, Purchase, Vehicle, CostEntry, UserSettings).
//! No I/O, no storage, no transport. Only data types, core enums and calendar helpers.

pub mod category;
pub mod common;
pub mod contract;
pub mod purchase;
pub mod settings;
pub mod vehicle;

pub use category::*;
pub use common::*;
pub use contract::*;
pub use purchase::*;
pub use settings::*;
pub use vehicle::*;
