//! Core data types for blood matching
//!
//! ## Types
//!
//! - [`BloodGroup`]: One of the 8 ABO/Rh groups (closed set)
//! - [`DonationRequest`]: A request for units of a group, with its [`RequestStatus`]
//! - [`Donor`]: A registered donor
//! - [`InventoryEntry`]: Units of one group held by one facility
//! - [`AvailableEntry`]: An inventory entry annotated with available units
//! - [`Pincode`]: A validated 6-digit postal code
//!
//! Every type that crosses the JSON boundary uses the application's
//! camelCase field names (`bloodGroup`, `unitsNeeded`, `facilityId`).

pub mod blood_group;
mod donor;
mod inventory;
mod pincode;
mod request;

// Re-export all types at module level
pub use blood_group::{BloodGroup, GROUP_COUNT};
pub use donor::{Donor, FacilityKind};
pub use inventory::{AvailableEntry, InventoryEntry, StockLevel, StockThresholds};
pub use pincode::Pincode;
pub use request::{DonationRequest, RequestStatus, Urgency};
