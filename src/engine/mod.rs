//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Purity**: Same input always produces same output; no I/O
//! 2. **Strict validation**: Unknown blood groups are errors, not mismatches
//! 3. **Stable filtering**: Output keeps the caller's order
//! 4. **Two modes**: Exact-group inventory search and compatibility-based
//!    donor feeds are separate operations
//!
//! ## Matching Rules
//!
//! - **Inventory search** keeps entries of exactly the requested group with
//!   a positive quantity
//! - **Donor feeds** keep open requests whose group the donor can supply
//! - **External-source suggestions** keep pending and rejected requests
//!
//! ## Example
//!
//! ```
//! use blood_match::engine::{filter_compatible_inventory, rank_urgent_requests_for_donor};
//! use blood_match::types::{BloodGroup, DonationRequest, InventoryEntry};
//!
//! let entries = vec![
//!     InventoryEntry::new(1, BloodGroup::BPos, 5),
//!     InventoryEntry::new(2, BloodGroup::BNeg, 3),
//! ];
//! let stock = filter_compatible_inventory(BloodGroup::BPos, &entries);
//! assert_eq!(stock.len(), 1);
//!
//! let requests = vec![DonationRequest::new("UR002", BloodGroup::APos, 2)];
//! let feed = rank_urgent_requests_for_donor(BloodGroup::ONeg, &requests);
//! assert_eq!(feed.len(), 1);
//! ```

pub mod matcher;

pub use matcher::{
    can_donate, external_source_candidates, filter_compatible_inventory,
    rank_urgent_requests_for_donor, search_inventory, InventorySearch,
};
