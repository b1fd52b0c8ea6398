//! # Blood Match
//!
//! Blood-group compatibility and donor matching for blood-bank facilities.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (BloodGroup, DonationRequest, InventoryEntry)
//! - **Compat**: Fixed donor → recipient compatibility table and chart
//! - **Engine**: Pure matching filters (inventory search, donor feeds)
//! - **Ledger**: Facility inventory with explicit stock adjustments and
//!   SHA-256 state roots
//!
//! ## Design Principles
//!
//! 1. **Closed domain**: Blood groups are an 8-value enum; unknown text is
//!    an error at the boundary, never a silent mismatch
//! 2. **Fixed relation**: Compatibility is a constant table
//! 3. **Pure matching**: The engine performs no I/O and holds no state, so
//!    it can be called from any number of threads
//! 4. **Deterministic ledger**: Identical adjustment sequences give
//!    identical state roots

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: BloodGroup, DonationRequest, InventoryEntry
pub mod types;

/// Compatibility relation between blood groups
pub mod compat;

/// Matching engine: inventory search and donor opportunity feeds
pub mod engine;

/// Facility inventory ledger
pub mod ledger;

pub mod config;
pub mod error;
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use compat::{donors_for, recipients_for, CompatibilityChart};
pub use engine::{
    can_donate, external_source_candidates, filter_compatible_inventory,
    rank_urgent_requests_for_donor, search_inventory, InventorySearch,
};
pub use error::{LedgerError, MatchError, PincodeError, WorkflowError};
pub use ledger::{InventoryLedger, LedgerReceipt, StockAdjustment};
pub use types::{
    AvailableEntry, BloodGroup, DonationRequest, Donor, InventoryEntry, Pincode, RequestStatus,
    StockLevel, StockThresholds, Urgency,
};
