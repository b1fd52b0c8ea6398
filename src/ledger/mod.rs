//! Facility inventory ledger.
//!
//! ## Components
//!
//! - [`FacilityStock`]: Per-facility counters, one per blood group
//! - [`InventoryLedger`]: Slab-backed map of facilities with explicit
//!   stock-adjustment operations
//! - [`LedgerRecord`]: Fixed-size SSZ record hashed into the state root
//! - [`LedgerReceipt`]: Summary of an applied adjustment batch
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Register facility | O(log n) |
//! | Restock / withdraw | O(log n) |
//! | Entries for one group | O(n) |
//! | State root | O(8n) |
//!
//! The matching engine never mutates the ledger; it only reads
//! [`InventoryLedger::entries`] snapshots.

pub mod book;
pub mod facility;
pub mod receipt;
pub mod record;

pub use book::{InventoryLedger, StockAdjustment};
pub use facility::FacilityStock;
pub use receipt::LedgerReceipt;
pub use record::LedgerRecord;
