//! Receipt for a batch of stock adjustments.
//!
//! The receipt summarises what a batch changed and carries the ledger
//! state root after the batch, so two parties replaying the same batch can
//! compare a single 32-byte value.

use ssz_rs::prelude::*;

/// Summary of one applied adjustment batch.
///
/// ## Example
///
/// ```
/// use blood_match::ledger::LedgerReceipt;
///
/// let receipt = LedgerReceipt::new(
///     1,                      // batch_id
///     3,                      // adjustments_applied
///     20,                     // units_added
///     5,                      // units_removed
///     [0u8; 32],              // state_root (would be computed)
///     1703577600000,          // timestamp
/// );
/// assert_eq!(receipt.net_change(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct LedgerReceipt {
    /// Batch sequence number
    pub batch_id: u64,

    pub adjustments_applied: u64,

    /// Units added by restocks and upward corrections
    pub units_added: u64,

    /// Units removed by withdrawals and downward corrections
    pub units_removed: u64,

    /// Ledger state root after the batch (SHA-256, 32 bytes)
    pub state_root: [u8; 32],

    /// Batch completion timestamp in milliseconds
    pub timestamp: u64,
}

impl LedgerReceipt {
    pub fn new(
        batch_id: u64,
        adjustments_applied: u64,
        units_added: u64,
        units_removed: u64,
        state_root: [u8; 32],
        timestamp: u64,
    ) -> Self {
        Self {
            batch_id,
            adjustments_applied,
            units_added,
            units_removed,
            state_root,
            timestamp,
        }
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// True if the batch held no adjustments
    pub fn is_empty(&self) -> bool {
        self.adjustments_applied == 0
    }

    /// Units added minus units removed.
    pub fn net_change(&self) -> i128 {
        self.units_added as i128 - self.units_removed as i128
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
