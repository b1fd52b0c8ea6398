//! Facility inventory ledger.
//!
//! ## Architecture
//!
//! - **Slab**: Pre-allocated storage for facility stock records
//! - **BTreeMap**: Facility id to slab key, sorted so every traversal is
//!   deterministic (facility id ascending, then group code)
//!
//! ## Invariants
//!
//! - Quantities never go negative: a withdrawal larger than the stock
//!   fails and changes nothing
//! - Quantities change only through [`InventoryLedger::restock`],
//!   [`InventoryLedger::withdraw`], [`InventoryLedger::set_quantity`] and
//!   [`InventoryLedger::apply_batch`]
//!
//! ## Example
//!
//! ```
//! use blood_match::ledger::InventoryLedger;
//! use blood_match::types::{BloodGroup, FacilityKind};
//!
//! let mut ledger = InventoryLedger::with_capacity(16);
//! ledger.register_facility(1, FacilityKind::BloodBank).unwrap();
//! ledger.restock(1, BloodGroup::ONeg, 4).unwrap();
//! ledger.withdraw(1, BloodGroup::ONeg, 1).unwrap();
//!
//! assert_eq!(ledger.quantity(1, BloodGroup::ONeg), Ok(3));
//! assert!(ledger.withdraw(1, BloodGroup::ONeg, 10).is_err());
//! ```

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::error::LedgerError;
use crate::ledger::{FacilityStock, LedgerReceipt, LedgerRecord};
use crate::types::{BloodGroup, FacilityKind, InventoryEntry};

/// A single explicit stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    Restock {
        facility_id: u64,
        blood_group: BloodGroup,
        units: u64,
    },
    Withdraw {
        facility_id: u64,
        blood_group: BloodGroup,
        units: u64,
    },
    /// Absolute correction after a physical count
    Set {
        facility_id: u64,
        blood_group: BloodGroup,
        units: u64,
    },
}

/// Mapping (facility id, blood group) → units on hand.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    facilities: Slab<FacilityStock>,
    index: BTreeMap<u64, usize>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with pre-allocated facility slots
    pub fn with_capacity(facility_capacity: usize) -> Self {
        Self {
            facilities: Slab::with_capacity(facility_capacity),
            index: BTreeMap::new(),
        }
    }

    // ========================================================================
    // Facilities
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.facilities.capacity()
    }

    #[inline]
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    #[inline]
    pub fn contains_facility(&self, facility_id: u64) -> bool {
        self.index.contains_key(&facility_id)
    }

    pub fn register_facility(
        &mut self,
        facility_id: u64,
        kind: FacilityKind,
    ) -> Result<(), LedgerError> {
        if self.index.contains_key(&facility_id) {
            tracing::warn!(facility_id, "facility already registered");
            return Err(LedgerError::DuplicateFacility(facility_id));
        }

        let key = self.facilities.insert(FacilityStock::new(facility_id, kind));
        self.index.insert(facility_id, key);
        tracing::info!(facility_id, ?kind, "facility registered");
        Ok(())
    }

    /// Remove a facility and return its final stock.
    pub fn remove_facility(&mut self, facility_id: u64) -> Result<FacilityStock, LedgerError> {
        let key = self
            .index
            .remove(&facility_id)
            .ok_or(LedgerError::UnknownFacility(facility_id))?;
        tracing::info!(facility_id, "facility removed");
        Ok(self.facilities.remove(key))
    }

    pub fn facility(&self, facility_id: u64) -> Result<&FacilityStock, LedgerError> {
        self.index
            .get(&facility_id)
            .and_then(|key| self.facilities.get(*key))
            .ok_or(LedgerError::UnknownFacility(facility_id))
    }

    fn facility_mut(&mut self, facility_id: u64) -> Result<&mut FacilityStock, LedgerError> {
        let key = *self
            .index
            .get(&facility_id)
            .ok_or(LedgerError::UnknownFacility(facility_id))?;
        self.facilities
            .get_mut(key)
            .ok_or(LedgerError::UnknownFacility(facility_id))
    }

    /// Facilities in ascending id order
    pub fn facilities(&self) -> impl Iterator<Item = &FacilityStock> + '_ {
        self.index.values().filter_map(|key| self.facilities.get(*key))
    }

    // ========================================================================
    // Stock adjustments
    // ========================================================================

    pub fn quantity(&self, facility_id: u64, group: BloodGroup) -> Result<u64, LedgerError> {
        Ok(self.facility(facility_id)?.quantity(group))
    }

    /// Add units; returns the new quantity.
    pub fn restock(
        &mut self,
        facility_id: u64,
        group: BloodGroup,
        units: u64,
    ) -> Result<u64, LedgerError> {
        let stock = self.facility_mut(facility_id)?;
        let updated = stock
            .quantity(group)
            .checked_add(units)
            .ok_or(LedgerError::QuantityOverflow {
                facility_id,
                blood_group: group,
                added: units,
            })?;
        stock.set(group, updated);
        tracing::info!(
            facility_id,
            blood_group = %group,
            units,
            quantity = updated,
            "restocked"
        );
        Ok(updated)
    }

    /// Remove units; returns the new quantity. Fails without change if the
    /// facility holds fewer than `units`.
    pub fn withdraw(
        &mut self,
        facility_id: u64,
        group: BloodGroup,
        units: u64,
    ) -> Result<u64, LedgerError> {
        let stock = self.facility_mut(facility_id)?;
        let available = stock.quantity(group);
        let Some(updated) = available.checked_sub(units) else {
            tracing::warn!(
                facility_id,
                blood_group = %group,
                available,
                requested = units,
                "withdrawal rejected"
            );
            return Err(LedgerError::InsufficientStock {
                facility_id,
                blood_group: group,
                available,
                requested: units,
            });
        };
        stock.set(group, updated);
        tracing::info!(
            facility_id,
            blood_group = %group,
            units,
            quantity = updated,
            "withdrawn"
        );
        Ok(updated)
    }

    /// Overwrite the quantity; returns the previous quantity.
    pub fn set_quantity(
        &mut self,
        facility_id: u64,
        group: BloodGroup,
        units: u64,
    ) -> Result<u64, LedgerError> {
        let stock = self.facility_mut(facility_id)?;
        let previous = stock.quantity(group);
        stock.set(group, units);
        tracing::info!(
            facility_id,
            blood_group = %group,
            previous,
            quantity = units,
            "stock corrected"
        );
        Ok(previous)
    }

    /// Apply a batch of adjustments all-or-nothing.
    ///
    /// If any adjustment fails the ledger is left exactly as it was and the
    /// first error is returned.
    pub fn apply_batch(
        &mut self,
        batch_id: u64,
        adjustments: &[StockAdjustment],
        timestamp: u64,
    ) -> Result<LedgerReceipt, LedgerError> {
        let snapshot = self.facilities.clone();
        let mut units_added = 0u64;
        let mut units_removed = 0u64;

        for adjustment in adjustments {
            if let Err(err) = self.apply_one(adjustment, &mut units_added, &mut units_removed) {
                self.facilities = snapshot;
                tracing::warn!(batch_id, error = %err, "batch rolled back");
                return Err(err);
            }
        }

        let state_root = self.compute_state_root()?;
        tracing::info!(batch_id, adjustments = adjustments.len(), "batch applied");
        Ok(LedgerReceipt::new(
            batch_id,
            adjustments.len() as u64,
            units_added,
            units_removed,
            state_root,
            timestamp,
        ))
    }

    fn apply_one(
        &mut self,
        adjustment: &StockAdjustment,
        units_added: &mut u64,
        units_removed: &mut u64,
    ) -> Result<(), LedgerError> {
        match *adjustment {
            StockAdjustment::Restock { facility_id, blood_group, units } => {
                self.restock(facility_id, blood_group, units)?;
                *units_added = units_added.saturating_add(units);
            }
            StockAdjustment::Withdraw { facility_id, blood_group, units } => {
                self.withdraw(facility_id, blood_group, units)?;
                *units_removed = units_removed.saturating_add(units);
            }
            StockAdjustment::Set { facility_id, blood_group, units } => {
                let previous = self.set_quantity(facility_id, blood_group, units)?;
                if units >= previous {
                    *units_added = units_added.saturating_add(units - previous);
                } else {
                    *units_removed = units_removed.saturating_add(previous - units);
                }
            }
        }
        Ok(())
    }

    /// Load a flat inventory snapshot, registering unseen facility ids as
    /// blood banks and adding each entry's quantity to its cell.
    ///
    /// Repeated (facility, group) entries accumulate. On error the ledger
    /// is left unchanged.
    pub fn load_entries(&mut self, entries: &[InventoryEntry]) -> Result<(), LedgerError> {
        let mut staged = self.clone();
        for entry in entries {
            if !staged.contains_facility(entry.facility_id) {
                staged.register_facility(entry.facility_id, FacilityKind::BloodBank)?;
            }
            staged.restock(entry.facility_id, entry.blood_group, entry.quantity)?;
        }

        *self = staged;
        tracing::info!(
            entries = entries.len(),
            facilities = self.facility_count(),
            "inventory loaded"
        );
        Ok(())
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Every (facility, group) cell, zero quantities included, in
    /// deterministic order.
    pub fn entries(&self) -> Vec<InventoryEntry> {
        self.facilities().flat_map(FacilityStock::entries).collect()
    }

    /// Cells of one group across all facilities, ascending facility id.
    pub fn entries_for(&self, group: BloodGroup) -> Vec<InventoryEntry> {
        self.facilities()
            .map(|stock| InventoryEntry::new(stock.facility_id, group, stock.quantity(group)))
            .collect()
    }

    /// Units of `group` across all facilities (saturating).
    pub fn total_units(&self, group: BloodGroup) -> u64 {
        self.facilities()
            .fold(0u64, |sum, stock| sum.saturating_add(stock.quantity(group)))
    }

    // ========================================================================
    // State root
    // ========================================================================

    /// SHA-256 over the SSZ encoding of every ledger cell in deterministic
    /// order.
    pub fn compute_state_root(&self) -> Result<[u8; 32], LedgerError> {
        let mut hasher = Sha256::new();
        for stock in self.facilities() {
            for group in BloodGroup::ALL {
                let record =
                    LedgerRecord::new(stock.facility_id, stock.kind, group, stock.quantity(group));
                hasher.update(record.encode()?);
            }
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }

    pub fn state_root_hex(&self) -> Result<String, LedgerError> {
        Ok(hex::encode(self.compute_state_root()?))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
