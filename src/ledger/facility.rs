//! Per-facility stock stored in the ledger slab.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

use crate::types::{BloodGroup, FacilityKind, InventoryEntry, GROUP_COUNT};

/// Stock held by one facility, one counter per blood group.
///
/// ## Memory Layout
///
/// ```text
/// FacilityStock {
///     facility_id: u64
///     kind: FacilityKind (1 byte)
///     units: [u64; 8] indexed by BloodGroup code
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityStock {
    pub facility_id: u64,
    pub kind: FacilityKind,
    units: [u64; GROUP_COUNT],
}

impl FacilityStock {
    /// Create an empty stock record
    pub fn new(facility_id: u64, kind: FacilityKind) -> Self {
        Self {
            facility_id,
            kind,
            units: [0; GROUP_COUNT],
        }
    }

    #[inline]
    pub fn quantity(&self, group: BloodGroup) -> u64 {
        self.units[group.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, group: BloodGroup, units: u64) {
        self.units[group.index()] = units;
    }

    /// Sum over all groups (saturating)
    pub fn total_units(&self) -> u64 {
        self.units.iter().fold(0u64, |sum, q| sum.saturating_add(*q))
    }

    /// One entry per group, canonical group order, zero quantities included.
    pub fn entries(&self) -> impl Iterator<Item = InventoryEntry> + '_ {
        BloodGroup::ALL
            .into_iter()
            .map(move |group| InventoryEntry::new(self.facility_id, group, self.quantity(group)))
    }
}
