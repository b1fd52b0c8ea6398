//! Fixed-size ledger record used for state root hashing.
//!
//! ## SSZ Serialization
//!
//! Records derive `SimpleSerialize` from ssz_rs for deterministic encoding:
//! - Basic types (u64, u8): direct little-endian encoding
//! - Fixed-size containers: concatenated fields
//!
//! Enums are stored as their `u8` codes so the layout stays fixed.

use ssz_rs::prelude::*;

use crate::error::LedgerError;
use crate::types::{BloodGroup, FacilityKind};

/// One (facility, group) → quantity cell of the ledger.
///
/// ## SSZ Layout
///
/// 8 (facility_id) + 1 (kind_raw) + 1 (group_raw) + 8 (quantity) = 18 bytes
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct LedgerRecord {
    pub facility_id: u64,

    /// Facility kind as u8 (0=Hospital, 1=BloodLab, 2=BloodBank)
    pub kind_raw: u8,

    /// Blood group code (0=A+ .. 7=O-)
    pub group_raw: u8,

    pub quantity: u64,
}

impl LedgerRecord {
    pub fn new(facility_id: u64, kind: FacilityKind, group: BloodGroup, quantity: u64) -> Self {
        Self {
            facility_id,
            kind_raw: kind.to_u8(),
            group_raw: group.to_u8(),
            quantity,
        }
    }

    pub fn blood_group(&self) -> Option<BloodGroup> {
        BloodGroup::from_u8(self.group_raw)
    }

    pub fn kind(&self) -> Option<FacilityKind> {
        FacilityKind::from_u8(self.kind_raw)
    }

    pub fn encode(&self) -> Result<Vec<u8>, LedgerError> {
        ssz_rs::serialize(self).map_err(|e| LedgerError::Encoding(format!("{e:?}")))
    }
}
