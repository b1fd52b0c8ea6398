//! Donors and facilities as seen by the matching engine.

use serde::{Deserialize, Serialize};

use crate::types::{BloodGroup, Pincode};

/// A registered blood donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub blood_group: BloodGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<Pincode>,
}

impl Donor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, blood_group: BloodGroup) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            blood_group,
            pincode: None,
        }
    }

    pub fn with_pincode(mut self, pincode: Pincode) -> Self {
        self.pincode = Some(pincode);
        self
    }

    /// True if this donor may give blood to a recipient of `recipient`.
    pub fn can_donate_to(&self, recipient: BloodGroup) -> bool {
        self.blood_group.can_donate_to(recipient)
    }
}

/// Kind of facility holding blood stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacilityKind {
    Hospital,
    BloodLab,
    #[default]
    BloodBank,
}

impl FacilityKind {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            FacilityKind::Hospital => 0,
            FacilityKind::BloodLab => 1,
            FacilityKind::BloodBank => 2,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(FacilityKind::Hospital),
            1 => Some(FacilityKind::BloodLab),
            2 => Some(FacilityKind::BloodBank),
            _ => None,
        }
    }
}
