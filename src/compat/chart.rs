//! Full compatibility chart, one row per blood group.
//!
//! Serializes to the shape the blood-group listing endpoint serves:
//!
//! ```json
//! {
//!   "A+": { "canDonateTo": ["A+", "AB+"], "canReceiveFrom": ["A+", "A-", "O+", "O-"] },
//!   ...
//! }
//! ```
//!
//! Keys appear in canonical group order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::compat::{donors_for, recipients_for};
use crate::types::BloodGroup;

/// Both directions of the relation for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    #[serde(skip)]
    pub group: BloodGroup,
    pub can_donate_to: Vec<BloodGroup>,
    pub can_receive_from: Vec<BloodGroup>,
}

impl ChartRow {
    pub fn for_group(group: BloodGroup) -> Self {
        Self {
            group,
            can_donate_to: recipients_for(group),
            can_receive_from: donors_for(group),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityChart {
    rows: Vec<ChartRow>,
}

impl CompatibilityChart {
    pub fn build() -> Self {
        Self {
            rows: BloodGroup::ALL.into_iter().map(ChartRow::for_group).collect(),
        }
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn row(&self, group: BloodGroup) -> &ChartRow {
        &self.rows[group.index()]
    }
}

impl Serialize for CompatibilityChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(row.group.as_str(), row)?;
        }
        map.end()
    }
}
