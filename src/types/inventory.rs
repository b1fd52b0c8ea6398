//! Inventory entries and stock-level classification.

use serde::{Deserialize, Serialize};

use crate::types::BloodGroup;

/// Units of one blood group held by one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub facility_id: u64,
    pub blood_group: BloodGroup,
    pub quantity: u64,
}

impl InventoryEntry {
    pub fn new(facility_id: u64, blood_group: BloodGroup, quantity: u64) -> Self {
        Self {
            facility_id,
            blood_group,
            quantity,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

/// An inventory entry that can serve a request, annotated with the units
/// on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableEntry {
    #[serde(flatten)]
    pub entry: InventoryEntry,
    pub available_units: u64,
}

impl From<&InventoryEntry> for AvailableEntry {
    fn from(entry: &InventoryEntry) -> Self {
        Self {
            entry: entry.clone(),
            available_units: entry.quantity,
        }
    }
}

// ============================================================================
// Stock levels
// ============================================================================

/// Coarse availability of a blood group at a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Unavailable,
    Critical,
    Low,
    Good,
}

/// Upper bounds (exclusive) for the critical and low stock bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockThresholds {
    pub critical_below: u64,
    pub low_below: u64,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical_below: 10,
            low_below: 50,
        }
    }
}

impl StockThresholds {
    /// Classify a unit count.
    ///
    /// # Example
    ///
    /// ```
    /// use blood_match::types::{StockLevel, StockThresholds};
    ///
    /// let thresholds = StockThresholds::default();
    /// assert_eq!(thresholds.classify(0), StockLevel::Unavailable);
    /// assert_eq!(thresholds.classify(9), StockLevel::Critical);
    /// assert_eq!(thresholds.classify(10), StockLevel::Low);
    /// assert_eq!(thresholds.classify(50), StockLevel::Good);
    /// ```
    pub fn classify(&self, quantity: u64) -> StockLevel {
        if quantity == 0 {
            StockLevel::Unavailable
        } else if quantity < self.critical_below {
            StockLevel::Critical
        } else if quantity < self.low_below {
            StockLevel::Low
        } else {
            StockLevel::Good
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_entry_copies_quantity() {
        let entry = InventoryEntry::new(3, BloodGroup::BPos, 5);
        let available = AvailableEntry::from(&entry);
        assert_eq!(available.available_units, 5);
        assert_eq!(available.entry, entry);
    }

    #[test]
    fn test_available_entry_json_shape() {
        let available = AvailableEntry::from(&InventoryEntry::new(3, BloodGroup::BPos, 5));
        let value = serde_json::to_value(&available).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "facilityId": 3,
                "bloodGroup": "B+",
                "quantity": 5,
                "availableUnits": 5
            })
        );
    }

    #[test]
    fn test_classify_boundaries() {
        let thresholds = StockThresholds {
            critical_below: 3,
            low_below: 6,
        };
        let levels: Vec<_> = (0..8).map(|q| thresholds.classify(q)).collect();
        assert_eq!(
            levels,
            vec![
                StockLevel::Unavailable,
                StockLevel::Critical,
                StockLevel::Critical,
                StockLevel::Low,
                StockLevel::Low,
                StockLevel::Low,
                StockLevel::Good,
                StockLevel::Good,
            ]
        );
    }

    #[test]
    fn test_equal_thresholds_skip_low_band() {
        let thresholds = StockThresholds {
            critical_below: 5,
            low_below: 5,
        };
        assert_eq!(thresholds.classify(4), StockLevel::Critical);
        assert_eq!(thresholds.classify(5), StockLevel::Good);
    }
}
