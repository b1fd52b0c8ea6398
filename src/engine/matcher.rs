//! Matching operations over already-fetched donors, requests and stock.
//!
//! Two filtering modes are kept apart on purpose:
//!
//! - **Exact match** ([`filter_compatible_inventory`]): "does this facility
//!   hold units of group G". Used for inventory search.
//! - **Compatibility match** ([`rank_urgent_requests_for_donor`]): "which
//!   requests can this donor serve". Used for donor opportunity feeds.
//!
//! All functions are pure: no I/O, no shared state, output order follows
//! input order.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::MatchError;
use crate::types::{AvailableEntry, BloodGroup, DonationRequest, InventoryEntry};

/// Validate both groups and check the compatibility table.
///
/// Unknown group text is an error, never `false`.
///
/// # Example
///
/// ```
/// use blood_match::engine::can_donate;
/// use blood_match::error::MatchError;
///
/// assert_eq!(can_donate("O-", "AB+"), Ok(true));
/// assert_eq!(can_donate("A+", "O+"), Ok(false));
/// assert_eq!(
///     can_donate("X+", "O+"),
///     Err(MatchError::InvalidBloodGroup("X+".to_string()))
/// );
/// ```
pub fn can_donate(donor_group: &str, recipient_group: &str) -> Result<bool, MatchError> {
    let donor = BloodGroup::parse(donor_group)?;
    let recipient = BloodGroup::parse(recipient_group)?;
    Ok(donor.can_donate_to(recipient))
}

/// Entries holding units of exactly `required_group`, annotated with
/// `available_units`.
///
/// Zero-quantity entries are dropped. Compatible-but-different groups are
/// not considered.
pub fn filter_compatible_inventory(
    required_group: BloodGroup,
    entries: &[InventoryEntry],
) -> Vec<AvailableEntry> {
    let matches: Vec<AvailableEntry> = entries
        .iter()
        .filter(|entry| entry.blood_group == required_group && entry.quantity > 0)
        .map(AvailableEntry::from)
        .collect();

    tracing::debug!(
        blood_group = %required_group,
        scanned = entries.len(),
        matched = matches.len(),
        "filtered inventory"
    );
    matches
}

/// Open requests that a donor of `donor_group` can serve.
///
/// Accepted and fulfilled requests are left out of the feed. Caller order is
/// kept; pre-sort by urgency or distance before calling if needed.
pub fn rank_urgent_requests_for_donor(
    donor_group: BloodGroup,
    requests: &[DonationRequest],
) -> Vec<DonationRequest> {
    let feed: Vec<DonationRequest> = requests
        .iter()
        .filter(|request| request.is_open() && donor_group.can_donate_to(request.blood_group))
        .cloned()
        .collect();

    tracing::debug!(
        donor_group = %donor_group,
        candidates = requests.len(),
        compatible = feed.len(),
        "built donor opportunity feed"
    );
    feed
}

/// Requests still needing a source of blood (pending or rejected), which
/// callers may route to external blood banks.
pub fn external_source_candidates(requests: &[DonationRequest]) -> Vec<DonationRequest> {
    requests
        .iter()
        .filter(|request| request.is_open())
        .cloned()
        .collect()
}

// ============================================================================
// Inventory search summary
// ============================================================================

/// Result of an exact-group inventory search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySearch {
    pub blood_group: BloodGroup,
    pub matches: Vec<AvailableEntry>,
    /// Distinct facilities among the matches
    pub total_facilities: usize,
    pub total_units: u64,
}

impl InventorySearch {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True if the matches together hold at least `units`.
    pub fn covers(&self, units: u64) -> bool {
        self.total_units >= units
    }
}

/// Run [`filter_compatible_inventory`] and summarise the result.
///
/// # Example
///
/// ```
/// use blood_match::engine::search_inventory;
/// use blood_match::types::{BloodGroup, InventoryEntry};
///
/// let entries = vec![
///     InventoryEntry::new(1, BloodGroup::APos, 15),
///     InventoryEntry::new(2, BloodGroup::APos, 8),
///     InventoryEntry::new(2, BloodGroup::ANeg, 2),
/// ];
/// let search = search_inventory(BloodGroup::APos, &entries);
///
/// assert_eq!(search.total_facilities, 2);
/// assert_eq!(search.total_units, 23);
/// ```
pub fn search_inventory(required_group: BloodGroup, entries: &[InventoryEntry]) -> InventorySearch {
    let matches = filter_compatible_inventory(required_group, entries);
    let total_facilities = matches
        .iter()
        .map(|m| m.entry.facility_id)
        .collect::<HashSet<_>>()
        .len();
    let total_units = matches
        .iter()
        .fold(0u64, |sum, m| sum.saturating_add(m.available_units));

    InventorySearch {
        blood_group: required_group,
        matches,
        total_facilities,
        total_units,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
