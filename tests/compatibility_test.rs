//! Integration tests for the compatibility relation and matching filters.
//!
//! ```bash
//! cargo test --test compatibility_test
//! ```

use blood_match::{
    can_donate, filter_compatible_inventory, rank_urgent_requests_for_donor, BloodGroup,
    DonationRequest, InventoryEntry, MatchError, RequestStatus,
};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

const GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Expected recipients per donor, written out independently of the
/// library's table.
const EXPECTED: [(&str, &[&str]); 8] = [
    ("O-", &["O-", "O+", "A-", "A+", "B-", "B+", "AB-", "AB+"]),
    ("O+", &["O+", "A+", "B+", "AB+"]),
    ("A-", &["A-", "A+", "AB-", "AB+"]),
    ("A+", &["A+", "AB+"]),
    ("B-", &["B-", "B+", "AB-", "AB+"]),
    ("B+", &["B+", "AB+"]),
    ("AB-", &["AB-", "AB+"]),
    ("AB+", &["AB+"]),
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn group(text: &str) -> BloodGroup {
    BloodGroup::parse(text).expect("test group must be valid")
}

fn pending(id: &str, text: &str) -> DonationRequest {
    DonationRequest::new(id, group(text), 1)
}

// ============================================================================
// canDonate
// ============================================================================

#[test]
fn full_table_matches_all_64_pairs() {
    let mut checked = 0;
    for (donor, recipients) in EXPECTED {
        for recipient in GROUPS {
            let expected = recipients.contains(&recipient);
            assert_eq!(
                can_donate(donor, recipient),
                Ok(expected),
                "{donor} -> {recipient}"
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 64);
}

#[test]
fn universal_donor_gives_to_everyone() {
    for recipient in GROUPS {
        assert_eq!(can_donate("O-", recipient), Ok(true));
    }
}

#[test]
fn universal_recipient_takes_from_everyone() {
    for donor in GROUPS {
        assert_eq!(can_donate(donor, "AB+"), Ok(true));
    }
}

#[test]
fn every_group_can_donate_to_itself() {
    for g in GROUPS {
        assert_eq!(can_donate(g, g), Ok(true));
    }
}

#[test]
fn invalid_group_is_an_error_not_false() {
    assert_eq!(
        can_donate("X+", "O+"),
        Err(MatchError::InvalidBloodGroup("X+".to_string()))
    );
    assert_eq!(
        can_donate("O+", "Z"),
        Err(MatchError::InvalidBloodGroup("Z".to_string()))
    );
}

#[test]
fn typed_and_text_checks_agree() {
    for donor in BloodGroup::ALL {
        for recipient in BloodGroup::ALL {
            assert_eq!(
                can_donate(donor.as_str(), recipient.as_str()),
                Ok(donor.can_donate_to(recipient))
            );
        }
    }
}

// ============================================================================
// filterCompatibleInventory
// ============================================================================

#[test]
fn inventory_filter_keeps_exact_positive_entries() {
    let entries = vec![
        InventoryEntry::new(1, group("B+"), 5),
        InventoryEntry::new(2, group("B-"), 3),
        InventoryEntry::new(3, group("B+"), 0),
    ];

    let matches = filter_compatible_inventory(group("B+"), &entries);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry, entries[0]);
    assert_eq!(matches[0].available_units, 5);
}

#[test]
fn inventory_filter_ignores_compatible_groups() {
    // O- can supply B+ recipients, but an inventory search for B+ only
    // reports B+ stock.
    let entries = vec![InventoryEntry::new(1, group("O-"), 40)];
    assert!(filter_compatible_inventory(group("B+"), &entries).is_empty());
}

// ============================================================================
// rankUrgentRequestsForDonor
// ============================================================================

#[test]
fn universal_donor_feed_contains_every_request() {
    let requests = vec![pending("1", "A+"), pending("2", "AB-"), pending("3", "O-")];
    let feed = rank_urgent_requests_for_donor(group("O-"), &requests);
    assert_eq!(feed, requests);
}

#[test]
fn ab_positive_donor_only_serves_ab_positive() {
    let requests = vec![pending("1", "A+"), pending("2", "AB-"), pending("3", "O-")];
    assert!(rank_urgent_requests_for_donor(group("AB+"), &requests).is_empty());

    let mut with_ab = requests.clone();
    with_ab.push(pending("4", "AB+"));
    let feed = rank_urgent_requests_for_donor(group("AB+"), &with_ab);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, "4");
}

#[test]
fn feed_keeps_caller_order() {
    let requests = vec![pending("c", "AB+"), pending("a", "A+"), pending("b", "AB-")];
    let ids: Vec<_> = rank_urgent_requests_for_donor(group("A-"), &requests)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn feed_drops_accepted_and_fulfilled() {
    let mut accepted = pending("a", "O+");
    accepted.accept().unwrap();
    let mut fulfilled = pending("f", "O+");
    fulfilled.accept().unwrap();
    fulfilled.fulfill().unwrap();
    let mut rejected = pending("r", "O+");
    rejected.reject().unwrap();

    let requests = vec![accepted, fulfilled, rejected, pending("p", "O+")];
    let feed = rank_urgent_requests_for_donor(group("O+"), &requests);

    let statuses: Vec<_> = feed.iter().map(|r| r.status).collect();
    assert_eq!(statuses, vec![RequestStatus::Rejected, RequestStatus::Pending]);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn repeated_calls_give_identical_results() {
    let entries = vec![
        InventoryEntry::new(1, group("A+"), 15),
        InventoryEntry::new(2, group("A+"), 0),
        InventoryEntry::new(3, group("O-"), 4),
    ];
    let requests = vec![pending("1", "A+"), pending("2", "B-")];

    assert_eq!(can_donate("B-", "AB-"), can_donate("B-", "AB-"));
    assert_eq!(
        filter_compatible_inventory(group("A+"), &entries),
        filter_compatible_inventory(group("A+"), &entries)
    );
    assert_eq!(
        rank_urgent_requests_for_donor(group("O+"), &requests),
        rank_urgent_requests_for_donor(group("O+"), &requests)
    );
}

#[test]
fn matching_from_many_threads() {
    let requests: Vec<_> = GROUPS
        .iter()
        .enumerate()
        .map(|(i, g)| pending(&i.to_string(), g))
        .collect();
    let expected = rank_urgent_requests_for_donor(group("B-"), &requests);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| rank_urgent_requests_for_donor(group("B-"), &requests)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
