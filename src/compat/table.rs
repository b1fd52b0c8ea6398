//! The fixed donor → recipient compatibility table.
//!
//! Each donor group owns an 8-bit mask; bit `n` is set when the donor may
//! supply the recipient whose code is `n` (see [`BloodGroup::to_u8`]).
//!
//! ```text
//! donor   recipients
//! O-      O- O+ A- A+ B- B+ AB- AB+
//! O+      O+ A+ B+ AB+
//! A-      A- A+ AB- AB+
//! A+      A+ AB+
//! B-      B- B+ AB- AB+
//! B+      B+ AB+
//! AB-     AB- AB+
//! AB+     AB+
//! ```

use crate::types::{BloodGroup, GROUP_COUNT};

const fn bit(group: BloodGroup) -> u8 {
    1 << group as u8
}

/// Recipient masks indexed by donor code.
const DONATES_TO: [u8; GROUP_COUNT] = [
    // A+
    bit(BloodGroup::APos) | bit(BloodGroup::ABPos),
    // A-
    bit(BloodGroup::ANeg) | bit(BloodGroup::APos) | bit(BloodGroup::ABNeg) | bit(BloodGroup::ABPos),
    // B+
    bit(BloodGroup::BPos) | bit(BloodGroup::ABPos),
    // B-
    bit(BloodGroup::BNeg) | bit(BloodGroup::BPos) | bit(BloodGroup::ABNeg) | bit(BloodGroup::ABPos),
    // AB+
    bit(BloodGroup::ABPos),
    // AB-
    bit(BloodGroup::ABNeg) | bit(BloodGroup::ABPos),
    // O+
    bit(BloodGroup::OPos) | bit(BloodGroup::APos) | bit(BloodGroup::BPos) | bit(BloodGroup::ABPos),
    // O-
    u8::MAX,
];

impl BloodGroup {
    /// True iff a donor of `self` may give blood to a recipient of
    /// `recipient`.
    ///
    /// # Example
    ///
    /// ```
    /// use blood_match::types::BloodGroup;
    ///
    /// assert!(BloodGroup::ONeg.can_donate_to(BloodGroup::ABPos));
    /// assert!(!BloodGroup::ABPos.can_donate_to(BloodGroup::ONeg));
    /// ```
    #[inline]
    pub fn can_donate_to(self, recipient: BloodGroup) -> bool {
        DONATES_TO[self.index()] & bit(recipient) != 0
    }

    /// True iff a recipient of `self` may receive blood from `donor`.
    #[inline]
    pub fn can_receive_from(self, donor: BloodGroup) -> bool {
        donor.can_donate_to(self)
    }
}

/// Every group `donor` can supply, in canonical order (canDonateTo).
pub fn recipients_for(donor: BloodGroup) -> Vec<BloodGroup> {
    BloodGroup::ALL
        .into_iter()
        .filter(|recipient| donor.can_donate_to(*recipient))
        .collect()
}

/// Every group that can supply `recipient`, in canonical order
/// (canReceiveFrom).
pub fn donors_for(recipient: BloodGroup) -> Vec<BloodGroup> {
    BloodGroup::ALL
        .into_iter()
        .filter(|donor| donor.can_donate_to(recipient))
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
