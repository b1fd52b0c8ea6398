//! The closed ABO/Rh blood group domain.
//!
//! ## Encoding
//!
//! Every group has a stable `u8` code used for deterministic encoding
//! (ledger records, compatibility bitmasks):
//!
//! | Group | Code |
//! |-------|------|
//! | A+    | 0    |
//! | A-    | 1    |
//! | B+    | 2    |
//! | B-    | 3    |
//! | AB+   | 4    |
//! | AB-   | 5    |
//! | O+    | 6    |
//! | O-    | 7    |
//!
//! ## Parsing
//!
//! Text is validated against the 8 canonical spellings. Surrounding
//! whitespace is ignored and the ABO letters may be lowercase; anything
//! else is rejected with [`MatchError::InvalidBloodGroup`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Number of blood groups in the domain.
pub const GROUP_COUNT: usize = 8;

/// One of the 8 canonical ABO/Rh blood groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BloodGroup {
    /// A+
    APos,
    /// A-
    ANeg,
    /// B+
    BPos,
    /// B-
    BNeg,
    /// AB+ (universal recipient)
    ABPos,
    /// AB-
    ABNeg,
    /// O+
    OPos,
    /// O- (universal donor)
    ONeg,
}

impl BloodGroup {
    /// All groups in canonical (code) order.
    pub const ALL: [BloodGroup; GROUP_COUNT] = [
        BloodGroup::APos,
        BloodGroup::ANeg,
        BloodGroup::BPos,
        BloodGroup::BNeg,
        BloodGroup::ABPos,
        BloodGroup::ABNeg,
        BloodGroup::OPos,
        BloodGroup::ONeg,
    ];

    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            BloodGroup::APos => 0,
            BloodGroup::ANeg => 1,
            BloodGroup::BPos => 2,
            BloodGroup::BNeg => 3,
            BloodGroup::ABPos => 4,
            BloodGroup::ABNeg => 5,
            BloodGroup::OPos => 6,
            BloodGroup::ONeg => 7,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Index into per-group arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.to_u8() as usize
    }

    /// Canonical text form, e.g. `"AB-"`.
    pub fn as_str(self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::ABPos => "AB+",
            BloodGroup::ABNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }

    /// Validate and parse a blood group string.
    ///
    /// # Example
    ///
    /// ```
    /// use blood_match::types::BloodGroup;
    ///
    /// assert_eq!(BloodGroup::parse("AB-"), Ok(BloodGroup::ABNeg));
    /// assert_eq!(BloodGroup::parse(" o+ "), Ok(BloodGroup::OPos));
    /// assert!(BloodGroup::parse("X+").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, MatchError> {
        let trimmed = text.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MatchError::InvalidBloodGroup(text.to_string()))
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BloodGroup {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BloodGroup> for String {
    fn from(group: BloodGroup) -> Self {
        group.as_str().to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_conversion() {
        for (code, group) in BloodGroup::ALL.iter().enumerate() {
            assert_eq!(group.to_u8() as usize, code);
            assert_eq!(BloodGroup::from_u8(code as u8), Some(*group));
        }
        assert_eq!(BloodGroup::from_u8(8), None);
    }

    #[test]
    fn test_parse_canonical() {
        for group in BloodGroup::ALL {
            assert_eq!(BloodGroup::parse(group.as_str()), Ok(group));
            assert_eq!(group.to_string().parse::<BloodGroup>(), Ok(group));
        }
    }

    #[test]
    fn test_parse_lenient_case_and_whitespace() {
        assert_eq!(BloodGroup::parse("ab+"), Ok(BloodGroup::ABPos));
        assert_eq!(BloodGroup::parse("\tB-\n"), Ok(BloodGroup::BNeg));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["X+", "", "A", "O", "AB", "A++", "0-", "BA+", "A +"] {
            assert_eq!(
                BloodGroup::parse(bad),
                Err(MatchError::InvalidBloodGroup(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let json = serde_json::to_string(&BloodGroup::ABNeg).unwrap();
        assert_eq!(json, "\"AB-\"");

        let parsed: BloodGroup = serde_json::from_str("\"o-\"").unwrap();
        assert_eq!(parsed, BloodGroup::ONeg);
    }

    #[test]
    fn test_serde_rejects_unknown_group() {
        let err = serde_json::from_str::<BloodGroup>("\"X+\"").unwrap_err();
        assert!(err.to_string().contains("invalid blood group"));
    }
}
