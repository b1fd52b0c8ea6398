//! Indian postal index numbers.
//!
//! Blood bank lookups are keyed by a 6-digit pincode whose first digit is
//! never zero. The lookup itself is an external service; this module only
//! validates the key.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PincodeError;

fn pincode_regex() -> &'static Regex {
    static PINCODE: OnceLock<Regex> = OnceLock::new();
    PINCODE.get_or_init(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode regex is valid"))
}

/// A validated 6-digit pincode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pincode(String);

impl Pincode {
    /// Validate a pincode string.
    ///
    /// # Example
    ///
    /// ```
    /// use blood_match::types::Pincode;
    ///
    /// assert!(Pincode::parse("110001").is_ok());
    /// assert!(Pincode::parse("011001").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PincodeError> {
        let trimmed = text.trim();
        if pincode_regex().is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(PincodeError::InvalidPincode(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First digit, the postal region (1-9).
    pub fn region(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pincode {
    type Error = PincodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pincode> for String {
    fn from(pincode: Pincode) -> Self {
        pincode.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pincodes() {
        for code in ["110001", "560034", "999999", " 400001 "] {
            assert!(Pincode::parse(code).is_ok(), "{code:?} should be valid");
        }
    }

    #[test]
    fn test_invalid_pincodes() {
        for code in ["", "011001", "11000", "1100011", "11000a", "११०००१", "110 01"] {
            assert_eq!(
                Pincode::parse(code),
                Err(PincodeError::InvalidPincode(code.to_string())),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_region() {
        assert_eq!(Pincode::parse("560034").unwrap().region(), 5);
    }

    #[test]
    fn test_trimmed_value_is_stored() {
        assert_eq!(Pincode::parse(" 400001").unwrap().as_str(), "400001");
    }
}
