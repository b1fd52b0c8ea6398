//! Error types for the matching engine, request workflow and ledger.
//!
//! The matching engine raises exactly one kind of error,
//! [`MatchError::InvalidBloodGroup`]. An unknown blood group is a data-entry
//! bug and is always reported, never folded into "incompatible".

use thiserror::Error;

use crate::types::{BloodGroup, RequestStatus};

/// Errors raised by compatibility checks and matching filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The value is not one of the 8 canonical ABO/Rh groups.
    #[error("invalid blood group: {0:?} (expected one of A+, A-, B+, B-, AB+, AB-, O+, O-)")]
    InvalidBloodGroup(String),
}

/// Errors raised by the donation request status workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("request cannot move from {from} to {to}")]
    InvalidTransition { from: RequestStatus, to: RequestStatus },
}

/// Errors raised by the facility inventory ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unknown facility {0}")]
    UnknownFacility(u64),

    #[error("facility {0} is already registered")]
    DuplicateFacility(u64),

    #[error("facility {facility_id} has {available} units of {blood_group}, requested {requested}")]
    InsufficientStock {
        facility_id: u64,
        blood_group: BloodGroup,
        available: u64,
        requested: u64,
    },

    #[error("restocking {added} units of {blood_group} at facility {facility_id} overflows")]
    QuantityOverflow {
        facility_id: u64,
        blood_group: BloodGroup,
        added: u64,
    },

    /// SSZ encoding of a ledger record failed while computing a state root.
    #[error("failed to encode ledger record: {0}")]
    Encoding(String),
}

/// Errors raised when validating postal codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PincodeError {
    #[error("invalid pincode: {0:?} (expected 6 digits, not starting with 0)")]
    InvalidPincode(String),
}
