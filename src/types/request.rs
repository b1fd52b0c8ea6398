//! Donation requests and their status workflow.
//!
//! ## Status Machine
//!
//! ```text
//! pending ──> accepted ──> fulfilled
//!    │
//!    └──────> rejected
//! ```
//!
//! `rejected` and `fulfilled` are terminal. Open requests (`pending` and
//! `rejected`) are the ones still looking for a source of blood and are
//! the only ones shown in donor opportunity feeds and external-source
//! suggestions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;
use crate::types::BloodGroup;

// ============================================================================
// RequestStatus enum
// ============================================================================

/// Lifecycle state of a donation request.
///
/// `approved` is accepted as an alias of `accepted` when deserializing;
/// both spellings occur in stored requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    #[serde(alias = "approved")]
    Accepted,
    Rejected,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Fulfilled => "fulfilled",
        }
    }

    /// True if no further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Rejected | RequestStatus::Fulfilled)
    }

    /// True while the request still needs a source of blood.
    pub fn is_open(self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Rejected)
    }

    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Accepted)
                | (RequestStatus::Pending, RequestStatus::Rejected)
                | (RequestStatus::Accepted, RequestStatus::Fulfilled)
        )
    }

    /// Validate a transition, returning the new status.
    pub fn transition(self, next: RequestStatus) -> Result<RequestStatus, WorkflowError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(WorkflowError::InvalidTransition { from: self, to: next })
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Urgency enum
// ============================================================================

/// Clinical urgency attached to a request.
///
/// Variants are declared most urgent first, so the derived `Ord` sorts
/// critical requests ahead of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(alias = "critical", alias = "urgent")]
    Critical,
    #[serde(alias = "high")]
    High,
    #[default]
    #[serde(alias = "normal")]
    Normal,
}

// ============================================================================
// DonationRequest struct
// ============================================================================

/// A request for units of a specific blood group.
///
/// ## Example
///
/// ```
/// use blood_match::types::{BloodGroup, DonationRequest, RequestStatus};
///
/// let mut request = DonationRequest::new("UR001", BloodGroup::ONeg, 3);
/// assert_eq!(request.status, RequestStatus::Pending);
///
/// request.accept().unwrap();
/// request.fulfill().unwrap();
/// assert!(request.status.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub id: String,

    /// Group the recipient needs
    pub blood_group: BloodGroup,

    pub units_needed: u32,

    /// Missing in external urgent-requirement feeds, which are all pending
    #[serde(default)]
    pub status: RequestStatus,

    #[serde(default)]
    pub urgency: Urgency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
}

impl DonationRequest {
    /// Create a pending request with normal urgency.
    pub fn new(id: impl Into<String>, blood_group: BloodGroup, units_needed: u32) -> Self {
        Self {
            id: id.into(),
            blood_group,
            units_needed,
            status: RequestStatus::Pending,
            urgency: Urgency::Normal,
            hospital: None,
        }
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_hospital(mut self, hospital: impl Into<String>) -> Self {
        self.hospital = Some(hospital.into());
        self
    }

    /// Move the request to `next`, enforcing the status machine.
    pub fn set_status(&mut self, next: RequestStatus) -> Result<(), WorkflowError> {
        self.status = self.status.transition(next)?;
        tracing::info!(request_id = %self.id, status = %self.status, "request status changed");
        Ok(())
    }

    pub fn accept(&mut self) -> Result<(), WorkflowError> {
        self.set_status(RequestStatus::Accepted)
    }

    pub fn reject(&mut self) -> Result<(), WorkflowError> {
        self.set_status(RequestStatus::Rejected)
    }

    pub fn fulfill(&mut self) -> Result<(), WorkflowError> {
        self.set_status(RequestStatus::Fulfilled)
    }

    /// True while the request should appear in feeds and suggestions.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
