//! Blood group compatibility relation.
//!
//! The relation is a fixed, total function `BloodGroup × BloodGroup → bool`
//! derived from transfusion rules:
//!
//! - **O-** donates to every group (universal donor)
//! - **AB+** receives from every group (universal recipient)
//! - Every group donates to itself
//!
//! It is stored as a constant lookup table and never changes at runtime.
//!
//! ## Example
//!
//! ```
//! use blood_match::compat::{donors_for, CompatibilityChart};
//! use blood_match::types::BloodGroup;
//!
//! assert!(BloodGroup::OPos.can_donate_to(BloodGroup::APos));
//! assert_eq!(donors_for(BloodGroup::ONeg), vec![BloodGroup::ONeg]);
//!
//! let chart = CompatibilityChart::build();
//! assert_eq!(chart.row(BloodGroup::ABPos).can_receive_from.len(), 8);
//! ```

pub mod chart;
pub mod table;

pub use chart::{ChartRow, CompatibilityChart};
pub use table::{donors_for, recipients_for};
