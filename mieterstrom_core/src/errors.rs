//! # Validation Issues
//!
//! Structured validation issues for project inputs. Each variant corresponds
//! to exactly one input rule, and its `Display` text is the human-readable
//! message shown verbatim by the presentation layer.
//!
//! Malformed input is never an `Err` or a panic anywhere in this crate: the
//! validator reports problems as a list of these values so a front end can
//! display all of them at once.
//!
//! ## Example
//!
//! ```rust
//! use mieterstrom_core::errors::ValidationIssue;
//!
//! assert_eq!(
//!     ValidationIssue::RoofSize.to_string(),
//!     "Roof size must be greater than 0 m²",
//! );
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated input rule.
///
/// The variant order matches the order in which the validator reports issues:
/// roof size, then apartments, then annual demand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// Roof size is missing, non-numeric, zero, or negative
    #[error("Roof size must be greater than 0 m²")]
    RoofSize,

    /// Apartment count is missing, non-numeric, zero, or negative
    #[error("Number of apartments must be greater than 0")]
    Apartments,

    /// Annual demand is missing, non-numeric, zero, or negative
    #[error("Annual electricity demand must be greater than 0 kWh")]
    AnnualDemand,
}

/// Render a list of issues as display-ready message strings.
pub fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(|issue| issue.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wording() {
        assert_eq!(
            messages(&[
                ValidationIssue::RoofSize,
                ValidationIssue::Apartments,
                ValidationIssue::AnnualDemand,
            ]),
            vec![
                "Roof size must be greater than 0 m²",
                "Number of apartments must be greater than 0",
                "Annual electricity demand must be greater than 0 kWh",
            ],
        );
    }

    #[test]
    fn test_issue_serialization() {
        let issue = ValidationIssue::Apartments;
        let json = serde_json::to_string(&issue).unwrap();
        let roundtrip: ValidationIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(issue, roundtrip);
    }
}
