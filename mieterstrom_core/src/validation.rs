//! # Input Validation
//!
//! Raw form state and the validation rules that gate the calculator.
//!
//! [`RawProjectInputs`] holds the three numeric fields as `Option<f64>` so a
//! front end can carry "no entry yet" or "did not parse" without inventing a
//! magic number. [`RawProjectInputs::validate`] checks every rule
//! independently and reports all violations at once, so a form can highlight
//! every bad field in a single pass.
//!
//! ## Example
//!
//! ```rust
//! use mieterstrom_core::validation::RawProjectInputs;
//! use mieterstrom_core::errors::ValidationIssue;
//!
//! let raw = RawProjectInputs {
//!     roof_size_m2: Some(0.0),
//!     apartments: Some(5.0),
//!     annual_demand_kwh: Some(1000.0),
//!     address: None,
//! };
//!
//! assert_eq!(raw.validate(), vec![ValidationIssue::RoofSize]);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::profitability::ProjectInputs;
use crate::errors::ValidationIssue;

/// Not-yet-validated project inputs, as collected from a form.
///
/// `None` models a missing or unparseable entry; a parsed-but-bad value
/// (zero, negative, NaN) is carried as `Some` and rejected by `validate`.
/// Either way the field produces the same validation issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProjectInputs {
    /// Usable roof area in m²
    pub roof_size_m2: Option<f64>,

    /// Number of apartments in the building
    pub apartments: Option<f64>,

    /// Annual electricity demand in kWh/year
    pub annual_demand_kwh: Option<f64>,

    /// Optional free-text building label, never validated
    pub address: Option<String>,
}

impl RawProjectInputs {
    /// Check all input rules and report every violation.
    ///
    /// The rules are evaluated independently (no short-circuit) and reported
    /// in the fixed order roof size, apartments, annual demand. An empty
    /// list means the inputs may be handed to the calculator. Never panics.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if !is_positive(self.roof_size_m2) {
            issues.push(ValidationIssue::RoofSize);
        }
        if !is_positive(self.apartments) {
            issues.push(ValidationIssue::Apartments);
        }
        if !is_positive(self.annual_demand_kwh) {
            issues.push(ValidationIssue::AnnualDemand);
        }
        issues
    }

    /// Validate and, if clean, produce inputs for the calculator.
    ///
    /// This is the only intended way to obtain a [`ProjectInputs`] from
    /// user-supplied values; it enforces the validate-before-calculate
    /// sequencing at the type level.
    pub fn try_into_inputs(&self) -> Result<ProjectInputs, Vec<ValidationIssue>> {
        let issues = self.validate();
        match (self.roof_size_m2, self.apartments, self.annual_demand_kwh) {
            (Some(roof), Some(apartments), Some(demand)) if issues.is_empty() => {
                Ok(ProjectInputs {
                    roof_size_m2: roof,
                    apartments: apartments as u32,
                    annual_demand_kwh: demand,
                    address: self.address.clone(),
                })
            }
            _ => Err(issues),
        }
    }
}

/// A value counts as positive only if it parsed to a finite number above zero.
fn is_positive(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v.is_finite() && v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawProjectInputs {
        RawProjectInputs {
            roof_size_m2: Some(200.0),
            apartments: Some(12.0),
            annual_demand_kwh: Some(48_000.0),
            address: None,
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(valid_raw().validate().is_empty());
    }

    #[test]
    fn test_zero_roof_size_is_the_only_issue() {
        let raw = RawProjectInputs {
            roof_size_m2: Some(0.0),
            apartments: Some(5.0),
            annual_demand_kwh: Some(1000.0),
            address: None,
        };
        assert_eq!(raw.validate(), vec![ValidationIssue::RoofSize]);
    }

    #[test]
    fn test_all_zero_reports_all_issues_in_order() {
        let raw = RawProjectInputs {
            roof_size_m2: Some(0.0),
            apartments: Some(0.0),
            annual_demand_kwh: Some(0.0),
            address: None,
        };
        assert_eq!(
            raw.validate(),
            vec![
                ValidationIssue::RoofSize,
                ValidationIssue::Apartments,
                ValidationIssue::AnnualDemand,
            ],
        );
    }

    #[test]
    fn test_missing_and_negative_and_nan_all_rejected() {
        let raw = RawProjectInputs {
            roof_size_m2: None,
            apartments: Some(-3.0),
            annual_demand_kwh: Some(f64::NAN),
            address: None,
        };
        assert_eq!(raw.validate().len(), 3);
    }

    #[test]
    fn test_address_is_never_validated() {
        let mut raw = valid_raw();
        raw.address = Some(String::new());
        assert!(raw.validate().is_empty());
    }

    #[test]
    fn test_try_into_inputs_on_valid() {
        let mut raw = valid_raw();
        raw.address = Some("Musterstraße 1".to_string());
        let inputs = raw.try_into_inputs().unwrap();
        assert_eq!(inputs.roof_size_m2, 200.0);
        assert_eq!(inputs.apartments, 12);
        assert_eq!(inputs.annual_demand_kwh, 48_000.0);
        assert_eq!(inputs.address.as_deref(), Some("Musterstraße 1"));
    }

    #[test]
    fn test_try_into_inputs_on_invalid() {
        let raw = RawProjectInputs::default();
        let issues = raw.try_into_inputs().unwrap_err();
        assert_eq!(issues.len(), 3);
    }
}
