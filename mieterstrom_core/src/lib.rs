//! # mieterstrom_core - Mieterstrom Profitability Engine
//!
//! `mieterstrom_core` estimates the financial profitability of a rooftop solar
//! "Mieterstrom" (tenant electricity) installation for an apartment building.
//! All inputs and outputs are JSON-serializable, making the engine easy to
//! drive from any front end or test harness.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Structured Errors**: Validation issues are typed, not just strings
//! - **Validate, then calculate**: The calculator assumes inputs already
//!   passed validation; the sequencing seam is [`validation::RawProjectInputs`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mieterstrom_core::{calculate, ProjectInputs};
//!
//! let inputs = ProjectInputs {
//!     roof_size_m2: 200.0,
//!     apartments: 12,
//!     annual_demand_kwh: 48_000.0,
//!     address: None,
//! };
//!
//! let results = calculate(&inputs);
//! assert_eq!(results.system_size_kwp, 40.0);
//! assert_eq!(results.annual_profit_eur, 5566.0);
//! ```
//!
//! ## Modules
//!
//! - [`assumptions`] - The fixed assumption table behind every calculation
//! - [`calculations`] - The profitability calculation (inputs → results)
//! - [`errors`] - Structured validation issues
//! - [`validation`] - Raw form state and input validation
//! - [`format`] - Currency and number rendering for display

pub mod assumptions;
pub mod calculations;
pub mod errors;
pub mod format;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use assumptions::{assumptions, AssumptionSet};
pub use calculations::profitability::{
    calculate, calculate_with, PaybackPeriod, ProjectInputs, ProjectResults,
};
pub use errors::ValidationIssue;
pub use validation::RawProjectInputs;
