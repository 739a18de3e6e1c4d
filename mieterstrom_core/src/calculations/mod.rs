//! # Calculations
//!
//! The calculation engine. One calculation type exists today:
//! [`profitability`], the Mieterstrom profitability estimate.

pub mod profitability;
