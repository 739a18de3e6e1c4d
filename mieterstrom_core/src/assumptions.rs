//! # Assumption Table
//!
//! The fixed economic and technical assumptions behind every profitability
//! calculation. These are process-wide constants, never mutated at runtime;
//! tests may inject a modified copy via
//! [`calculate_with`](crate::calculations::profitability::calculate_with).
//!
//! ## Assumption Summary
//!
//! | Assumption            | Value | Unit                 |
//! |-----------------------|-------|----------------------|
//! | System cost           | 1000  | €/kWp                |
//! | Solar yield           | 950   | kWh/kWp/year         |
//! | Tenant price          | 0.30  | €/kWh                |
//! | Feed-in tariff        | 0.08  | €/kWh                |
//! | Internal consumption  | 0.35  | fraction             |
//! | Grid feed-in          | 0.65  | fraction             |
//! | Annual O&M            | 0.01  | fraction of invest   |
//! | Roof efficiency       | 5     | m²/kWp               |
//!
//! The internal-consumption and grid-feed-in rates partition the annual
//! production exactly (they sum to 1): every produced kWh is either sold to
//! tenants or fed into the grid. No storage, no curtailment.

use serde::{Deserialize, Serialize};

use crate::format::format_currency;

/// The fixed set of assumptions driving the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionSet {
    /// Turnkey system cost in €/kWp
    pub system_cost_per_kwp: f64,

    /// Annual solar yield in kWh per kWp installed
    pub solar_yield_kwh_per_kwp: f64,

    /// Price tenants pay for on-site electricity, €/kWh
    pub tenant_price_per_kwh: f64,

    /// Feed-in tariff for electricity exported to the grid, €/kWh
    pub feed_in_tariff_per_kwh: f64,

    /// Share of production consumed by tenants (0..=1)
    pub internal_consumption_rate: f64,

    /// Share of production fed into the grid (0..=1)
    pub grid_feed_in_rate: f64,

    /// Annual operation & maintenance cost as a fraction of the investment
    pub annual_om_rate: f64,

    /// Roof area needed per kWp of installed capacity, m²/kWp
    pub roof_m2_per_kwp: f64,
}

impl AssumptionSet {
    /// The standard assumption table (see module docs).
    pub const DEFAULT: AssumptionSet = AssumptionSet {
        system_cost_per_kwp: 1000.0,
        solar_yield_kwh_per_kwp: 950.0,
        tenant_price_per_kwh: 0.30,
        feed_in_tariff_per_kwh: 0.08,
        internal_consumption_rate: 0.35,
        grid_feed_in_rate: 0.65,
        annual_om_rate: 0.01,
        roof_m2_per_kwp: 5.0,
    };

    /// Check the production-partition invariant: internal consumption and
    /// grid feed-in together account for all production.
    pub fn partitions_production(&self) -> bool {
        self.internal_consumption_rate + self.grid_feed_in_rate == 1.0
    }

    /// The assumptions as ordered `(label, value-with-unit)` pairs for
    /// display, in the fixed order of the module-level table.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "System cost",
                format!("{}/kWp", format_currency(self.system_cost_per_kwp)),
            ),
            (
                "Solar yield",
                format!("{} kWh/kWp/year", self.solar_yield_kwh_per_kwp),
            ),
            (
                "Tenant electricity price",
                format!("{:.2} €/kWh", self.tenant_price_per_kwh),
            ),
            (
                "Grid feed-in tariff",
                format!("{:.2} €/kWh", self.feed_in_tariff_per_kwh),
            ),
            (
                "Internal consumption",
                format!("{}%", (self.internal_consumption_rate * 100.0).round()),
            ),
            (
                "Grid feed-in",
                format!("{}%", (self.grid_feed_in_rate * 100.0).round()),
            ),
            (
                "Annual O&M cost",
                format!("{}% of investment", (self.annual_om_rate * 100.0).round()),
            ),
            (
                "Roof efficiency",
                format!("{} m²/kWp", self.roof_m2_per_kwp),
            ),
        ]
    }
}

impl Default for AssumptionSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The default assumption table as display rows.
pub fn assumptions() -> Vec<(&'static str, String)> {
    AssumptionSet::DEFAULT.display_rows()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_partitions_production() {
        assert!(AssumptionSet::DEFAULT.partitions_production());
    }

    #[test]
    fn test_display_row_order() {
        let rows = assumptions();
        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "System cost",
                "Solar yield",
                "Tenant electricity price",
                "Grid feed-in tariff",
                "Internal consumption",
                "Grid feed-in",
                "Annual O&M cost",
                "Roof efficiency",
            ],
        );
    }

    #[test]
    fn test_display_row_values() {
        let rows = assumptions();
        assert_eq!(rows[0].1, "1.000 €/kWp");
        assert_eq!(rows[1].1, "950 kWh/kWp/year");
        assert_eq!(rows[2].1, "0.30 €/kWh");
        assert_eq!(rows[3].1, "0.08 €/kWh");
        assert_eq!(rows[4].1, "35%");
        assert_eq!(rows[5].1, "65%");
        assert_eq!(rows[6].1, "1% of investment");
        assert_eq!(rows[7].1, "5 m²/kWp");
    }

    #[test]
    fn test_serialization() {
        let set = AssumptionSet::DEFAULT;
        let json = serde_json::to_string(&set).unwrap();
        let roundtrip: AssumptionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, roundtrip);
    }
}
