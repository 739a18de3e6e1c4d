//! # Mieterstrom Profitability Calculation
//!
//! Derives the financial outlook of a rooftop solar tenant-electricity
//! installation from the building inputs and the fixed assumption table.
//!
//! ## Assumptions
//!
//! - System size is derived from roof area alone (5 m² per kWp); apartment
//!   count and annual demand are validated upstream but do not enter the
//!   formula
//! - Production is split 35% tenant sales / 65% grid feed-in, with no
//!   storage and no curtailment
//! - O&M costs are a flat 1% of the investment per year
//! - No financing, tax, or yield-degradation effects
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use mieterstrom_core::calculations::profitability::{calculate, ProjectInputs};
//!
//! let inputs = ProjectInputs {
//!     roof_size_m2: 200.0,
//!     apartments: 12,
//!     annual_demand_kwh: 48_000.0,
//!     address: Some("Musterstraße 1, Berlin".to_string()),
//! };
//!
//! let results = calculate(&inputs);
//!
//! println!("System size: {:.2} kWp", results.system_size_kwp);
//! println!("Annual profit: {:.0} €", results.annual_profit_eur);
//! println!("Payback: {}", results.payback);
//! println!("Viable: {}", results.is_viable());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assumptions::AssumptionSet;
use crate::format::round_dp;

/// Payback periods at or beyond this many years make a project non-viable.
pub const VIABLE_PAYBACK_LIMIT_YEARS: f64 = 25.0;

/// Validated input parameters for a profitability calculation.
///
/// Callers must only construct this from inputs that passed
/// [`validation`](crate::validation): the calculator assumes
/// `roof_size_m2 > 0` and does not re-check.
///
/// `apartments` and `annual_demand_kwh` are accepted (and validated upstream)
/// but never read by the formula; sizing is roof-area-only. This mirrors the
/// established estimation model and is covered by tests, so it is not a bug
/// to "fix" silently.
///
/// ## JSON Example
///
/// ```json
/// {
///   "roof_size_m2": 200.0,
///   "apartments": 12,
///   "annual_demand_kwh": 48000.0,
///   "address": "Musterstraße 1, Berlin"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Usable roof area in m²
    pub roof_size_m2: f64,

    /// Number of apartments in the building (display/validation only)
    pub apartments: u32,

    /// Annual electricity demand of the building in kWh/year
    /// (display/validation only)
    pub annual_demand_kwh: f64,

    /// Optional free-text label for the building (display only)
    pub address: Option<String>,
}

/// Payback period of the investment.
///
/// An explicit sum type rather than an f64 infinity sentinel: a project with
/// zero or negative annual profit never pays back, and that outcome is a
/// valid result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "years")]
pub enum PaybackPeriod {
    /// Pays back after this many years (rounded to 1 decimal place)
    Years(f64),

    /// Never pays back (annual profit is zero or negative)
    Never,
}

impl PaybackPeriod {
    /// The year count, if the project pays back at all.
    pub fn years(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Years(years) => Some(*years),
            PaybackPeriod::Never => None,
        }
    }

    /// Whether the project pays back in finite time.
    pub fn is_finite(&self) -> bool {
        matches!(self, PaybackPeriod::Years(_))
    }

    /// Whether the project pays back strictly before `limit_years`.
    pub fn within(&self, limit_years: f64) -> bool {
        matches!(self, PaybackPeriod::Years(years) if *years < limit_years)
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Years(years) => write!(f, "{:.1} years", years),
            PaybackPeriod::Never => write!(f, "never"),
        }
    }
}

/// Results of a profitability calculation.
///
/// All values are display-grade: rounded once, at the end of the calculation
/// (monetary and energy figures to whole units, system size and ROI to two
/// decimals, payback to one). Results are computed fresh on every call and
/// carry no state.
///
/// ## JSON Example
///
/// ```json
/// {
///   "system_size_kwp": 40.0,
///   "total_investment_eur": 40000.0,
///   "annual_production_kwh": 38000.0,
///   "internal_revenue_eur": 3990.0,
///   "feed_in_revenue_eur": 1976.0,
///   "total_annual_revenue_eur": 5966.0,
///   "annual_om_cost_eur": 400.0,
///   "annual_profit_eur": 5566.0,
///   "payback": { "kind": "Years", "years": 7.2 },
///   "roi_percent": 13.92
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResults {
    /// Installed system size (kWp)
    pub system_size_kwp: f64,

    /// Total investment cost (€)
    pub total_investment_eur: f64,

    /// Annual solar production (kWh/year)
    pub annual_production_kwh: f64,

    /// Revenue from electricity sold to tenants (€/year)
    pub internal_revenue_eur: f64,

    /// Revenue from grid feed-in (€/year)
    pub feed_in_revenue_eur: f64,

    /// Total annual revenue (€/year)
    pub total_annual_revenue_eur: f64,

    /// Annual operation & maintenance cost (€/year)
    pub annual_om_cost_eur: f64,

    /// Annual profit after O&M (€/year)
    pub annual_profit_eur: f64,

    /// Time until cumulative profit equals the investment
    pub payback: PaybackPeriod,

    /// Annual profit as a percentage of the investment
    pub roi_percent: f64,
}

impl ProjectResults {
    /// Check if the project is financially viable: positive ROI and payback
    /// strictly under [`VIABLE_PAYBACK_LIMIT_YEARS`].
    pub fn is_viable(&self) -> bool {
        self.roi_percent > 0.0 && self.payback.within(VIABLE_PAYBACK_LIMIT_YEARS)
    }
}

/// Calculate profitability with the standard assumption table.
pub fn calculate(inputs: &ProjectInputs) -> ProjectResults {
    calculate_with(inputs, &AssumptionSet::DEFAULT)
}

/// Calculate profitability with an injected assumption set.
///
/// Pure and total for `roof_size_m2 > 0`; intermediate arithmetic runs at
/// full precision and only the final figures are rounded.
pub fn calculate_with(inputs: &ProjectInputs, assumptions: &AssumptionSet) -> ProjectResults {
    // 1. System size (kWp) from roof area
    let system_size = inputs.roof_size_m2 / assumptions.roof_m2_per_kwp;

    // 2. Total investment cost
    let total_investment = system_size * assumptions.system_cost_per_kwp;

    // 3. Annual solar production
    let annual_production = system_size * assumptions.solar_yield_kwh_per_kwp;

    // 4. Production split and revenue
    let internal_consumption = annual_production * assumptions.internal_consumption_rate;
    let grid_feed_in = annual_production * assumptions.grid_feed_in_rate;

    let internal_revenue = internal_consumption * assumptions.tenant_price_per_kwh;
    let feed_in_revenue = grid_feed_in * assumptions.feed_in_tariff_per_kwh;
    let total_annual_revenue = internal_revenue + feed_in_revenue;

    // 5. Costs and profit
    let annual_om_cost = total_investment * assumptions.annual_om_rate;
    let annual_profit = total_annual_revenue - annual_om_cost;

    // 6. Financial metrics
    let payback = if annual_profit > 0.0 {
        PaybackPeriod::Years(round_dp(total_investment / annual_profit, 1))
    } else {
        PaybackPeriod::Never
    };
    let roi = if total_investment > 0.0 {
        (annual_profit / total_investment) * 100.0
    } else {
        0.0
    };

    ProjectResults {
        system_size_kwp: round_dp(system_size, 2),
        total_investment_eur: total_investment.round(),
        annual_production_kwh: annual_production.round(),
        internal_revenue_eur: internal_revenue.round(),
        feed_in_revenue_eur: feed_in_revenue.round(),
        total_annual_revenue_eur: total_annual_revenue.round(),
        annual_om_cost_eur: annual_om_cost.round(),
        annual_profit_eur: annual_profit.round(),
        payback,
        roi_percent: round_dp(roi, 2),
    }
}
