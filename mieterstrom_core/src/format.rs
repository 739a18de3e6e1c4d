//! # Display Formatting
//!
//! Rendering helpers for the presentation layer. Currency and energy figures
//! use German (de-DE) conventions: thousands grouped with `.`, the euro sign
//! trailing, no cents.
//!
//! ## Example
//!
//! ```rust
//! use mieterstrom_core::format::{format_currency, format_number};
//!
//! assert_eq!(format_currency(40000.0), "40.000 €");
//! assert_eq!(format_number(38000.0), "38.000");
//! ```

/// Round to a fixed number of decimal places, half away from zero.
///
/// All calculation outputs are rounded exactly once, at the boundary;
/// intermediate arithmetic stays at full precision.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Render an amount as a euro string with no fractional digits,
/// e.g. `40.000 €`.
pub fn format_currency(amount: f64) -> String {
    format!("{} €", group_thousands(amount.round() as i64))
}

/// Render a number with thousands separators, e.g. `38.000`.
///
/// Used for production/demand figures; fractional parts are rounded away.
pub fn format_number(value: f64) -> String {
    group_thousands(value.round() as i64)
}

/// Group an integer's digits in threes with `.` separators.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    for (i, ch) in digits.chars().enumerate() {
        if i >= first_group && (i - first_group) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(13.915, 2), 13.92);
        assert_eq!(round_dp(7.186489, 1), 7.2);
        assert_eq!(round_dp(40.0, 2), 40.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0 €");
        assert_eq!(format_currency(400.0), "400 €");
        assert_eq!(format_currency(1000.0), "1.000 €");
        assert_eq!(format_currency(40000.0), "40.000 €");
        assert_eq!(format_currency(5966.4), "5.966 €");
        assert_eq!(format_currency(-1234.0), "-1.234 €");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(38000.0), "38.000");
        assert_eq!(format_number(1234567.0), "1.234.567");
    }
}
