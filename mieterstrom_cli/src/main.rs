//! # Mieterstrom CLI
//!
//! Terminal form-and-results front end for the profitability engine.
//! Prompts for the building inputs, validates them, and renders either the
//! full list of input problems or the results panel, the assumption table,
//! and a JSON dump of the results.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use mieterstrom_core::assumptions::assumptions;
use mieterstrom_core::format::{format_currency, format_number};
use mieterstrom_core::validation::RawProjectInputs;
use mieterstrom_core::{calculate, ProjectInputs, ProjectResults};

/// Read one numeric form field. Blank or unparseable entries become `None`
/// so the validator reports them instead of the prompt loop.
fn prompt_number(prompt: &str) -> Option<f64> {
    prompt_text(prompt)?.parse().ok()
}

/// Read one free-text form field; blank means "not provided".
fn prompt_text(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn print_results(inputs: &ProjectInputs, results: &ProjectResults) {
    println!("═══════════════════════════════════════════");
    println!("  MIETERSTROM PROFITABILITY");
    println!("═══════════════════════════════════════════");
    println!();
    println!("Building:");
    if let Some(address) = &inputs.address {
        println!("  Address:       {}", address);
    }
    println!("  Roof size:     {} m²", format_number(inputs.roof_size_m2));
    println!("  Apartments:    {}", inputs.apartments);
    println!(
        "  Annual demand: {} kWh",
        format_number(inputs.annual_demand_kwh)
    );
    println!();
    println!("System:");
    println!("  Size:          {:.2} kWp", results.system_size_kwp);
    println!(
        "  Investment:    {}",
        format_currency(results.total_investment_eur)
    );
    println!(
        "  Production:    {} kWh/year",
        format_number(results.annual_production_kwh)
    );
    println!();
    println!("Annual economics:");
    println!(
        "  Tenant sales:  {}",
        format_currency(results.internal_revenue_eur)
    );
    println!(
        "  Grid feed-in:  {}",
        format_currency(results.feed_in_revenue_eur)
    );
    println!(
        "  Revenue:       {}",
        format_currency(results.total_annual_revenue_eur)
    );
    println!(
        "  O&M cost:      {}",
        format_currency(results.annual_om_cost_eur)
    );
    println!(
        "  Profit:        {}",
        format_currency(results.annual_profit_eur)
    );
    println!();
    println!("  Payback:       {}", results.payback);
    println!("  ROI:           {:.2}%", results.roi_percent);
    println!();
    println!("═══════════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if results.is_viable() {
            "VIABLE"
        } else {
            "NOT VIABLE"
        }
    );
    println!("═══════════════════════════════════════════");

    println!();
    println!("Assumptions:");
    for (label, value) in assumptions() {
        println!("  {:<26} {}", label, value);
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(results) {
        println!("{}", json);
    }
}

fn main() -> ExitCode {
    println!("Mieterstrom - Tenant Electricity Profitability Calculator");
    println!("=========================================================");
    println!();

    let raw = RawProjectInputs {
        roof_size_m2: prompt_number("Roof size (m²): "),
        apartments: prompt_number("Number of apartments: "),
        annual_demand_kwh: prompt_number("Annual electricity demand (kWh/year): "),
        address: prompt_text("Address (optional): "),
    };

    match raw.try_into_inputs() {
        Ok(inputs) => {
            let results = calculate(&inputs);
            println!();
            print_results(&inputs, &results);
            ExitCode::SUCCESS
        }
        Err(issues) => {
            println!();
            eprintln!("Please fix the following inputs:");
            for issue in issues {
                eprintln!("  - {}", issue);
            }
            ExitCode::FAILURE
        }
    }
}
