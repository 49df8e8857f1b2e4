//! Gas scenario example: read a TOML scenario, compute GIIP, and export a JSON report.
//!
//! Run from the project root:
//!   cargo run --example gas_scenario

use reservoir_volumetrics::analysis::ReservoirCalculator;
use reservoir_volumetrics::config::InputRanges;
use reservoir_volumetrics::io::{read_toml_str, write_report_json};
use reservoir_volumetrics::visualization::print_result_summary;

const SCENARIO: &str = r#"
area = 1000.0
thickness = 100.0
porosity = 0.25
water_saturation = 0.30

[reserve]
type = "gas"
bg = 0.005
"#;

fn main() {
    let inputs = read_toml_str(SCENARIO).expect("Failed to parse scenario");

    let warnings = InputRanges::default().out_of_range(&inputs);
    for w in &warnings {
        eprintln!("Warning: {w}");
    }

    let report = ReservoirCalculator::new(&inputs)
        .report()
        .expect("Inputs should be valid");
    print_result_summary(&report.result);

    let output = std::env::temp_dir().join("gas_scenario_report.json");
    match write_report_json(&report, &output, true) {
        Ok(()) => println!("Report written to {}", output.display()),
        Err(e) => eprintln!("Could not write report: {e}"),
    }
}
