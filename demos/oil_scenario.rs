//! Oil scenario example: compute OIIP with a recovery factor and draw both charts.
//!
//! Run from the project root:
//!   cargo run --example oil_scenario

use reservoir_volumetrics::analysis::ReservoirCalculator;
use reservoir_volumetrics::models::{Reserve, ReservoirInputs};
use reservoir_volumetrics::visualization::{
    print_bar_chart, print_inputs_table, print_pie_chart, print_result_summary,
};

fn main() {
    let inputs = ReservoirInputs {
        reserve: Reserve::Oil { bo: 1.2 },
        area: 500.0,
        thickness: 50.0,
        porosity: 0.20,
        water_saturation: 0.25,
        recovery_factor: 0.35,
    };

    let calculator = ReservoirCalculator::new(&inputs);
    let result = calculator.result().expect("Inputs should be valid");

    print_inputs_table(&inputs);
    print_result_summary(&result);

    print_bar_chart(&calculator.bar_chart().expect("Inputs should be valid"));
    if let Some(pie) = calculator.pie_chart().expect("Inputs should be valid") {
        print_pie_chart(&pie);
    }
}
