use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use super::format::{format_fraction, format_volume};
use crate::config::InputRanges;
use crate::models::{ReserveType, ReservoirInputs, ReservoirResult};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Format the reservoir inputs as a table.
pub fn format_inputs_table(inputs: &ReservoirInputs) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Reservoir Inputs".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Parameter", "Value", "Unit"]);
    table.add_row(vec![
        Cell::new("Reserve Type"),
        Cell::new(inputs.reserve_type().to_string()),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Area"),
        Cell::new(format!("{:.1}", inputs.area)),
        Cell::new("acres"),
    ]);
    table.add_row(vec![
        Cell::new("Net Thickness"),
        Cell::new(format!("{:.1}", inputs.thickness)),
        Cell::new("feet"),
    ]);
    table.add_row(vec![
        Cell::new("Porosity"),
        Cell::new(format!("{:.2}", inputs.porosity)),
        Cell::new("fraction"),
    ]);
    table.add_row(vec![
        Cell::new("Water Saturation"),
        Cell::new(format!("{:.2}", inputs.water_saturation)),
        Cell::new("fraction"),
    ]);
    table.add_row(vec![
        Cell::new("Formation Volume Factor"),
        Cell::new(format!("{}", inputs.formation_volume_factor())),
        Cell::new(inputs.reserve_type().factor_label()),
    ]);
    if inputs.has_recovery_factor() {
        table.add_row(vec![
            Cell::new("Recovery Factor"),
            Cell::new(format!("{:.2}", inputs.recovery_factor)),
            Cell::new("fraction"),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the reservoir inputs table.
pub fn print_inputs_table(inputs: &ReservoirInputs) {
    print!("{}", format_inputs_table(inputs));
}

/// Format the calculated volumes as a headline plus a table.
pub fn format_result_summary(result: &ReservoirResult) -> String {
    let rt = result.reserve_type;
    let unit = result.unit();

    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!(
            "{} ({}): {} {}",
            rt.in_place_name(),
            rt.in_place_label(),
            format_volume(result.in_place_volume),
            unit
        )
        .bold()
        .cyan()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Volume", "Value", "Unit"]);
    table.add_row(vec![
        Cell::new("Pore Volume (PV)"),
        Cell::new(format_volume(result.pore_volume)),
        Cell::new("cu ft"),
    ]);
    table.add_row(vec![
        Cell::new("Hydrocarbon Pore Volume (HCPV)"),
        Cell::new(format_volume(result.hydrocarbon_pore_volume)),
        Cell::new("cu ft"),
    ]);
    table.add_row(vec![
        Cell::new(rt.in_place_label()),
        Cell::new(format_volume(result.in_place_volume)),
        Cell::new(unit),
    ]);
    if let Some(recovery) = &result.recovery {
        table.add_row(vec![
            Cell::new("Recovery Factor"),
            Cell::new(format_fraction(recovery.recovery_factor)),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new(format!("Recoverable {} Reserves", rt)),
            Cell::new(format_volume(recovery.recoverable_volume)),
            Cell::new(unit),
        ]);
        table.add_row(vec![
            Cell::new(format!("Unrecoverable {} Reserves", rt)),
            Cell::new(format_volume(recovery.unrecoverable_volume)),
            Cell::new(unit),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output.push_str(&format!(
        "{}\n",
        "Note: PV and HCPV are in cubic feet. OIIP is in STB (oil) and GIIP is in SCF (gas)."
            .dimmed()
    ));
    output
}

/// Print the result summary.
pub fn print_result_summary(result: &ReservoirResult) {
    print!("{}", format_result_summary(result));
}

/// Format the input ranges table. With a reserve type, only the matching
/// formation volume factor row is shown.
pub fn format_ranges_table(ranges: &InputRanges, reserve_type: Option<ReserveType>) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Input Ranges".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Input", "Min", "Max", "Default", "Step"]);
    for (name, range) in ranges.named() {
        if matches!(
            (name, reserve_type),
            ("bo", Some(ReserveType::Gas)) | ("bg", Some(ReserveType::Oil))
        ) {
            continue;
        }
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{}", range.min)),
            Cell::new(format!("{}", range.max)),
            Cell::new(format!("{}", range.default)),
            Cell::new(format!("{}", range.step)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the input ranges table.
pub fn print_ranges_table(ranges: &InputRanges, reserve_type: Option<ReserveType>) {
    print!("{}", format_ranges_table(ranges, reserve_type));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::calculate;
    use crate::models::Reserve;

    fn oil_inputs(recovery_factor: f64) -> ReservoirInputs {
        ReservoirInputs {
            reserve: Reserve::Oil { bo: 1.2 },
            area: 500.0,
            thickness: 50.0,
            porosity: 0.20,
            water_saturation: 0.25,
            recovery_factor,
        }
    }

    #[test]
    fn test_format_inputs_table_contains_parameters() {
        let output = format_inputs_table(&oil_inputs(0.35));
        assert!(output.contains("Reservoir Inputs"));
        assert!(output.contains("Area"));
        assert!(output.contains("500.0"));
        assert!(output.contains("Bo (RB/STB)"));
        assert!(output.contains("Recovery Factor"));
    }

    #[test]
    fn test_format_inputs_table_hides_missing_recovery_factor() {
        let output = format_inputs_table(&oil_inputs(0.0));
        assert!(!output.contains("Recovery Factor"));
    }

    #[test]
    fn test_format_result_summary_with_recovery() {
        let result = calculate(&oil_inputs(0.35)).unwrap();
        let output = format_result_summary(&result);
        assert!(output.contains("Oil Initially In Place (OIIP)"));
        assert!(output.contains("242,437,500"));
        assert!(output.contains("217,800"));
        assert!(output.contains("163,350"));
        assert!(output.contains("Recoverable Oil Reserves"));
        assert!(output.contains("84,853,125"));
        assert!(output.contains("157,584,375"));
        assert!(output.contains("35.0%"));
    }

    #[test]
    fn test_format_result_summary_without_recovery() {
        let result = calculate(&oil_inputs(0.0)).unwrap();
        let output = format_result_summary(&result);
        assert!(output.contains("OIIP"));
        assert!(!output.contains("Recoverable"));
        assert!(output.contains("Note: PV and HCPV are in cubic feet"));
    }

    #[test]
    fn test_format_result_summary_gas_units() {
        let inputs = ReservoirInputs {
            reserve: Reserve::Gas { bg: 0.005 },
            area: 1000.0,
            thickness: 100.0,
            porosity: 0.25,
            water_saturation: 0.30,
            recovery_factor: 0.0,
        };
        let output = format_result_summary(&calculate(&inputs).unwrap());
        assert!(output.contains("Gas Initially In Place (GIIP)"));
        assert!(output.contains("152,460,000,000"));
        assert!(output.contains("SCF"));
    }

    #[test]
    fn test_format_ranges_table_all() {
        let output = format_ranges_table(&InputRanges::default(), None);
        assert!(output.contains("Input Ranges"));
        assert!(output.contains("area"));
        assert!(output.contains("10000"));
        assert!(output.contains("bo"));
        assert!(output.contains("bg"));
    }

    #[test]
    fn test_format_ranges_table_filters_factor() {
        let output = format_ranges_table(&InputRanges::default(), Some(ReserveType::Oil));
        assert!(output.contains("bo"));
        assert!(!output.contains("0.0001"));
    }
}
