use std::path::Path;

use crate::error::ReservoirError;
use crate::models::{ReservoirInputs, ReservoirReport};

/// Read reservoir inputs from a JSON scenario file.
pub fn read_json(path: impl AsRef<Path>) -> Result<ReservoirInputs, ReservoirError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    read_json_str(&content)
}

/// Read reservoir inputs from a JSON string.
pub fn read_json_str(content: &str) -> Result<ReservoirInputs, ReservoirError> {
    let inputs: ReservoirInputs = serde_json::from_str(content)?;
    inputs.validate()?;
    Ok(inputs)
}

/// Write a calculation report to a JSON file.
pub fn write_report_json(
    report: &ReservoirReport,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ReservoirError> {
    let content = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}
