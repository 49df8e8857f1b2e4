use std::path::Path;

use crate::error::ReservoirError;
use crate::models::ReservoirInputs;

/// Read reservoir inputs from a TOML scenario file.
///
/// ```toml
/// area = 500.0
/// thickness = 50.0
/// porosity = 0.20
/// water_saturation = 0.25
/// recovery_factor = 0.35
///
/// [reserve]
/// type = "oil"
/// bo = 1.2
/// ```
pub fn read_toml(path: impl AsRef<Path>) -> Result<ReservoirInputs, ReservoirError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    read_toml_str(&content)
}

/// Read reservoir inputs from a TOML string.
pub fn read_toml_str(content: &str) -> Result<ReservoirInputs, ReservoirError> {
    let inputs: ReservoirInputs = toml::from_str(content)?;
    inputs.validate()?;
    Ok(inputs)
}
