mod json_io;
mod toml_io;

use std::path::Path;

use crate::error::ReservoirError;
use crate::models::ReservoirInputs;

pub use json_io::{read_json, read_json_str, write_report_json};
pub use toml_io::{read_toml, read_toml_str};

/// Trait for reading a reservoir scenario from a file.
pub trait ScenarioReader {
    fn read(&self, path: &Path) -> Result<ReservoirInputs, ReservoirError>;
}

/// TOML scenario reader.
pub struct TomlFormat;

impl ScenarioReader for TomlFormat {
    fn read(&self, path: &Path) -> Result<ReservoirInputs, ReservoirError> {
        read_toml(path)
    }
}

/// JSON scenario reader.
pub struct JsonFormat;

impl ScenarioReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<ReservoirInputs, ReservoirError> {
        read_json(path)
    }
}

/// Pick a reader from the file extension.
pub fn reader_for(path: &Path) -> Result<Box<dyn ScenarioReader>, ReservoirError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "toml" => Ok(Box::new(TomlFormat)),
        "json" => Ok(Box::new(JsonFormat)),
        _ => Err(ReservoirError::ParseError(format!(
            "Unsupported scenario format: .{ext}. Use .toml or .json"
        ))),
    }
}

/// Read a scenario, choosing TOML or JSON by extension.
pub fn read_scenario(path: impl AsRef<Path>) -> Result<ReservoirInputs, ReservoirError> {
    let path = path.as_ref();
    reader_for(path)?.read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reserve;

    const OIL_TOML: &str = r#"
area = 500.0
thickness = 50.0
porosity = 0.2
water_saturation = 0.25
recovery_factor = 0.35

[reserve]
type = "oil"
bo = 1.2
"#;

    #[test]
    fn test_toml_trait_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oil.toml");
        std::fs::write(&path, OIL_TOML).unwrap();

        let reader: &dyn ScenarioReader = &TomlFormat;
        let inputs = reader.read(&path).unwrap();
        assert_eq!(inputs.reserve, Reserve::Oil { bo: 1.2 });
    }

    #[test]
    fn test_read_scenario_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("oil.TOML");
        std::fs::write(&toml_path, OIL_TOML).unwrap();
        let from_toml = read_scenario(&toml_path).unwrap();

        let json_path = dir.path().join("oil.json");
        std::fs::write(&json_path, serde_json::to_string(&from_toml).unwrap()).unwrap();
        let from_json = read_scenario(&json_path).unwrap();

        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_read_scenario_unsupported_extension() {
        let err = read_scenario("scenario.yaml").unwrap_err();
        assert!(matches!(err, ReservoirError::ParseError(_)));
        assert!(err.to_string().contains(".yaml"));
    }
}
