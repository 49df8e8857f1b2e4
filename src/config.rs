//! Input ranges, steps and defaults offered to the user.
//!
//! These ranges are presentation affordances. The engine only enforces the
//! domain rules in [`ReservoirInputs::validate`]; a value outside a range
//! here produces a [`RangeWarning`], not an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ReservoirError;
use crate::models::{Reserve, ReserveType, ReservoirInputs};

/// Range, default and increment for one input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, name: &str, errors: &mut Vec<String>) {
        let all_finite = [self.min, self.max, self.default, self.step]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            errors.push(format!("{name}: values must be finite"));
            return;
        }
        if self.min > self.max {
            errors.push(format!(
                "{name}: min ({}) must be <= max ({})",
                self.min, self.max
            ));
        }
        if !self.contains(self.default) {
            errors.push(format!(
                "{name}: default ({}) must lie within {}..={}",
                self.default, self.min, self.max
            ));
        }
        if self.step <= 0.0 {
            errors.push(format!("{name}: step must be > 0, got {}", self.step));
        }
    }
}

/// Ranges for every reservoir input. Tables missing from a TOML file keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputRanges {
    /// Acres
    pub area: SliderRange,
    /// Feet
    pub thickness: SliderRange,
    pub porosity: SliderRange,
    pub water_saturation: SliderRange,
    /// RB/STB
    pub bo: SliderRange,
    /// RCF/SCF
    pub bg: SliderRange,
    pub recovery_factor: SliderRange,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            area: SliderRange::new(10.0, 10_000.0, 500.0, 10.0),
            thickness: SliderRange::new(1.0, 500.0, 50.0, 1.0),
            porosity: SliderRange::new(0.05, 0.40, 0.20, 0.01),
            water_saturation: SliderRange::new(0.0, 1.0, 0.25, 0.01),
            bo: SliderRange::new(1.0, 2.0, 1.2, 0.01),
            bg: SliderRange::new(0.0001, 0.01, 0.005, 0.0001),
            recovery_factor: SliderRange::new(0.0, 1.0, 0.0, 0.01),
        }
    }
}

/// An input lying outside its typical range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeWarning {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} is outside the typical range {}..={}",
            self.field, self.value, self.min, self.max
        )
    }
}

impl InputRanges {
    /// Parse ranges from TOML and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, ReservoirError> {
        let ranges: Self = toml::from_str(content)?;
        ranges.validate()?;
        Ok(ranges)
    }

    /// Load ranges from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReservoirError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check that every range is ordered, holds its default and has a
    /// positive step. All problems are reported together.
    pub fn validate(&self) -> Result<(), ReservoirError> {
        let mut errors = Vec::new();
        for (name, range) in self.named() {
            range.check(name, &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ReservoirError::Config(errors.join("; ")))
        }
    }

    /// The Bo range for oil, the Bg range for gas.
    pub fn factor_range(&self, reserve_type: ReserveType) -> &SliderRange {
        match reserve_type {
            ReserveType::Oil => &self.bo,
            ReserveType::Gas => &self.bg,
        }
    }

    /// Inputs built from every range's default.
    pub fn default_inputs(&self, reserve_type: ReserveType) -> ReservoirInputs {
        ReservoirInputs {
            reserve: Reserve::new(reserve_type, self.factor_range(reserve_type).default),
            area: self.area.default,
            thickness: self.thickness.default,
            porosity: self.porosity.default,
            water_saturation: self.water_saturation.default,
            recovery_factor: self.recovery_factor.default,
        }
    }

    /// List inputs outside their typical range.
    pub fn out_of_range(&self, inputs: &ReservoirInputs) -> Vec<RangeWarning> {
        let factor_name = match inputs.reserve {
            Reserve::Oil { .. } => "bo",
            Reserve::Gas { .. } => "bg",
        };
        let checks = [
            ("area", &self.area, inputs.area),
            ("thickness", &self.thickness, inputs.thickness),
            ("porosity", &self.porosity, inputs.porosity),
            (
                "water_saturation",
                &self.water_saturation,
                inputs.water_saturation,
            ),
            (
                factor_name,
                self.factor_range(inputs.reserve_type()),
                inputs.formation_volume_factor(),
            ),
            (
                "recovery_factor",
                &self.recovery_factor,
                inputs.recovery_factor,
            ),
        ];

        checks
            .into_iter()
            .filter(|(_, range, value)| !range.contains(*value))
            .map(|(field, range, value)| RangeWarning {
                field,
                value,
                min: range.min,
                max: range.max,
            })
            .collect()
    }

    /// Log every out-of-range input and return how many there were.
    pub fn warn_out_of_range(&self, inputs: &ReservoirInputs) -> usize {
        let warnings = self.out_of_range(inputs);
        for w in &warnings {
            warn!("{}", w);
        }
        warnings.len()
    }

    /// Ranges paired with their field names, in display order.
    pub fn named(&self) -> [(&'static str, &SliderRange); 7] {
        [
            ("area", &self.area),
            ("thickness", &self.thickness),
            ("porosity", &self.porosity),
            ("water_saturation", &self.water_saturation),
            ("bo", &self.bo),
            ("bg", &self.bg),
            ("recovery_factor", &self.recovery_factor),
        ]
    }
}
