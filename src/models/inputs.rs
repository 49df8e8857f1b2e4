use serde::{Deserialize, Serialize};

use super::{Reserve, ReserveType};
use crate::error::ReservoirError;

/// Reservoir parameters for a single volumetric estimate.
///
/// Unknown keys are rejected so that a misspelled optional field such as
/// `recovery_factor` is reported instead of silently defaulting to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservoirInputs {
    /// Reserve kind and its formation volume factor
    pub reserve: Reserve,
    /// Reservoir area in acres
    pub area: f64,
    /// Net pay thickness in feet
    pub thickness: f64,
    /// Porosity (0.0 - 1.0)
    pub porosity: f64,
    /// Water saturation (0.0 - 1.0)
    pub water_saturation: f64,
    /// Recovery factor (0.0 - 1.0); 0.0 means not supplied
    #[serde(default)]
    pub recovery_factor: f64,
}

impl ReservoirInputs {
    pub fn reserve_type(&self) -> ReserveType {
        self.reserve.reserve_type()
    }

    pub fn formation_volume_factor(&self) -> f64 {
        self.reserve.formation_volume_factor()
    }

    /// Whether a recovery factor was supplied.
    pub fn has_recovery_factor(&self) -> bool {
        self.recovery_factor > 0.0
    }

    /// Validate the inputs. Returns `ReservoirError::InvalidInput` on the first
    /// violated rule.
    ///
    /// Comparisons are written so that NaN fails every rule.
    pub fn validate(&self) -> Result<(), ReservoirError> {
        check_positive("area", self.area)?;
        check_positive("thickness", self.thickness)?;
        check_positive(
            self.reserve_type().factor_label(),
            self.formation_volume_factor(),
        )?;
        check_fraction("porosity", self.porosity)?;
        check_fraction("water_saturation", self.water_saturation)?;
        check_fraction("recovery_factor", self.recovery_factor)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), ReservoirError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ReservoirError::InvalidInput(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), ReservoirError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ReservoirError::InvalidInput(format!(
            "{name} must be in 0.0..=1.0, got {value}"
        )))
    }
}
