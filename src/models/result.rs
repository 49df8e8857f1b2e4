use serde::{Deserialize, Serialize};

use super::{ReserveType, ReservoirInputs};

/// Split of the in-place volume into recoverable and unrecoverable parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryBreakdown {
    pub recovery_factor: f64,
    /// In-place volume times the recovery factor (STB or SCF)
    pub recoverable_volume: f64,
    /// In-place volume minus the recoverable volume (STB or SCF)
    pub unrecoverable_volume: f64,
}

impl RecoveryBreakdown {
    /// Recoverable share of the in-place volume as a percentage.
    pub fn recoverable_percent(&self) -> f64 {
        percent_of(self.recoverable_volume, self.total())
    }

    /// Unrecoverable share of the in-place volume as a percentage.
    pub fn unrecoverable_percent(&self) -> f64 {
        percent_of(self.unrecoverable_volume, self.total())
    }

    pub fn total(&self) -> f64 {
        self.recoverable_volume + self.unrecoverable_volume
    }
}

fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Outcome of one volumetric calculation.
///
/// Pore volumes are in cubic feet. The in-place volume is in STB for oil and
/// SCF for gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReservoirResult {
    pub reserve_type: ReserveType,
    pub pore_volume: f64,
    pub hydrocarbon_pore_volume: f64,
    /// OIIP or GIIP
    pub in_place_volume: f64,
    /// Present only when a recovery factor above zero was supplied
    pub recovery: Option<RecoveryBreakdown>,
}

impl ReservoirResult {
    pub fn unit(&self) -> &'static str {
        self.reserve_type.unit()
    }

    pub fn recoverable_volume(&self) -> Option<f64> {
        self.recovery.map(|r| r.recoverable_volume)
    }

    pub fn unrecoverable_volume(&self) -> Option<f64> {
        self.recovery.map(|r| r.unrecoverable_volume)
    }
}

/// Inputs paired with the result computed from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReservoirReport {
    pub inputs: ReservoirInputs,
    pub result: ReservoirResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn breakdown() -> RecoveryBreakdown {
        RecoveryBreakdown {
            recovery_factor: 0.25,
            recoverable_volume: 250.0,
            unrecoverable_volume: 750.0,
        }
    }

    #[test]
    fn test_breakdown_percentages() {
        let b = breakdown();
        assert_approx_eq!(b.recoverable_percent(), 25.0, 1e-9);
        assert_approx_eq!(b.unrecoverable_percent(), 75.0, 1e-9);
        assert_approx_eq!(b.total(), 1000.0, 1e-9);
    }

    #[test]
    fn test_breakdown_percentages_zero_total() {
        let b = RecoveryBreakdown {
            recovery_factor: 0.5,
            recoverable_volume: 0.0,
            unrecoverable_volume: 0.0,
        };
        assert_eq!(b.recoverable_percent(), 0.0);
        assert_eq!(b.unrecoverable_percent(), 0.0);
    }

    #[test]
    fn test_result_accessors_without_recovery() {
        let result = ReservoirResult {
            reserve_type: ReserveType::Gas,
            pore_volume: 10.0,
            hydrocarbon_pore_volume: 5.0,
            in_place_volume: 100.0,
            recovery: None,
        };
        assert_eq!(result.unit(), "SCF");
        assert!(result.recoverable_volume().is_none());
        assert!(result.unrecoverable_volume().is_none());
    }

    #[test]
    fn test_result_json_omits_nothing() {
        let result = ReservoirResult {
            reserve_type: ReserveType::Oil,
            pore_volume: 10.0,
            hydrocarbon_pore_volume: 5.0,
            in_place_volume: 1000.0,
            recovery: Some(breakdown()),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""reserve_type":"oil""#));
        assert!(json.contains(r#""recoverable_volume":250.0"#));
        let back: ReservoirResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
