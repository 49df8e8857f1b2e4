//! Volumetric estimation of hydrocarbons initially in place.
//!
//! Three independent conversion constants are used. Pore volume always uses
//! [`PORE_VOLUME_FACTOR`]; the in-place volume uses
//! [`OIL_BARRELS_PER_ACRE_FOOT`] or [`GAS_CUBIC_FEET_PER_ACRE_FOOT`] depending
//! on the reserve variant.

use tracing::debug;

use crate::error::ReservoirError;
use crate::models::{RecoveryBreakdown, Reserve, ReservoirInputs, ReservoirResult};

/// Pore volume conversion applied to acres x feet, for both oil and gas.
pub const PORE_VOLUME_FACTOR: f64 = 43.56;

/// Barrels per acre-foot.
pub const OIL_BARRELS_PER_ACRE_FOOT: f64 = 7758.0;

/// Cubic feet per acre-foot.
pub const GAS_CUBIC_FEET_PER_ACRE_FOOT: f64 = 43_560.0;

/// Pore volume: `area * thickness * 43.56 * porosity`.
pub fn pore_volume(area: f64, thickness: f64, porosity: f64) -> f64 {
    area * thickness * PORE_VOLUME_FACTOR * porosity
}

/// Hydrocarbon pore volume: the part of the pore volume not filled by water.
pub fn hydrocarbon_pore_volume(pore_volume: f64, water_saturation: f64) -> f64 {
    pore_volume * (1.0 - water_saturation)
}

/// Oil (STB) or gas (SCF) initially in place.
pub fn in_place_volume(
    reserve: &Reserve,
    area: f64,
    thickness: f64,
    porosity: f64,
    water_saturation: f64,
) -> f64 {
    match *reserve {
        Reserve::Oil { bo } => {
            (OIL_BARRELS_PER_ACRE_FOOT * area * thickness * porosity * (1.0 - water_saturation))
                / bo
        }
        Reserve::Gas { bg } => {
            (GAS_CUBIC_FEET_PER_ACRE_FOOT
                * area
                * thickness
                * porosity
                * (1.0 - water_saturation))
                / bg
        }
    }
}

/// Recoverable/unrecoverable split, or `None` when no recovery factor was
/// supplied (`recovery_factor <= 0`).
pub fn recovery_breakdown(in_place: f64, recovery_factor: f64) -> Option<RecoveryBreakdown> {
    if recovery_factor > 0.0 {
        let recoverable_volume = in_place * recovery_factor;
        Some(RecoveryBreakdown {
            recovery_factor,
            recoverable_volume,
            unrecoverable_volume: in_place - recoverable_volume,
        })
    } else {
        None
    }
}

/// Reject a computed volume that overflowed to infinity or became NaN.
fn check_finite_volume(name: &str, value: f64) -> Result<(), ReservoirError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ReservoirError::InvalidInput(format!(
            "{name} is not representable ({value}); inputs are too extreme"
        )))
    }
}

/// Validate `inputs` and compute all reservoir volumes.
///
/// Fails with `ReservoirError::InvalidInput` before anything is computed if
/// any input is out of its domain, and before any result is returned if a
/// volume overflows `f64`.
///
/// # Examples
///
/// ```
/// use reservoir_volumetrics::analysis::calculate;
/// use reservoir_volumetrics::models::{Reserve, ReservoirInputs};
///
/// let inputs = ReservoirInputs {
///     reserve: Reserve::Oil { bo: 1.2 },
///     area: 500.0,
///     thickness: 50.0,
///     porosity: 0.20,
///     water_saturation: 0.25,
///     recovery_factor: 0.35,
/// };
/// let result = calculate(&inputs).unwrap();
/// assert!((result.in_place_volume - 242_437_500.0).abs() < 1e-3);
/// assert!(result.recovery.is_some());
/// ```
pub fn calculate(inputs: &ReservoirInputs) -> Result<ReservoirResult, ReservoirError> {
    inputs.validate()?;

    let pv = pore_volume(inputs.area, inputs.thickness, inputs.porosity);
    let hcpv = hydrocarbon_pore_volume(pv, inputs.water_saturation);
    let in_place = in_place_volume(
        &inputs.reserve,
        inputs.area,
        inputs.thickness,
        inputs.porosity,
        inputs.water_saturation,
    );
    let recovery = recovery_breakdown(in_place, inputs.recovery_factor);

    check_finite_volume("pore_volume", pv)?;
    check_finite_volume("hydrocarbon_pore_volume", hcpv)?;
    check_finite_volume("in_place_volume", in_place)?;
    if let Some(r) = &recovery {
        check_finite_volume("recoverable_volume", r.recoverable_volume)?;
        check_finite_volume("unrecoverable_volume", r.unrecoverable_volume)?;
    }

    debug!(
        reserve = %inputs.reserve,
        pore_volume = pv,
        hydrocarbon_pore_volume = hcpv,
        in_place_volume = in_place,
        recovery = recovery.is_some(),
        "volumetric calculation complete"
    );

    Ok(ReservoirResult {
        reserve_type: inputs.reserve_type(),
        pore_volume: pv,
        hydrocarbon_pore_volume: hcpv,
        in_place_volume: in_place,
        recovery,
    })
}
