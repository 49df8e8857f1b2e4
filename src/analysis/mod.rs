mod calculator;
mod volumetrics;

pub use calculator::ReservoirCalculator;
pub use volumetrics::{
    calculate, hydrocarbon_pore_volume, in_place_volume, pore_volume, recovery_breakdown,
    GAS_CUBIC_FEET_PER_ACRE_FOOT, OIL_BARRELS_PER_ACRE_FOOT, PORE_VOLUME_FACTOR,
};
