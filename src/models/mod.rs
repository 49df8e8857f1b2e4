mod reserve;
mod inputs;
mod result;

pub use reserve::{Reserve, ReserveType};
pub use inputs::ReservoirInputs;
pub use result::{RecoveryBreakdown, ReservoirReport, ReservoirResult};
