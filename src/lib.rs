pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{calculate, ReservoirCalculator};
pub use config::InputRanges;
pub use error::ReservoirError;
pub use io::ScenarioReader;
pub use models::{Reserve, ReserveType, ReservoirInputs, ReservoirReport, ReservoirResult};
