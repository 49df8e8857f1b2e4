use crate::analysis::calculate;
use crate::error::ReservoirError;
use crate::models::{ReservoirInputs, ReservoirReport, ReservoirResult};
use crate::visualization::{BarChart, PieChart};

/// Unified calculation API over one set of reservoir inputs.
pub struct ReservoirCalculator<'a> {
    inputs: &'a ReservoirInputs,
}

impl<'a> ReservoirCalculator<'a> {
    /// Create a new calculator for the given inputs.
    pub fn new(inputs: &'a ReservoirInputs) -> Self {
        Self { inputs }
    }

    /// Compute PV, HCPV, the in-place volume and the recovery split.
    pub fn result(&self) -> Result<ReservoirResult, ReservoirError> {
        calculate(self.inputs)
    }

    /// Inputs paired with their result.
    pub fn report(&self) -> Result<ReservoirReport, ReservoirError> {
        Ok(ReservoirReport {
            inputs: *self.inputs,
            result: self.result()?,
        })
    }

    /// Volume comparison bar chart.
    pub fn bar_chart(&self) -> Result<BarChart, ReservoirError> {
        Ok(BarChart::from_result(&self.result()?))
    }

    /// Recovery pie chart, `None` when no recovery factor was supplied.
    pub fn pie_chart(&self) -> Result<Option<PieChart>, ReservoirError> {
        Ok(PieChart::from_result(&self.result()?))
    }
}
