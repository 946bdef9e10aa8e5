//! Text summary of a simulation result

use std::fmt;

use crate::models::SimulationResult;

use super::bias::BiasAssessment;
use super::distribution::DistributionSummary;

/// Human-readable report over a finished simulation
#[derive(Debug, Clone)]
pub struct SimulationSummary<'a> {
    result: &'a SimulationResult,
    bias: BiasAssessment,
    distribution: Option<DistributionSummary>,
}

impl<'a> SimulationSummary<'a> {
    #[must_use]
    pub fn new(result: &'a SimulationResult) -> Self {
        Self {
            result,
            bias: BiasAssessment::from_result(result),
            distribution: DistributionSummary::from_result(result),
        }
    }

    #[must_use]
    pub const fn bias(&self) -> &BiasAssessment {
        &self.bias
    }

    #[must_use]
    pub const fn distribution(&self) -> Option<&DistributionSummary> {
        self.distribution.as_ref()
    }
}

impl fmt::Display for SimulationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = &self.result.parameters;
        let run = &self.result.single_run;

        writeln!(f, "{params}")?;
        writeln!(f)?;
        writeln!(f, "2x2 Table (observed exposure by observed outcome):")?;
        writeln!(f, "{}", run.two_by_two_table)?;
        writeln!(f)?;
        writeln!(f, "Effect Measures:")?;
        if params.study_type.estimates_risk() {
            writeln!(f, "  Crude RR:    {:.2} 95% CI {}", run.crude_rr, run.crude_rr_ci)?;
        }
        writeln!(f, "  Crude OR:    {:.2} 95% CI {}", run.crude_or, run.crude_or_ci)?;
        writeln!(f, "  Adjusted OR: {:.2} 95% CI {}", run.adjusted_or, run.adjusted_or_ci)?;
        writeln!(f)?;
        write!(f, "Bias: {}", self.bias)?;

        if let Some(distribution) = &self.distribution {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Monte Carlo ({} runs):", distribution.runs)?;
            writeln!(f, "  Mean estimate: {:.3}", distribution.mean)?;
            write!(
                f,
                "  Median {:.3}, central 95% [{:.3}, {:.3}]",
                distribution.median, distribution.percentile_2_5, distribution.percentile_97_5
            )?;
        }
        Ok(())
    }
}
