//! Case-control sampling
//!
//! Cases and controls are defined by the *observed* outcome, the way a real
//! study would classify them. Half the target sample is reserved for cases;
//! controls fill the remainder.

use log::warn;
use rand::Rng;

use crate::algorithm::random::VariateSource;
use crate::error::{Result, SimulationError};
use crate::models::Individual;

/// Number of cases and controls to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseControlPlan {
    pub cases: usize,
    pub controls: usize,
}

impl CaseControlPlan {
    /// Plan a case-control sample from the available pool sizes
    ///
    /// `cases = min(available cases, floor(sample_size / 2))` and
    /// `controls = min(available controls, sample_size - cases)`.
    #[must_use]
    pub fn new(available_cases: usize, available_controls: usize, sample_size: usize) -> Self {
        let cases = available_cases.min(sample_size / 2);
        let controls = available_controls.min(sample_size - cases);
        Self { cases, controls }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.cases + self.controls
    }
}

/// Draw cases and controls separately, then concatenate them
pub fn sample_case_control<R: Rng>(
    population: Vec<Individual>,
    sample_size: usize,
    source: &mut VariateSource<R>,
) -> Result<Vec<Individual>> {
    let population_size = population.len();
    let (cases, controls): (Vec<Individual>, Vec<Individual>) =
        population.into_iter().partition(Individual::is_case);

    let plan = CaseControlPlan::new(cases.len(), controls.len(), sample_size);
    if plan.cases == 0 {
        return Err(SimulationError::NoCasesGenerated { population_size });
    }
    if plan.total() < sample_size {
        warn!(
            "Case-control sample short of target: {} cases and {} controls for a requested {}",
            plan.cases, plan.controls, sample_size
        );
    }

    let mut sample = source.choose_without_replacement(cases, plan.cases);
    sample.extend(source.choose_without_replacement(controls, plan.controls));
    Ok(sample)
}
