//! Study sampling from a generated population
//!
//! Cohort studies and RCTs enrol a simple random sample without regard to
//! outcome. Case-control studies sample cases and controls separately (see
//! [`case_control`]). The order of the returned sample carries no meaning.

pub mod case_control;

use log::debug;
use rand::Rng;

use crate::algorithm::random::VariateSource;
use crate::config::{StudyParameters, StudyType};
use crate::error::Result;
use crate::models::Individual;

pub use case_control::{CaseControlPlan, sample_case_control};

/// Draw the study sample for the configured design
///
/// The population is consumed; individuals not sampled are dropped.
pub fn sample_population<R: Rng>(
    population: Vec<Individual>,
    params: &StudyParameters,
    source: &mut VariateSource<R>,
) -> Result<Vec<Individual>> {
    let sample = match params.study_type {
        StudyType::Cohort | StudyType::Rct => {
            sample_random(population, params.sample_size, source)
        }
        StudyType::CaseControl => sample_case_control(population, params.sample_size, source)?,
    };

    debug!(
        "Sampled {} individuals for {} design",
        sample.len(),
        params.study_type
    );
    Ok(sample)
}

/// Uniform sample of `min(sample_size, population size)` without replacement
pub fn sample_random<R: Rng>(
    population: Vec<Individual>,
    sample_size: usize,
    source: &mut VariateSource<R>,
) -> Vec<Individual> {
    source.choose_without_replacement(population, sample_size)
}
