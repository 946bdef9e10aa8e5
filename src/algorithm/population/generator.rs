//! Synthetic population generation
//!
//! Each individual is drawn from a causal model with a binary confounder C,
//! exposure E and outcome O:
//!
//! 1. C ~ Bernoulli(confounder prevalence)
//! 2. E ~ Bernoulli(0.5) for RCTs, otherwise Bernoulli(P(E=1 | C))
//! 3. O ~ Bernoulli(baseline × RR_E^E × RR_C^C)
//! 4. Observed E and O are flipped independently with their
//!    misclassification probabilities.

use log::debug;
use rand::Rng;

use crate::algorithm::population::statistics::PopulationStats;
use crate::algorithm::random::VariateSource;
use crate::config::StudyParameters;
use crate::error::{Result, SimulationError};
use crate::models::Individual;

/// Exposure prevalence conditional on the confounder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureModel {
    /// P(E=1 | C=0)
    pub given_absent: f64,
    /// P(E=1 | C=1)
    pub given_present: f64,
}

impl ExposureModel {
    /// Decompose the overall exposure prevalence around the confounder
    ///
    /// `P(E=1|C=0) = p_E - p_C × corr` and `P(E=1|C=1) = P(E=1|C=0) + corr`.
    /// Both must be probabilities.
    pub fn from_parameters(params: &StudyParameters) -> Result<Self> {
        let correlation = params.confounder_exposure_corr;
        let given_absent = params.exposure_prevalence - params.confounder_prevalence * correlation;
        let given_present = given_absent + correlation;

        let valid = |p: f64| (0.0..=1.0).contains(&p);
        if !valid(given_absent) || !valid(given_present) {
            return Err(SimulationError::InvalidParameterCombination {
                exposure_prevalence: params.exposure_prevalence,
                confounder_prevalence: params.confounder_prevalence,
                correlation,
                given_absent,
                given_present,
            });
        }

        Ok(Self {
            given_absent,
            given_present,
        })
    }

    /// Exposure probability for a given confounder status
    #[must_use]
    pub const fn probability(&self, confounder: bool) -> f64 {
        if confounder {
            self.given_present
        } else {
            self.given_absent
        }
    }
}

/// Outcome risk under the multiplicative model
///
/// The result is not clamped; risks above 1 make the outcome certain.
#[must_use]
pub fn outcome_risk(params: &StudyParameters, exposed: bool, confounder: bool) -> f64 {
    let mut risk = params.baseline_risk;
    if exposed {
        risk *= params.true_effect_rr;
    }
    if confounder {
        risk *= params.confounder_effect_rr;
    }
    risk
}

/// Generate `population_size` individuals for one iteration
///
/// Fails with [`SimulationError::InvalidParameterCombination`] before any
/// individual is drawn when the conditional exposure prevalences are not
/// probabilities. RCTs never consult the confounder-exposure link, so the
/// check only applies to observational designs.
pub fn generate_population<R: Rng>(
    params: &StudyParameters,
    source: &mut VariateSource<R>,
) -> Result<Vec<Individual>> {
    let exposure_model = if params.study_type.is_randomized() {
        // Randomized exposure never reads the correlation, so no combination check
        None
    } else {
        Some(ExposureModel::from_parameters(params)?)
    };

    let population: Vec<Individual> = (0..params.population_size)
        .map(|id| {
            let true_confounder = source.bernoulli(params.confounder_prevalence);
            let true_exposure = match exposure_model {
                Some(model) => source.bernoulli(model.probability(true_confounder)),
                None => source.coin_flip(),
            };
            let true_outcome =
                source.bernoulli(outcome_risk(params, true_exposure, true_confounder));

            let observed_exposure =
                source.flip_with(true_exposure, params.exposure_misclassification);
            let observed_outcome =
                source.flip_with(true_outcome, params.outcome_misclassification);

            Individual {
                id,
                true_confounder,
                true_exposure,
                true_outcome,
                observed_exposure,
                observed_outcome,
            }
        })
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        debug!("{}", PopulationStats::from_population(&population));
    }

    Ok(population)
}
