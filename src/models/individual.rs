//! Individual entity model
//!
//! An Individual is one synthetic person in a generated population. It carries
//! both the true causal state (confounder, exposure, outcome) and the observed
//! exposure and outcome after misclassification noise.

use serde::Serialize;

/// Synthetic individual with true and observed binary attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Individual {
    /// Position of the individual in the generated population
    pub id: usize,
    /// True confounder status
    pub true_confounder: bool,
    /// True exposure status
    pub true_exposure: bool,
    /// True outcome status
    pub true_outcome: bool,
    /// Exposure status as recorded by the study
    pub observed_exposure: bool,
    /// Outcome status as recorded by the study
    pub observed_outcome: bool,
}

impl Individual {
    /// Whether the individual counts as a case in the study (observed outcome)
    #[must_use]
    pub const fn is_case(&self) -> bool {
        self.observed_outcome
    }

    /// Whether either observed attribute disagrees with the truth
    #[must_use]
    pub const fn is_misclassified(&self) -> bool {
        self.observed_exposure != self.true_exposure || self.observed_outcome != self.true_outcome
    }
}
