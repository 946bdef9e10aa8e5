//! Error handling for the simulation engine.

/// Specialized error type for study simulation runs
///
/// Every failure aborts the run it occurs in; no variant is retried or
/// recovered from internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The conditional exposure prevalences derived from the exposure
    /// prevalence, confounder prevalence and confounder-exposure correlation
    /// fall outside [0, 1]
    #[error(
        "Invalid parameter combination for exposure-confounder correlation: \
         exposure prevalence {exposure_prevalence} with confounder prevalence \
         {confounder_prevalence} and correlation {correlation} gives \
         P(E=1|C=0) = {given_absent:.3} and P(E=1|C=1) = {given_present:.3}. \
         Try reducing the correlation or adjusting prevalences."
    )]
    InvalidParameterCombination {
        /// Overall exposure prevalence requested
        exposure_prevalence: f64,
        /// Confounder prevalence requested
        confounder_prevalence: f64,
        /// Confounder-exposure correlation requested
        correlation: f64,
        /// Derived P(E=1 | C=0)
        given_absent: f64,
        /// Derived P(E=1 | C=1)
        given_present: f64,
    },

    /// A single parameter violates its own range
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Field name of the offending parameter
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// An empty sample reached the estimator
    #[error(
        "Sample size is zero. No individuals were available to analyze; \
         adjust the population or sample size."
    )]
    EmptySample,

    /// Case-control sampling found no observed cases in the population
    #[error(
        "No cases generated in a population of {population_size}. \
         Try increasing population size or outcome prevalence."
    )]
    NoCasesGenerated {
        /// Size of the population that was searched
        population_size: usize,
    },

    /// Study parameters could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SimulationError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
