//! Configuration for study simulation runs.
//!
//! A run is fully described by one [`StudyParameters`] value. Parameters are
//! copied into the engine and never mutated while a run executes.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Study design used to draw the sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyType {
    /// Prospective cohort: simple random sample, exposure follows the confounder
    Cohort,
    /// Case-control: cases and controls sampled separately by observed outcome
    #[serde(rename = "Case-Control")]
    CaseControl,
    /// Randomized controlled trial: exposure assigned by coin flip
    #[serde(rename = "RCT")]
    Rct,
}

impl StudyType {
    /// Whether outcome risk is directly observable in samples of this design
    #[must_use]
    pub const fn estimates_risk(self) -> bool {
        !matches!(self, Self::CaseControl)
    }

    /// Whether exposure is assigned independently of the confounder
    #[must_use]
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::Rct)
    }
}

impl fmt::Display for StudyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cohort => "Cohort",
            Self::CaseControl => "Case-Control",
            Self::Rct => "RCT",
        };
        f.write_str(label)
    }
}

/// Parameters for a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyParameters {
    /// Study design
    pub study_type: StudyType,
    /// Number of synthetic individuals generated per iteration
    pub population_size: usize,
    /// Target number of individuals enrolled in the study
    pub sample_size: usize,
    /// Overall prevalence of the exposure
    pub exposure_prevalence: f64,
    /// Baseline outcome risk among the unexposed without the confounder
    #[serde(rename = "outcomePrevalenceUnexposed")]
    pub baseline_risk: f64,
    /// Ground truth relative risk of the exposure on the outcome
    #[serde(rename = "trueEffectRR")]
    pub true_effect_rr: f64,
    /// Prevalence of the confounder
    pub confounder_prevalence: f64,
    /// Relative risk of the confounder on the outcome
    #[serde(rename = "confounderEffectRR")]
    pub confounder_effect_rr: f64,
    /// Strength of the confounder-exposure link (0-1), ignored for RCTs
    #[serde(rename = "confounderExposureCorr")]
    pub confounder_exposure_corr: f64,
    /// Probability that observed exposure is flipped
    pub exposure_misclassification: f64,
    /// Probability that observed outcome is flipped
    pub outcome_misclassification: f64,
    /// Number of Monte Carlo repetitions
    pub monte_carlo_runs: usize,
}

impl Default for StudyParameters {
    fn default() -> Self {
        Self {
            study_type: StudyType::Cohort,
            population_size: 10_000,
            sample_size: 1_000,
            exposure_prevalence: 0.3,
            baseline_risk: 0.05,
            true_effect_rr: 2.5,
            confounder_prevalence: 0.2,
            confounder_effect_rr: 1.5,
            confounder_exposure_corr: 0.4,
            exposure_misclassification: 0.05,
            outcome_misclassification: 0.05,
            monte_carlo_runs: 1,
        }
    }
}

impl StudyParameters {
    /// Create a new builder for constructing study parameters
    #[must_use]
    pub fn builder() -> StudyParametersBuilder {
        StudyParametersBuilder::new()
    }

    /// Parse parameters from a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::Config(format!("Failed to parse study parameters: {e}")))
    }

    /// Load parameters from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimulationError::Config(format!(
                "Failed to read study parameters from {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Whether more than one iteration will be executed
    #[must_use]
    pub const fn is_monte_carlo(&self) -> bool {
        self.monte_carlo_runs > 1
    }

    /// Check the per-field invariants
    ///
    /// The joint check on exposure prevalence, confounder prevalence and
    /// correlation happens in population generation, where the conditional
    /// prevalences are derived.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("exposure_prevalence", self.exposure_prevalence),
            ("baseline_risk", self.baseline_risk),
            ("confounder_prevalence", self.confounder_prevalence),
            ("confounder_exposure_corr", self.confounder_exposure_corr),
            ("exposure_misclassification", self.exposure_misclassification),
            ("outcome_misclassification", self.outcome_misclassification),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimulationError::invalid_parameter(
                    name,
                    format!("{value} is not a probability in [0, 1]"),
                ));
            }
        }

        let relative_risks = [
            ("true_effect_rr", self.true_effect_rr),
            ("confounder_effect_rr", self.confounder_effect_rr),
        ];
        for (name, value) in relative_risks {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::invalid_parameter(
                    name,
                    format!("relative risk must be finite and greater than 0, got {value}"),
                ));
            }
        }

        if self.sample_size == 0 {
            return Err(SimulationError::invalid_parameter(
                "sample_size",
                "must be greater than 0",
            ));
        }
        if self.monte_carlo_runs == 0 {
            return Err(SimulationError::invalid_parameter(
                "monte_carlo_runs",
                "at least one run is required",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for StudyParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Study Parameters:")?;
        writeln!(f, "  Design: {}", self.study_type)?;
        writeln!(f, "  Population Size: {}", self.population_size)?;
        writeln!(f, "  Sample Size: {}", self.sample_size)?;
        writeln!(f, "  Exposure Prevalence: {:.1}%", self.exposure_prevalence * 100.0)?;
        writeln!(f, "  Baseline Risk: {:.1}%", self.baseline_risk * 100.0)?;
        writeln!(f, "  True RR: {}", self.true_effect_rr)?;
        writeln!(f, "  Confounder Prevalence: {:.1}%", self.confounder_prevalence * 100.0)?;
        writeln!(f, "  Confounder RR: {}", self.confounder_effect_rr)?;
        if !self.study_type.is_randomized() {
            writeln!(f, "  Confounder-Exposure Correlation: {}", self.confounder_exposure_corr)?;
        }
        writeln!(
            f,
            "  Misclassification (exposure/outcome): {:.1}% / {:.1}%",
            self.exposure_misclassification * 100.0,
            self.outcome_misclassification * 100.0
        )?;
        write!(f, "  Monte Carlo Runs: {}", self.monte_carlo_runs)
    }
}

/// Builder for constructing study parameters
#[derive(Debug, Clone)]
pub struct StudyParametersBuilder {
    params: StudyParameters,
}

impl Default for StudyParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyParametersBuilder {
    /// Create a new builder with default parameters
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: StudyParameters::default(),
        }
    }

    /// Set the study design
    #[must_use]
    pub const fn study_type(mut self, study_type: StudyType) -> Self {
        self.params.study_type = study_type;
        self
    }

    /// Set the population size
    #[must_use]
    pub const fn population_size(mut self, size: usize) -> Self {
        self.params.population_size = size;
        self
    }

    /// Set the target sample size
    #[must_use]
    pub const fn sample_size(mut self, size: usize) -> Self {
        self.params.sample_size = size;
        self
    }

    /// Set the exposure prevalence
    #[must_use]
    pub const fn exposure_prevalence(mut self, prevalence: f64) -> Self {
        self.params.exposure_prevalence = prevalence;
        self
    }

    /// Set the baseline outcome risk among the unexposed
    #[must_use]
    pub const fn baseline_risk(mut self, risk: f64) -> Self {
        self.params.baseline_risk = risk;
        self
    }

    /// Set the true relative risk of the exposure
    #[must_use]
    pub const fn true_effect_rr(mut self, rr: f64) -> Self {
        self.params.true_effect_rr = rr;
        self
    }

    /// Set the confounder prevalence
    #[must_use]
    pub const fn confounder_prevalence(mut self, prevalence: f64) -> Self {
        self.params.confounder_prevalence = prevalence;
        self
    }

    /// Set the confounder's relative risk on the outcome
    #[must_use]
    pub const fn confounder_effect_rr(mut self, rr: f64) -> Self {
        self.params.confounder_effect_rr = rr;
        self
    }

    /// Set the confounder-exposure correlation
    #[must_use]
    pub const fn confounder_exposure_corr(mut self, corr: f64) -> Self {
        self.params.confounder_exposure_corr = corr;
        self
    }

    /// Set the exposure misclassification probability
    #[must_use]
    pub const fn exposure_misclassification(mut self, probability: f64) -> Self {
        self.params.exposure_misclassification = probability;
        self
    }

    /// Set the outcome misclassification probability
    #[must_use]
    pub const fn outcome_misclassification(mut self, probability: f64) -> Self {
        self.params.outcome_misclassification = probability;
        self
    }

    /// Set the number of Monte Carlo runs
    #[must_use]
    pub const fn monte_carlo_runs(mut self, runs: usize) -> Self {
        self.params.monte_carlo_runs = runs;
        self
    }

    /// Build the study parameters
    #[must_use]
    pub fn build(self) -> StudyParameters {
        self.params
    }
}
