//! Result models handed to presentation layers
//!
//! These are plain data values. They are produced once by the engine and
//! never mutated afterwards.

use std::fmt;

use serde::Serialize;

use crate::config::StudyParameters;
use crate::models::table::{ContingencyTable, StratifiedTables};

/// 95% confidence interval on the ratio scale
///
/// An undefined interval has both bounds set to NaN. Serializes as a
/// `[lower, upper]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Interval that could not be computed
    #[must_use]
    pub const fn undefined() -> Self {
        Self {
            lower: f64::NAN,
            upper: f64::NAN,
        }
    }

    /// Whether both bounds are finite numbers
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Whether the interval covers `value`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.is_defined() && self.lower <= value && value <= self.upper
    }
}

impl From<ConfidenceInterval> for [f64; 2] {
    fn from(ci: ConfidenceInterval) -> Self {
        [ci.lower, ci.upper]
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "[{:.2}, {:.2}]", self.lower, self.upper)
        } else {
            f.write_str("[N/A, N/A]")
        }
    }
}

/// Effect measures estimated from one study sample
///
/// A point estimate of 0 paired with an undefined interval means the measure
/// could not be estimated, not that the effect is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Crude odds ratio
    #[serde(rename = "crudeOR")]
    pub crude_or: f64,
    #[serde(rename = "crudeOR_CI")]
    pub crude_or_ci: ConfidenceInterval,
    /// Crude risk ratio (0 for case-control designs)
    #[serde(rename = "crudeRR")]
    pub crude_rr: f64,
    #[serde(rename = "crudeRR_CI")]
    pub crude_rr_ci: ConfidenceInterval,
    /// Mantel-Haenszel odds ratio adjusted for the true confounder
    #[serde(rename = "adjustedOR")]
    pub adjusted_or: f64,
    #[serde(rename = "adjustedOR_CI")]
    pub adjusted_or_ci: ConfidenceInterval,
    /// Observed exposure by observed outcome over the whole sample
    pub two_by_two_table: ContingencyTable,
    /// The same table within each true-confounder stratum
    pub strata: StratifiedTables,
}

impl AnalysisResult {
    /// Monte Carlo odds ratio: the adjusted OR when estimable, else the crude OR
    #[must_use]
    pub fn distribution_odds_ratio(&self) -> f64 {
        if self.adjusted_or.is_finite() && self.adjusted_or != 0.0 {
            self.adjusted_or
        } else {
            self.crude_or
        }
    }
}

/// Estimates collected across Monte Carlo iterations, in run order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloEstimates {
    /// Adjusted OR per run (crude OR where the adjusted value is undefined)
    #[serde(rename = "estimatedORs")]
    pub odds_ratios: Vec<f64>,
    /// Crude RR per run
    #[serde(rename = "estimatedRRs")]
    pub risk_ratios: Vec<f64>,
}

impl MonteCarloEstimates {
    #[must_use]
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            odds_ratios: Vec::with_capacity(runs),
            risk_ratios: Vec::with_capacity(runs),
        }
    }

    /// Append the estimates of one iteration
    pub fn push(&mut self, analysis: &AnalysisResult) {
        self.odds_ratios.push(analysis.distribution_odds_ratio());
        self.risk_ratios.push(analysis.crude_rr);
    }

    /// Number of iterations recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.odds_ratios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.odds_ratios.is_empty()
    }
}

/// Complete output of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Parameters the run was executed with
    pub parameters: StudyParameters,
    /// Analysis of the first iteration
    pub single_run: AnalysisResult,
    /// Per-iteration estimates, present only when more than one run was requested
    pub monte_carlo: Option<MonteCarloEstimates>,
}
