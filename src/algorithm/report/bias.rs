//! Bias of the headline estimate against the ground truth

use std::fmt;

use serde::Serialize;

use crate::config::StudyType;
use crate::models::SimulationResult;

/// Largest relative bias for which an estimate counts as accurate
pub const SUCCESS_TOLERANCE: f64 = 0.10;

/// Effect measure a design is judged on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadlineMeasure {
    /// Crude risk ratio, for designs that observe risk
    CrudeRiskRatio,
    /// Adjusted odds ratio, for case-control designs
    AdjustedOddsRatio,
}

impl HeadlineMeasure {
    #[must_use]
    pub const fn for_design(study_type: StudyType) -> Self {
        if study_type.estimates_risk() {
            Self::CrudeRiskRatio
        } else {
            Self::AdjustedOddsRatio
        }
    }
}

impl fmt::Display for HeadlineMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CrudeRiskRatio => f.write_str("crude RR"),
            Self::AdjustedOddsRatio => f.write_str("adjusted OR"),
        }
    }
}

/// Comparison of the single-run headline estimate with the true RR
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasAssessment {
    pub measure: HeadlineMeasure,
    /// Reported estimate (0 when it could not be estimated)
    pub estimate: f64,
    /// Ground truth relative risk
    pub truth: f64,
    /// `(estimate - truth) / truth`, NaN when the estimate is undefined
    pub relative_bias: f64,
    /// Whether `|relative_bias| <= SUCCESS_TOLERANCE`
    pub within_tolerance: bool,
}

impl BiasAssessment {
    /// Assess the single-run result of a simulation
    #[must_use]
    pub fn from_result(result: &SimulationResult) -> Self {
        let measure = HeadlineMeasure::for_design(result.parameters.study_type);
        let estimate = match measure {
            HeadlineMeasure::CrudeRiskRatio => result.single_run.crude_rr,
            HeadlineMeasure::AdjustedOddsRatio => result.single_run.adjusted_or,
        };
        Self::new(measure, estimate, result.parameters.true_effect_rr)
    }

    /// Assess an estimate against the truth
    ///
    /// An estimate of 0 is the engine's marker for "undefined" and never
    /// counts as accurate.
    #[must_use]
    pub fn new(measure: HeadlineMeasure, estimate: f64, truth: f64) -> Self {
        let relative_bias = if estimate > 0.0 && estimate.is_finite() {
            (estimate - truth) / truth
        } else {
            f64::NAN
        };
        Self {
            measure,
            estimate,
            truth,
            relative_bias,
            within_tolerance: relative_bias.abs() <= SUCCESS_TOLERANCE,
        }
    }
}

impl fmt::Display for BiasAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative_bias.is_finite() {
            write!(
                f,
                "{} {:.2} vs true RR {:.2}: bias {:+.0}% ({})",
                self.measure,
                self.estimate,
                self.truth,
                self.relative_bias * 100.0,
                if self.within_tolerance {
                    "within tolerance"
                } else {
                    "outside tolerance"
                }
            )
        } else {
            write!(
                f,
                "{} could not be estimated (true RR {:.2})",
                self.measure, self.truth
            )
        }
    }
}
