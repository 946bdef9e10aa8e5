//! Sampling distribution of Monte Carlo estimates
//!
//! Summarises the per-run estimates a presentation layer plots as a
//! histogram with reference lines at the true RR and the sample mean.

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::config::StudyType;
use crate::models::{MonteCarloEstimates, SimulationResult};

/// Number of equal-width histogram bins
pub const HISTOGRAM_BINS: usize = 20;

/// One histogram bin covering `[lower, upper)` (the last bin is closed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub midpoint: f64,
    pub count: usize,
}

/// Summary of the plotted estimate series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    /// Number of runs in the series
    pub runs: usize,
    /// Mean over finite estimates (NaN when there are none)
    pub mean: f64,
    /// Median of finite, positive estimates
    pub median: f64,
    /// 2.5th and 97.5th percentiles of finite, positive estimates
    pub percentile_2_5: f64,
    pub percentile_97_5: f64,
    /// Histogram over finite, positive estimates
    pub histogram: Vec<HistogramBin>,
}

/// Series a design's distribution is shown on: ORs for case-control, RRs otherwise
#[must_use]
pub fn plotted_series(estimates: &MonteCarloEstimates, study_type: StudyType) -> &[f64] {
    if study_type.estimates_risk() {
        &estimates.risk_ratios
    } else {
        &estimates.odds_ratios
    }
}

impl DistributionSummary {
    /// Summarise a simulation's Monte Carlo series, if it has one
    #[must_use]
    pub fn from_result(result: &SimulationResult) -> Option<Self> {
        result
            .monte_carlo
            .as_ref()
            .map(|estimates| Self::from_values(plotted_series(estimates, result.parameters.study_type)))
    }

    /// Summarise a series of estimates
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let mean = if finite.is_empty() {
            f64::NAN
        } else {
            finite.iter().sum::<f64>() / finite.len() as f64
        };

        let positive: Vec<f64> = finite
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .sorted_by(f64::total_cmp)
            .collect();

        Self {
            runs: values.len(),
            mean,
            median: quantile(&positive, 0.5),
            percentile_2_5: quantile(&positive, 0.025),
            percentile_97_5: quantile(&positive, 0.975),
            histogram: histogram(&positive, HISTOGRAM_BINS),
        }
    }
}

/// Linearly interpolated quantile of sorted values; NaN when empty
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let position = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let below = position.floor() as usize;
            let above = position.ceil() as usize;
            let weight = position - below as f64;
            sorted[below] + (sorted[above] - sorted[below]) * weight
        }
    }
}

/// Equal-width histogram spanning the range of `values`
///
/// Identical values collapse into a single bin; the maximum is counted in
/// the last bin.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return Vec::new(),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    let width = (max - min) / bins as f64;
    if width == 0.0 || bins == 0 {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            midpoint: min,
            count: values.len(),
        }];
    }

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            midpoint: min + (i as f64 + 0.5) * width,
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        histogram[index].count += 1;
    }

    histogram
}
