//! Ratio effect measures and their confidence intervals
//!
//! Intervals use Woolf's method: the estimate's natural log ± 1.96 standard
//! errors, transformed back with `exp`. A table with an empty cell has no
//! interval.

use crate::models::{ConfidenceInterval, ContingencyTable};

/// Standard normal quantile for a two-sided 95% interval
pub const Z_95: f64 = 1.96;

/// Multiplier applied to the crude Woolf standard error to approximate the
/// standard error of the Mantel-Haenszel odds ratio
pub const ADJUSTED_SE_INFLATION: f64 = 1.1;

/// Crude odds ratio `(a·d)/(b·c)`; may be NaN or infinite
#[must_use]
pub fn odds_ratio(table: &ContingencyTable) -> f64 {
    let (a, b, c, d) = table.cells();
    (a * d) / (b * c)
}

/// Crude risk ratio `[a/(a+b)] / [c/(c+d)]`; may be NaN or infinite
#[must_use]
pub fn risk_ratio(table: &ContingencyTable) -> f64 {
    let (a, b, c, d) = table.cells();
    (a / (a + b)) / (c / (c + d))
}

/// Standard error of ln(OR): `sqrt(1/a + 1/b + 1/c + 1/d)`
#[must_use]
pub fn log_odds_ratio_se(table: &ContingencyTable) -> f64 {
    let (a, b, c, d) = table.cells();
    (1.0 / a + 1.0 / b + 1.0 / c + 1.0 / d).sqrt()
}

/// Standard error of ln(RR): `sqrt(1/a - 1/(a+b) + 1/c - 1/(c+d))`
#[must_use]
pub fn log_risk_ratio_se(table: &ContingencyTable) -> f64 {
    let (a, b, c, d) = table.cells();
    ((1.0 / a - 1.0 / (a + b)) + (1.0 / c - 1.0 / (c + d))).sqrt()
}

/// Interval `exp(ln(estimate) ± 1.96·se)`
#[must_use]
pub fn log_scale_interval(estimate: f64, standard_error: f64) -> ConfidenceInterval {
    let log_estimate = estimate.ln();
    let margin = Z_95 * standard_error;
    ConfidenceInterval::new((log_estimate - margin).exp(), (log_estimate + margin).exp())
}

/// Woolf interval for the crude odds ratio
#[must_use]
pub fn odds_ratio_ci(estimate: f64, table: &ContingencyTable) -> ConfidenceInterval {
    if table.has_zero_cell() {
        return ConfidenceInterval::undefined();
    }
    log_scale_interval(estimate, log_odds_ratio_se(table))
}

/// Woolf-style interval for the crude risk ratio
#[must_use]
pub fn risk_ratio_ci(estimate: f64, table: &ContingencyTable) -> ConfidenceInterval {
    if table.has_zero_cell() {
        return ConfidenceInterval::undefined();
    }
    log_scale_interval(estimate, log_risk_ratio_se(table))
}

/// Mantel-Haenszel pooled odds ratio `Σ(aᵢdᵢ/nᵢ) / Σ(bᵢcᵢ/nᵢ)`
///
/// Empty strata contribute nothing. May be NaN or infinite.
#[must_use]
pub fn mantel_haenszel_odds_ratio(strata: &[ContingencyTable]) -> f64 {
    let (numerator, denominator) = strata
        .iter()
        .filter(|stratum| stratum.total() > 0)
        .fold((0.0, 0.0), |(num, den), stratum| {
            let (a, b, c, d) = stratum.cells();
            let n = stratum.total() as f64;
            (num + a * d / n, den + b * c / n)
        });
    numerator / denominator
}

/// Interval for the adjusted odds ratio
///
/// Uses the Woolf standard error of the pooled (crude) table inflated by
/// [`ADJUSTED_SE_INFLATION`]. Undefined unless every pooled cell is positive
/// and the adjusted estimate is finite and positive.
#[must_use]
pub fn adjusted_odds_ratio_ci(adjusted: f64, pooled: &ContingencyTable) -> ConfidenceInterval {
    if pooled.has_zero_cell() || !adjusted.is_finite() || adjusted <= 0.0 {
        return ConfidenceInterval::undefined();
    }
    log_scale_interval(adjusted, log_odds_ratio_se(pooled) * ADJUSTED_SE_INFLATION)
}

/// Point estimate as reported: non-finite values become 0
#[must_use]
pub fn reported(estimate: f64) -> f64 {
    if estimate.is_finite() { estimate } else { 0.0 }
}
