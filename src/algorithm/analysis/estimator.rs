//! Effect estimation for a single study sample
//!
//! The overall table cross-tabulates *observed* exposure and outcome, so
//! misclassification shows up in the crude estimates. Stratification uses the
//! *true* confounder, so the Mantel-Haenszel estimate isolates the bias that
//! confounding contributes.

use log::debug;

use crate::config::StudyType;
use crate::error::{Result, SimulationError};
use crate::models::{AnalysisResult, ConfidenceInterval, ContingencyTable, Individual, StratifiedTables};

use super::measures;

/// Estimate crude and adjusted effect measures for a sample
///
/// The risk ratio is only estimated for designs that observe outcome risk;
/// for case-control samples it is reported as 0 with an undefined interval.
pub fn analyze(sample: &[Individual], study_type: StudyType) -> Result<AnalysisResult> {
    if sample.is_empty() {
        return Err(SimulationError::EmptySample);
    }

    let table = ContingencyTable::from_sample(sample);
    let strata = StratifiedTables::from_sample(sample);

    let crude_or = measures::odds_ratio(&table);
    let crude_or_ci = measures::odds_ratio_ci(crude_or, &table);

    let (crude_rr, crude_rr_ci) = if study_type.estimates_risk() {
        let rr = measures::risk_ratio(&table);
        (rr, measures::risk_ratio_ci(rr, &table))
    } else {
        (f64::NAN, ConfidenceInterval::undefined())
    };

    let adjusted_or = measures::mantel_haenszel_odds_ratio(&strata.strata());
    let adjusted_or_ci = measures::adjusted_odds_ratio_ci(adjusted_or, &table);

    debug!(
        "Tabulated a={} b={} c={} d={}: crude OR {:.3}, crude RR {:.3}, adjusted OR {:.3}",
        table.exposed_cases,
        table.exposed_non_cases,
        table.unexposed_cases,
        table.unexposed_non_cases,
        crude_or,
        crude_rr,
        adjusted_or
    );

    Ok(AnalysisResult {
        crude_or: measures::reported(crude_or),
        crude_or_ci,
        crude_rr: measures::reported(crude_rr),
        crude_rr_ci,
        adjusted_or: measures::reported(adjusted_or),
        adjusted_or_ci,
        two_by_two_table: table,
        strata,
    })
}
