//! End-to-end simulation tests

use study_sim::{
    BiasAssessment, DistributionSummary, SimulationError, SimulationRunner, SimulationSummary,
    StudyParameters, StudyType, run_iteration,
};

use crate::utils::{mean, seeded, unconfounded_params};

#[test]
fn test_monte_carlo_collects_every_run() {
    let params = StudyParameters::builder()
        .population_size(2_000)
        .sample_size(500)
        .monte_carlo_runs(500)
        .build();

    let result = SimulationRunner::new(params.clone())
        .run_with(&mut seeded(42))
        .unwrap();
    let estimates = result.monte_carlo.as_ref().unwrap();

    assert_eq!(estimates.odds_ratios.len(), 500);
    assert_eq!(estimates.risk_ratios.len(), 500);

    // The first run is the single-run result
    let first = run_iteration(&params, &mut seeded(42)).unwrap();
    assert_eq!(result.single_run, first);
    assert_eq!(estimates.odds_ratios[0], first.distribution_odds_ratio());
    assert_eq!(estimates.risk_ratios[0], first.crude_rr);
}

#[test]
fn test_no_confounding_adjusted_matches_crude() {
    let params = unconfounded_params(StudyType::Cohort);
    let mut source = seeded(99);

    let (crude, adjusted): (Vec<f64>, Vec<f64>) = (0..100)
        .map(|_| {
            let analysis = run_iteration(&params, &mut source).unwrap();
            (analysis.crude_or, analysis.adjusted_or)
        })
        .unzip();

    let crude_mean = mean(&crude);
    let adjusted_mean = mean(&adjusted);
    assert!(
        (adjusted_mean - crude_mean).abs() / crude_mean < 0.15,
        "crude {crude_mean}, adjusted {adjusted_mean}"
    );
}

#[test]
fn test_adjustment_removes_strong_confounding() {
    let params = StudyParameters::builder()
        .population_size(10_000)
        .sample_size(2_000)
        .exposure_prevalence(0.4)
        .true_effect_rr(1.0)
        .confounder_prevalence(0.3)
        .confounder_effect_rr(3.0)
        .confounder_exposure_corr(0.6)
        .exposure_misclassification(0.0)
        .outcome_misclassification(0.0)
        .build();
    let mut source = seeded(7);

    let (crude, adjusted): (Vec<f64>, Vec<f64>) = (0..100)
        .map(|_| {
            let analysis = run_iteration(&params, &mut source).unwrap();
            (analysis.crude_or, analysis.adjusted_or)
        })
        .unzip();

    let crude_mean = mean(&crude);
    let adjusted_mean = mean(&adjusted);
    assert!(crude_mean > 1.5, "crude mean {crude_mean}");
    assert!(
        (0.9..=1.12).contains(&adjusted_mean),
        "adjusted mean {adjusted_mean}"
    );
}

#[test]
fn test_rct_recovers_true_effect() {
    let params = StudyParameters::builder()
        .study_type(StudyType::Rct)
        .population_size(20_000)
        .sample_size(20_000)
        .baseline_risk(0.1)
        .true_effect_rr(2.0)
        .confounder_effect_rr(3.0)
        .confounder_exposure_corr(0.6)
        .exposure_misclassification(0.0)
        .outcome_misclassification(0.0)
        .build();

    let result = SimulationRunner::new(params)
        .run_with(&mut seeded(15))
        .unwrap();
    let bias = BiasAssessment::from_result(&result);

    assert!(bias.within_tolerance, "{bias}");
}

#[test]
fn test_invalid_combination_aborts_simulation() {
    let params = StudyParameters::builder()
        .exposure_prevalence(0.1)
        .confounder_prevalence(0.5)
        .confounder_exposure_corr(0.5)
        .monte_carlo_runs(10)
        .build();

    let result = SimulationRunner::new(params).run_with(&mut seeded(1));

    assert!(matches!(
        result,
        Err(SimulationError::InvalidParameterCombination { .. })
    ));
}

#[test]
fn test_summary_and_distribution() {
    let params = StudyParameters::builder()
        .population_size(3_000)
        .sample_size(600)
        .monte_carlo_runs(50)
        .build();

    let result = SimulationRunner::new(params)
        .run_with(&mut seeded(11))
        .unwrap();
    let distribution = DistributionSummary::from_result(&result).unwrap();

    assert_eq!(distribution.runs, 50);
    assert!(distribution.percentile_2_5 <= distribution.median);
    assert!(distribution.median <= distribution.percentile_97_5);

    let text = SimulationSummary::new(&result).to_string();
    assert!(text.contains("Cohort"));
    assert!(text.contains("Crude RR"));
}

#[test]
fn test_result_serializes_for_presentation() {
    let params = StudyParameters::builder()
        .study_type(StudyType::CaseControl)
        .population_size(5_000)
        .sample_size(400)
        .build();

    let result = SimulationRunner::new(params)
        .run_with(&mut seeded(3))
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["parameters"]["studyType"], "Case-Control");
    assert!(json["singleRun"]["crudeOR"].is_number());
    assert!(json["singleRun"]["twoByTwoTable"].is_object());
    // Intervals are [lower, upper] pairs; undefined bounds serialize as null
    let rr_ci = &json["singleRun"]["crudeRR_CI"];
    assert!(rr_ci.is_array());
    assert!(rr_ci[0].is_null() && rr_ci[1].is_null());
    let or_ci = json["singleRun"]["crudeOR_CI"].as_array().unwrap();
    assert_eq!(or_ci.len(), 2);
    assert!(or_ci[0].as_f64().unwrap() <= or_ci[1].as_f64().unwrap());
    assert!(json["monteCarlo"].is_null());
}
