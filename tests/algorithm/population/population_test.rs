//! Tests for population generation functionality

use study_sim::algorithm::population::{PopulationStats, generate_population};
use study_sim::{SimulationError, StudyParameters, StudyType};

use crate::utils::seeded;

#[test]
fn test_population_size_matches_parameters() {
    for study_type in [StudyType::Cohort, StudyType::CaseControl, StudyType::Rct] {
        let params = StudyParameters::builder()
            .study_type(study_type)
            .population_size(3_000)
            .build();

        let population = generate_population(&params, &mut seeded(1)).unwrap();

        assert_eq!(population.len(), 3_000);
        let mut ids: Vec<usize> = population.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3_000);
    }
}

#[test]
fn test_invalid_combination_is_rejected() {
    // P(E=1|C=0) = 0.1 - 0.5 × 0.5 = -0.15
    let params = StudyParameters::builder()
        .exposure_prevalence(0.1)
        .confounder_prevalence(0.5)
        .confounder_exposure_corr(0.5)
        .build();

    let err = generate_population(&params, &mut seeded(1)).unwrap_err();

    assert!(matches!(
        err,
        SimulationError::InvalidParameterCombination { .. }
    ));
    assert!(err.to_string().contains("correlation 0.5"));
}

#[test]
fn test_rct_exposure_independent_of_confounder() {
    let params = StudyParameters::builder()
        .study_type(StudyType::Rct)
        .population_size(50_000)
        .confounder_prevalence(0.3)
        .confounder_exposure_corr(0.8)
        .build();

    let population = generate_population(&params, &mut seeded(17)).unwrap();
    let stats = PopulationStats::from_population(&population);

    assert!(
        stats.confounder_exposure_correlation().abs() < 0.02,
        "correlation was {}",
        stats.confounder_exposure_correlation()
    );
    assert!((stats.exposure_prevalence() - 0.5).abs() < 0.01);
}

#[test]
fn test_observational_exposure_follows_confounder() {
    let params = StudyParameters::builder().population_size(50_000).build();

    let population = generate_population(&params, &mut seeded(17)).unwrap();
    let stats = PopulationStats::from_population(&population);

    // Default parameters give a phi coefficient of about 0.35
    assert!(stats.confounder_exposure_correlation() > 0.3);
    assert!((stats.exposure_prevalence() - 0.3).abs() < 0.01);
    assert!((stats.confounder_prevalence() - 0.2).abs() < 0.01);
}

#[test]
fn test_misclassification_rates() {
    let params = StudyParameters::builder()
        .population_size(50_000)
        .exposure_misclassification(0.2)
        .outcome_misclassification(0.1)
        .build();

    let population = generate_population(&params, &mut seeded(23)).unwrap();
    let n = population.len() as f64;

    let exposure_flips = population
        .iter()
        .filter(|p| p.observed_exposure != p.true_exposure)
        .count() as f64;
    let outcome_flips = population
        .iter()
        .filter(|p| p.observed_outcome != p.true_outcome)
        .count() as f64;

    assert!((exposure_flips / n - 0.2).abs() < 0.01);
    assert!((outcome_flips / n - 0.1).abs() < 0.01);
}

#[test]
fn test_outcome_risk_follows_multiplicative_model() {
    let params = StudyParameters::builder()
        .study_type(StudyType::Rct)
        .population_size(100_000)
        .baseline_risk(0.1)
        .true_effect_rr(3.0)
        .confounder_prevalence(0.0)
        .build();

    let population = generate_population(&params, &mut seeded(5)).unwrap();

    let risk = |exposed: bool| {
        let group: Vec<_> = population
            .iter()
            .filter(|p| p.true_exposure == exposed)
            .collect();
        group.iter().filter(|p| p.true_outcome).count() as f64 / group.len() as f64
    };

    let stats = PopulationStats::from_population(&population);
    assert!((stats.outcome_prevalence() - 0.2).abs() < 0.01);
    assert!(stats.to_string().contains("true cases"));

    assert!((risk(false) - 0.1).abs() < 0.01);
    assert!((risk(true) - 0.3).abs() < 0.015);
}
