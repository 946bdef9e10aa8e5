//! Tests for study sampling

use study_sim::algorithm::sampling::{CaseControlPlan, sample_case_control};
use study_sim::{SimulationError, StudyParameters, StudyType, generate_population, sample_population};

use crate::utils::{individuals, seeded};

#[test]
fn test_cohort_sample_is_subset_without_duplicates() {
    let params = StudyParameters::builder()
        .population_size(2_000)
        .sample_size(700)
        .build();
    let mut source = seeded(8);

    let population = generate_population(&params, &mut source).unwrap();
    let sample = sample_population(population, &params, &mut source).unwrap();

    assert_eq!(sample.len(), 700);
    let mut ids: Vec<usize> = sample.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 700);
    assert!(ids.iter().all(|id| *id < 2_000));
}

#[test]
fn test_sample_larger_than_population_takes_everyone() {
    let params = StudyParameters::builder()
        .study_type(StudyType::Rct)
        .population_size(300)
        .sample_size(1_000)
        .build();
    let mut source = seeded(8);

    let population = generate_population(&params, &mut source).unwrap();
    let sample = sample_population(population, &params, &mut source).unwrap();

    assert_eq!(sample.len(), 300);
}

#[test]
fn test_case_control_balances_cases_and_controls() {
    let params = StudyParameters::builder()
        .study_type(StudyType::CaseControl)
        .population_size(20_000)
        .sample_size(1_000)
        .build();
    let mut source = seeded(12);

    let population = generate_population(&params, &mut source).unwrap();
    let sample = sample_population(population, &params, &mut source).unwrap();

    let cases = sample.iter().filter(|p| p.is_case()).count();
    assert_eq!(sample.len(), 1_000);
    assert_eq!(cases, 500);
}

#[test]
fn test_case_control_shortfall_of_cases() {
    // 30 cases available against a request for 100; controls fill the rest
    let population: Vec<_> = individuals(30, false, true, true)
        .chain(individuals(1_000, false, false, false))
        .collect();

    let sample = sample_case_control(population, 200, &mut seeded(4)).unwrap();

    assert_eq!(sample.iter().filter(|p| p.is_case()).count(), 30);
    assert_eq!(sample.iter().filter(|p| !p.is_case()).count(), 170);
    assert_eq!(
        CaseControlPlan::new(30, 1_000, 200),
        CaseControlPlan {
            cases: 30,
            controls: 170
        }
    );
}

#[test]
fn test_case_control_without_cases() {
    let params = StudyParameters::builder()
        .study_type(StudyType::CaseControl)
        .population_size(1_000)
        .baseline_risk(0.0)
        .true_effect_rr(1.0)
        .outcome_misclassification(0.0)
        .build();
    let mut source = seeded(1);

    let population = generate_population(&params, &mut source).unwrap();
    let result = sample_population(population, &params, &mut source);

    assert_eq!(
        result,
        Err(SimulationError::NoCasesGenerated {
            population_size: 1_000
        })
    );
}

#[test]
fn test_observed_cases_drive_case_selection() {
    // Every true case is misclassified, so "cases" are true non-cases
    let population: Vec<_> = individuals(500, false, false, false)
        .map(|mut p| {
            p.observed_outcome = p.id % 5 == 0;
            p
        })
        .collect();

    let sample = sample_case_control(population, 100, &mut seeded(6)).unwrap();
    let cases: Vec<_> = sample.iter().filter(|p| p.is_case()).collect();

    assert_eq!(cases.len(), 50);
    assert!(cases.iter().all(|p| !p.true_outcome));
}
