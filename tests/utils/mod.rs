use rand::rngs::StdRng;
use study_sim::{AnalysisResult, Individual, StudyParameters, StudyType, VariateSource};

/// Seeded random source so assertions are repeatable
#[must_use]
pub fn seeded(seed: u64) -> VariateSource<StdRng> {
    VariateSource::seeded(seed)
}

/// Parameters for a study with no confounding and no misclassification
#[must_use]
pub fn unconfounded_params(study_type: StudyType) -> StudyParameters {
    StudyParameters::builder()
        .study_type(study_type)
        .population_size(5_000)
        .sample_size(1_000)
        .confounder_effect_rr(1.0)
        .confounder_exposure_corr(0.0)
        .exposure_misclassification(0.0)
        .outcome_misclassification(0.0)
        .build()
}

/// Build `count` individuals whose observed state matches the truth
pub fn individuals(
    count: usize,
    confounder: bool,
    exposure: bool,
    outcome: bool,
) -> impl Iterator<Item = Individual> {
    (0..count).map(move |id| Individual {
        id,
        true_confounder: confounder,
        true_exposure: exposure,
        true_outcome: outcome,
        observed_exposure: exposure,
        observed_outcome: outcome,
    })
}

/// Arithmetic mean of finite values
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    finite.iter().sum::<f64>() / finite.len() as f64
}

/// Print the key estimates of an analysis
pub fn print_analysis(analysis: &AnalysisResult) {
    println!("{}", analysis.two_by_two_table);
    println!(
        "crude OR {:.3} {}, crude RR {:.3} {}, adjusted OR {:.3} {}",
        analysis.crude_or,
        analysis.crude_or_ci,
        analysis.crude_rr,
        analysis.crude_rr_ci,
        analysis.adjusted_or,
        analysis.adjusted_or_ci
    );
}
