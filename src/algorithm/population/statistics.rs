//! Population statistics and summaries
//!
//! Descriptive counts over a generated population. Used for debug logging
//! and for checking the causal structure the generator produces.

use std::fmt;

use crate::models::Individual;

/// Structure containing basic population statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationStats {
    /// Total number of individuals
    pub individual_count: usize,
    /// Individuals with the confounder
    pub confounder_count: usize,
    /// Truly exposed individuals
    pub exposed_count: usize,
    /// Individuals with the true outcome
    pub true_case_count: usize,
    /// Individuals recorded as cases
    pub observed_case_count: usize,
    /// Individuals whose observed exposure or outcome differs from the truth
    pub misclassified_count: usize,
    /// Individuals with both the confounder and the exposure
    pub confounded_exposed_count: usize,
}

impl PopulationStats {
    /// Count attributes over a population
    #[must_use]
    pub fn from_population(population: &[Individual]) -> Self {
        population.iter().fold(
            Self {
                individual_count: population.len(),
                ..Self::default()
            },
            |mut stats, p| {
                stats.confounder_count += usize::from(p.true_confounder);
                stats.exposed_count += usize::from(p.true_exposure);
                stats.true_case_count += usize::from(p.true_outcome);
                stats.observed_case_count += usize::from(p.observed_outcome);
                stats.misclassified_count += usize::from(p.is_misclassified());
                stats.confounded_exposed_count +=
                    usize::from(p.true_confounder && p.true_exposure);
                stats
            },
        )
    }

    fn proportion(&self, count: usize) -> f64 {
        if self.individual_count == 0 {
            0.0
        } else {
            count as f64 / self.individual_count as f64
        }
    }

    /// Share of individuals with the confounder
    #[must_use]
    pub fn confounder_prevalence(&self) -> f64 {
        self.proportion(self.confounder_count)
    }

    /// Share of truly exposed individuals
    #[must_use]
    pub fn exposure_prevalence(&self) -> f64 {
        self.proportion(self.exposed_count)
    }

    /// Share of individuals with the true outcome
    #[must_use]
    pub fn outcome_prevalence(&self) -> f64 {
        self.proportion(self.true_case_count)
    }

    /// Pearson (phi) correlation between true confounder and true exposure
    ///
    /// Returns NaN when either attribute is constant in the population.
    #[must_use]
    pub fn confounder_exposure_correlation(&self) -> f64 {
        let p_c = self.confounder_prevalence();
        let p_e = self.exposure_prevalence();
        let p_ce = self.proportion(self.confounded_exposed_count);
        (p_ce - p_c * p_e) / (p_c * (1.0 - p_c) * p_e * (1.0 - p_e)).sqrt()
    }
}

impl fmt::Display for PopulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Population: {} individuals, confounder {:.1}%, exposed {:.1}%, \
             true cases {} ({:.1}%), observed cases {}, misclassified {}",
            self.individual_count,
            self.confounder_prevalence() * 100.0,
            self.exposure_prevalence() * 100.0,
            self.true_case_count,
            self.outcome_prevalence() * 100.0,
            self.observed_case_count,
            self.misclassified_count
        )
    }
}
