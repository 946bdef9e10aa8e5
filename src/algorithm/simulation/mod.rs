//! Simulation orchestration
//!
//! A run executes generate → sample → analyze `monte_carlo_runs` times.
//! The first iteration's analysis is the canonical single-run result; when
//! more than one run is requested every iteration's estimates are collected
//! to show the sampling distribution. The first failure aborts the run.

use std::time::Instant;

use indicatif::ProgressBar;
use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::algorithm::analysis::analyze;
use crate::algorithm::population::generate_population;
use crate::algorithm::random::VariateSource;
use crate::algorithm::sampling::sample_population;
use crate::config::StudyParameters;
use crate::error::Result;
use crate::models::{AnalysisResult, MonteCarloEstimates, SimulationResult};
use crate::utils::logging::progress;

/// Runner for one simulation configuration
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    /// Parameters shared by every iteration
    parameters: StudyParameters,
    /// Whether to draw a progress bar over iterations
    show_progress: bool,
}

impl SimulationRunner {
    /// Create a new runner for the given parameters
    #[must_use]
    pub const fn new(parameters: StudyParameters) -> Self {
        Self {
            parameters,
            show_progress: false,
        }
    }

    /// Set whether to show a progress bar
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run with a source seeded from operating system entropy
    pub fn run(&self) -> Result<SimulationResult> {
        let mut source: VariateSource<StdRng> = VariateSource::from_entropy();
        self.run_with(&mut source)
    }

    /// Run with an injected random source
    pub fn run_with<R: Rng>(&self, source: &mut VariateSource<R>) -> Result<SimulationResult> {
        let params = &self.parameters;
        params.validate()?;

        let start_time = Instant::now();
        let runs = params.monte_carlo_runs;
        info!(
            "Starting {} simulation: {} run(s), population {}, sample {}",
            params.study_type, runs, params.population_size, params.sample_size
        );

        let pb = if self.show_progress && params.is_monte_carlo() {
            progress::create_main_progress_bar(runs as u64, Some("Monte Carlo runs"))
        } else {
            ProgressBar::hidden()
        };

        let single_run = run_iteration(params, source)?;
        let mut estimates = params.is_monte_carlo().then(|| {
            let mut estimates = MonteCarloEstimates::with_capacity(runs);
            estimates.push(&single_run);
            estimates
        });
        pb.inc(1);

        for iteration in 1..runs {
            let analysis = run_iteration(params, source)?;
            debug!(
                "Run {}: adjusted OR {:.3}, crude RR {:.3}",
                iteration + 1,
                analysis.adjusted_or,
                analysis.crude_rr
            );
            if let Some(estimates) = estimates.as_mut() {
                estimates.push(&analysis);
            }
            pb.inc(1);
        }

        progress::finish_progress_bar(&pb, Some("Simulation complete"));

        info!(
            "Simulation finished in {:?}: crude OR {:.2}, adjusted OR {:.2}",
            start_time.elapsed(),
            single_run.crude_or,
            single_run.adjusted_or
        );

        Ok(SimulationResult {
            parameters: params.clone(),
            single_run,
            monte_carlo: estimates,
        })
    }
}

/// One generate → sample → analyze cycle
pub fn run_iteration<R: Rng>(
    params: &StudyParameters,
    source: &mut VariateSource<R>,
) -> Result<AnalysisResult> {
    let population = generate_population(params, source)?;
    let sample = sample_population(population, params, source)?;
    analyze(&sample, params.study_type)
}

/// Run a simulation with fresh, unseeded randomness
pub fn run_simulation(params: &StudyParameters) -> Result<SimulationResult> {
    SimulationRunner::new(params.clone()).run()
}
