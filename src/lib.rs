//! A simulation engine for teaching how study design choices distort the
//! estimated effect of an exposure on an outcome.
//!
//! Synthetic populations are generated under a known causal model with a
//! binary confounder, sampled according to a cohort, case-control or RCT
//! design, and analysed with crude and Mantel-Haenszel adjusted effect
//! measures. Repeating the pipeline (Monte Carlo) shows estimator variability
//! around the known ground truth relative risk.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{StudyParameters, StudyParametersBuilder, StudyType};
pub use error::{Result, SimulationError};
pub use models::{
    AnalysisResult, ConfidenceInterval, ContingencyTable, Individual, MonteCarloEstimates,
    SimulationResult, StratifiedTables,
};

// Pipeline stages
pub use algorithm::analysis::analyze;
pub use algorithm::population::generate_population;
pub use algorithm::random::VariateSource;
pub use algorithm::sampling::sample_population;
pub use algorithm::simulation::{SimulationRunner, run_iteration, run_simulation};

// Reporting
pub use algorithm::report::{BiasAssessment, DistributionSummary, SimulationSummary};
