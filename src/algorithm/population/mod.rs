//! Population generation for simulated studies
//!
//! This module builds synthetic populations with a known causal structure
//! among a confounder, an exposure and an outcome, plus observation noise.

pub mod generator;
pub mod statistics;

// Re-export commonly used items
pub use generator::{ExposureModel, generate_population, outcome_risk};
pub use statistics::PopulationStats;
