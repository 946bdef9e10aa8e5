//! Domain models for the study simulation
//!
//! This module contains the entities produced and consumed by the engine:
//! synthetic individuals, contingency tables, and analysis results.

pub mod individual;
pub mod results;
pub mod table;

// Re-export commonly used types
pub use individual::Individual;
pub use results::{AnalysisResult, ConfidenceInterval, MonteCarloEstimates, SimulationResult};
pub use table::{ContingencyTable, StratifiedTables};
