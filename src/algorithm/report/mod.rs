//! Post-run reporting
//!
//! Read-only views over a [`SimulationResult`] for presentation layers:
//! bias against the ground truth, the Monte Carlo sampling distribution,
//! and a plain-text summary.
//!
//! [`SimulationResult`]: crate::models::SimulationResult

pub mod bias;
pub mod distribution;
pub mod summary;

pub use bias::{BiasAssessment, HeadlineMeasure, SUCCESS_TOLERANCE};
pub use distribution::{DistributionSummary, HistogramBin};
pub use summary::SimulationSummary;
