//! Effect estimation from study samples
//!
//! [`measures`] holds the ratio formulas and interval methods;
//! [`estimator`] tabulates a sample and assembles an [`AnalysisResult`].
//!
//! [`AnalysisResult`]: crate::models::AnalysisResult

pub mod estimator;
pub mod measures;

pub use estimator::analyze;
