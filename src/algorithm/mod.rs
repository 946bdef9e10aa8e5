//! Algorithm implementations for the study simulation workflow
//!
//! This module contains the simulation pipeline: population generation,
//! study sampling, effect estimation, orchestration of repeated runs, and
//! reporting over the results.

pub mod analysis;
pub mod population;
pub mod random;
pub mod report;
pub mod sampling;
pub mod simulation;
