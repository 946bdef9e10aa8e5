//! Logging utilities
//!
//! This module provides standardized logging functions for file operations
//! performed around a simulation run.

use std::path::Path;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was operated on
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {} {} in {:?}", operation, path.display(), duration);
    } else {
        log::info!("Successfully {} {}", operation, path.display());
    }
}
