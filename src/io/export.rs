//! Read/write fit JSON files.
//!
//! The schema is defined by `domain::FitFile`: the fitted circle, the method
//! used, the point count and residual diagnostics.

use std::fs::File;
use std::path::Path;

use crate::domain::{CircleFit, FitFile};
use crate::error::AppError;

pub const TOOL_NAME: &str = "circlefit";

/// Write a fit JSON file.
pub fn write_fit_json(path: &Path, fit: &CircleFit) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    let out = FitFile {
        tool: TOOL_NAME.to_string(),
        fit: *fit,
    };
    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(4, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open fit JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid fit JSON: {e}")))
}
