//! Shared "fit pipeline": load points from the configured source, fit, report.
//!
//! Keeping this separate from `app::run` lets tests drive a whole run without
//! parsing argv or printing.

use tracing::info;

use crate::data::generate_sample;
use crate::domain::{CircleFit, FitConfig, PointSource};
use crate::error::AppError;
use crate::fit::fit_detailed;
use crate::io::ingest::{RowError, parse_number_list, read_points_csv};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub fit: CircleFit,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// CSV rows that were skipped (empty for other sources).
    pub row_errors: Vec<RowError>,
}

/// Execute the pipeline for `config` and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let (xs, ys, row_errors) = load_points(&config.source)?;
    info!(n = xs.len(), skipped = row_errors.len(), "loaded points");

    let fit = fit_detailed(&xs, &ys)?;
    info!(
        method = fit.method.display_name(),
        center_x = fit.circle.center_x,
        center_y = fit.circle.center_y,
        radius = fit.circle.radius,
        "fitted circle"
    );

    Ok(RunOutput {
        fit,
        xs,
        ys,
        row_errors,
    })
}

fn load_points(source: &PointSource) -> Result<(Vec<f64>, Vec<f64>, Vec<RowError>), AppError> {
    match source {
        PointSource::Csv(path) => {
            let ingest = read_points_csv(path)?;
            Ok((ingest.xs, ingest.ys, ingest.row_errors))
        }
        PointSource::Inline { xs, ys } => Ok((xs.clone(), ys.clone(), Vec::new())),
        PointSource::Sample(spec) => {
            let sample = generate_sample(spec)?;
            Ok((sample.xs, sample.ys, Vec::new()))
        }
    }
}

/// Build an inline point source from comma-separated coordinate lists.
pub fn inline_source(x_list: &str, y_list: &str) -> Result<PointSource, AppError> {
    Ok(PointSource::Inline {
        xs: parse_number_list(x_list)?,
        ys: parse_number_list(y_list)?,
    })
}
