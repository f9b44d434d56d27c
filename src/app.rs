//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs the log subscriber
//! - parses CLI arguments
//! - runs the fit pipeline
//! - prints the summary and optional outline, writes optional exports

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, FitArgs, SampleArgs};
use crate::domain::{Circle, FitConfig, PointSource, SampleSpec};
use crate::error::AppError;

pub mod pipeline;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "circlefit=warn";

/// Entry point for the `circlefit` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env file is fine; it only exists to set RUST_LOG locally.
    dotenvy::dotenv().ok();
    init_logging();

    let cli = crate::cli::Cli::parse();
    let config = match cli.command {
        Command::Fit(args) => fit_config_from_args(&args)?,
        Command::Sample(args) => sample_config_from_args(&args),
    };

    handle_run(&config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_run(config: &FitConfig) -> Result<(), AppError> {
    let run = pipeline::run_fit(config)?;

    if !run.row_errors.is_empty() {
        warn!(count = run.row_errors.len(), "some input rows were skipped");
    }

    println!("{}", crate::report::format_fit_summary(&run.fit));

    if config.outline_steps > 0 {
        println!();
        println!("{}", crate::report::format_outline(&run.fit.circle, config.outline_steps));
    }

    if let Some(path) = &config.export_fit {
        crate::io::export::write_fit_json(path, &run.fit)?;
    }

    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> Result<FitConfig, AppError> {
    let source = match (&args.input, &args.x, &args.y) {
        (Some(path), _, _) => PointSource::Csv(path.clone()),
        (None, Some(x), Some(y)) => pipeline::inline_source(x, y)?,
        _ => {
            return Err(AppError::new(
                2,
                "Provide points with --input FILE or with --x LIST --y LIST.",
            ));
        }
    };

    Ok(FitConfig {
        source,
        outline_steps: args.output.outline,
        export_fit: args.output.export.clone(),
    })
}

pub fn sample_config_from_args(args: &SampleArgs) -> FitConfig {
    FitConfig {
        source: PointSource::Sample(SampleSpec {
            circle: Circle::new(args.center_x, args.center_y, args.radius),
            noise: args.noise,
            count: args.count,
            seed: args.seed,
            arc_start_deg: args.arc_start,
            arc_deg: args.arc,
        }),
        outline_steps: args.output.outline,
        export_fit: args.output.export.clone(),
    }
}
