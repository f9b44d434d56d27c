//! Command-line parsing for the circle fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "circlefit", version, about = "Least-squares circle fit for 2D points")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a circle to points from a CSV file or inline coordinate lists.
    Fit(FitArgs),
    /// Generate a noisy sample on a circular arc and fit it.
    Sample(SampleArgs),
}

/// Options for fitting user-supplied points.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// CSV file with `x` and `y` columns.
    #[arg(short, long, conflicts_with_all = ["x", "y"])]
    pub input: Option<PathBuf>,

    /// Comma-separated x coordinates (use with --y).
    #[arg(long, requires = "y", allow_hyphen_values = true)]
    pub x: Option<String>,

    /// Comma-separated y coordinates (use with --x).
    #[arg(long, requires = "x", allow_hyphen_values = true)]
    pub y: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for synthetic samples.
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub center_x: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub center_y: f64,

    #[arg(long, default_value_t = 1.0)]
    pub radius: f64,

    /// Standard deviation of the Gaussian noise added to each coordinate.
    #[arg(long, default_value_t = 0.05)]
    pub noise: f64,

    /// Number of points to generate.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Arc start angle (degrees).
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub arc_start: f64,

    /// Arc extent (degrees).
    #[arg(long, default_value_t = 360.0)]
    pub arc: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Write the fit as JSON to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print this many points of the fitted circle outline (0 = none).
    #[arg(long, default_value_t = 0)]
    pub outline: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_fit() {
        let cli = Cli::parse_from(["circlefit", "fit", "--x", "0,1,0", "--y", "1,0,-1", "--outline", "36"]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.x.as_deref(), Some("0,1,0"));
        assert_eq!(args.y.as_deref(), Some("1,0,-1"));
        assert_eq!(args.output.outline, 36);
        assert!(args.input.is_none());
    }

    #[test]
    fn sample_defaults() {
        let cli = Cli::parse_from(["circlefit", "sample", "--center-x", "-3"]);
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        assert_eq!(args.center_x, -3.0);
        assert_eq!(args.count, 50);
        assert_eq!(args.seed, 42);
        assert_eq!(args.arc, 360.0);
    }

    #[test]
    fn x_requires_y() {
        assert!(Cli::try_parse_from(["circlefit", "fit", "--x", "1,2,3"]).is_err());
    }
}
