//! `circlefit` library crate.
//!
//! Best-fit circle through a set of 2D points:
//!
//! ```
//! let c = circlefit::fit(&[0.0, 1.0, 0.0, -1.0], &[1.0, 0.0, -1.0, 0.0]).unwrap();
//! assert!((c.radius - 1.0).abs() < 1e-9);
//! ```
//!
//! The binary (`circlefit`) is a thin wrapper around this library so that the
//! fitting code is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;

pub use domain::{Circle, CircleFit, FitMethod, FitQuality};
pub use error::FitError;
pub use fit::{fit, fit_detailed, fit_points};
