//! Circle fitting.
//!
//! Responsibilities:
//!
//! - validate the point set
//! - pick the exact three-point construction or the least-squares fit
//! - report residual diagnostics

pub mod fitter;
pub mod quality;

pub use fitter::*;
pub use quality::*;
