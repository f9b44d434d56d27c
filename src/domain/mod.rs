//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - fit outputs (`Circle`, `CircleFit`, `FitQuality`, `FitMethod`)
//! - run configuration (`FitConfig`, `PointSource`, `SampleSpec`)
//! - the exported JSON schema (`FitFile`)

pub mod types;

pub use types::*;
