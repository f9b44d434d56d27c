//! Point sources that are not files: synthetic samples.

pub mod sample;

pub use sample::*;
