//! Mathematical utilities: tolerance policy and moment sums.

pub mod moments;

pub use moments::*;
