//! Residual diagnostics for a fitted circle.

use crate::domain::{Circle, FitQuality};

/// Summarize how far the points lie from the circle boundary.
///
/// Only the common prefix of `xs` and `ys` is used; an empty point set yields
/// all-zero diagnostics.
pub fn fit_quality(circle: &Circle, xs: &[f64], ys: &[f64]) -> FitQuality {
    let mut sse = 0.0;
    let mut max_abs_residual: f64 = 0.0;
    let mut n = 0usize;

    for (&x, &y) in xs.iter().zip(ys) {
        let r = circle.distance_to(x, y);
        sse += r * r;
        max_abs_residual = max_abs_residual.max(r.abs());
        n += 1;
    }

    let rmse = if n == 0 { 0.0 } else { (sse / n as f64).sqrt() };
    FitQuality {
        sse,
        rmse,
        max_abs_residual,
    }
}
