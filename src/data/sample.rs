//! Synthetic point samples on a circular arc.
//!
//! Used by the `sample` command and by tests that need realistic noisy input.
//! Generation is fully determined by the `SampleSpec` (including its seed).

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use tracing::debug;

use crate::domain::SampleSpec;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoints {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SamplePoints {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Draw `spec.count` points at uniform angles on the arc, each coordinate
/// perturbed by `N(0, spec.noise)`.
pub fn generate_sample(spec: &SampleSpec) -> Result<SamplePoints, AppError> {
    if spec.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    let c = &spec.circle;
    if !(c.center_x.is_finite() && c.center_y.is_finite()) {
        return Err(AppError::new(2, "Sample center must be finite."));
    }
    if !(c.radius.is_finite() && c.radius > 0.0) {
        return Err(AppError::new(2, format!("Invalid sample radius: {} (must be finite and > 0).", c.radius)));
    }
    if !(spec.noise.is_finite() && spec.noise >= 0.0) {
        return Err(AppError::new(2, format!("Invalid noise level: {} (must be finite and >= 0).", spec.noise)));
    }
    if !(spec.arc_start_deg.is_finite() && spec.arc_deg.is_finite() && spec.arc_deg > 0.0 && spec.arc_deg <= 360.0) {
        return Err(AppError::new(
            2,
            format!("Invalid arc: start={}, extent={} (extent must be in (0, 360]).", spec.arc_start_deg, spec.arc_deg),
        ));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let start = spec.arc_start_deg.to_radians();
    let extent = spec.arc_deg.to_radians();

    let mut xs = Vec::with_capacity(spec.count);
    let mut ys = Vec::with_capacity(spec.count);
    for _ in 0..spec.count {
        let angle = start + rng.gen_range(0.0..=extent);
        let p = c.point_at(angle);
        xs.push(p.x + spec.noise * normal.sample(&mut rng));
        ys.push(p.y + spec.noise * normal.sample(&mut rng));
    }

    debug!(count = spec.count, seed = spec.seed, noise = spec.noise, "generated sample");
    Ok(SamplePoints { xs, ys })
}
