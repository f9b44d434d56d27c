//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - returned from the fitter by value
//! - exported to JSON
//! - reused by the binary for reporting

use std::path::PathBuf;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A fitted circle.
///
/// For four or more points this is the algebraic least-squares fit, so it is
/// not guaranteed to pass through any input point. For exactly three points it
/// is the circumscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.center_x, self.center_y)
    }

    /// Signed distance from `(x, y)` to the circle boundary.
    ///
    /// Negative inside, positive outside.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y) - self.radius
    }

    /// Boundary point at `angle` radians, measured counter-clockwise from +x.
    pub fn point_at(&self, angle: f64) -> Point2<f64> {
        Point2::new(
            self.center_x + self.radius * angle.cos(),
            self.center_y + self.radius * angle.sin(),
        )
    }

    /// `steps` evenly spaced boundary points, starting at angle 0.
    ///
    /// At least three points are always produced.
    pub fn outline(&self, steps: usize) -> Vec<Point2<f64>> {
        let steps = steps.max(3);
        let step = std::f64::consts::TAU / steps as f64;
        (0..steps).map(|i| self.point_at(step * i as f64)).collect()
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }
}

/// Which algorithm produced a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMethod {
    /// Exact circumscribed circle through three points.
    ThreePoint,
    /// Moment-based algebraic least squares (four or more points).
    LeastSquares,
}

impl FitMethod {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FitMethod::ThreePoint => "three-point (exact)",
            FitMethod::LeastSquares => "least squares",
        }
    }
}

/// Residual diagnostics of a circle against the points it was fitted to.
///
/// The residual of a point is its signed distance to the circle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub max_abs_residual: f64,
}

/// Fit output with provenance and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleFit {
    pub circle: Circle,
    pub method: FitMethod,
    pub n_points: usize,
    pub quality: FitQuality,
}

/// Parameters for synthetic sample generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSpec {
    pub circle: Circle,
    /// Standard deviation of the Gaussian noise added to each coordinate.
    pub noise: f64,
    pub count: usize,
    pub seed: u64,
    /// Arc start angle (degrees).
    pub arc_start_deg: f64,
    /// Arc extent (degrees), in `(0, 360]`.
    pub arc_deg: f64,
}

/// Where a run gets its points from.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSource {
    Csv(PathBuf),
    Inline { xs: Vec<f64>, ys: Vec<f64> },
    Sample(SampleSpec),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub source: PointSource,
    /// Number of outline points to print (0 disables the dump).
    pub outline_steps: usize,
    pub export_fit: Option<PathBuf>,
}

/// A saved fit file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub fit: CircleFit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_geometry() {
        let c = Circle::new(1.0, -1.0, 2.0);
        assert_eq!(c.center(), Point2::new(1.0, -1.0));
        assert!((c.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!((c.circumference() - 4.0 * std::f64::consts::PI).abs() < 1e-12);

        let top = c.point_at(std::f64::consts::FRAC_PI_2);
        assert!((top.x - 1.0).abs() < 1e-12 && (top.y - 1.0).abs() < 1e-12);

        assert!((c.distance_to(1.0, -1.0) + 2.0).abs() < 1e-12);
        assert!((c.distance_to(4.0, -1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn outline_is_evenly_spaced_on_boundary() {
        let c = Circle::new(0.0, 0.0, 3.0);
        assert_eq!(c.outline(0).len(), 3);
        let pts = c.outline(36);
        assert_eq!(pts.len(), 36);
        for p in &pts {
            assert!(c.distance_to(p.x, p.y).abs() < 1e-12);
        }
    }

    #[test]
    fn method_serializes_snake_case() {
        let json = serde_json::to_string(&FitMethod::ThreePoint).unwrap();
        assert_eq!(json, "\"three_point\"");
    }
}
