//! Circle fitting for a single point set.
//!
//! Given x coordinates `xs` and y coordinates `ys`:
//! - exactly three points give the circumscribed circle (closed form)
//! - four or more points give the algebraic least-squares circle, solved from
//!   the centered moments of the point set
//!
//! Degenerate inputs (collinear or coincident points) are reported as
//! `FitError::CollinearPoints` rather than leaking NaN/Inf.

use nalgebra::Point2;
use tracing::debug;

use crate::domain::{Circle, CircleFit, FitMethod};
use crate::error::FitError;
use crate::fit::quality::fit_quality;
use crate::math::{CenteredMoments, is_approx_zero};

/// Smallest point count that defines a circle.
pub const MIN_POINTS: usize = 3;

/// Fit a circle to the points `(xs[i], ys[i])`.
///
/// Lengths are validated before any arithmetic. Input finiteness is not
/// checked: non-finite coordinates produce a non-finite circle.
pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Circle, FitError> {
    fit_with_method(xs, ys).map(|(circle, _)| circle)
}

/// Fit a circle to a slice of points.
pub fn fit_points(points: &[Point2<f64>]) -> Result<Circle, FitError> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().map(|p| (p.x, p.y)).unzip();
    fit(&xs, &ys)
}

/// Fit a circle and report which method was used and how well it matches the
/// input points.
pub fn fit_detailed(xs: &[f64], ys: &[f64]) -> Result<CircleFit, FitError> {
    let (circle, method) = fit_with_method(xs, ys)?;
    Ok(CircleFit {
        circle,
        method,
        n_points: xs.len(),
        quality: fit_quality(&circle, xs, ys),
    })
}

fn fit_with_method(xs: &[f64], ys: &[f64]) -> Result<(Circle, FitMethod), FitError> {
    validate(xs, ys)?;

    if xs.len() == MIN_POINTS {
        debug!("fitting circumscribed circle through 3 points");
        return three_point_circle(xs, ys).map(|c| (c, FitMethod::ThreePoint));
    }

    debug!(n = xs.len(), "fitting least-squares circle");
    least_squares_circle(xs, ys).map(|c| (c, FitMethod::LeastSquares))
}

fn validate(xs: &[f64], ys: &[f64]) -> Result<(), FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::MismatchedLengths {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < MIN_POINTS {
        return Err(FitError::TooFewPoints { got: xs.len() });
    }
    Ok(())
}

/// Point orders tried for the three-point construction.
///
/// The circumcircle does not depend on point order, but the slope formula
/// needs both chords `P1P2` and `P2P3` to be non-vertical. The first entry is
/// the caller's order, the second swaps P2 and P3, the third moves P1 to the
/// middle. Unless all three x coordinates coincide, one of them works.
const THREE_POINT_ORDERS: [[usize; 3]; 3] = [[0, 1, 2], [0, 2, 1], [1, 0, 2]];

/// Circumscribed circle through exactly three points.
///
/// Center from the intersection of the chord perpendicular bisectors
/// (P. Bourke, "Equation of a Circle from 3 Points").
fn three_point_circle(xs: &[f64], ys: &[f64]) -> Result<Circle, FitError> {
    let order = THREE_POINT_ORDERS.iter().find(|o| {
        !is_approx_zero(xs[o[1]] - xs[o[0]]) && !is_approx_zero(xs[o[2]] - xs[o[1]])
    });
    let Some(&[i1, i2, i3]) = order else {
        debug!("all three points share an x coordinate");
        return Err(FitError::CollinearPoints);
    };

    let (x1, y1) = (xs[i1], ys[i1]);
    let (x2, y2) = (xs[i2], ys[i2]);
    let (x3, y3) = (xs[i3], ys[i3]);

    let ma = (y2 - y1) / (x2 - x1);
    let mb = (y3 - y2) / (x3 - x2);
    if is_approx_zero(ma - mb) {
        debug!(ma, mb, "chord slopes are equal");
        return Err(FitError::CollinearPoints);
    }

    let center_x = (ma * mb * (y1 - y3) + mb * (x1 + x2) - ma * (x2 + x3)) / (2.0 * (mb - ma));
    // A horizontal second chord has a vertical bisector; use the first one.
    let center_y = if is_approx_zero(mb) {
        (-1.0 / ma) * (center_x - (x1 + x2) / 2.0) + (y1 + y2) / 2.0
    } else {
        (-1.0 / mb) * (center_x - (x2 + x3) / 2.0) + (y2 + y3) / 2.0
    };
    let radius = (center_x - x1).hypot(center_y - y1);

    Ok(Circle::new(center_x, center_y, radius))
}

/// Algebraic least-squares circle (Bullock, "Least-Squares Circle Fit", 2006).
fn least_squares_circle(xs: &[f64], ys: &[f64]) -> Result<Circle, FitError> {
    let m = CenteredMoments::from_points(xs, ys);

    let det = m.determinant();
    if is_approx_zero(det) {
        debug!(det, "normal matrix is singular");
        return Err(FitError::CollinearPoints);
    }

    let e4 = m.e4();
    let e5 = m.e5();

    let uc = (m.svv * e4 - m.suv * e5) / det;
    let vc = if is_approx_zero(m.suv) {
        // First normal equation no longer constrains vc; use Cramer's rule on
        // the second.
        (m.suu * e5 - m.suv * e4) / det
    } else {
        (e4 - uc * m.suu) / m.suv
    };

    let radius = (uc * uc + vc * vc + (m.suu + m.svv) / m.n as f64).sqrt();

    Ok(Circle::new(uc + m.x_mean, vc + m.y_mean, radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_circle(c: Circle, x: f64, y: f64, r: f64) {
        assert!(
            (c.center_x - x).abs() < TOL && (c.center_y - y).abs() < TOL && (c.radius - r).abs() < TOL,
            "expected ({x}, {y}, r={r}), got {c:?}"
        );
    }

    #[test]
    fn needs_three_points_with_matching_counts() {
        assert_eq!(fit(&[], &[]), Err(FitError::TooFewPoints { got: 0 }));
        assert_eq!(fit(&[1.0], &[1.0]), Err(FitError::TooFewPoints { got: 1 }));
        assert_eq!(
            fit(&[1.0, 2.0], &[1.0, 2.0]),
            Err(FitError::TooFewPoints { got: 2 })
        );
        assert_eq!(
            fit(&[1.0], &[1.0, 2.0]),
            Err(FitError::MismatchedLengths { xs: 1, ys: 2 })
        );
        assert_eq!(
            fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]),
            Err(FitError::MismatchedLengths { xs: 3, ys: 4 })
        );
        assert_eq!(
            fit(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0]),
            Err(FitError::MismatchedLengths { xs: 4, ys: 3 })
        );
    }

    #[test]
    fn three_points_on_unit_circle() {
        assert_circle(fit(&[0.0, 1.0, 0.0], &[1.0, 0.0, -1.0]).unwrap(), 0.0, 0.0, 1.0);
        assert_circle(fit(&[-1.0, 0.0, 1.0], &[0.0, 1.0, 0.0]).unwrap(), 0.0, 0.0, 1.0);
        assert_circle(fit(&[0.0, 0.0, 1.0], &[1.0, -1.0, 0.0]).unwrap(), 0.0, 0.0, 1.0);
        assert_circle(fit(&[1.0, -1.0, 0.0], &[0.0, 0.0, 1.0]).unwrap(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn swapping_axes_swaps_center() {
        let a = fit(&[0.0, 0.0, 1.0], &[1.0, -1.0, 0.0]).unwrap();
        let b = fit(&[1.0, -1.0, 0.0], &[0.0, 0.0, 1.0]).unwrap();
        assert!((a.center_x - b.center_y).abs() < TOL);
        assert!((a.center_y - b.center_x).abs() < TOL);
        assert!((a.radius - b.radius).abs() < TOL);
    }

    #[test]
    fn three_points_with_vertical_second_chord() {
        // (0,1) (1,0) (1,2): P2 and P3 share x, P1 has to move to the middle.
        assert_circle(fit(&[0.0, 1.0, 1.0], &[1.0, 0.0, 2.0]).unwrap(), 1.0, 1.0, 1.0);
        assert_circle(fit(&[1.0, 0.0, 0.0], &[0.0, 1.0, -1.0]).unwrap(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn three_points_with_horizontal_second_chord() {
        // After the order is fixed the chord P2P3 is horizontal (mb = 0).
        assert_circle(fit(&[0.0, 1.0, -1.0], &[1.0, 0.0, 0.0]).unwrap(), 0.0, 0.0, 1.0);
        assert_circle(fit(&[2.0, 4.0, 0.0], &[3.0, 1.0, 1.0]).unwrap(), 2.0, 1.0, 2.0);
    }

    #[test]
    fn three_points_are_circumscribed() {
        let xs = [3.5, -2.25, 7.0];
        let ys = [1.0, 4.0, -6.5];
        let c = fit(&xs, &ys).unwrap();
        assert!(c.radius >= 0.0);
        for (&x, &y) in xs.iter().zip(&ys) {
            assert!(c.distance_to(x, y).abs() < 1e-9, "{c:?} misses ({x}, {y})");
        }
    }

    #[test]
    fn four_points_on_unit_circle() {
        let c = fit(&[0.0, 1.0, 0.0, -1.0], &[1.0, 0.0, -1.0, 0.0]).unwrap();
        assert_circle(c, 0.0, 0.0, 1.0);
    }

    #[test]
    fn least_squares_recovers_offset_circle() {
        let truth = Circle::new(3.0, -2.0, 5.0);
        let points = truth.outline(12);
        let c = fit_points(&points).unwrap();
        assert_circle(c, 3.0, -2.0, 5.0);
    }

    #[test]
    fn least_squares_with_uncorrelated_moments() {
        // Suv = 0 but the points are not symmetric about the centroid in y.
        let xs = [1.0, -1.0, 0.0, 0.0];
        let ys = [0.0, 0.0, 1.0, 1.0];
        let m = CenteredMoments::from_points(&xs, &ys);
        assert!(is_approx_zero(m.suv));

        let c = fit(&xs, &ys).unwrap();
        assert!(c.center_x.abs() < TOL);
        assert!(c.center_y.abs() < TOL, "{c:?}");
        assert!(c.radius > 0.0);
    }

    #[test]
    fn collinear_points_fail() {
        for (xs, ys) in [
            (vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0]),
            (vec![1.0, 2.0, 3.0, 4.0], vec![0.0, 0.0, 0.0, 0.0]),
            (vec![0.0, 0.0, 0.0], vec![1.0, 2.0, 3.0]),
            (vec![0.0, 0.0, 0.0, 0.0], vec![1.0, 2.0, 3.0, 4.0]),
            (vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]),
            (vec![0.0, 0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0, 0.0]),
            (vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]),
            (vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![1.0, 3.0, 5.0, 7.0, 9.0]),
        ] {
            assert_eq!(fit(&xs, &ys), Err(FitError::CollinearPoints), "{xs:?} {ys:?}");
        }
    }

    #[test]
    fn fit_is_repeatable() {
        let xs = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
        let ys = [0.0, 0.25, 1.0, 2.25, 4.0, 6.25, 9.0];
        let a = fit(&xs, &ys).unwrap();
        let b = fit(&xs, &ys).unwrap();
        assert_eq!(a, b);
        assert!(a.radius >= 0.0);
    }

    #[test]
    fn detailed_fit_reports_method_and_quality() {
        let three = fit_detailed(&[0.0, 1.0, 0.0], &[1.0, 0.0, -1.0]).unwrap();
        assert_eq!(three.method, FitMethod::ThreePoint);
        assert_eq!(three.n_points, 3);
        assert!(three.quality.rmse < TOL);

        let four = fit_detailed(&[0.0, 1.0, 0.0, -1.0], &[1.0, 0.0, -1.0, 0.0]).unwrap();
        assert_eq!(four.method, FitMethod::LeastSquares);
        assert_eq!(four.n_points, 4);
        assert!(four.quality.max_abs_residual < TOL);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let xs = vec![0.0, 1.0, 0.0, -1.0];
        let ys = vec![1.0, 0.0, -1.0, 0.0];
        let before = (xs.clone(), ys.clone());
        let _ = fit(&xs, &ys);
        assert_eq!((xs, ys), before);
    }
}
