//! Tolerance checks and centered moment sums.
//!
//! The least-squares circle fit (Bullock, 2006) is linear in the center once
//! the points are shifted to their centroid:
//!
//! ```text
//! u_i = x_i - x̄,   v_i = y_i - ȳ
//!
//! Suu uc + Suv vc = ½ (Suuu + Suvv)
//! Suv uc + Svv vc = ½ (Svvv + Svuu)
//! ```
//!
//! so all the fitter needs from the data are these second and third moments.

/// Absolute tolerance for every "is this zero" decision in the fitter.
pub const EPSILON: f64 = 1e-6;

/// `true` when `value` lies in `[-EPSILON, EPSILON]`.
pub fn is_approx_zero(value: f64) -> bool {
    (-EPSILON..=EPSILON).contains(&value)
}

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Second and third moments of a point set about its centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenteredMoments {
    pub n: usize,
    pub x_mean: f64,
    pub y_mean: f64,
    pub suu: f64,
    pub svv: f64,
    pub suv: f64,
    pub suuu: f64,
    pub svvv: f64,
    pub suvv: f64,
    pub svuu: f64,
}

impl CenteredMoments {
    /// Accumulate all moments in one pass over the centered coordinates.
    ///
    /// `xs` and `ys` must have the same length; only the common prefix is used.
    pub fn from_points(xs: &[f64], ys: &[f64]) -> Self {
        let x_mean = mean(xs);
        let y_mean = mean(ys);

        let mut m = CenteredMoments {
            n: xs.len().min(ys.len()),
            x_mean,
            y_mean,
            ..Default::default()
        };

        for (&x, &y) in xs.iter().zip(ys) {
            let u = x - x_mean;
            let v = y - y_mean;
            let uu = u * u;
            let vv = v * v;

            m.suu += uu;
            m.svv += vv;
            m.suv += u * v;

            m.suuu += uu * u;
            m.svvv += vv * v;

            m.suvv += u * vv;
            m.svuu += v * uu;
        }

        m
    }

    /// Right-hand side of the first normal equation.
    pub fn e4(&self) -> f64 {
        0.5 * (self.suuu + self.suvv)
    }

    /// Right-hand side of the second normal equation.
    pub fn e5(&self) -> f64 {
        0.5 * (self.svvv + self.svuu)
    }

    /// Determinant of the 2x2 normal matrix, `Suu Svv - Suv²`.
    pub fn determinant(&self) -> f64 {
        self.suu * self.svv - self.suv * self.suv
    }
}
