//! Terminal formatting of fit results.
//!
//! We keep formatting code in one place so the fitting code stays free of
//! presentation concerns.

use crate::domain::{Circle, CircleFit};

/// Format the fit summary printed by `circlefit fit` / `circlefit sample`.
pub fn format_fit_summary(fit: &CircleFit) -> String {
    let c = &fit.circle;
    let q = &fit.quality;

    let mut out = String::new();
    out.push_str("=== circlefit ===\n");
    out.push_str(&format!("Points: {}\n", fit.n_points));
    out.push_str(&format!("Method: {}\n", fit.method.display_name()));
    out.push_str(&format!("Center: ({:.6}, {:.6})\n", c.center_x, c.center_y));
    out.push_str(&format!("Radius: {:.6}\n", c.radius));
    out.push_str(&format!(
        "Residuals: rmse={:.6}, max={:.6}, sse={:.6}",
        q.rmse, q.max_abs_residual, q.sse
    ));
    out
}

/// Boundary points of `circle`, one `x y` pair per line.
pub fn format_outline(circle: &Circle, steps: usize) -> String {
    circle
        .outline(steps)
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join("\n")
}
