//! Error types.
//!
//! - `FitError` is what the fitter returns. Every variant means the input
//!   itself is unusable; there is nothing to retry.
//! - `AppError` is the binary's error: a message plus a process exit code.

/// Why a circle could not be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// The x and y coordinate slices differ in length.
    #[error("number of x and y coordinates must be the same (got {xs} x and {ys} y)")]
    MismatchedLengths { xs: usize, ys: usize },

    /// Fewer than three points were supplied.
    #[error("need at least 3 points to fit a circle (got {got})")]
    TooFewPoints { got: usize },

    /// The points are collinear or coincident within tolerance.
    #[error("points lie on a line")]
    CollinearPoints,
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(4, format!("Error: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_errors_map_to_exit_code_four() {
        let err: AppError = FitError::CollinearPoints.into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Error: points lie on a line");
    }

    #[test]
    fn fit_error_messages_carry_counts() {
        let err = FitError::MismatchedLengths { xs: 1, ys: 2 };
        assert!(err.to_string().contains("1 x and 2 y"));
        let err = FitError::TooFewPoints { got: 2 };
        assert!(err.to_string().contains("got 2"));
    }
}
