//! Error types for fitting, prediction and scoring.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Error type for regression operations.
///
/// Every variant is a precondition violation detected at the API boundary;
/// none of them are retried and the model state is left untouched.
#[derive(Debug, Error)]
pub enum RegressionError {
    /// Shapes of the supplied inputs disagree.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No samples (or no features) were supplied.
    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    /// `predict` or `score` was called before a successful `fit`.
    #[error("model is not fitted: call fit before {0}")]
    NotFitted(&'static str),

    /// R² denominator is zero because the true targets are constant.
    #[error("R² score is undefined: y_true has zero variance")]
    UndefinedScore,

    /// Invalid hyperparameter value.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegressionError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        RegressionError::DimensionMismatch {
            context,
            expected,
            actual,
        }
    }
}
