//! Regression metrics over host slices.

use crate::error::{RegressionError, Result};

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::mismatch(
            "predictions",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(RegressionError::EmptyDataset("no targets to score"));
    }
    Ok(())
}

/// Mean squared error: `mean((y_true − y_pred)²)`.
///
/// # Errors
/// - [`RegressionError::DimensionMismatch`] if the lengths differ.
/// - [`RegressionError::EmptyDataset`] if both are empty.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let sum_sq: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    Ok(sum_sq / y_true.len() as f64)
}

/// Coefficient of determination.
///
/// ```text
/// R² = 1 − SS_res / SS_tot
/// SS_res = Σ(y_true − y_pred)²
/// SS_tot = Σ(y_true − mean(y_true))²
/// ```
///
/// 1.0 is a perfect fit; values can be negative when the predictions are
/// worse than predicting the mean.
///
/// # Errors
/// - [`RegressionError::DimensionMismatch`] if the lengths differ.
/// - [`RegressionError::EmptyDataset`] if both are empty.
/// - [`RegressionError::UndefinedScore`] if the total sum of squares of
///   `y_true` is zero (constant targets, or a spread that underflows) or the
///   score is not finite.
///
/// # Example
/// ```
/// use ridge_gd::metrics::r2_score;
///
/// let y = [1.0, 2.0, 3.0];
/// assert_eq!(r2_score(&y, &y).unwrap(), 1.0);
/// assert!(r2_score(&[5.0, 5.0, 5.0], &y).is_err());
/// ```
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();
    // Zero, subnormal or non-finite denominators cannot give a finite score.
    if !ss_tot.is_normal() {
        return Err(RegressionError::UndefinedScore);
    }

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let r2 = 1.0 - ss_res / ss_tot;
    if !r2.is_finite() {
        return Err(RegressionError::UndefinedScore);
    }
    Ok(r2)
}
