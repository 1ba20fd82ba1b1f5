use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::{RegressionError, Result};

/// A validated, borrowed view of a training set.
///
/// Construction checks the invariants the training loop relies on, so the
/// loop itself never divides by zero or hits a backend shape mismatch:
/// - at least one sample and at least one feature,
/// - one target per feature row.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSet<'a, B: Backend> {
    x: &'a Tensor2D<B>,
    y: &'a Tensor1D<B>,
}

impl<'a, B: Backend> TrainingSet<'a, B> {
    /// # Errors
    /// - [`RegressionError::EmptyDataset`] if there are no rows or no columns.
    /// - [`RegressionError::DimensionMismatch`] if `x.rows() != y.len()`.
    pub fn new(x: &'a Tensor2D<B>, y: &'a Tensor1D<B>) -> Result<Self> {
        let (rows, cols) = x.shape();
        if rows == 0 && y.is_empty() {
            return Err(RegressionError::EmptyDataset("training set has no samples"));
        }
        if rows != y.len() {
            return Err(RegressionError::mismatch("targets", rows, y.len()));
        }
        if cols == 0 {
            return Err(RegressionError::EmptyDataset("training set has no features"));
        }
        Ok(Self { x, y })
    }

    pub fn features(&self) -> &'a Tensor2D<B> {
        self.x
    }

    pub fn targets(&self) -> &'a Tensor1D<B> {
        self.y
    }

    pub fn n_samples(&self) -> usize {
        self.x.rows()
    }

    pub fn n_features(&self) -> usize {
        self.x.cols()
    }
}
