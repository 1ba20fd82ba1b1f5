use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use crate::error::{RegressionError, Result};
use std::marker::PhantomData;

/// Backend-typed row-major matrix (samples × features).
///
/// Constructors validate the shape, so every row of a `Tensor2D` has the same
/// number of columns.
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Builds a matrix from row-major data.
    ///
    /// # Errors
    /// [`RegressionError::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            data: B::from_vec_2d(data, rows, cols)?,
            backend: PhantomData,
        })
    }

    /// Builds a matrix from a slice of rows.
    ///
    /// An empty slice yields a `0 × 0` matrix.
    ///
    /// # Errors
    /// [`RegressionError::DimensionMismatch`] if the rows are ragged.
    ///
    /// # Example
    /// ```
    /// # #[cfg(feature = "cpu")]
    /// # fn main() {
    /// use ridge_gd::backend::{CpuBackend, Tensor2D};
    ///
    /// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(x.shape(), (2, 2));
    ///
    /// assert!(Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// # }
    /// # #[cfg(not(feature = "cpu"))]
    /// # fn main() {}
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(RegressionError::mismatch("feature row", cols, bad.len()));
        }
        let data = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Self::new(data, rows.len(), cols)
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: B::zeros_2d(rows, cols),
            backend: PhantomData,
        }
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    pub fn rows(&self) -> usize {
        self.shape().0
    }

    pub fn cols(&self) -> usize {
        self.shape().1
    }

    /// Matrix-vector product `self · v`; `v.len()` must equal `cols()`.
    pub fn dot(&self, v: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::wrap(B::matvec(&self.data, &v.data))
    }

    /// Transposed product `selfᵀ · v`; `v.len()` must equal `rows()`.
    pub fn tdot(&self, v: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::wrap(B::matvec_transposed(&self.data, &v.data))
    }
}

impl<B: Backend> std::fmt::Debug for Tensor2D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.shape();
        f.debug_struct("Tensor2D")
            .field("rows", &rows)
            .field("cols", &cols)
            .finish()
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor2d_matvec_ops() {
        // A = [[1.0, 2.0],
        //      [3.0, 4.0]]
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        // A @ x = [1.0, 3.0]
        assert_eq!(a.dot(&x).to_vec(), vec![1.0, 3.0]);

        // A^T @ x = [1.0, 2.0]
        assert_eq!(a.tdot(&x).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_tensor2d_shape() {
        let t = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 3, 1).unwrap();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 1);

        let t2 = Tensor2D::<CpuBackend>::zeros(0, 5);
        assert_eq!(t2.shape(), (0, 5));
    }

    #[test]
    fn test_tensor2d_new_rejects_bad_buffer() {
        let err = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::DimensionMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_tensor2d_from_rows() {
        let t = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(t.shape(), (2, 2));
        assert_eq!(
            t.dot(&Tensor1D::new(vec![1.0, 1.0])).to_vec(),
            vec![3.0, 7.0]
        );

        let empty = Tensor2D::<CpuBackend>::from_rows(&[]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    fn test_tensor2d_from_ragged_rows() {
        let err = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }
}
