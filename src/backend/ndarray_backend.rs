use super::Backend;
use crate::error::{RegressionError, Result};
use ndarray::{Array1, Array2};

/// Backend built on the `ndarray` crate.
///
/// # Type mappings
/// - `Scalar`: `f64`
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`] wrapper around `ndarray::Array2<f64>`
///
/// Produces the same results as [`CpuBackend`](super::CpuBackend) up to
/// floating-point summation order.
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
#[derive(Debug, Clone)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl Backend for NdarrayBackend {
    type Scalar = f64;
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(Array2::zeros((rows, cols)))
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self::Tensor2D> {
        let len = data.len();
        Array2::from_shape_vec((rows, cols), data)
            .map(NdarrayTensor2D)
            .map_err(|_| RegressionError::mismatch("matrix buffer", rows * cols, len))
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a * b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t * *s
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t + *s
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.sum()
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.dot(x)
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.t().dot(x)
    }
}
