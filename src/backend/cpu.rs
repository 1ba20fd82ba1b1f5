use super::Backend;
use crate::error::{RegressionError, Result};

/// Pure-Rust CPU backend over contiguous `Vec<f64>` storage.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major matrix: `(data, rows, cols)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        Self(data, rows, cols)
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.0[i * self.2..(i + 1) * self.2]
    }
}

impl Backend for CpuBackend {
    type Scalar = f64;
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(vec![0.; rows * cols], rows, cols)
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self::Tensor2D> {
        if data.len() != rows * cols {
            return Err(RegressionError::mismatch(
                "matrix buffer",
                rows * cols,
                data.len(),
            ));
        }
        Ok(CpuTensor2D::new(data, rows, cols))
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a + b).collect()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a * b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>()
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        (0..a.1)
            .map(|i| a.row(i).iter().zip(x.iter()).map(|(a, x)| a * x).sum::<f64>())
            .collect()
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        // Accumulate row by row so the row-major buffer is read sequentially.
        let mut out = vec![0.; a.2];
        for (i, &xi) in x.iter().enumerate().take(a.1) {
            for (acc, aij) in out.iter_mut().zip(a.row(i)) {
                *acc += aij * xi;
            }
        }
        out
    }
}
