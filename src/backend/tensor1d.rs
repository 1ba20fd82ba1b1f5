use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native vector (`B::Tensor1D`) and carries the backend as
/// a phantom type, so tensors from different backends cannot be mixed.
///
/// Element-wise methods expect equal lengths; the regressor validates shapes
/// before calling them.
///
/// # Example
/// ```
/// # #[cfg(feature = "cpu")]
/// # fn main() {
/// use ridge_gd::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// let y = x.scale(&Scalar::<CpuBackend>::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// # }
/// # #[cfg(not(feature = "cpu"))]
/// # fn main() {}
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    pub fn new(data: Vec<f64>) -> Self {
        Self::wrap(B::from_vec_1d(data))
    }

    pub fn from_slice(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }

    pub fn zeros(len: usize) -> Self {
        Self::wrap(B::zeros_1d(len))
    }

    pub(crate) fn wrap(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the tensor into a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::wrap(B::add_1d(&self.data, &other.data))
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::wrap(B::sub_1d(&self.data, &other.data))
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::wrap(B::mul_1d(&self.data, &other.data))
    }

    pub fn scale(&self, s: &Scalar<B>) -> Self {
        Self::wrap(B::mul_scalar_1d(&self.data, &s.data))
    }

    pub fn add_scalar(&self, s: &Scalar<B>) -> Self {
        Self::wrap(B::add_scalar_1d(&self.data, &s.data))
    }

    pub fn sum(&self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Inner product `Σᵢ aᵢ·bᵢ`.
    pub fn dot(&self, other: &Self) -> Scalar<B> {
        self.mul(other).sum()
    }

    /// Squared Euclidean norm, `self · self`.
    pub fn norm_sq(&self) -> Scalar<B> {
        self.dot(self)
    }
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor1D").field(&self.to_vec()).finish()
    }
}
