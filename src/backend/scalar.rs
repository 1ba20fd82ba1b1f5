use crate::backend::Backend;
use std::marker::PhantomData;

/// Arithmetic required from a backend's native scalar type.
///
pub trait ScalarOps:
    Clone
    + Copy
    + Send
    + Sync
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Div<Output = Self>
{
    /// Converts this scalar to an `f64` value.
    fn to_f64(self) -> f64;
}

impl ScalarOps for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Backend-typed scalar.
///
/// Carries the backend as a phantom type so scalars produced by different
/// backends cannot be mixed.
#[derive(Clone, Debug, Copy)]
pub struct Scalar<B: Backend> {
    pub(crate) data: B::Scalar,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Scalar<B> {
    pub fn new(f: f64) -> Self {
        Self {
            data: B::scalar_f64(f),
            backend: PhantomData,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.data.to_f64()
    }
}

impl<B: Backend> std::ops::Add for Scalar<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            data: self.data + rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Sub for Scalar<B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            data: self.data - rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Mul for Scalar<B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            data: self.data * rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Div for Scalar<B> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self {
            data: self.data / rhs.data,
            backend: PhantomData,
        }
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_scalar_arithmetic() {
        let a: Scalar<CpuBackend> = Scalar::new(5.0);
        let b: Scalar<CpuBackend> = Scalar::new(2.0);

        let sum = a + b;
        assert_eq!(sum.to_f64(), 7.0);

        let diff = sum - Scalar::new(3.0);
        assert_eq!(diff.to_f64(), 4.0);

        let prod = diff * Scalar::new(0.5);
        assert_eq!(prod.to_f64(), 2.0);

        let quot = prod / Scalar::new(4.0);
        assert_eq!(quot.to_f64(), 0.5);
    }
}
