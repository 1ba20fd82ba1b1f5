//! # Backend Abstraction
//!
//! Trait-based abstraction over the numeric storage used by the regressor.
//! Models, losses and optimizers are written once against [`Backend`] and run
//! on any implementation selected at compile time.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Storage                          |
//! |------------------|-----------|----------------------------------|
//! | `CpuBackend`     | `cpu`     | Row-major `Vec<f64>`, pure Rust  |
//! | `NdarrayBackend` | `ndarray` | `ndarray::Array1` / `Array2`     |
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "cpu")]
//! # fn main() {
//! use ridge_gd::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
//! let w = Tensor1D::<CpuBackend>::new(vec![0.5, 0.5]);
//! assert_eq!(x.dot(&w).to_vec(), vec![1.5, 3.5]);
//! # }
//! # #[cfg(not(feature = "cpu"))]
//! # fn main() {}
//! ```
//!
//! Backend methods assume shapes were validated by the typed wrappers
//! ([`Tensor1D`], [`Tensor2D`]) or by the regressor before the call.

#[cfg(feature = "cpu")]
pub mod cpu;
#[cfg(feature = "cpu")]
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

use crate::error::Result;

/// Minimal set of tensor operations needed to train and evaluate a linear model.
///
/// # Type Parameters
///
/// - `Scalar`: primitive numeric type with arithmetic capabilities
/// - `Tensor1D`: contiguous vector
/// - `Tensor2D`: row-major matrix
pub trait Backend: Clone + Copy + std::fmt::Debug + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Creates a `rows × cols` 2D tensor filled with zeros.
    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// Fails with [`DimensionMismatch`](crate::RegressionError::DimensionMismatch) if
    /// `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self::Tensor2D>;

    // --- Element-wise operations ---

    /// Element-wise addition of two equal-length tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two equal-length tensors.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two equal-length tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor.
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    // --- Reductions ---

    /// Sum of all elements; zero for an empty tensor.
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    // --- Scalar operations ---

    /// Creates a backend-specific scalar from an f64 value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    // --- Data access ---

    /// Copies a 1D tensor into host memory.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    // --- Linear algebra ---

    /// Computes `A · x` where `A` is (m × n) and `x` is (n,). Returns (m,).
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Computes `Aᵀ · x` where `A` is (m × n) and `x` is (m,). Returns (n,).
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;
}
