//! # ridge_gd
//!
//! L2-regularized linear regression trained by full-batch gradient descent,
//! built on pluggable tensor backends with a strict split between training
//! and inference.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: low-level models carry their training state in
//!   the type system (`Unfitted` vs `Fitted`); the high-level
//!   [`RegularizedLinearRegressor`] reports the same state at runtime through
//!   [`RegressionError::NotFitted`].
//! - **Training/Inference Separation**: fitted models hold only parameters;
//!   losses, regularizers, optimizers and the trainer live in their own modules.
//! - **Backend Agnosticism**: every numeric routine is written once against
//!   [`Backend`] and runs on `CpuBackend` or, behind the `ndarray` feature,
//!   `NdarrayBackend`.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "cpu")]
//! # fn main() -> Result<(), ridge_gd::RegressionError> {
//! use ridge_gd::{RegressorConfig, RidgeRegressor};
//! use ridge_gd::trainer::NoopObserver;
//!
//! let config = RegressorConfig::default()
//!     .with_learning_rate(0.1)
//!     .with_iterations(1000)
//!     .with_l2_penalty(0.0);
//! let mut model = RidgeRegressor::new(config)?.with_observer(NoopObserver);
//!
//! let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let y = [2.0, 4.0, 6.0, 8.0];
//! model.fit_rows(&x, &y)?;
//!
//! let w = model.weights().unwrap();
//! assert!((w[0] - 2.0).abs() < 1e-3);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "cpu"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - `backend`: tensor abstractions and computation primitives
//! - `model`: linear model with stateful type parameters
//! - `loss`: half mean squared error
//! - `regularizers`: L2 weight penalty
//! - `optimizer`: gradient descent parameter update
//! - `trainer`: full-batch training loop and progress observers
//! - `dataset`: validated views over training data
//! - `metrics`: R² and mean squared error
//! - `config`: hyperparameters and JSON loading
//! - `regressor`: the fit/predict/score facade

pub mod backend;

/// Hyperparameter configuration.
pub mod config;

/// Validated training data views.
pub mod dataset;

pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Regression evaluation metrics.
pub mod metrics;

/// Machine learning models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

pub mod regressor;

/// Weight regularization strategies.
pub mod regularizers;

/// Training loop orchestration.
pub mod trainer;

pub use backend::{Backend, Scalar, ScalarOps, Tensor1D, Tensor2D};
pub use config::RegressorConfig;
pub use error::{RegressionError, Result};
pub use regressor::RegularizedLinearRegressor;

#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
#[cfg(feature = "ndarray")]
pub use backend::NdarrayBackend;

/// [`RegularizedLinearRegressor`] on the pure-Rust CPU backend.
#[cfg(feature = "cpu")]
pub type RidgeRegressor = RegularizedLinearRegressor<CpuBackend>;
