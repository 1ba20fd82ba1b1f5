//! Linear regression model with compile-time state tracking.
//!
//! - [`LinearRegression`] = `LinearModel<B, Unfitted>`, used during training.
//! - `LinearModel<B, Fitted>`, an inference-only predictor `y = w·x + b`.
//!
//! Regularization is not part of the model; it is applied by the trainer
//! through a [`Regularizer`](crate::regularizers::Regularizer).
pub use crate::backend::{Backend, Scalar, Tensor1D, Tensor2D};
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use std::marker::PhantomData;

/// Trainable parameters of a linear model: weights and bias.
#[derive(Clone, Debug)]
pub struct LinearParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: Scalar<B>,
}

impl<B: Backend> LinearParams<B> {
    /// Zero weights of length `n_features` and zero bias.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Tensor1D::zeros(n_features),
            bias: Scalar::new(0.),
        }
    }
}

impl<B: Backend> ParamOps<B> for LinearParams<B> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: self.weights.add(&other.weights),
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, scalar: Scalar<B>) -> Self {
        Self {
            weights: self.weights.scale(&scalar),
            bias: self.bias * scalar,
        }
    }
}

/// A linear model with its training state encoded at the type level.
///
/// `predict` is only reachable on `LinearModel<B, Fitted>`, so an untrained
/// model cannot be used for inference.
pub struct LinearModel<B: Backend, S> {
    params: LinearParams<B>,
    _state: PhantomData<S>,
}

impl<B: Backend, S> Clone for LinearModel<B, S> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            _state: PhantomData,
        }
    }
}

impl<B: Backend, S> std::fmt::Debug for LinearModel<B, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearModel")
            .field("params", &self.params)
            .finish()
    }
}

impl<B: Backend> LinearModel<B, Fitted> {
    /// Creates a fitted model from trained parameters.
    pub fn new(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> &LinearParams<B> {
        &self.params
    }

    pub fn n_features(&self) -> usize {
        self.params.weights.len()
    }
}

/// Batch inference for a trained linear model: `y = X·w + b`.
impl<B: Backend> InferenceModel<B> for LinearModel<B, Fitted> {
    type InputBatch = Tensor2D<B>;
    type OutputBatch = Tensor1D<B>;

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch {
        input
            .dot(&self.params.weights)
            .add_scalar(&self.params.bias)
    }
}

/// Training interface for linear regression.
///
/// Forward pass: `X·w + b`
/// Backward pass: `∇w = Xᵀ·g`, `∇b = Σg` for an upstream gradient `g`.
impl<B: Backend> TrainableModel<B> for LinearModel<B, Unfitted> {
    type Params = LinearParams<B>;
    type Gradients = LinearParams<B>;
    type Prediction = Tensor1D<B>;
    type Input = Tensor2D<B>;
    type Output = LinearModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.params.weights).add_scalar(&self.params.bias)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LinearParams {
            weights: x.tdot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn into_fitted(self) -> LinearModel<B, Fitted> {
        LinearModel::<B, Fitted>::new(self.params)
    }
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression<B> = LinearModel<B, Unfitted>;

impl<B: Backend> LinearRegression<B> {
    /// Creates a model with zero-initialized weights and bias.
    pub fn new(n_features: usize) -> Self {
        Self::from_params(LinearParams::zeros(n_features))
    }

    /// Constructs a model from explicit parameters (e.g., for testing).
    pub fn from_params(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}
