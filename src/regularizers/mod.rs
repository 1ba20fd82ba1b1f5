use crate::backend::{Backend, Scalar, Tensor1D};
use crate::model::linear::{LinearParams, LinearRegression};
use crate::model::TrainableModel;

/// A penalty on model parameters added to the data loss.
///
/// Both terms are normalized by the number of training samples `m`, so the
/// penalty strength is expressed on the same scale as the mean data loss.
pub trait Regularizer<B: Backend, M: TrainableModel<B>> {
    /// Penalty value added to the recorded loss.
    fn penalty(&self, model: &M, n_samples: usize) -> Scalar<B>;

    /// Penalty gradient added to the data gradient before the update.
    fn gradient(&self, model: &M, n_samples: usize) -> M::Gradients;
}

/// Ridge (L2) penalty on the weights; the bias is never penalized.
///
/// - penalty: `(λ / (2m)) · Σ w²`
/// - gradient: `(λ / m) · w`
#[derive(Clone, Copy, Debug)]
pub struct L2<B: Backend> {
    lambda: Scalar<B>,
}

impl<B: Backend> L2<B> {
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda: Scalar::new(lambda),
        }
    }

    pub fn lambda(&self) -> f64 {
        self.lambda.to_f64()
    }
}

impl<B: Backend> Regularizer<B, LinearRegression<B>> for L2<B> {
    fn penalty(&self, model: &LinearRegression<B>, n_samples: usize) -> Scalar<B> {
        let weights = &model.params().weights;
        self.lambda * weights.norm_sq() / Scalar::new(2.0 * n_samples as f64)
    }

    fn gradient(&self, model: &LinearRegression<B>, n_samples: usize) -> LinearParams<B> {
        let scale = self.lambda / Scalar::new(n_samples as f64);
        LinearParams {
            weights: model.params().weights.scale(&scale),
            bias: Scalar::new(0.),
        }
    }
}

/// No penalty; equivalent to `L2` with `λ = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRegularizer;

impl<B: Backend> Regularizer<B, LinearRegression<B>> for NoRegularizer {
    fn penalty(&self, _model: &LinearRegression<B>, _n_samples: usize) -> Scalar<B> {
        Scalar::new(0.)
    }

    fn gradient(&self, model: &LinearRegression<B>, _n_samples: usize) -> LinearParams<B> {
        LinearParams {
            weights: Tensor1D::zeros(model.params().weights.len()),
            bias: Scalar::new(0.),
        }
    }
}
