use crate::backend::{Backend, Scalar, Tensor1D};

/// A differentiable loss function used during model training.
///
/// Implementors define:
/// - the scalar loss value (recorded in the loss history),
/// - the gradient of the loss w.r.t. the model's predictions, which is passed
///   to the model's `backward()`.
pub trait Loss<B: Backend> {
    type Prediction;
    type Target;

    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> Scalar<B>;

    /// Computes `∂L/∂pred`.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Half mean squared error: `L = (1/(2m)) · Σ(pred_i − target_i)²`.
///
/// Gradient w.r.t. prediction: `∂L/∂pred = (pred − target) / m`; the factor
/// of two cancels against the `1/2`.
///
/// Both methods divide by `m`; callers must not pass empty tensors.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSquaredError;

impl<B: Backend> Loss<B> for HalfSquaredError {
    type Prediction = Tensor1D<B>;
    type Target = Tensor1D<B>;

    fn loss(&self, pred: &Self::Prediction, target: &Self::Target) -> Scalar<B> {
        let diff = pred.sub(target);
        diff.norm_sq() / Scalar::new(2.0 * diff.len() as f64)
    }

    fn grad_wrt_prediction(&self, pred: &Self::Prediction, target: &Self::Target) -> Tensor1D<B> {
        let inv_m = Scalar::<B>::new(1.0 / pred.len() as f64);
        pred.sub(target).scale(&inv_m)
    }
}
