pub mod state;
pub use state::{Fitted, Unfitted};

pub mod linear;
pub use crate::backend::{Backend, Scalar};

/// A model that can be trained by gradient-based optimization.
///
/// The trainer drives it through `forward` → `backward` → `update_params`
/// and finally calls `into_fitted` to obtain the inference-only model.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Gradients of the loss w.r.t. parameters given `∂L/∂prediction`.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    fn params(&self) -> &Self::Params;

    fn update_params(&mut self, new_params: &Self::Params);

    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic on parameter sets, used to combine data and penalty gradients.
pub trait ParamOps<B: Backend>: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, scalar: Scalar<B>) -> Self;
}

/// A trained model usable for prediction.
pub trait InferenceModel<B: Backend> {
    type InputBatch;
    type OutputBatch;

    /// One prediction per input row.
    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;
}
