/// Marker for a model that is **being trained**.
///
/// `LinearModel<B, Unfitted>` implements [`TrainableModel`](super::TrainableModel)
/// and exposes no prediction API.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// Marker for a model whose training has **finished**.
///
/// `LinearModel<B, Fitted>` implements [`InferenceModel`](super::InferenceModel)
/// and carries only the learned weights and bias; no optimizer state,
/// loss or hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
