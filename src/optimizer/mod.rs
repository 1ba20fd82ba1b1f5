use crate::backend::{Backend, Scalar};
use crate::model::ParamOps;

/// Trait for gradient-based optimizers.
///
/// The trainer computes gradients; the optimizer only turns
/// `(params, gradients)` into new parameters. Any model can be paired with any
/// optimizer that implements this trait for its parameter type.
///
/// # Example
/// ```rust
/// # #[cfg(feature = "cpu")]
/// # fn main() {
/// use ridge_gd::backend::{CpuBackend, Scalar, Tensor1D};
/// use ridge_gd::model::linear::LinearParams;
/// use ridge_gd::optimizer::{GradientDescent, Optimizer};
///
/// let params = LinearParams {
///     weights: Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]),
///     bias: Scalar::new(0.5),
/// };
/// let grads = LinearParams {
///     weights: Tensor1D::<CpuBackend>::new(vec![10.0, -10.0]),
///     bias: Scalar::new(1.0),
/// };
/// let updated = GradientDescent::<CpuBackend>::new(0.1).step(&params, &grads);
/// assert_eq!(updated.weights.to_vec(), vec![0.0, 3.0]);
/// # }
/// # #[cfg(not(feature = "cpu"))]
/// # fn main() {}
/// ```
pub trait Optimizer<B: Backend, P> {
    /// Returns `params − η · gradients` (or the optimizer's own rule).
    ///
    /// Inputs are not mutated; all gradient components are applied to the
    /// same pre-update parameters.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Plain gradient descent with a constant learning rate.
///
/// ```text
/// θ ← θ − η · ∇L(θ)
/// ```
///
/// Stateless: no momentum, no schedule.
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent<B: Backend> {
    lr: Scalar<B>,
}

impl<B: Backend> GradientDescent<B> {
    pub fn new(lr: f64) -> Self {
        Self {
            lr: Scalar::new(lr),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }
}

impl<B: Backend, P: ParamOps<B>> Optimizer<B, P> for GradientDescent<B> {
    fn step(&self, params: &P, grads: &P) -> P {
        let neg_lr = Scalar::<B>::new(0.0) - self.lr;
        params.add(&grads.scale(neg_lr))
    }
}
