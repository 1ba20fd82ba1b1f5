use crate::{
    backend::{Backend, Tensor1D, Tensor2D},
    dataset::TrainingSet,
    loss::Loss,
    model::{ParamOps, TrainableModel},
    optimizer::Optimizer,
    regularizers::Regularizer,
};
use log::debug;
use std::marker::PhantomData;

mod observer;
pub use observer::{LogObserver, NoopObserver, TrainingObserver};

/// Orchestrates full-batch gradient descent for a `TrainableModel`.
///
/// Combines a loss function, optimizer and regularizer. Once built via
/// [`TrainerBuilder`] it is immutable and can fit any number of models.
pub struct Trainer<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    pub(crate) iterations: usize,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    pub(crate) regularizer: R,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for a [`Trainer`].
///
/// Defaults:
/// - `iterations`: 1000
pub struct TrainerBuilder<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    iterations: usize,
    loss_fn: L,
    optimizer: O,
    regularizer: R,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

impl<B, L, O, M, P, R> TrainerBuilder<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    /// # Arguments
    /// * `loss_fn`: differentiable loss (e.g., `HalfSquaredError`)
    /// * `optimizer`: parameter updater (e.g., `GradientDescent`)
    /// * `regularizer`: penalty term (`L2` or `NoRegularizer`)
    pub fn new(loss_fn: L, optimizer: O, regularizer: R) -> Self {
        Self {
            iterations: 1000,
            loss_fn,
            optimizer,
            regularizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn build(self) -> Trainer<B, L, O, M, P, R> {
        Trainer {
            iterations: self.iterations,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            regularizer: self.regularizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }
}

/// Result of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome<F> {
    /// Inference-only model.
    pub model: F,
    /// Loss recorded after each iteration, in iteration order.
    pub loss_history: Vec<f64>,
}

impl<B, L, O, M, P, R> Trainer<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B, Target = Tensor1D<B>, Prediction = Tensor1D<B>>,
    M: TrainableModel<B, Input = Tensor2D<B>, Prediction = Tensor1D<B>, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
    P: ParamOps<B>,
{
    /// Runs exactly `iterations` full-batch steps on `data`.
    ///
    /// Each step computes predictions and gradients from the current
    /// parameters, applies one simultaneous update, then records
    /// `data loss (pre-update predictions) + penalty (post-update parameters)`
    /// and hands it to `observer`.
    ///
    /// `model` must expect `data.n_features()` inputs. Starting from a fresh
    /// model is the caller's responsibility; the trainer does not reset it.
    pub fn fit(
        &self,
        mut model: M,
        data: &TrainingSet<'_, B>,
        observer: &mut dyn TrainingObserver,
    ) -> TrainingOutcome<M::Output> {
        let x = data.features();
        let y = data.targets();
        let n_samples = data.n_samples();
        let mut loss_history = Vec::with_capacity(self.iterations);

        debug!(
            "starting fit: {} samples, {} features, {} iterations",
            n_samples,
            data.n_features(),
            self.iterations
        );

        for iteration in 0..self.iterations {
            let preds = model.forward(x);
            let data_loss = self.loss_fn.loss(&preds, y);

            let grad_preds = self.loss_fn.grad_wrt_prediction(&preds, y);
            let grads = model
                .backward(x, &grad_preds)
                .add(&self.regularizer.gradient(&model, n_samples));
            let new_params = self.optimizer.step(model.params(), &grads);
            model.update_params(&new_params);

            let loss = (data_loss + self.regularizer.penalty(&model, n_samples)).to_f64();
            loss_history.push(loss);
            observer.on_iteration(iteration, loss);
        }

        debug!(
            "finished fit: final loss {:?}",
            loss_history.last().copied()
        );

        TrainingOutcome {
            model: model.into_fitted(),
            loss_history,
        }
    }
}

impl<B, L, O, M, P, R> Trainer<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    /// Equivalent to `TrainerBuilder::new(...)`.
    pub fn builder(loss_fn: L, optimizer: O, regularizer: R) -> TrainerBuilder<B, L, O, M, P, R> {
        TrainerBuilder::new(loss_fn, optimizer, regularizer)
    }

    pub fn n_iterations(&self) -> usize {
        self.iterations
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::{
        backend::CpuBackend,
        loss::HalfSquaredError,
        model::linear::LinearRegression,
        model::InferenceModel,
        optimizer::GradientDescent,
        regularizers::{NoRegularizer, L2},
    };

    type Gd = GradientDescent<CpuBackend>;

    fn data(rows: &[Vec<f64>], y: &[f64]) -> (Tensor2D<CpuBackend>, Tensor1D<CpuBackend>) {
        (Tensor2D::from_rows(rows).unwrap(), Tensor1D::from_slice(y))
    }

    // === TrainerBuilder Tests ===

    #[test]
    fn test_trainer_builder_default_iterations() {
        let trainer: Trainer<_, _, _, LinearRegression<CpuBackend>, _, _> =
            TrainerBuilder::new(HalfSquaredError, Gd::new(0.01), NoRegularizer).build();

        assert_eq!(trainer.n_iterations(), 1000);
    }

    #[test]
    fn test_trainer_builder_custom_iterations() {
        let trainer: Trainer<_, _, _, LinearRegression<CpuBackend>, _, _> =
            Trainer::builder(HalfSquaredError, Gd::new(0.01), NoRegularizer)
                .iterations(250)
                .build();

        assert_eq!(trainer.n_iterations(), 250);
    }

    // === Trainer Tests ===

    #[test]
    fn test_trainer_fit_linear_regression() {
        // y = 2*x1 + 3*x2 + 1
        let (x, y) = data(
            &[
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
                vec![2.0, 3.0],
            ],
            &[3.0, 4.0, 6.0, 14.0],
        );
        let set = TrainingSet::new(&x, &y).unwrap();

        let trainer = Trainer::builder(HalfSquaredError, Gd::new(0.1), NoRegularizer)
            .iterations(2000)
            .build();
        let outcome = trainer.fit(LinearRegression::<CpuBackend>::new(2), &set, &mut NoopObserver);

        let preds = outcome.model.predict_batch(&x).to_vec();
        for (p, t) in preds.iter().zip([3.0, 4.0, 6.0, 14.0]) {
            assert!((p - t).abs() < 1e-3, "pred {p} vs {t}");
        }
        assert_eq!(outcome.loss_history.len(), 2000);
    }

    #[test]
    fn test_trainer_first_step_matches_hand_computation() {
        // One step from zero on x = [1, 2], y = [2, 4], lr = 0.1, λ = 1:
        // pred = [0, 0], residual = [-2, -4]
        // dw = (1/2)(1*-2 + 2*-4 + 1*0) = -5,  db = (1/2)(-6) = -3
        // w = 0.5, b = 0.3
        // loss = (4 + 16) / 4 + 1 / 4 * 0.25 = 5.0625
        let (x, y) = data(&[vec![1.0], vec![2.0]], &[2.0, 4.0]);
        let set = TrainingSet::new(&x, &y).unwrap();

        let trainer = Trainer::builder(HalfSquaredError, Gd::new(0.1), L2::new(1.0))
            .iterations(1)
            .build();
        let outcome = trainer.fit(LinearRegression::<CpuBackend>::new(1), &set, &mut NoopObserver);

        let params = outcome.model.params();
        assert!((params.weights.to_vec()[0] - 0.5).abs() < 1e-12);
        assert!((params.bias.to_f64() - 0.3).abs() < 1e-12);
        assert!((outcome.loss_history[0] - 5.0625).abs() < 1e-12);
    }

    #[test]
    fn test_trainer_with_l2_regularization_shrinks_weights() {
        let (x, y) = data(&[vec![1.0], vec![2.0], vec![3.0]], &[2.0, 4.0, 6.0]);
        let set = TrainingSet::new(&x, &y).unwrap();

        let trainer = Trainer::builder(HalfSquaredError, Gd::new(0.05), L2::new(5.0))
            .iterations(2000)
            .build();
        let outcome = trainer.fit(LinearRegression::<CpuBackend>::new(1), &set, &mut NoopObserver);

        let w = outcome.model.params().weights.to_vec()[0];
        assert!(w < 2.0);
        assert!(w > 0.0);
    }

    #[test]
    fn test_trainer_notifies_observer_every_iteration() {
        let (x, y) = data(&[vec![1.0], vec![2.0]], &[1.0, 2.0]);
        let set = TrainingSet::new(&x, &y).unwrap();
        let trainer = Trainer::builder(HalfSquaredError, Gd::new(0.1), NoRegularizer)
            .iterations(7)
            .build();

        let mut seen = Vec::new();
        let mut record = |i: usize, loss: f64| seen.push((i, loss));
        let outcome = trainer.fit(LinearRegression::<CpuBackend>::new(1), &set, &mut record);

        let indices: Vec<usize> = seen.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
        let losses: Vec<f64> = seen.iter().map(|(_, l)| *l).collect();
        assert_eq!(losses, outcome.loss_history);
    }

    #[test]
    fn test_trainer_zero_iterations_returns_initial_model() {
        let (x, y) = data(&[vec![1.0]], &[1.0]);
        let set = TrainingSet::new(&x, &y).unwrap();
        let trainer = Trainer::builder(HalfSquaredError, Gd::new(0.1), NoRegularizer)
            .iterations(0)
            .build();

        let outcome = trainer.fit(LinearRegression::<CpuBackend>::new(1), &set, &mut NoopObserver);

        assert!(outcome.loss_history.is_empty());
        assert_eq!(outcome.model.params().weights.to_vec(), vec![0.0]);
    }
}
