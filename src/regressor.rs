//! High-level ridge regressor with a runtime fitted/unfitted state.
//!
//! [`RegularizedLinearRegressor`] wires the building blocks together:
//! [`HalfSquaredError`] loss, [`GradientDescent`] optimizer and [`L2`]
//! regularizer, driven by a [`Trainer`] over a validated [`TrainingSet`].

use crate::{
    backend::{Backend, Tensor1D, Tensor2D},
    config::RegressorConfig,
    dataset::TrainingSet,
    error::{RegressionError, Result},
    loss::HalfSquaredError,
    metrics,
    model::linear::{LinearModel, LinearRegression},
    model::{Fitted, InferenceModel},
    optimizer::GradientDescent,
    regularizers::L2,
    trainer::{LogObserver, Trainer, TrainingObserver},
};
use log::debug;

/// Linear regression with an L2 penalty, trained by full-batch gradient descent.
///
/// Every call to [`fit`](Self::fit) starts from zero weights and a fresh loss
/// history; [`predict`](Self::predict) and [`score`](Self::score) are only
/// available after a successful fit.
///
/// # Example
/// ```
/// # #[cfg(feature = "cpu")]
/// # fn main() {
/// use ridge_gd::{RegressorConfig, RidgeRegressor};
///
/// let config = RegressorConfig::default()
///     .with_learning_rate(0.1)
///     .with_l2_penalty(0.0);
/// let mut model = RidgeRegressor::new(config).unwrap();
///
/// let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// model.fit_rows(&x, &y).unwrap();
///
/// let preds = model.predict_rows(&x).unwrap();
/// assert!(model.score(&y, &preds).unwrap() > 0.999);
/// assert_eq!(model.loss_history().len(), 1000);
/// # }
/// # #[cfg(not(feature = "cpu"))]
/// # fn main() {}
/// ```
pub struct RegularizedLinearRegressor<B: Backend> {
    config: RegressorConfig,
    fitted: Option<LinearModel<B, Fitted>>,
    loss_history: Vec<f64>,
    observer: Box<dyn TrainingObserver + Send>,
}

impl<B: Backend> RegularizedLinearRegressor<B> {
    /// # Errors
    /// [`RegressionError::InvalidConfiguration`] if `config` fails validation.
    pub fn new(config: RegressorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fitted: None,
            loss_history: Vec::new(),
            observer: Box::new(LogObserver::default()),
        })
    }

    /// Replaces the progress observer (default: [`LogObserver::default`]).
    pub fn with_observer(mut self, observer: impl TrainingObserver + Send + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Trains from scratch on `x` (m × n) and `y` (m).
    ///
    /// Inputs are validated before any state changes, so a failed call
    /// leaves a previously fitted model usable.
    ///
    /// # Errors
    /// - [`RegressionError::EmptyDataset`] if `m == 0` or `n == 0`.
    /// - [`RegressionError::DimensionMismatch`] if `x.rows() != y.len()`.
    pub fn fit(&mut self, x: &Tensor2D<B>, y: &Tensor1D<B>) -> Result<()> {
        let data = TrainingSet::new(x, y)?;

        let trainer = Trainer::builder(
            HalfSquaredError,
            GradientDescent::new(self.config.learning_rate),
            L2::new(self.config.l2_penalty),
        )
        .iterations(self.config.iterations)
        .build();

        let outcome = trainer.fit(
            LinearRegression::new(data.n_features()),
            &data,
            self.observer.as_mut(),
        );

        debug!(
            "fitted ridge regressor on {}x{} data",
            data.n_samples(),
            data.n_features()
        );
        self.fitted = Some(outcome.model);
        self.loss_history = outcome.loss_history;
        Ok(())
    }

    /// [`fit`](Self::fit) over plain rows and targets.
    ///
    /// # Errors
    /// Same as `fit`, plus [`RegressionError::DimensionMismatch`] for ragged rows.
    pub fn fit_rows(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let x = Tensor2D::from_rows(x)?;
        let y = Tensor1D::from_slice(y);
        self.fit(&x, &y)
    }

    /// Predicts `x·w + b` for every row of `x`.
    ///
    /// A matrix with no rows yields an empty result whatever its column count.
    ///
    /// # Errors
    /// - [`RegressionError::NotFitted`] before a successful fit.
    /// - [`RegressionError::DimensionMismatch`] if `x` has rows and `x.cols()`
    ///   differs from the number of features seen in training.
    pub fn predict(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        let model = self.model("predict")?;
        if x.rows() == 0 {
            return Ok(Tensor1D::zeros(0));
        }
        if x.cols() != model.n_features() {
            return Err(RegressionError::mismatch(
                "feature columns",
                model.n_features(),
                x.cols(),
            ));
        }
        Ok(model.predict_batch(x))
    }

    /// [`predict`](Self::predict) over plain rows; an empty slice yields an
    /// empty result.
    ///
    /// # Errors
    /// Same as `predict`, plus [`RegressionError::DimensionMismatch`] for
    /// ragged rows.
    pub fn predict_rows(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        let x = Tensor2D::from_rows(x)?;
        Ok(self.predict(&x)?.to_vec())
    }

    /// R² of `y_pred` against `y_true`; see [`metrics::r2_score`].
    ///
    /// # Errors
    /// [`RegressionError::NotFitted`] before a successful fit, otherwise the
    /// errors of [`metrics::r2_score`].
    pub fn score(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        self.model("score")?;
        metrics::r2_score(y_true, y_pred)
    }

    /// Learned weights, or `None` before the first successful fit.
    pub fn weights(&self) -> Option<Vec<f64>> {
        self.fitted
            .as_ref()
            .map(|model| model.params().weights.to_vec())
    }

    pub fn bias(&self) -> Option<f64> {
        self.fitted.as_ref().map(|model| model.params().bias.to_f64())
    }

    pub fn n_features(&self) -> Option<usize> {
        self.fitted.as_ref().map(|model| model.n_features())
    }

    /// Loss recorded at each iteration of the most recent fit.
    pub fn loss_history(&self) -> &[f64] {
        &self.loss_history
    }

    pub fn config(&self) -> &RegressorConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn model(&self, operation: &'static str) -> Result<&LinearModel<B, Fitted>> {
        self.fitted
            .as_ref()
            .ok_or(RegressionError::NotFitted(operation))
    }
}

impl<B: Backend> Default for RegularizedLinearRegressor<B> {
    fn default() -> Self {
        Self {
            config: RegressorConfig::default(),
            fitted: None,
            loss_history: Vec::new(),
            observer: Box::new(LogObserver::default()),
        }
    }
}

impl<B: Backend> std::fmt::Debug for RegularizedLinearRegressor<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegularizedLinearRegressor")
            .field("config", &self.config)
            .field("fitted", &self.fitted)
            .field("iterations_recorded", &self.loss_history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;
    use crate::trainer::NoopObserver;
    use approx::assert_abs_diff_eq;
    use std::sync::{Arc, Mutex};

    type Ridge = RegularizedLinearRegressor<CpuBackend>;

    fn quiet(config: RegressorConfig) -> Ridge {
        Ridge::new(config).unwrap().with_observer(NoopObserver)
    }

    fn doubling() -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
            vec![2.0, 4.0, 6.0, 8.0],
        )
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Ridge::new(RegressorConfig::default().with_learning_rate(0.0)).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_default_is_unfitted() {
        let model = Ridge::default();

        assert!(!model.is_fitted());
        assert_eq!(model.config(), &RegressorConfig::default());
        assert!(model.weights().is_none());
        assert!(model.bias().is_none());
        assert!(model.loss_history().is_empty());
    }

    #[test]
    fn test_fit_doubling_without_penalty() {
        let (x, y) = doubling();
        let mut model = quiet(
            RegressorConfig::default()
                .with_learning_rate(0.1)
                .with_l2_penalty(0.0),
        );

        model.fit_rows(&x, &y).unwrap();

        let w = model.weights().unwrap();
        assert_eq!(w.len(), 1);
        assert_abs_diff_eq!(w[0], 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(model.bias().unwrap(), 0.0, epsilon = 1e-4);
        assert_eq!(model.loss_history().len(), 1000);

        let preds = model.predict_rows(&x).unwrap();
        assert_abs_diff_eq!(model.score(&y, &preds).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_predict_before_fit() {
        let model = quiet(RegressorConfig::default());

        let err = model.predict_rows(&[vec![1.0]]).unwrap_err();
        assert!(matches!(err, RegressionError::NotFitted("predict")));
        assert!(matches!(
            model.predict_rows(&[]),
            Err(RegressionError::NotFitted("predict"))
        ));
    }

    #[test]
    fn test_score_before_fit() {
        let model = quiet(RegressorConfig::default());

        let err = model.score(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, RegressionError::NotFitted("score")));
    }

    #[test]
    fn test_fit_target_length_mismatch() {
        let mut model = quiet(RegressorConfig::default());

        let err = model
            .fit_rows(&[vec![1.0], vec![2.0]], &[1.0, 2.0, 3.0])
            .unwrap_err();

        assert!(matches!(err, RegressionError::DimensionMismatch { .. }));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_fit_empty_dataset() {
        let mut model = quiet(RegressorConfig::default());

        let err = model.fit_rows(&[], &[]).unwrap_err();

        assert!(matches!(err, RegressionError::EmptyDataset(_)));
    }

    #[test]
    fn test_failed_fit_keeps_previous_model() {
        let (x, y) = doubling();
        let mut model = quiet(RegressorConfig::default().with_iterations(50));
        model.fit_rows(&x, &y).unwrap();
        let weights = model.weights();
        let history = model.loss_history().to_vec();

        assert!(model.fit_rows(&x, &y[..3]).is_err());

        assert_eq!(model.weights(), weights);
        assert_eq!(model.loss_history(), history.as_slice());
    }

    #[test]
    fn test_refit_starts_from_scratch() {
        let (x, y) = doubling();
        let mut model = quiet(RegressorConfig::default().with_iterations(200));

        model.fit_rows(&x, &y).unwrap();
        let first = model.weights();
        let first_history = model.loss_history().to_vec();
        model.fit_rows(&x, &y).unwrap();

        assert_eq!(model.loss_history().len(), 200);
        assert_eq!(model.loss_history(), first_history.as_slice());
        assert_eq!(model.weights(), first);
    }

    #[test]
    fn test_predict_feature_count_mismatch() {
        let mut model = quiet(RegressorConfig::default());
        model
            .fit_rows(&[vec![1.0, 2.0], vec![2.0, 1.0]], &[1.0, 2.0])
            .unwrap();

        let err = model.predict_rows(&[vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::DimensionMismatch {
                context: "feature columns",
                expected: 2,
                actual: 1,
            }
        ));
        assert_eq!(model.n_features(), Some(2));
    }

    #[test]
    fn test_predict_empty_rows() {
        let (x, y) = doubling();
        let mut model = quiet(RegressorConfig::default().with_iterations(10));
        model.fit_rows(&x, &y).unwrap();

        assert!(model.predict_rows(&[]).unwrap().is_empty());
        for cols in [0, 1, 3] {
            let empty = Tensor2D::<CpuBackend>::zeros(0, cols);
            assert!(model.predict(&empty).unwrap().is_empty());
        }
    }

    #[test]
    fn test_observer_sees_every_iteration() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let (x, y) = doubling();
        let mut model = Ridge::new(RegressorConfig::default().with_iterations(25))
            .unwrap()
            .with_observer(move |i: usize, loss: f64| sink.lock().unwrap().push((i, loss)));

        model.fit_rows(&x, &y).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 25);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[24].0, 24);
        assert_eq!(seen[24].1, model.loss_history()[24]);
    }
}
