//! Progress hooks invoked by the training loop.

use log::info;

/// Receives `(iteration, loss)` once per gradient-descent step.
///
/// The trainer never writes to any output stream itself; progress reporting
/// is whatever the installed observer does. Closures implement this trait:
///
/// ```
/// use ridge_gd::trainer::TrainingObserver;
///
/// let mut seen = Vec::new();
/// let mut record = |iteration: usize, loss: f64| seen.push((iteration, loss));
/// record.on_iteration(0, 1.5);
/// assert_eq!(seen, vec![(0, 1.5)]);
/// ```
pub trait TrainingObserver {
    fn on_iteration(&mut self, iteration: usize, loss: f64);
}

impl<F> TrainingObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_iteration(&mut self, iteration: usize, loss: f64) {
        self(iteration, loss)
    }
}

/// Ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {
    fn on_iteration(&mut self, _iteration: usize, _loss: f64) {}
}

/// Logs `iteration N: loss L` at `info` level on every `every`-th iteration,
/// starting with iteration 0.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    every: usize,
}

impl LogObserver {
    pub const DEFAULT_CADENCE: usize = 100;

    /// A cadence of 0 is treated as 1.
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }

    pub fn cadence(&self) -> usize {
        self.every
    }

    fn should_report(&self, iteration: usize) -> bool {
        iteration % self.every == 0
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::every(Self::DEFAULT_CADENCE)
    }
}

impl TrainingObserver for LogObserver {
    fn on_iteration(&mut self, iteration: usize, loss: f64) {
        if self.should_report(iteration) {
            info!("iteration {iteration}: loss {loss:.4}");
        }
    }
}
