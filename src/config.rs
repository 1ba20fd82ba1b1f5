//! Hyperparameters for [`RegularizedLinearRegressor`](crate::RegularizedLinearRegressor).

use crate::error::{RegressionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gradient-descent hyperparameters.
///
/// Missing fields in a JSON document fall back to the defaults:
///
/// | field           | default | constraint |
/// |-----------------|---------|------------|
/// | `learning_rate` | 0.01    | > 0        |
/// | `iterations`    | 1000    | > 0        |
/// | `l2_penalty`    | 0.1     | ≥ 0        |
///
/// ```
/// use ridge_gd::RegressorConfig;
///
/// let config = RegressorConfig::from_json_str(r#"{ "learning_rate": 0.1 }"#).unwrap();
/// assert_eq!(config.learning_rate, 0.1);
/// assert_eq!(config.iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegressorConfig {
    /// Step size η.
    pub learning_rate: f64,
    /// Number of gradient-descent steps per fit.
    pub iterations: usize,
    /// Regularization strength λ.
    pub l2_penalty: f64,
}

impl Default for RegressorConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
            l2_penalty: 0.1,
        }
    }
}

impl RegressorConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_l2_penalty(mut self, l2_penalty: f64) -> Self {
        self.l2_penalty = l2_penalty;
        self
    }

    /// # Errors
    /// [`RegressionError::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(RegressionError::InvalidConfiguration(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.iterations == 0 {
            return Err(RegressionError::InvalidConfiguration(
                "iterations must be positive, got 0".to_string(),
            ));
        }
        if !(self.l2_penalty.is_finite() && self.l2_penalty >= 0.0) {
            return Err(RegressionError::InvalidConfiguration(format!(
                "l2_penalty must be a non-negative finite number, got {}",
                self.l2_penalty
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
