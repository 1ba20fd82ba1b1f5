//! End-to-end ridge regression on a synthetic dataset.
//!
//! Generates noisy samples of `y = 3·x0 − 2·x1 + 0.5·x2 + 4`, standardizes the
//! features with training-set statistics, fits on 80% of the rows and reports
//! R² on the remaining 20%.
//!
//! Run with: cargo run --example synthetic

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use ridge_gd::{metrics, RegressorConfig, RidgeRegressor};
use std::error::Error;

const N_SAMPLES: usize = 500;
const TRUE_WEIGHTS: [f64; 3] = [3.0, -2.0, 0.5];
const TRUE_BIAS: f64 = 4.0;

fn make_regression(rng: &mut StdRng) -> Result<(Vec<Vec<f64>>, Vec<f64>), Box<dyn Error>> {
    let feature = Normal::new(5.0, 2.0)?;
    let noise = Normal::new(0.0, 0.1)?;

    let x: Vec<Vec<f64>> = (0..N_SAMPLES)
        .map(|_| TRUE_WEIGHTS.iter().map(|_| feature.sample(rng)).collect())
        .collect();
    let y = x
        .iter()
        .map(|row| {
            let signal: f64 = row.iter().zip(TRUE_WEIGHTS).map(|(v, w)| v * w).sum();
            signal + TRUE_BIAS + noise.sample(rng)
        })
        .collect();
    Ok((x, y))
}

/// Column means and standard deviations of `x`.
fn column_stats(x: &[Vec<f64>]) -> Vec<(f64, f64)> {
    let m = x.len() as f64;
    (0..x[0].len())
        .map(|j| {
            let mean = x.iter().map(|row| row[j]).sum::<f64>() / m;
            let var = x.iter().map(|row| (row[j] - mean).powi(2)).sum::<f64>() / m;
            (mean, var.sqrt().max(f64::EPSILON))
        })
        .collect()
}

fn standardize(x: &[Vec<f64>], stats: &[(f64, f64)]) -> Vec<Vec<f64>> {
    x.iter()
        .map(|row| {
            row.iter()
                .zip(stats)
                .map(|(v, (mean, std))| (v - mean) / std)
                .collect()
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = StdRng::seed_from_u64(42);
    let (x, y) = make_regression(&mut rng)?;

    let split = N_SAMPLES * 4 / 5;
    let (x_train, x_test) = x.split_at(split);
    let (y_train, y_test) = y.split_at(split);

    let stats = column_stats(x_train);
    let x_train = standardize(x_train, &stats);
    let x_test = standardize(x_test, &stats);

    let config = RegressorConfig::default()
        .with_learning_rate(0.1)
        .with_iterations(1500)
        .with_l2_penalty(0.01);
    let mut model = RidgeRegressor::new(config)?;
    model.fit_rows(&x_train, y_train)?;

    let predictions = model.predict_rows(&x_test)?;
    let r2 = model.score(y_test, &predictions)?;
    let mse = metrics::mean_squared_error(y_test, &predictions)?;

    println!("{}", "-".repeat(30));
    println!("Weights (standardized): {:?}", model.weights().unwrap_or_default());
    println!("Bias: {:.4}", model.bias().unwrap_or_default());
    println!("Test MSE: {mse:.4}");
    println!("Final R2 Score on Test Set: {r2:.4}");

    let history = model.loss_history();
    println!("Loss curve ({} iterations):", history.len());
    for i in [0, history.len() / 4, history.len() / 2, history.len() - 1] {
        println!("  iteration {i:>5}: {:.6}", history[i]);
    }

    Ok(())
}
