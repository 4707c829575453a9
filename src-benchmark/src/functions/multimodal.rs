//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use ndarray::ArrayView1;
use std::f64::consts::{E, PI};

/// Bohachevsky function - weak multimodality, summed over neighbour pairs
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
///
/// Requires m >= 2, a single coordinate gives an empty sum.
pub fn bohachevsky(x: ArrayView1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xnext)| {
            xi.powi(2) + 2.0 * xnext.powi(2)
                - 0.3 * (3.0 * PI * xi).cos()
                - 0.4 * (4.0 * PI * xnext).cos()
                + 0.7
        })
        .sum()
}

/// Ackley function - weak multimodality under a global exponential envelope
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: ArrayView1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();
    20.0 - 20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() + E - (sum_cos / n).exp()
}

/// Schaffer function - strong multimodality, summed over neighbour pairs
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// Requires m >= 2, a single coordinate gives an empty sum.
pub fn schaffer(x: ArrayView1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xnext)| {
            let r2 = xi.powi(2) + xnext.powi(2);
            r2.powf(0.25) * ((50.0 * r2.powf(0.1)).sin().powi(2) + 1.0)
        })
        .sum()
}

/// Rastrigin function - strong multimodality, shifted by one
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: ArrayView1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .map(|&xi| {
            let z = xi - 1.0;
            z.powi(2) - 10.0 * (2.0 * PI * z).cos()
        })
        .sum();
    10.0 * n + sum
}
