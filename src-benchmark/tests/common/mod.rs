//! Shared helpers for the catalog integration tests

#![allow(unused)]

use ndarray::Array2;

/// Deterministic batch of `n` points spread over `[lower, upper]^m`
pub fn sample_batch(n: usize, m: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((n, m), |(i, j)| {
        let t = 0.5 + 0.5 * ((i * 7 + j * 13 + 1) as f64 * 0.618_033_988_75).sin();
        lower + (upper - lower) * t
    })
}

/// Assert two floats agree within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {:.12}, got {:.12}, error {:.2e}",
        what,
        expected,
        actual,
        (actual - expected).abs()
    );
}
