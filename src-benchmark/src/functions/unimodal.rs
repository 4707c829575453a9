//! Unimodal test functions
//!
//! Single-optimum surfaces: they test convergence speed, step-size adaptation
//! on ill-scaled axes and the handling of coupled parameters.
//!
//! Each function evaluates one candidate vector; batches are handled by
//! [`crate::BenchmarkFunction::evaluate`].

use ndarray::ArrayView1;

/// Sphere function - basic convex bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: ArrayView1<f64>) -> f64 {
    x.iter().map(|&xi| xi.powi(2)).sum()
}

/// Ellipsoid function - weak ill-scale, axis i weighted by 1000^(i/(m-1))
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
///
/// Requires m >= 2: with a single coordinate the exponent is 0/0 and the
/// result is NaN.
pub fn ellipsoid(x: ArrayView1<f64>) -> f64 {
    let denom = (x.len() as f64) - 1.0;
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (xi * 1000f64.powf(i as f64 / denom)).powi(2))
        .sum()
}

/// k-Tablet function - strong ill-scale
/// The first k = ceil(m/4) coordinates are unscaled, the rest are scaled by 100.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn k_tablet(x: ArrayView1<f64>) -> f64 {
    let k = x.len().div_ceil(4);
    let head: f64 = x.iter().take(k).map(|&xi| xi.powi(2)).sum();
    let tail: f64 = x.iter().skip(k).map(|&xi| (100.0 * xi).powi(2)).sum();
    head + tail
}

/// Rosenbrock star function - every coordinate coupled to the first one
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
///
/// Requires m >= 2, a single coordinate gives an empty sum.
pub fn rosenbrock_star(x: ArrayView1<f64>) -> f64 {
    let Some(&x1) = x.get(0) else {
        return 0.0;
    };
    x.iter()
        .skip(1)
        .map(|&xi| 100.0 * (x1 - xi.powi(2)).powi(2) + (1.0 - xi).powi(2))
        .sum()
}

/// Rosenbrock chain function - coupling between neighbouring coordinates
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
///
/// Requires m >= 2, a single coordinate gives an empty sum.
pub fn rosenbrock_chain(x: ArrayView1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xnext)| 100.0 * (xnext - xi.powi(2)).powi(2) + (1.0 - xi).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_sphere() {
        assert_eq!(sphere(array![0.0, 0.0, 0.0].view()), 0.0);
        assert_eq!(sphere(array![1.0, 2.0].view()), 5.0);
        assert_eq!(sphere(array![-3.0].view()), 9.0);
    }

    #[test]
    fn test_ellipsoid_axis_weights() {
        // m = 3: weights 1, sqrt(1000), 1000 before squaring
        assert!((ellipsoid(array![1.0, 0.0, 0.0].view()) - 1.0).abs() < 1e-12);
        assert!((ellipsoid(array![0.0, 1.0, 0.0].view()) - 1000.0).abs() < 1e-9);
        assert!((ellipsoid(array![0.0, 0.0, 1.0].view()) - 1e6).abs() < 1e-6);
        assert_eq!(ellipsoid(array![0.0, 0.0].view()), 0.0);
    }

    #[test]
    fn test_ellipsoid_single_dimension_is_nan() {
        assert!(ellipsoid(array![0.5].view()).is_nan());
    }

    #[test]
    fn test_k_tablet_split() {
        // m = 5 => k = 2
        let x = Array1::from_vec(vec![1.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(k_tablet(x.view()), 1.0 + 1.0 + 10000.0);

        // m = 4 => k = 1
        let x = Array1::from_vec(vec![2.0, 1.0, 0.0, 0.0]);
        assert_eq!(k_tablet(x.view()), 4.0 + 10000.0);

        // m = 1 => k = 1, nothing scaled
        assert_eq!(k_tablet(array![3.0].view()), 9.0);
    }

    #[test]
    fn test_rosenbrock_star() {
        assert_eq!(rosenbrock_star(array![1.0, 1.0, 1.0].view()), 0.0);
        // x1 = 0, x2 = 0: 100 * 0 + 1
        assert_eq!(rosenbrock_star(array![0.0, 0.0].view()), 1.0);
        // x1 = 2, x2 = 1, x3 = 0: (100 + 0) + (400 + 1)
        assert_eq!(rosenbrock_star(array![2.0, 1.0, 0.0].view()), 501.0);
    }

    #[test]
    fn test_rosenbrock_chain() {
        assert_eq!(rosenbrock_chain(array![1.0, 1.0, 1.0, 1.0].view()), 0.0);
        // classic 2D value at the origin
        assert_eq!(rosenbrock_chain(array![0.0, 0.0].view()), 1.0);
        // (0 -> 1): 100 + 1, (1 -> 0): 100 + 0
        assert_eq!(rosenbrock_chain(array![0.0, 1.0, 0.0].view()), 201.0);
    }

    #[test]
    fn test_rosenbrock_single_dimension_is_empty_sum() {
        assert_eq!(rosenbrock_star(array![3.0].view()), 0.0);
        assert_eq!(rosenbrock_chain(array![3.0].view()), 0.0);
    }
}
