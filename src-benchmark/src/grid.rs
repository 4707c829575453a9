//! Sampling a benchmark function on a regular 2D grid
//!
//! Used to draw contour plots of the catalog functions over their search area.

use ndarray::Array2;

use crate::catalog::BenchmarkFunction;
use crate::error::{BenchmarkError, Result};

/// Function values on a regular grid, `z[j][i] = f(x[i], y[j])`
#[derive(Debug, Clone)]
pub struct Grid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

fn linspace(bounds: (f64, f64), n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| bounds.0 + (bounds.1 - bounds.0) * i as f64 / (n - 1) as f64)
        .collect()
}

/// Evaluate `function` on an `xn` x `yn` grid spanning `x_bounds` x `y_bounds`
///
/// All grid points go through a single batch evaluation.
pub fn evaluate_grid(
    function: BenchmarkFunction,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    xn: usize,
    yn: usize,
) -> Result<Grid> {
    if xn < 2 || yn < 2 {
        return Err(BenchmarkError::InvalidGrid { xn, yn });
    }

    let x = linspace(x_bounds, xn);
    let y = linspace(y_bounds, yn);

    // row-major over y then x so that values chunk into z rows
    let points = Array2::from_shape_fn((xn * yn, 2), |(k, c)| {
        if c == 0 { x[k % xn] } else { y[k / xn] }
    });
    let values = function.par_evaluate(&points)?;
    let z = values
        .to_vec()
        .chunks(xn)
        .map(<[f64]>::to_vec)
        .collect();

    log::debug!("sampled {} on a {}x{} grid", function, xn, yn);
    Ok(Grid { x, y, z })
}
