//! Batch construction and shape validation
//!
//! Every evaluation goes through [`validate`]: a batch is a table of shape
//! `(n, m)` where each of the `n` rows is a candidate vector of dimension `m`.
//! Anything that is not exactly two-dimensional is rejected, no implicit
//! reshaping is done.

use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Ix2};
use serde_json::Value;

use crate::error::{BenchmarkError, Result};

/// Check that `input` is a 2D batch and return it as a `(n, m)` view
///
/// The input is only borrowed. Values are not inspected: ranges, NaN and
/// infinities are passed through to the evaluation.
///
/// # Errors
///
/// [`BenchmarkError::InvalidShape`] if the array rank is not 2.
///
/// # Example
///
/// ```rust
/// use ndarray::{array, Array1};
/// use benchmark_function::validate;
///
/// let batch = array![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(validate(&batch).unwrap().dim(), (2, 2));
///
/// let flat: Array1<f64> = Array1::zeros(5);
/// assert!(validate(&flat).is_err());
/// ```
pub fn validate<S, D>(input: &ArrayBase<S, D>) -> Result<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = input.ndim();
    let batch = input.view().into_dimensionality::<Ix2>().map_err(|_| {
        log::debug!("rejecting batch of shape {:?}", input.shape());
        BenchmarkError::InvalidShape { ndim }
    })?;
    log::trace!("batch of {} sample(s) x {} dimension(s)", batch.nrows(), batch.ncols());
    Ok(batch)
}

/// Build a batch from nested rows
///
/// Rows of different lengths do not form a table and are rejected the same
/// way a one-dimensional input is.
pub fn batch_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let Some(first) = rows.first() else {
        // `[]` is a flat, empty sequence
        return Err(BenchmarkError::InvalidShape { ndim: 1 });
    };
    let m = first.len();
    if rows.iter().any(|row| row.len() != m) {
        return Err(BenchmarkError::InvalidShape { ndim: 1 });
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), m), flat)
        .map_err(|_| BenchmarkError::InvalidShape { ndim: 1 })
}

/// Build a batch from a JSON value such as `[[0.0, 1.0], [2.0, 3.0]]`
///
/// The nesting depth plays the role of the array rank: a scalar is rank 0,
/// `[1, 2]` is rank 1, `[[[1]]]` is rank 3.
///
/// # Errors
///
/// - [`BenchmarkError::InvalidShape`] if the depth is not 2 or rows are ragged
/// - [`BenchmarkError::NotNumeric`] if an entry is not a number
pub fn batch_from_json(value: &Value) -> Result<Array2<f64>> {
    let ndim = nesting_depth(value);
    let rows = match value {
        Value::Array(rows) if ndim == 2 => rows,
        _ => return Err(BenchmarkError::InvalidShape { ndim }),
    };

    let mut parsed = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let cols = row
            .as_array()
            .ok_or(BenchmarkError::InvalidShape { ndim: 1 })?;
        let values = cols
            .iter()
            .enumerate()
            .map(|(j, v)| match v {
                Value::Number(n) => n.as_f64().ok_or_else(|| BenchmarkError::NotNumeric {
                    path: format!("[{}][{}]", i, j),
                }),
                Value::Array(_) => Err(BenchmarkError::InvalidShape { ndim: 1 }),
                _ => Err(BenchmarkError::NotNumeric {
                    path: format!("[{}][{}]", i, j),
                }),
            })
            .collect::<Result<Vec<f64>>>()?;
        parsed.push(values);
    }

    batch_from_rows(&parsed)
}

/// Depth of array nesting, following the first element at each level
fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.first().map_or(0, nesting_depth),
        _ => 0,
    }
}
