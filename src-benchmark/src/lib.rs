//! Benchmark functions for optimization
//!
//! A fixed catalog of nine classic test functions used to evaluate optimization
//! algorithms. Every function maps a batch of candidate vectors (a 2D array of
//! shape `(n, m)`) to `n` fitness values:
//!
//! - **Unimodal**: Sphere, Ellipsoid, k-Tablet, RosenbrockStar, RosenbrockChain
//! - **Multimodal**: Bohachevsky, Ackley, Schaffer, Rastrigin
//!
//! The catalog also reports the search area of each function and its optimal
//! solution for a given dimension.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use benchmark_function::*;
//!
//! let batch = array![[0.0, 0.0], [1.0, 1.0]];
//! let fitness = evaluate(BenchmarkFunction::RosenbrockChain, &batch).unwrap();
//! assert_eq!(fitness.len(), 2);
//! assert!(fitness[1].abs() < 1e-12);
//!
//! // Get function metadata
//! let areas = search_area();
//! assert_eq!(areas["Schaffer"], [-100.0, 100.0]);
//! let optimum = optimal_solution(3);
//! assert_eq!(optimum["Rastrigin"], vec![1.0, 1.0, 1.0]);
//! ```

use ndarray::{Array1, Array2, ArrayBase, Data, Dimension};
use serde::Serialize;
use std::collections::HashMap;

use crate::error::Result;

pub mod batch;
pub mod catalog;
pub mod error;
pub mod functions;
pub mod grid;

pub use batch::{batch_from_json, batch_from_rows, validate};
pub use catalog::{BenchmarkFunction, RowFunction};
pub use error::BenchmarkError;
pub use functions::*;
pub use grid::{evaluate_grid, Grid};

/// Metadata for a test function: search area, optimum and properties
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Search interval (min, max), identical for every dimension
    pub bounds: (f64, f64),
    /// Coordinate repeated in the global minimizer
    pub optimum: f64,
    /// Function value at the global minimizer
    pub optimal_value: f64,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Smallest dimension the formula is defined for
    pub min_dimension: usize,
}

impl From<BenchmarkFunction> for FunctionMetadata {
    fn from(function: BenchmarkFunction) -> Self {
        let [lower, upper] = function.search_area();
        FunctionMetadata {
            name: function.name().to_string(),
            bounds: (lower, upper),
            optimum: function.optimum_coordinate(),
            optimal_value: 0.0,
            description: function.description().to_string(),
            multimodal: function.multimodal(),
            min_dimension: function.min_dimension(),
        }
    }
}

/// Evaluate `function` on a batch of shape `(n, m)`
///
/// # Errors
///
/// [`BenchmarkError::InvalidShape`] if `input` is not two-dimensional.
pub fn evaluate<S, D>(function: BenchmarkFunction, input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    function.evaluate(input)
}

/// Search area of every function, keyed by name
pub fn search_area() -> HashMap<String, [f64; 2]> {
    BenchmarkFunction::ALL
        .iter()
        .map(|f| (f.name().to_string(), f.search_area()))
        .collect()
}

/// Optimal solution of every function in `dimension` dimensions, keyed by name
///
/// A dimension of 0 gives empty vectors.
pub fn optimal_solution(dimension: usize) -> HashMap<String, Vec<f64>> {
    BenchmarkFunction::ALL
        .iter()
        .map(|f| (f.name().to_string(), f.optimal_solution(dimension)))
        .collect()
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    BenchmarkFunction::ALL
        .iter()
        .map(|&f| (f.name().to_string(), FunctionMetadata::from(f)))
        .collect()
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Helper function to get the bounds matrix of a function in `n` dimensions
/// Returns None if the function name is unknown
pub fn get_function_bounds(function_name: &str, n: usize) -> Option<Array2<f64>> {
    let function: BenchmarkFunction = function_name.parse().ok()?;
    let [lower, upper] = function.search_area();
    Some(create_bounds(n, lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let tolerance = 1e-10;

        for dim in [2, 3, 5, 10] {
            for function in BenchmarkFunction::ALL {
                let meta = &metadata[function.name()];
                let x = Array2::from_elem((1, dim), meta.optimum);
                let actual_value = function.evaluate(&x).unwrap()[0];
                let error = (actual_value - meta.optimal_value).abs();

                assert!(
                    error <= tolerance,
                    "Function {} failed in {}D: expected {:.10}, got {:.10}, error {:.2e}",
                    function,
                    dim,
                    meta.optimal_value,
                    actual_value,
                    error
                );
            }
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();
        assert_eq!(metadata.len(), 9);

        for (name, meta) in metadata.iter() {
            assert_eq!(name, &meta.name);
            assert!(!meta.description.is_empty(), "Function {} has no description", name);
            assert!(
                meta.bounds.0 < meta.bounds.1,
                "Function {} has invalid bounds: {} >= {}",
                name,
                meta.bounds.0,
                meta.bounds.1
            );
            assert!(
                meta.optimum >= meta.bounds.0 && meta.optimum <= meta.bounds.1,
                "Function {} has its optimum outside of the search area",
                name
            );
            assert!(meta.min_dimension >= 1);
        }
    }

    #[test]
    fn test_search_area_values() {
        let areas = search_area();
        assert_eq!(areas.len(), 9);
        assert_eq!(areas["Sphere"], [-5.12, 5.12]);
        assert_eq!(areas["kTablet"], [-5.12, 5.12]);
        assert_eq!(areas["RosenbrockStar"], [-2.048, 2.048]);
        assert_eq!(areas["RosenbrockChain"], [-2.048, 2.048]);
        assert_eq!(areas["Ackley"], [-32.768, 32.768]);
        assert_eq!(areas["Schaffer"], [-100.0, 100.0]);
        assert_eq!(areas["Rastrigin"], [-5.12, 5.12]);
    }

    #[test]
    fn test_optimal_solution_dimension_zero() {
        let optimum = optimal_solution(0);
        assert_eq!(optimum.len(), 9);
        assert!(optimum.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_create_bounds() {
        let bounds = create_bounds(3, -2.0, 4.0);
        assert_eq!(bounds.dim(), (2, 3));
        assert!(bounds.row(0).iter().all(|&b| b == -2.0));
        assert!(bounds.row(1).iter().all(|&b| b == 4.0));
    }

    #[test]
    fn test_get_function_bounds() {
        let bounds = get_function_bounds("Ackley", 4).unwrap();
        assert_eq!(bounds.dim(), (2, 4));
        assert_eq!(bounds[[0, 3]], -32.768);
        assert_eq!(bounds[[1, 0]], 32.768);

        let bounds = get_function_bounds("rosenbrock_star", 2).unwrap();
        assert_eq!(bounds[[1, 1]], 2.048);

        assert!(get_function_bounds("eggholder", 2).is_none());
    }
}
