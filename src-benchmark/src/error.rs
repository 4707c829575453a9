//! Error type for the benchmark function catalog

/// Errors raised at the boundary of the catalog
///
/// Only the shape of a batch is checked. Value ranges, non-finite entries and
/// per-function minimum dimensions are left to the caller.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error(
        "Only 2D array is expected, got an array with {ndim} dimension(s). Reshape your data: (-1,1) for single-feature data or (1,-1) for single-sample data"
    )]
    InvalidShape { ndim: usize },

    #[error("Value at {path} is not a number")]
    NotNumeric { path: String },

    #[error("Unknown benchmark function: {0}")]
    UnknownFunction(String),

    #[error("Grid needs at least 2 points per axis, got {xn}x{yn}")]
    InvalidGrid { xn: usize, yn: usize },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, BenchmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_message_carries_reshape_hint() {
        let msg = BenchmarkError::InvalidShape { ndim: 1 }.to_string();
        assert!(msg.contains("(-1,1)"), "missing single-feature hint: {}", msg);
        assert!(msg.contains("(1,-1)"), "missing single-sample hint: {}", msg);
        assert!(msg.contains("1 dimension"));
    }

    #[test]
    fn test_unknown_function_message() {
        let err = BenchmarkError::UnknownFunction("Himmelblau".to_string());
        assert_eq!(err.to_string(), "Unknown benchmark function: Himmelblau");
    }
}
