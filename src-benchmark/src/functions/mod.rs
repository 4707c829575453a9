//! Test function implementations organized by category
//!
//! - `unimodal`: Sphere, Ellipsoid, k-Tablet and the two Rosenbrock variants
//! - `multimodal`: Bohachevsky, Ackley, Schaffer and shifted Rastrigin
//!
//! All functions take a single candidate vector and return its fitness.

pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use unimodal::*;
