//! Point and vector algebra in three-dimensional Euclidean space

mod cartesian;
pub mod point;
pub mod vector;

pub use point::Point;
pub use vector::Vector;

use crate::constants::APPROX_EQ_EPS;

/// Scalar approximate equality using the default tolerance
///
/// Returns true iff `|a - b| < APPROX_EQ_EPS`.
///
/// ```rust
/// use cylprox::coordinates::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-7));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, APPROX_EQ_EPS)
}

/// Scalar approximate equality with a caller-supplied tolerance
///
/// The comparison is strict, so values exactly `eps` apart are not equal.
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
