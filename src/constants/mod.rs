//! Constants module for geometric tolerances

/// Default tolerance for approximate equality comparisons
pub const APPROX_EQ_EPS: f64 = 1e-5;
