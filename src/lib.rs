//! Cylprox: distance queries against finite right circular cylinders
//!
//! This crate computes the shortest Euclidean distance from an arbitrary point
//! to the boundary of a finite right circular cylinder, together with the
//! small point/vector algebra the computation is built on.
//!
//! ```rust
//! use cylprox::{Point, RightCircularCylinder, Vector};
//!
//! let cyl = RightCircularCylinder::new(Point::ORIGIN, Vector::new(0.0, 0.0, 1.0), 1.0, 4.0)?;
//!
//! // Inside the solid, nearer to the lateral surface than to either cap
//! let d = cyl.distance(&Point::new(0.25, 0.0, 2.0));
//! assert!((d - 0.75).abs() < 1e-12);
//! # Ok::<(), cylprox::CylproxError>(())
//! ```

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod shapes;

// Re-export commonly used types
pub use config::{CylinderConfig, QueryConfig};
pub use constants::APPROX_EQ_EPS;
pub use coordinates::{approx_eq, approx_eq_eps, Point, Vector};
pub use errors::{CylproxError, Result};
pub use shapes::RightCircularCylinder;
