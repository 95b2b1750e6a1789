//! # Right Circular Cylinder
//!
//! A finite cylinder described by a base point, an axis direction, a radius
//! and a height. The axis is normalized at construction, which gives the
//! parametric line of the axis as
//!
//! ```text
//! P(t) = base + t * axis
//! ```
//!
//! with `t` in `[0, height]` for points between the two end caps.
//!
//! ## Boundary Representation
//!
//! The boundary consists of three surfaces: the lateral (curved) surface and
//! one flat disk, or cap, at each end. [`RightCircularCylinder::distance`]
//! measures to the nearest of these surfaces, so a point deep inside the
//! solid still has a positive distance.
//!
//! ## Examples
//!
//! ```rust
//! use cylprox::coordinates::{Point, Vector};
//! use cylprox::shapes::RightCircularCylinder;
//!
//! // X-axis cylinder of radius 0.5 spanning t in [0, 2]
//! let cyl = RightCircularCylinder::new(Point::ORIGIN, Vector::new(2.0, 0.0, 0.0), 0.5, 2.0)?;
//!
//! assert!((cyl.distance(&Point::new(1.0, 1.0, 0.0)) - 0.5).abs() < 1e-12);
//! assert!((cyl.distance(&Point::new(-1.0, -1.5, 0.0)) - 2.0_f64.sqrt()).abs() < 1e-12);
//! # Ok::<(), cylprox::CylproxError>(())
//! ```

use log::{debug, trace};

use crate::coordinates::{approx_eq, Point, Vector};
use crate::errors::{CylproxError, Result};

/// Finite right circular cylinder
///
/// Immutable once constructed. The stored axis always has unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightCircularCylinder {
    base: Point,
    axis: Vector,
    radius: f64,
    height: f64,
}

impl RightCircularCylinder {
    /// Creates a cylinder, validating its geometry
    ///
    /// # Arguments
    ///
    /// * `base` - Center of the base cap
    /// * `axis` - Direction from the base cap toward the top cap; any non-zero length
    /// * `radius` - Radius, must be `>= 0`
    /// * `height` - Distance between the caps, must be `>= 0`
    ///
    /// # Errors
    ///
    /// Returns [`CylproxError::InvalidGeometry`] if the radius or height is
    /// negative (or NaN), if the axis has a NaN or infinite component, or if
    /// the axis length is approximately zero.
    pub fn new(base: Point, axis: Vector, radius: f64, height: f64) -> Result<Self> {
        if radius.is_nan() || radius < 0.0 {
            debug!("Rejecting cylinder with radius {}", radius);
            return Err(CylproxError::InvalidGeometry(format!(
                "radius must be non-negative, got {}",
                radius
            )));
        }
        if height.is_nan() || height < 0.0 {
            debug!("Rejecting cylinder with height {}", height);
            return Err(CylproxError::InvalidGeometry(format!(
                "height must be non-negative, got {}",
                height
            )));
        }

        if ![axis.x(), axis.y(), axis.z()].iter().all(|c| c.is_finite()) {
            debug!("Rejecting cylinder with non-finite axis {}", axis);
            return Err(CylproxError::InvalidGeometry(format!(
                "axis {} must have finite components",
                axis
            )));
        }

        // May be infinite for components near f64::MAX, which is not degenerate
        let length = axis.length();
        if approx_eq(length, 0.0) {
            debug!("Rejecting cylinder with degenerate axis {}", axis);
            return Err(CylproxError::InvalidGeometry(format!(
                "axis {} is degenerate (length {})",
                axis, length
            )));
        }

        // Bring the largest component to 1 before dividing out the length,
        // so neither reciprocal leaves the normal range
        let mut axis = axis;
        axis *= 1.0 / axis.largest_component();
        axis *= 1.0 / axis.length();
        trace!(
            "Cylinder base={} axis={} radius={} height={}",
            base,
            axis,
            radius,
            height
        );

        Ok(RightCircularCylinder {
            base,
            axis,
            radius,
            height,
        })
    }

    /// Center of the base cap
    pub fn base(&self) -> Point {
        self.base
    }

    /// Unit-length axis direction
    pub fn axis(&self) -> Vector {
        self.axis
    }

    /// Cylinder radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance between the two caps
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Closest distance from `point` to the boundary of the cylinder
    ///
    /// All three surfaces are considered. The point may lie inside, outside,
    /// or on a surface; the result is always `>= 0`.
    ///
    /// # Method
    ///
    /// The point is projected onto the axis line to get its axial parameter
    /// `t` and its perpendicular distance `d_axis` to the axis. Then:
    ///
    /// - `t` in `[0, h]`: nearer of the lateral surface and the nearer cap plane
    /// - otherwise, `d_axis < r`: straight out to the nearer cap disk
    /// - otherwise: to the rim where the lateral surface meets the cap
    ///
    /// The first case compares against the whole cap *plane*, not the cap
    /// disk. A point lying in a cap plane but outside the radius, such as
    /// `(0, 1, 0)` for an X-axis cylinder of radius 0.5 based at the origin,
    /// therefore measures 0 rather than its 0.5 distance to the rim.
    pub fn distance(&self, point: &Point) -> f64 {
        let to_point = *point - self.base;

        // Signed axial parameter of the projection; axis is unit length
        let line_param = to_point.dot(&self.axis);

        let pt_on_axis = self.base + self.axis * line_param;
        let d_to_axis = pt_on_axis.distance(point);

        // Distance to the infinite lateral surface
        let d_to_cyl = (d_to_axis - self.radius).abs();

        // Distance to the plane of the nearer cap
        let d_to_cap = line_param.abs().min((self.height - line_param).abs());

        let within_span = line_param >= 0.0 && line_param <= self.height;

        if within_span {
            d_to_cyl.min(d_to_cap)
        } else if d_to_axis < self.radius {
            d_to_cap
        } else {
            // In the plane through the point and the axis the cylinder is a
            // rectangle, and this is the distance to one of its corners.
            d_to_cap.hypot(d_to_cyl)
        }
    }

    /// Distances for a batch of points, in input order
    pub fn distances(&self, points: &[Point]) -> Vec<f64> {
        points.iter().map(|p| self.distance(p)).collect()
    }
}
