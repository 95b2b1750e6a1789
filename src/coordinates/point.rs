//! # Points
//!
//! A [`Point`] is a position in space. Subtracting two points yields the
//! [`Vector`] between them, and translating a point by a vector yields a new
//! point:
//!
//! ```rust
//! use cylprox::coordinates::{Point, Vector};
//!
//! let a = Point::new(1.0, 2.0, 3.0);
//! let b = Point::new(4.0, 6.0, 3.0);
//!
//! // `b - a` is the vector FROM a TO b
//! let ab: Vector = b - a;
//! assert_eq!(ab, Vector::new(3.0, 4.0, 0.0));
//! assert!((a + ab).approx_eq(&b));
//! assert_eq!(a.distance(&b), 5.0);
//! ```

use std::fmt;

use nalgebra::Point3;

use super::cartesian::Cartesian3;
use super::vector::Vector;
use crate::constants::APPROX_EQ_EPS;

/// Three-dimensional Euclidean point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub(super) coords: Cartesian3,
}

impl Point {
    /// The origin `(0, 0, 0)`
    pub const ORIGIN: Point = Point {
        coords: Cartesian3::new(0.0, 0.0, 0.0),
    };

    /// Creates a new point from its coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point {
            coords: Cartesian3::new(x, y, z),
        }
    }

    /// X-coordinate
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Y-coordinate
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Z-coordinate
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Euclidean distance to another point
    ///
    /// Symmetric and non-negative; zero iff the points are exactly equal.
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    /// Coordinate-wise approximate equality using the default tolerance
    ///
    /// This is NOT a distance comparison; see [`Point::approx_eq_eps`].
    pub fn approx_eq(&self, other: &Point) -> bool {
        self.approx_eq_eps(other, APPROX_EQ_EPS)
    }

    /// Coordinate-wise approximate equality with a caller-supplied tolerance
    ///
    /// Each axis is compared independently with `|a - b| < eps`. Callers who
    /// need "within `eps` of a target position" should compare
    /// [`Point::distance`] against `eps` instead.
    pub fn approx_eq_eps(&self, other: &Point, eps: f64) -> bool {
        self.coords.approx_eq_eps(&other.coords, eps)
    }

    /// Converts to a nalgebra Point3
    pub fn to_point3(&self) -> Point3<f64> {
        Point3::new(self.coords.x, self.coords.y, self.coords.z)
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::ORIGIN
    }
}

impl From<Point3<f64>> for Point {
    fn from(p: Point3<f64>) -> Self {
        Point::new(p.x, p.y, p.z)
    }
}

impl From<Point> for Point3<f64> {
    fn from(p: Point) -> Self {
        p.to_point3()
    }
}

// Vector FROM `base` TO `self`
impl std::ops::Sub for Point {
    type Output = Vector;

    fn sub(self, base: Point) -> Vector {
        Vector::from_cartesian(self.coords - base.coords)
    }
}

impl std::ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, offset: Vector) -> Point {
        Point {
            coords: self.coords + offset.coords,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.coords.x, self.coords.y, self.coords.z)
    }
}
