//! # Free Vectors
//!
//! A [`Vector`] is a displacement in space with a direction and a magnitude
//! but no location. It supports the vector-space operations (sum, scalar
//! multiple) and the metric ones (length, dot product).
//!
//! Zero-length vectors are representable. Consumers that need a direction,
//! such as the axis of a cylinder, reject them at their own boundary.
//!
//! ## Examples
//!
//! ```rust
//! use cylprox::coordinates::Vector;
//!
//! let v = Vector::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let mut doubled = v + v;
//! doubled *= 0.5;
//! assert!(doubled.approx_eq(&v));
//! ```

use std::fmt;

use nalgebra::Vector3;

use super::cartesian::Cartesian3;
use super::point::Point;
use crate::constants::APPROX_EQ_EPS;

/// Three-dimensional free vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub(super) coords: Cartesian3,
}

impl Vector {
    /// The zero displacement
    pub const ZERO: Vector = Vector {
        coords: Cartesian3::new(0.0, 0.0, 0.0),
    };

    /// Creates a new vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cylprox::coordinates::Vector;
    ///
    /// let v = Vector::new(4.0, 5.0, 6.0);
    /// assert_eq!(v.x(), 4.0);
    /// assert_eq!(v.y(), 5.0);
    /// assert_eq!(v.z(), 6.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector {
            coords: Cartesian3::new(x, y, z),
        }
    }

    pub(super) fn from_cartesian(coords: Cartesian3) -> Self {
        Vector { coords }
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Euclidean length of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `length = sqrt(x² + y² + z²)`
    ///
    /// Always non-negative; zero only for the zero vector. Components are
    /// scaled by the largest magnitude first, so any finite vector has a
    /// finite length. Non-finite components give an infinite or NaN length.
    pub fn length(&self) -> f64 {
        let largest = self.largest_component();
        if largest == 0.0 || !largest.is_finite() {
            return self.dot(self).sqrt();
        }

        let unit = *self * (1.0 / largest);
        largest * unit.dot(&unit).sqrt()
    }

    /// Largest absolute component, ignoring NaN
    pub(crate) fn largest_component(&self) -> f64 {
        self.coords.x.abs().max(self.coords.y.abs()).max(self.coords.z.abs())
    }

    /// Standard inner product with another vector
    ///
    /// No normalization is implied. For a unit `other` the result is the
    /// signed length of the projection of `self` onto `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cylprox::coordinates::Vector;
    ///
    /// let x_axis = Vector::new(1.0, 0.0, 0.0);
    /// let v = Vector::new(2.5, -7.0, 3.0);
    /// assert_eq!(v.dot(&x_axis), 2.5);
    /// ```
    pub fn dot(&self, other: &Vector) -> f64 {
        self.coords.x * other.coords.x
            + self.coords.y * other.coords.y
            + self.coords.z * other.coords.z
    }

    /// Coordinate-wise approximate equality using the default tolerance
    pub fn approx_eq(&self, other: &Vector) -> bool {
        self.approx_eq_eps(other, APPROX_EQ_EPS)
    }

    /// Coordinate-wise approximate equality with a caller-supplied tolerance
    pub fn approx_eq_eps(&self, other: &Vector, eps: f64) -> bool {
        self.coords.approx_eq_eps(&other.coords, eps)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.coords.x, self.coords.y, self.coords.z)
    }
}

impl From<Point> for Vector {
    /// Displacement from the origin to `head`
    fn from(head: Point) -> Self {
        Vector::from_cartesian(head.coords)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(vec: Vector3<f64>) -> Self {
        Vector::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(vec: Vector) -> Self {
        vec.to_vector3()
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::from_cartesian(self.coords + other.coords)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, scalar: f64) -> Vector {
        self *= scalar;
        self
    }
}

impl std::ops::MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.coords.scale(scalar);
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.coords.x, self.coords.y, self.coords.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_access() {
        let v = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(v.x(), 4.0);
        assert_eq!(v.y(), 5.0);
        assert_eq!(v.z(), 6.0);
    }

    #[test]
    fn test_vec_from_point() {
        let v = Vector::from(Point::new(1.0, 2.0, 3.0));
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn test_length_calculation() {
        assert_eq!(Vector::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector::new(0.0, 0.0, -2.0).length(), 2.0);
        assert_eq!(Vector::ZERO.length(), 0.0);
        assert_eq!(Vector::from(Point::ORIGIN).length(), 0.0);
    }

    #[test]
    fn test_length_does_not_overflow() {
        let huge = Vector::new(1e200, 1e200, 0.0);
        assert!(huge.dot(&huge).is_infinite());
        assert!((huge.length() / 1e200 - 2.0_f64.sqrt()).abs() < 1e-15);

        let tiny = Vector::new(3e-200, 4e-200, 0.0);
        assert!((tiny.length() / 1e-200 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_of_non_finite_vector() {
        assert!(Vector::new(f64::NAN, 0.0, 0.0).length().is_nan());
        assert!(Vector::new(f64::NAN, 1.0, 0.0).length().is_nan());
        assert!(Vector::new(f64::INFINITY, 1.0, 0.0).length().is_infinite());
        assert!(Vector::new(0.0, f64::NEG_INFINITY, 0.0).length().is_infinite());
    }

    #[test]
    fn test_dot_product() {
        let x_axis = Vector::new(1.0, 0.0, 0.0);
        let y_axis = Vector::new(0.0, 1.0, 0.0);

        assert_eq!(x_axis.dot(&y_axis), 0.0);
        assert_eq!(x_axis.dot(&Vector::new(2.0, 0.0, 0.0)), 2.0);
        assert_eq!(x_axis.dot(&Vector::new(-1.0, 0.0, 0.0)), -1.0);
        assert_eq!(
            Vector::new(1.0, 2.0, 3.0).dot(&Vector::new(4.0, 5.0, 6.0)),
            32.0
        );
    }

    #[test]
    fn test_add_and_scale() {
        let sample = Vector::new(4.0, 5.0, 6.0);
        let mut offset = Vector::ZERO + sample;
        offset *= 2.0;
        assert_eq!(offset, Vector::new(8.0, 10.0, 12.0));

        let scaled = sample * -0.5;
        assert_eq!(scaled, Vector::new(-2.0, -2.5, -3.0));
        // The operand is a copy and is left untouched
        assert_eq!(sample, Vector::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_approx_eq_custom_tolerance() {
        let a = Vector::new(1.0, 1.0, 1.0);
        let b = Vector::new(1.0, 1.0, 1.01);
        assert!(!a.approx_eq(&b));
        assert!(a.approx_eq_eps(&b, 0.1));
    }

    #[test]
    fn test_vector3_conversions() {
        let v = Vector::new(1.0, 2.0, 3.0);
        let na: Vector3<f64> = v.into();
        assert_eq!(na, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector::from(na), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vector::new(1.0, -2.5, 0.0)), "<1, -2.5, 0>");
    }
}
