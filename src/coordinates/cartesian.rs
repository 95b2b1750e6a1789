//! # Cartesian Coordinate Triple
//!
//! Raw `(x, y, z)` storage shared by [`Point`](super::Point) and
//! [`Vector`](super::Vector). The triple carries no geometric meaning of its
//! own; the two public types give it one.
//!
//! ## Approximate Equality
//!
//! Equality on a triple applies the scalar test once per axis. It is a
//! coordinate-wise comparison, not a tolerance ball on Euclidean distance:
//! two triples that differ by just under `eps` on every axis compare equal
//! even though they are `eps * sqrt(3)` apart.

use super::approx_eq_eps;

/// Three-dimensional coordinate storage
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cartesian3 {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Cartesian3 {
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Coordinate-wise approximate equality on all three axes
    pub(crate) fn approx_eq_eps(&self, other: &Cartesian3, eps: f64) -> bool {
        approx_eq_eps(self.x, other.x, eps)
            && approx_eq_eps(self.y, other.y, eps)
            && approx_eq_eps(self.z, other.z, eps)
    }

    /// Scales every component in place
    pub(crate) fn scale(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_creation() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x, 1.0);
        assert_eq!(coord.y, 2.0);
        assert_eq!(coord.z, 3.0);
    }

    #[test]
    fn test_scale_in_place() {
        let mut coord = Cartesian3::new(1.0, -2.0, 0.5);
        coord.scale(2.0);
        assert_eq!(coord, Cartesian3::new(2.0, -4.0, 1.0));

        coord.scale(0.0);
        assert_eq!(coord, Cartesian3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_approx_eq_checks_every_axis() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);

        assert!(a.approx_eq_eps(&Cartesian3::new(1.0 + 1e-6, 2.0 - 1e-6, 3.0), 1e-5));
        assert!(!a.approx_eq_eps(&Cartesian3::new(1.1, 2.0, 3.0), 1e-5));
        assert!(!a.approx_eq_eps(&Cartesian3::new(1.0, 2.1, 3.0), 1e-5));
        // Z differs only
        assert!(!a.approx_eq_eps(&Cartesian3::new(1.0, 2.0, 3.1), 1e-5));
    }

    #[test]
    fn test_approx_eq_is_not_a_distance_ball() {
        // Each axis is just inside the tolerance, the Euclidean gap is not
        let a = Cartesian3::new(0.0, 0.0, 0.0);
        let b = Cartesian3::new(0.9e-5, 0.9e-5, 0.9e-5);
        let gap = (3.0_f64).sqrt() * 0.9e-5;
        assert!(gap > 1e-5);
        assert!(a.approx_eq_eps(&b, 1e-5));
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Cartesian3::new(5.0, 7.0, 9.0));

        let diff = b - a;
        assert_eq!(diff, Cartesian3::new(3.0, 3.0, 3.0));
    }
}
