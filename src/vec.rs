//! Planar vector type used for every point on the creature.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector in canvas-local coordinates (y grows downward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: F) -> Self {
        Vec2 { x: angle.cos(), y: angle.sin() }
    }

    /// Angle of this vector, `atan2(y, x)`.
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Manhattan length, `|x| + |y|`.
    pub fn manhattan(self) -> F {
        self.x.abs() + self.y.abs()
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn from_angle_round_trips_angle() {
        let v = Vec2::<f64>::from_angle(1.2);
        assert!((v.angle() - 1.2).abs() < 1e-12);
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perp_is_orthogonal() {
        let v = Vec2::new(2.0f64, -7.0);
        assert!(v.dot(v.perp()).abs() < 1e-12);
    }

    #[test]
    fn manhattan_sums_abs_components() {
        let v = Vec2::new(-3.0f32, 4.5);
        assert!((v.manhattan() - 7.5).abs() < 1e-6);
    }
}
