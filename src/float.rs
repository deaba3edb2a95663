//! Floating-point abstraction so the kinematics run on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the creature needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the core stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from f64 (for host-supplied coordinates).
    fn from_f64(v: f64) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// True unless NaN or infinite.
    fn is_finite(self) -> bool;

    /// Full turn (2π).
    fn tau() -> Self {
        Self::two() * Self::pi()
    }

    /// Convert an index or count.
    fn from_usize(v: usize) -> Self {
        Self::from_f32(v as f32)
    }

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Linear interpolation: self + (other - self) * t
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    /// Wrap into `[0, period)`. A non-positive period leaves the value alone.
    fn wrap(self, period: Self) -> Self {
        if period <= Self::zero() {
            return self;
        }
        let wrapped = self - period * (self / period).floor();
        // the quotient can round across an integer, leaving us one period out
        if wrapped >= period {
            wrapped - period
        } else if wrapped < Self::zero() {
            wrapped + period
        } else {
            wrapped
        }
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn tau() -> Self { core::f32::consts::TAU }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_f64(v: f64) -> Self { v }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn floor(self) -> Self { libm::floor(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn tau() -> Self { core::f64::consts::TAU }
    fn from_usize(v: usize) -> Self { v as f64 }
}
