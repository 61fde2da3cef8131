//! Vector types and traits for chain positions.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for the position type the integrator and solver operate on.
///
/// The per-particle formulas only need addition, scaling and length, so
/// they are written against this trait rather than against `Vec2` directly.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// True when every component is finite.
    fn is_finite(self) -> bool;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Euclidean length.
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

/// A point or displacement in the simulation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Straight down with the given magnitude; gravity points along -y.
    pub fn down(magnitude: F) -> Self {
        Vec2 { x: F::zero(), y: -magnitude }
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

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self {
        Vec2 { x, y }
    }
}
