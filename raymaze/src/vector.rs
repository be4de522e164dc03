use core::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Rotation2, Vector2};

use super::Float;

/// An immutable 2D vector. Every operation returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector(Vector2<Float>);

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(x: Float, y: Float) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    #[must_use]
    pub fn zeros() -> Self {
        Self(Vector2::zeros())
    }

    /// The unit vector pointing at `angle` radians from the x axis.
    #[inline]
    #[must_use]
    pub fn from_angle(angle: Float) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn x(&self) -> Float {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> Float {
        self.0.y
    }

    #[inline]
    #[must_use]
    pub fn with_x(self, x: Float) -> Self {
        Self::new(x, self.y())
    }

    #[inline]
    #[must_use]
    pub fn with_y(self, y: Float) -> Self {
        Self::new(self.x(), y)
    }

    #[inline]
    #[must_use]
    pub fn scale(self, s: Float) -> Self {
        Self(self.0 * s)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> Float {
        self.0.dot(&other.0)
    }

    #[inline]
    pub fn length(&self) -> Float {
        self.0.norm()
    }

    /// Returns the unit vector with the same direction as `self`,
    /// or the zero vector if `self` has zero length.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.0.try_normalize(0.0).map_or_else(Self::zeros, Self)
    }

    /// Rotates `self` counter-clockwise by `angle` radians.
    #[inline]
    #[must_use]
    pub fn rotate(&self, angle: Float) -> Self {
        Self(Rotation2::new(angle) * self.0)
    }

    #[inline]
    pub fn as_inner(&self) -> &Vector2<Float> {
        &self.0
    }
}

impl From<Vector2<Float>> for Vector {
    #[inline]
    fn from(v: Vector2<Float>) -> Self {
        Self(v)
    }
}

impl From<[Float; 2]> for Vector {
    #[inline]
    fn from([x, y]: [Float; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Float> for Vector {
    type Output = Self;

    #[inline]
    fn mul(self, s: Float) -> Self {
        self.scale(s)
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
