//! Real vectors: displacements, directions, and surface normals.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

/// A three-dimensional real vector.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec3(pub [f32; 3]);

/// Returns a vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3([x, y, z])
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = vec3(0.0, 0.0, 0.0);
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// Unit vector codirectional with the positive z-axis.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both and follows the right-hand rule.
    /// # Examples
    /// ```
    /// # use polyview_core::math::Vec3;
    /// assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }

    /// Returns the squared Euclidean length of `self`.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        use crate::math::float::f32;
        f32::sqrt(self.len_sqr())
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The zero vector is returned unchanged.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.len();
        if len == 0.0 { *self } else { *self * (1.0 / len) }
    }

    /// Returns the largest absolute value of the components of `self`.
    pub fn max_abs(&self) -> f32 {
        use crate::math::float::f32;
        self.0.iter().fold(0.0_f32, |m, &c| m.max(f32::abs(c)))
    }
}

impl Debug for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3{:?}", self.0)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(els: [f32; 3]) -> Self {
        Self(els)
    }
}

impl ApproxEq<Self, f32> for Vec3 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        <f32 as ApproxEq>::relative_epsilon()
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        vec3(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, s: f32) -> Self {
        vec3(self.x() * s, self.y() * s, self.z() * s)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        vec3(-self.x(), -self.y(), -self.z())
    }
}
