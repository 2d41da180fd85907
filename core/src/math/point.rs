//! Points in real space.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Index, Sub};

use crate::math::{approx::ApproxEq, vec::Vec3};

/// A position in three-dimensional space.
///
/// Unlike a [`Vec3`], a point has no length or direction. The difference
/// of two points is a vector, and a point plus a vector is a point.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Point3(pub [f32; 3]);

/// Returns a point with coordinates `x`, `y`, and `z`.
#[inline]
pub const fn pt3(x: f32, y: f32, z: f32) -> Point3 {
    Point3([x, y, z])
}

impl Point3 {
    /// Returns the origin point (0, 0, 0).
    pub const fn origin() -> Self {
        pt3(0.0, 0.0, 0.0)
    }

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

    /// Returns the vector from the origin to `self`.
    #[inline]
    pub const fn to_vec(self) -> Vec3 {
        Vec3(self.0)
    }

    /// Returns the centroid of the given points, or `None` if there are none.
    ///
    /// # Examples
    /// ```
    /// # use polyview_core::math::{pt3, Point3};
    /// let c = Point3::centroid([pt3(0.0, 0.0, 0.0), pt3(2.0, 4.0, -2.0)]);
    /// assert_eq!(c, Some(pt3(1.0, 2.0, -1.0)));
    /// ```
    pub fn centroid(pts: impl IntoIterator<Item = Point3>) -> Option<Self> {
        let (sum, n) = pts
            .into_iter()
            .fold((Vec3::ZERO, 0), |(s, n), p| (s + p.to_vec(), n + 1));
        (n > 0).then(|| Point3((sum * (1.0 / n as f32)).0))
    }
}

impl Debug for Point3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point3{:?}", self.0)
    }
}

impl Index<usize> for Point3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(els: [f32; 3]) -> Self {
        Self(els)
    }
}

impl ApproxEq<Self, f32> for Point3 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        <f32 as ApproxEq>::relative_epsilon()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, v: Vec3) -> Self {
        Self((self.to_vec() + v).0)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Self) -> Vec3 {
        self.to_vec() - other.to_vec()
    }
}
