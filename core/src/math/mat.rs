//! Matrices and linear transforms.
//!
//! Matrices are stored in row-major order and applied to column vectors,
//! so the translation components of an affine transform are in the last
//! column. Composition follows the fixed-function convention: a transform
//! command multiplies the current matrix from the right, so the command
//! issued last is the first one applied to a vertex.

use core::fmt::{self, Debug, Formatter};

use crate::math::{Angle, ApproxEq, Point3, Vec3, vec3};

/// A 4×4 matrix of `f32` elements.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the `i`th row of `self`.
    #[inline]
    pub fn row(&self, i: usize) -> [f32; 4] {
        self.0[i]
    }
    /// Returns the `i`th column of `self`.
    #[inline]
    pub fn col(&self, i: usize) -> [f32; 4] {
        self.0.map(|row| row[i])
    }

    /// Returns the matrix product `self` · `other`.
    ///
    /// The result applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut els = [[0.0; 4]; 4];
        for (i, row) in els.iter_mut().enumerate() {
            for (j, el) in row.iter_mut().enumerate() {
                *el = dot4(self.row(i), other.col(j));
            }
        }
        Self(els)
    }

    /// Applies `self` to a homogeneous column vector.
    #[inline]
    pub fn apply4(&self, v: [f32; 4]) -> [f32; 4] {
        self.0.map(|row| dot4(row, v))
    }

    /// Applies `self` to a point, assuming `self` is affine.
    #[inline]
    pub fn apply_pt(&self, p: &Point3) -> Point3 {
        let [x, y, z, _] = self.apply4([p.x(), p.y(), p.z(), 1.0]);
        Point3([x, y, z])
    }

    /// Applies the linear part of `self` to a vector, ignoring translation.
    #[inline]
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let [x, y, z, _] = self.apply4([v.x(), v.y(), v.z(), 0.0]);
        vec3(x, y, z)
    }
}

#[inline]
fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

impl Default for Mat4 {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(els: [[f32; 4]; 4]) -> Self {
        Self(els)
    }
}

impl ApproxEq<Self, f32> for Mat4 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        <f32 as ApproxEq>::relative_epsilon()
    }
}

/// Returns a matrix translating by `t`.
pub const fn translate(t: Vec3) -> Mat4 {
    let [x, y, z] = t.0;
    Mat4([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating counterclockwise by `a` around `axis`.
///
/// The axis is normalized first; a zero axis yields a degenerate matrix.
/// This is the rotation applied by the fixed-function rotate command.
pub fn rotate(a: Angle, axis: Vec3) -> Mat4 {
    let [x, y, z] = axis.normalize().0;
    let (s, c) = a.sin_cos();
    let t = 1.0 - c;
    Mat4([
        [x * x * t + c, x * y * t - z * s, x * z * t + y * s, 0.0],
        [y * x * t + z * s, y * y * t + c, y * z * t - x * s, 0.0],
        [x * z * t - y * s, y * z * t + x * s, z * z * t + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating counterclockwise by `a` around the x-axis.
pub fn rotate_x(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    Mat4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating counterclockwise by `a` around the y-axis.
pub fn rotate_y(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    Mat4([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating counterclockwise by `a` around the z-axis.
pub fn rotate_z(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    Mat4([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a perspective projection matrix for the view frustum with the
/// given left, right, bottom, and top bounds on the near plane, and the
/// near and far plane distances.
///
/// Maps view space, where the camera looks down the negative z-axis, to
/// homogeneous clip space. Degenerate bounds (`left == right`, `near == far`,
/// and so on) produce infinite or NaN elements rather than a panic.
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let (w, h, d) = (right - left, top - bottom, far - near);
    Mat4([
        [2.0 * near / w, 0.0, (right + left) / w, 0.0],
        [0.0, 2.0 * near / h, (top + bottom) / h, 0.0],
        [0.0, 0.0, -(far + near) / d, -2.0 * far * near / d],
        [0.0, 0.0, -1.0, 0.0],
    ])
}
