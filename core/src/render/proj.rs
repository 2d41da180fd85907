//! Perspective projection setup.

use log::warn;

use crate::math::{Angle, Mat4, frustum};

use super::Gl;

/// A view frustum: the bounds of the near plane and the near and far
/// plane distances. The camera is at the apex, looking down −z.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    /// Returns the symmetric frustum with vertical field of view `fov_y`,
    /// width-to-height ratio `aspect`, and clip plane distances `near` and
    /// `far`.
    ///
    /// The half-height of the near plane is `tan(fov_y / 2) * near` and the
    /// half-width is the half-height times `aspect`.
    ///
    /// Nothing is checked here; see [`perspective`] for the preconditions.
    ///
    /// # Examples
    /// ```
    /// # use polyview_core::assert_approx_eq;
    /// # use polyview_core::{math::degs, render::proj::Frustum};
    /// let f = Frustum::perspective(degs(90.0), 1.0, 1.0, 100.0);
    /// assert_approx_eq!(f.half_height(), 1.0);
    /// assert_approx_eq!(f.half_width(), 1.0);
    /// ```
    pub fn perspective(fov_y: Angle, aspect: f32, near: f32, far: f32) -> Self {
        let h = (fov_y / 2.0).tan() * near;
        let w = h * aspect;
        Self {
            left: -w,
            right: w,
            bottom: -h,
            top: h,
            near,
            far,
        }
    }

    /// Returns half the width of the near plane.
    pub fn half_width(&self) -> f32 {
        (self.right - self.left) / 2.0
    }
    /// Returns half the height of the near plane.
    pub fn half_height(&self) -> f32 {
        (self.top - self.bottom) / 2.0
    }

    /// Returns the projection matrix equivalent to `self`.
    pub fn matrix(&self) -> Mat4 {
        let Self { left, right, bottom, top, near, far } = *self;
        frustum(left, right, bottom, top, near, far)
    }
}

/// Multiplies the current matrix of `gl` by a symmetric perspective
/// projection.
///
/// The vertical field of view `fov_y` must be strictly between 0° and 180°,
/// and `aspect` and `near` must be positive. Invalid parameters are logged
/// but not rejected: the resulting degenerate projection is issued anyway,
/// as a fixed-function context would accept it.
pub fn perspective(
    gl: &mut impl Gl,
    fov_y: Angle,
    aspect: f32,
    near: f32,
    far: f32,
) {
    if !(Angle::ZERO < fov_y && fov_y < Angle::STRAIGHT) {
        warn!("perspective: field of view {fov_y} not in (0°, 180°)");
    }
    if !(aspect > 0.0) {
        warn!("perspective: non-positive aspect ratio {aspect}");
    }
    if !(near > 0.0) {
        warn!("perspective: non-positive near plane distance {near}");
    }
    gl.frustum(Frustum::perspective(fov_y, aspect, near, far));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::degs;
    use crate::render::{Command, Recorder};

    #[test]
    fn half_extents_follow_fov_and_aspect() {
        for (fov, aspect, near) in
            [(45.0, 4.0 / 3.0, 0.1), (60.0, 1.0, 2.0), (120.0, 0.5, 10.0)]
        {
            let f = Frustum::perspective(degs(fov), aspect, near, 100.0);
            let expected = near * degs(fov / 2.0).tan();
            assert_approx_eq!(f.half_height(), expected);
            assert_approx_eq!(f.half_width(), expected * aspect);
            assert_eq!(f.left, -f.right);
            assert_eq!(f.bottom, -f.top);
        }
    }

    #[test]
    fn ninety_degree_unit_frustum() {
        let f = Frustum::perspective(degs(90.0), 1.0, 1.0, 100.0);
        assert_approx_eq!(f.left, -1.0);
        assert_approx_eq!(f.right, 1.0);
        assert_approx_eq!(f.bottom, -1.0);
        assert_approx_eq!(f.top, 1.0);
        assert_eq!((f.near, f.far), (1.0, 100.0));
    }

    #[test]
    fn perspective_issues_one_frustum_command() {
        let mut gl = Recorder::new();
        perspective(&mut gl, degs(45.0), 800.0 / 600.0, 0.1, 100.0);

        let expected = Frustum::perspective(degs(45.0), 4.0 / 3.0, 0.1, 100.0);
        assert_eq!(gl.commands(), [Command::Frustum(expected)]);
    }

    #[test]
    fn degenerate_parameters_do_not_panic() {
        let mut gl = Recorder::new();
        perspective(&mut gl, degs(45.0), 0.0, 0.0, 100.0);
        perspective(&mut gl, degs(180.0), 1.0, 1.0, 1.0);
        assert_eq!(gl.commands().len(), 2);
    }
}
