//! Cameras and camera transforms.

use core::ops::Range;

use log::warn;

use crate::math::{
    Angle, Color4f, Mat4, Vec3, degs, rgba, rotate, translate, vec3,
};

use super::{Buffers, Dims, Frustum, Gl, MatrixMode, perspective};

/// Camera projection parameters.
///
/// The defaults give a 45° vertical field of view, clip planes at 0.1 and
/// 100 units, and a light gray background.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Vertical angle of view.
    pub fov_y: Angle,
    /// Distances of the near and far clipping planes.
    pub near_far: Range<f32>,
    /// Color the frame is cleared to.
    pub background: Color4f,
}

/// Orbiting camera transform.
///
/// The camera looks down the negative z-axis at the origin from a distance
/// of `-zoom` units, with the scene first pitched around the x-axis and then
/// yawed around the y-axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Orbit {
    /// Rotation around the y-axis.
    pub yaw: Angle,
    /// Rotation around the x-axis.
    pub pitch: Angle,
    /// Translation along the z-axis; negative values move the scene away
    /// from the camera.
    pub zoom: f32,
}

/// Turns cursor and scroll input into an [`Orbit`].
///
/// Dragging the cursor by one pixel rotates the view by
/// [`degs_per_px`][Self::degs_per_px]; the first cursor position received
/// only serves as the reference for later ones, so the view does not jump
/// when the cursor first enters the window.
#[derive(Clone, Debug)]
pub struct OrbitControl {
    /// Rotation per pixel of cursor movement.
    pub degs_per_px: f32,
    /// Change of zoom per unit of scroll.
    pub zoom_step: f32,
    orbit: Orbit,
    last: Option<(f32, f32)>,
}

impl Camera {
    /// Returns a camera with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertical field of view.
    pub fn fov_y(self, fov_y: Angle) -> Self {
        Self { fov_y, ..self }
    }

    /// Sets the near and far clipping plane distances.
    pub fn near_far(self, near_far: Range<f32>) -> Self {
        Self { near_far, ..self }
    }

    /// Sets the background color.
    pub fn background(self, background: Color4f) -> Self {
        Self { background, ..self }
    }

    /// Returns the projection matrix for a viewport of size `dims`.
    pub fn projection(&self, (w, h): Dims) -> Mat4 {
        let Range { start: near, end: far } = self.near_far;
        Frustum::perspective(self.fov_y, w as f32 / h as f32, near, far)
            .matrix()
    }

    /// Clears the frame and sets up the viewport, projection, and view
    /// transform of `gl` to look at the scene through `orbit`.
    ///
    /// Every piece of state touched is set from scratch, so the result does
    /// not depend on what `gl` was doing before.
    pub fn apply(&self, gl: &mut impl Gl, orbit: &Orbit, (w, h): Dims) {
        if h == 0 {
            warn!("camera: zero-height viewport {w}x{h}");
        }
        gl.clear_color(self.background);
        gl.clear(Buffers::COLOR | Buffers::DEPTH);
        gl.viewport(0, 0, w, h);

        let Range { start: near, end: far } = self.near_far;
        gl.matrix_mode(MatrixMode::Projection);
        gl.load_identity();
        perspective(gl, self.fov_y, w as f32 / h as f32, near, far);

        gl.matrix_mode(MatrixMode::ModelView);
        gl.load_identity();
        gl.translate(vec3(0.0, 0.0, orbit.zoom));
        gl.rotate(orbit.yaw, Vec3::Y);
        gl.rotate(orbit.pitch, Vec3::X);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: degs(45.0),
            near_far: 0.1..100.0,
            background: rgba(0.7, 0.7, 0.7, 1.0),
        }
    }
}

impl Orbit {
    /// Returns an orbit rotated by cursor coordinates interpreted directly
    /// as degrees.
    pub fn from_mouse(x: i32, y: i32, zoom: f32) -> Self {
        Self {
            yaw: degs(x as f32),
            pitch: degs(y as f32),
            zoom,
        }
    }

    /// Returns the model-to-view matrix of `self`.
    pub fn view_matrix(&self) -> Mat4 {
        translate(vec3(0.0, 0.0, self.zoom))
            .compose(&rotate(self.yaw, Vec3::Y))
            .compose(&rotate(self.pitch, Vec3::X))
    }
}

impl OrbitControl {
    /// Returns a control with one degree per pixel, one unit of zoom per
    /// unit of scroll, and an initial zoom of −4.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial zoom.
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.orbit.zoom = zoom;
        self
    }

    /// Sets the rotation per pixel of cursor movement.
    pub fn degs_per_px(self, degs_per_px: f32) -> Self {
        Self { degs_per_px, ..self }
    }

    /// Updates the orbit with a new cursor position.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((last_x, last_y)) = self.last {
            let dpp = self.degs_per_px;
            self.orbit.yaw = self.orbit.yaw + degs((x - last_x) * dpp);
            self.orbit.pitch = self.orbit.pitch + degs((y - last_y) * dpp);
        }
        self.last = Some((x, y));
    }

    /// Updates the zoom with a scroll amount. Positive amounts zoom in.
    pub fn scrolled(&mut self, delta: f32) {
        self.orbit.zoom += delta * self.zoom_step;
    }

    /// Returns the current orbit.
    pub fn orbit(&self) -> Orbit {
        self.orbit
    }
}

impl Default for OrbitControl {
    fn default() -> Self {
        Self {
            degs_per_px: 1.0,
            zoom_step: 1.0,
            orbit: Orbit { zoom: -4.0, ..Orbit::default() },
            last: None,
        }
    }
}

/// Clears the frame and sets up the viewport, the default [`Camera`]
/// projection, and an orbit view transform.
///
/// `mouse_x` and `mouse_y` are the yaw and pitch in degrees, `zoom` the
/// translation along the z-axis, and `width` and `height` the viewport size.
///
/// # Examples
/// ```
/// use polyview_core::render::{Recorder, Viewport, apply_camera};
///
/// let mut gl = Recorder::new();
/// apply_camera(&mut gl, 30, 10, -5.0, 800, 600);
///
/// assert_eq!(
///     gl.state().viewport,
///     Viewport { x: 0, y: 0, width: 800, height: 600 }
/// );
/// ```
pub fn apply_camera(
    gl: &mut impl Gl,
    mouse_x: i32,
    mouse_y: i32,
    zoom: f32,
    width: u32,
    height: u32,
) {
    let orbit = Orbit::from_mouse(mouse_x, mouse_y, zoom);
    Camera::default().apply(gl, &orbit, (width, height));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::{rotate_x, rotate_y};
    use crate::render::{Command, Recorder, Viewport};

    #[test]
    fn example_frame() {
        let mut gl = Recorder::new();
        apply_camera(&mut gl, 30, 10, -5.0, 800, 600);
        let st = gl.state();

        assert_eq!(
            st.viewport,
            Viewport { x: 0, y: 0, width: 800, height: 600 }
        );
        assert_eq!(st.clear_color, rgba(0.7, 0.7, 0.7, 1.0));
        assert_eq!(st.matrix_mode, MatrixMode::ModelView);

        let view = translate(vec3(0.0, 0.0, -5.0))
            .compose(&rotate_y(degs(30.0)))
            .compose(&rotate_x(degs(10.0)));
        assert_approx_eq!(st.modelview, view);

        let proj = Frustum::perspective(degs(45.0), 4.0 / 3.0, 0.1, 100.0);
        assert_approx_eq!(st.projection, proj.matrix());
    }

    #[test]
    fn clear_color_is_set_before_clearing() {
        let mut gl = Recorder::new();
        apply_camera(&mut gl, 0, 0, -4.0, 10, 10);
        assert!(matches!(
            gl.commands(),
            [Command::ClearColor(_), Command::Clear(_), Command::Viewport(_), ..]
        ));
    }

    #[test]
    fn result_does_not_depend_on_prior_state() {
        let mut fresh = Recorder::new();
        apply_camera(&mut fresh, 30, 10, -5.0, 800, 600);

        let mut used = Recorder::new();
        used.matrix_mode(MatrixMode::Projection);
        used.translate(vec3(1.0, 2.0, 3.0));
        used.matrix_mode(MatrixMode::ModelView);
        used.rotate(degs(75.0), Vec3::Z);
        apply_camera(&mut used, 30, 10, -5.0, 800, 600);
        let _ = used.take();
        apply_camera(&mut used, 30, 10, -5.0, 800, 600);

        assert_eq!(used.commands(), fresh.commands());
        assert_eq!(used.state().projection, fresh.state().projection);
        assert_eq!(used.state().modelview, fresh.state().modelview);
    }

    #[test]
    fn view_matrix_matches_issued_transform() {
        let orbit = Orbit::from_mouse(-120, 45, -3.0);
        let mut gl = Recorder::new();
        Camera::new().apply(&mut gl, &orbit, (320, 200));

        assert_eq!(gl.state().modelview, orbit.view_matrix());
        assert_approx_eq!(
            gl.state().projection,
            Camera::new().projection((320, 200))
        );
    }

    #[test]
    fn camera_builder() {
        let cam = Camera::new()
            .fov_y(degs(60.0))
            .near_far(1.0..10.0)
            .background(rgba(0.0, 0.0, 0.0, 1.0));
        let mut gl = Recorder::new();
        cam.apply(&mut gl, &Orbit::default(), (100, 100));

        let frustum = Frustum::perspective(degs(60.0), 1.0, 1.0, 10.0);
        assert!(gl.commands().contains(&Command::Frustum(frustum)));
        assert_eq!(gl.state().clear_color, rgba(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn zero_height_does_not_panic() {
        let mut gl = Recorder::new();
        apply_camera(&mut gl, 0, 0, -4.0, 640, 0);
        assert_eq!(gl.state().viewport.height, 0);
    }

    #[test]
    fn orbit_control_latches_first_position() {
        let mut ctl = OrbitControl::new();
        ctl.cursor_moved(100.0, 50.0);
        assert_eq!(ctl.orbit(), Orbit { zoom: -4.0, ..Orbit::default() });

        ctl.cursor_moved(130.0, 40.0);
        let orbit = ctl.orbit();
        assert_approx_eq!(orbit.yaw, degs(30.0));
        assert_approx_eq!(orbit.pitch, degs(-10.0));
    }

    #[test]
    fn orbit_control_scrolls_one_unit_per_step() {
        let mut ctl = OrbitControl::new();
        ctl.scrolled(1.0);
        assert_approx_eq!(ctl.orbit().zoom, -3.0);
        ctl.scrolled(-2.0);
        assert_approx_eq!(ctl.orbit().zoom, -5.0);
    }

    #[test]
    fn orbit_control_scroll_and_scale() {
        let mut ctl = OrbitControl::new().zoom(-2.0).degs_per_px(0.5);
        ctl.scrolled(1.5);
        assert_approx_eq!(ctl.orbit().zoom, -0.5);

        ctl.cursor_moved(0.0, 0.0);
        ctl.cursor_moved(10.0, 0.0);
        assert_approx_eq!(ctl.orbit().yaw, degs(5.0));
    }
}
