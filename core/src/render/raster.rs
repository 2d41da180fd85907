//! A software fixed-function rasterizer.
//!
//! Vertices are transformed by the modelview and projection matrices and,
//! if lighting is enabled, shaded per vertex. Polygons are split into a fan
//! of triangles, which are filled by testing the center of every pixel in
//! their bounding box against the three edge functions. Colors and depths
//! are interpolated linearly in screen space (Gouraud shading).
//!
//! Geometry is not clipped against the view frustum. Instead, a triangle or
//! line with any vertex on or behind the eye plane is discarded whole, and
//! fragments outside the viewport or the depth range are skipped.

use alloc::{vec, vec::Vec};
use core::mem;

use log::debug;

use crate::math::{Color3f, Point3, Vec3, float, pt3};

use super::{
    Buffers, Cap, Command, Dims, Gl, LightId, LightPos, Primitive, State,
    Stats, Viewport,
};

/// Amount by which lines are pulled toward the viewer, so that the edges
/// of a polygon are not hidden by the polygon itself.
const LINE_DEPTH_BIAS: f32 = 1e-4;

/// A rendering context drawing into an owned color and depth buffer.
///
/// The color buffer holds one `0x00_RR_GG_BB` value per pixel, and both
/// buffers are stored row by row starting from the top left corner.
#[derive(Clone, Debug)]
pub struct Raster {
    state: State,
    dims: Dims,
    color_buf: Vec<u32>,
    depth_buf: Vec<f32>,
    /// Vertices of the primitive being assembled.
    verts: Vec<ClipVert>,
    /// Statistics collected since the last reset.
    pub stats: Stats,
}

/// A transformed and shaded vertex.
#[derive(Copy, Clone, Debug)]
struct ClipVert {
    pos: [f32; 4],
    color: Color3f,
}

/// A vertex in framebuffer coordinates, `y` pointing down and `z` in
/// the range [0, 1].
#[derive(Copy, Clone, Debug)]
struct ScreenVert {
    x: f32,
    y: f32,
    z: f32,
    color: Color3f,
}

impl Raster {
    /// Creates a rasterizer with buffers of size `dims`, the viewport
    /// covering the whole buffer.
    pub fn new(dims: Dims) -> Self {
        let mut this = Self {
            state: State::new(),
            dims: (0, 0),
            color_buf: Vec::new(),
            depth_buf: Vec::new(),
            verts: Vec::new(),
            stats: Stats::new(),
        };
        this.resize(dims);
        this
    }

    /// Returns the width and height of the buffers.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the color buffer.
    pub fn color_buf(&self) -> &[u32] {
        &self.color_buf
    }

    /// Returns the depth buffer.
    pub fn depth_buf(&self) -> &[f32] {
        &self.depth_buf
    }

    /// Returns the current context state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the color of the pixel at column `x` and row `y`, counting
    /// from the top left, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let (w, h) = self.dims;
        (x < w && y < h).then(|| self.color_buf[(y * w + x) as usize])
    }

    /// Reallocates the buffers to size `dims` and resets the viewport to
    /// cover them. The buffer contents are cleared to zero.
    pub fn resize(&mut self, dims: Dims) {
        debug!("resizing raster to {}x{}", dims.0, dims.1);
        let len = dims.0 as usize * dims.1 as usize;
        self.dims = dims;
        self.color_buf = vec![0; len];
        self.depth_buf = vec![0.0; len];
        self.state.exec(&Command::Viewport(Viewport {
            x: 0,
            y: 0,
            width: dims.0,
            height: dims.1,
        }));
    }

    fn clear(&mut self, bufs: Buffers) {
        if bufs.color {
            let c = self.state.clear_color.to_rgb().to_rgb_u32();
            self.color_buf.fill(c);
        }
        if bufs.depth {
            self.depth_buf.fill(self.state.clear_depth);
        }
    }

    fn push_vertex(&mut self, p: Point3) {
        let st = &self.state;
        let eye = st.modelview.apply4([p.x(), p.y(), p.z(), 1.0]);
        let pos = st.projection.apply4(eye);
        let color = if st.is_enabled(Cap::Lighting) {
            // Assumes the modelview matrix has no non-uniform scaling
            let n = st.modelview.apply_vec(&st.normal).normalize();
            shade(st, pt3(eye[0], eye[1], eye[2]), n)
        } else {
            st.color
        };
        self.verts.push(ClipVert { pos, color });
        self.stats.verts.i += 1;
        self.stats.verts.o += 1;
    }

    fn flush(&mut self, prim: Primitive) {
        let verts = mem::take(&mut self.verts);
        let n = verts.len();
        match prim {
            Primitive::Polygon if n >= 3 => {
                self.stats.prims.i += n - 2;
                for i in 1..n - 1 {
                    self.fill([verts[0], verts[i], verts[i + 1]]);
                }
            }
            Primitive::Polygon => {}
            Primitive::LineLoop if n >= 2 => {
                self.stats.prims.i += n;
                for i in 0..n {
                    self.line(verts[i], verts[(i + 1) % n]);
                }
            }
            Primitive::LineLoop => {}
        }
        self.stats.calls += 1;
        self.verts = verts;
        self.verts.clear();
    }

    /// Maps a vertex to framebuffer coordinates, or returns `None` if it
    /// is on or behind the eye plane.
    fn to_screen(&self, v: &ClipVert) -> Option<ScreenVert> {
        let [x, y, z, w] = v.pos;
        if !(w > 0.0) {
            return None;
        }
        let Viewport { x: vx, y: vy, width, height } = self.state.viewport;
        let (nx, ny, nz) = (x / w, y / w, z / w);
        let up = vy as f32 + (ny + 1.0) * 0.5 * height as f32;
        Some(ScreenVert {
            x: vx as f32 + (nx + 1.0) * 0.5 * width as f32,
            y: self.dims.1 as f32 - up,
            z: (nz + 1.0) * 0.5,
            color: v.color,
        })
    }

    fn fill(&mut self, tri: [ClipVert; 3]) {
        let [Some(a), Some(b), Some(c)] = tri.map(|v| self.to_screen(&v))
        else {
            return;
        };
        // Positive if counter-clockwise as seen on screen with y up
        let area = -edge(&a, &b, c.x, c.y);
        if area == 0.0 || !area.is_finite() {
            return;
        }
        if self.state.is_enabled(Cap::CullFace) && area < 0.0 {
            return;
        }
        self.stats.prims.o += 1;

        let [rx0, rx1, ry0, ry1] = self.clip_rect().map(|c| c as f32);
        let x0 = float::f32::floor(a.x.min(b.x).min(c.x)).max(rx0) as usize;
        let x1 = float::f32::ceil(a.x.max(b.x).max(c.x)).min(rx1) as usize;
        let y0 = float::f32::floor(a.y.min(b.y).min(c.y)).max(ry0) as usize;
        let y1 = float::f32::ceil(a.y.max(b.y).max(c.y)).min(ry1) as usize;

        let area = -area;
        for y in y0..y1 {
            let py = y as f32 + 0.5;
            for x in x0..x1 {
                let px = x as f32 + 0.5;
                let wa = edge(&b, &c, px, py) / area;
                let wb = edge(&c, &a, px, py) / area;
                let wc = edge(&a, &b, px, py) / area;
                if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                    continue;
                }
                // Relative to `a`, so that constant attributes stay exact
                let z = a.z + (b.z - a.z) * wb + (c.z - a.z) * wc;
                let color = a.color
                    + (b.color - a.color) * wb
                    + (c.color - a.color) * wc;
                self.plot(x, y, z, color);
            }
        }
    }

    fn line(&mut self, a: ClipVert, b: ClipVert) {
        let (Some(a), Some(b)) = (self.to_screen(&a), self.to_screen(&b))
        else {
            return;
        };
        let (dx, dy, dz) = (b.x - a.x, b.y - a.y, b.z - a.z);
        let len = float::f32::abs(dx).max(float::f32::abs(dy));
        if !len.is_finite() {
            return;
        }
        // Only step over the part inside the viewport and the depth range
        let [rx0, rx1, ry0, ry1] = self.clip_rect().map(|c| c as f32);
        let t = clip_param((0.0, 1.0), a.x, dx, rx0, rx1);
        let t = clip_param(t, a.y, dy, ry0, ry1);
        let (t0, t1) = clip_param(t, a.z - LINE_DEPTH_BIAS, dz, 0.0, 1.0);
        if !(t0 <= t1) {
            return;
        }
        self.stats.prims.o += 1;

        let steps = float::f32::ceil(len * (t1 - t0)).max(1.0) as usize;
        for k in 0..=steps {
            let t = t0 + (t1 - t0) * (k as f32 / steps as f32);
            let (x, y) = (a.x + dx * t, a.y + dy * t);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let z = a.z + dz * t - LINE_DEPTH_BIAS;
            let color = a.color + (b.color - a.color) * t;
            self.plot(x as usize, y as usize, z, color);
        }
    }

    /// Returns the viewport rectangle in framebuffer columns and rows,
    /// clamped to the buffer, as `[x0, x1, y0, y1]`.
    fn clip_rect(&self) -> [usize; 4] {
        let Viewport { x, y, width, height } = self.state.viewport;
        let (w, h) = (i64::from(self.dims.0), i64::from(self.dims.1));
        let (x, y) = (i64::from(x), i64::from(y));
        // Viewport y counts up from the bottom, rows down from the top
        let top = h - y - i64::from(height);
        [
            x.clamp(0, w),
            (x + i64::from(width)).clamp(0, w),
            top.clamp(0, h),
            (h - y).clamp(0, h),
        ]
        .map(|c| c as usize)
    }

    fn plot(&mut self, x: usize, y: usize, z: f32, color: Color3f) {
        let [x0, x1, y0, y1] = self.clip_rect();
        if !(x0..x1).contains(&x) || !(y0..y1).contains(&y) {
            return;
        }
        // Outside the near and far planes
        if !(0.0..=1.0).contains(&z) {
            return;
        }
        self.stats.frags.i += 1;
        let idx = y * self.dims.0 as usize + x;
        if self.state.is_enabled(Cap::DepthTest) {
            if !self.state.depth_func.test(z, self.depth_buf[idx]) {
                return;
            }
            self.depth_buf[idx] = z;
        }
        self.color_buf[idx] = color.saturate().to_rgb_u32();
        self.stats.frags.o += 1;
    }
}

impl Gl for Raster {
    fn exec(&mut self, cmd: Command) {
        match cmd {
            Command::Clear(bufs) => self.clear(bufs),
            Command::Begin(_) if self.state.primitive.is_none() => {
                self.verts.clear()
            }
            Command::Vertex(p) if self.state.primitive.is_some() => {
                self.push_vertex(p)
            }
            Command::End => {
                if let Some(prim) = self.state.primitive {
                    self.flush(prim);
                }
            }
            _ => {}
        }
        self.state.exec(&cmd);
    }
}

/// Returns twice the signed area of the triangle `a`, `b`, (`px`, `py`);
/// positive if clockwise in framebuffer coordinates.
#[inline]
/// Narrows the parameter range `t` to where `p + d * t` is within
/// `lo..=hi`. The result is empty (`t.0 > t.1`) if there is no such `t`.
fn clip_param(t: (f32, f32), p: f32, d: f32, lo: f32, hi: f32) -> (f32, f32) {
    if d == 0.0 {
        return if (lo..=hi).contains(&p) { t } else { (1.0, 0.0) };
    }
    let (ta, tb) = ((lo - p) / d, (hi - p) / d);
    (t.0.max(ta.min(tb)), t.1.min(ta.max(tb)))
}

fn edge(a: &ScreenVert, b: &ScreenVert, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Evaluates the fixed-function lighting equation at a view-space point
/// with unit normal `n`.
///
/// The viewer is assumed to be infinitely far along the positive z-axis.
/// Only front materials are used.
fn shade(st: &State, pos: Point3, n: Vec3) -> Color3f {
    let mat = st.material(false);
    let (ambient, diffuse) = if st.is_enabled(Cap::ColorMaterial) {
        (st.color, st.color)
    } else {
        (mat.ambient.to_rgb(), mat.diffuse.to_rgb())
    };
    let specular = mat.specular.to_rgb();

    let mut c = st.light_model.ambient.to_rgb() * ambient;
    let ids = (0..LightId::COUNT as u8).map(LightId::new);
    for (id, light) in ids.zip(&st.lights) {
        if !st.is_enabled(Cap::Light(id)) {
            continue;
        }
        let l = match light.pos {
            LightPos::Directional(d) => d.normalize(),
            LightPos::Point(p) => (p - pos).normalize(),
        };
        let n_dot_l = n.dot(&l).max(0.0);
        c = c
            + light.ambient.to_rgb() * ambient
            + light.diffuse.to_rgb() * diffuse * n_dot_l;

        if n_dot_l > 0.0 {
            let half = (l + Vec3::Z).normalize();
            let s = float::f32::powf(n.dot(&half).max(0.0), mat.shininess);
            c = c + light.specular.to_rgb() * specular * s;
        }
    }
    c.saturate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::{degs, gray, rgb, rgba};
    use crate::render::stats::Throughput;
    use crate::render::{DepthFunc, Frustum, MatrixMode};

    const RED: u32 = 0x00_FF_00_00;
    const BLUE: u32 = 0x00_00_00_FF;

    /// Draws a triangle covering the whole viewport at depth `z`.
    fn cover(gl: &mut Raster, z: f32, color: Color3f) {
        gl.color(color);
        gl.begin(Primitive::Polygon);
        gl.vertex(pt3(-1.0, -1.0, z));
        gl.vertex(pt3(3.0, -1.0, z));
        gl.vertex(pt3(-1.0, 3.0, z));
        gl.end();
    }

    #[test]
    fn clear_fills_buffers() {
        let mut gl = Raster::new((4, 3));
        gl.clear_color(rgba(0.7, 0.7, 0.7, 1.0));
        gl.clear_depth(0.5);
        gl.clear(Buffers::COLOR | Buffers::DEPTH);

        assert_eq!(gl.color_buf(), [0x00_B2_B2_B2; 12]);
        assert_eq!(gl.depth_buf(), [0.5; 12]);
    }

    #[test]
    fn fills_covered_pixels() {
        let mut gl = Raster::new((8, 8));
        cover(&mut gl, 0.0, rgb(1.0, 0.0, 0.0));

        assert!(gl.color_buf().iter().all(|&c| c == RED));
        assert_eq!(gl.stats.prims, Throughput { i: 1, o: 1 });
        assert_eq!(gl.stats.frags.o, 64);
    }

    #[test]
    fn fills_only_inside() {
        let mut gl = Raster::new((8, 8));
        gl.color(gray(1.0));
        gl.begin(Primitive::Polygon);
        gl.vertex(pt3(-1.0, -1.0, 0.0));
        gl.vertex(pt3(1.0, -1.0, 0.0));
        gl.vertex(pt3(-1.0, 1.0, 0.0));
        gl.end();

        // Bottom left is covered, top right is not
        assert_eq!(gl.pixel(0, 7), Some(0x00_FF_FF_FF));
        assert_eq!(gl.pixel(7, 0), Some(0));
        assert_eq!(gl.pixel(8, 0), None);
    }

    #[test]
    fn depth_test_keeps_nearest() {
        for order in [[-0.5, 0.5], [0.5, -0.5]] {
            let mut gl = Raster::new((4, 4));
            gl.enable(Cap::DepthTest);
            gl.depth_func(DepthFunc::Less);
            gl.clear(Buffers::DEPTH);

            for z in order {
                let c = if z < 0.0 { 1.0 } else { 0.0 };
                cover(&mut gl, z, rgb(c, 0.0, 1.0 - c));
            }
            assert_eq!(gl.pixel(2, 2), Some(RED));
            assert_approx_eq!(gl.depth_buf()[0], 0.25);
        }
    }

    #[test]
    fn without_depth_test_last_wins() {
        let mut gl = Raster::new((4, 4));
        cover(&mut gl, -0.5, rgb(1.0, 0.0, 0.0));
        cover(&mut gl, 0.5, rgb(0.0, 0.0, 1.0));
        assert_eq!(gl.pixel(1, 1), Some(BLUE));
    }

    #[test]
    fn geometry_behind_eye_is_discarded() {
        let mut gl = Raster::new((4, 4));
        gl.matrix_mode(MatrixMode::Projection);
        gl.frustum(Frustum::perspective(degs(90.0), 1.0, 0.1, 100.0));
        gl.matrix_mode(MatrixMode::ModelView);

        // At z = +1, behind the camera looking down -z
        cover(&mut gl, 1.0, rgb(1.0, 0.0, 0.0));
        assert_eq!(gl.stats.prims, Throughput { i: 1, o: 0 });
        assert!(gl.color_buf().iter().all(|&c| c == 0));
    }

    #[test]
    fn culls_clockwise_faces() {
        let mut gl = Raster::new((4, 4));
        gl.enable(Cap::CullFace);
        gl.begin(Primitive::Polygon);
        gl.vertex(pt3(-1.0, -1.0, 0.0));
        gl.vertex(pt3(-1.0, 3.0, 0.0));
        gl.vertex(pt3(3.0, -1.0, 0.0));
        gl.end();
        assert_eq!(gl.stats.prims.o, 0);

        cover(&mut gl, 0.0, rgb(1.0, 0.0, 0.0));
        assert_eq!(gl.stats.prims.o, 1);
    }

    #[test]
    fn diffuse_lighting_follows_normal() {
        let mut gl = Raster::new((2, 2));
        gl.enable(Cap::Lighting);
        gl.enable(Cap::Light(LightId::new(0)));
        gl.enable(Cap::ColorMaterial);

        gl.normal(Vec3::Z);
        cover(&mut gl, 0.0, rgb(1.0, 0.0, 0.0));
        assert_eq!(gl.pixel(0, 0), Some(RED));

        // Facing away from the light, only the global ambient remains
        gl.normal(-Vec3::Z);
        cover(&mut gl, 0.0, rgb(1.0, 0.0, 0.0));
        assert_eq!(gl.pixel(0, 0), Some(0x00_33_00_00));
    }

    #[test]
    fn line_loop_draws_edges() {
        let mut gl = Raster::new((8, 8));
        gl.color(gray(1.0));
        gl.begin(Primitive::LineLoop);
        gl.vertex(pt3(-0.75, 0.1, 0.0));
        gl.vertex(pt3(0.75, 0.1, 0.0));
        gl.end();

        assert_eq!(gl.pixel(4, 3), Some(0x00_FF_FF_FF));
        assert_eq!(gl.pixel(4, 6), Some(0));
        assert_eq!(gl.stats.prims, Throughput { i: 2, o: 2 });
    }

    #[test]
    fn line_toward_eye_plane_steps_only_inside_viewport() {
        let mut gl = Raster::new((4, 4));
        gl.matrix_mode(MatrixMode::Projection);
        gl.frustum(Frustum::perspective(degs(90.0), 1.0, 0.1, 100.0));
        gl.matrix_mode(MatrixMode::ModelView);

        // The second vertex is barely in front of the eye, so it projects
        // about 2e20 pixels to the right of the center
        gl.color(gray(1.0));
        gl.begin(Primitive::LineLoop);
        gl.vertex(pt3(0.0, 0.0, -1.0));
        gl.vertex(pt3(1.0, 0.0, -1e-20));
        gl.end();

        assert_eq!(gl.pixel(1, 2), Some(0));
        assert_eq!(gl.pixel(2, 2), Some(0x00_FF_FF_FF));
        assert_eq!(gl.pixel(3, 2), Some(0x00_FF_FF_FF));
        assert!(gl.stats.frags.i <= 8, "{}", gl.stats.frags.i);
    }

    #[test]
    fn lines_outside_viewport_or_depth_range_are_dropped() {
        let mut gl = Raster::new((4, 4));
        gl.color(gray(1.0));
        gl.begin(Primitive::LineLoop);
        // Beyond the far plane
        gl.vertex(pt3(-0.5, 0.0, 3.0));
        gl.vertex(pt3(0.5, 0.0, 3.0));
        gl.end();
        gl.begin(Primitive::LineLoop);
        // Right of the viewport
        gl.vertex(pt3(1.5, -0.5, 0.0));
        gl.vertex(pt3(1.5, 0.5, 0.0));
        gl.end();

        assert_eq!(gl.stats.prims, Throughput { i: 4, o: 0 });
        assert_eq!(gl.stats.frags.i, 0);
        assert!(gl.color_buf().iter().all(|&c| c == 0));
    }

    #[test]
    fn viewport_restricts_mapping() {
        let mut gl = Raster::new((8, 8));
        gl.viewport(0, 0, 4, 4);
        cover(&mut gl, 0.0, rgb(1.0, 0.0, 0.0));

        // The viewport is the bottom left quadrant
        assert_eq!(gl.pixel(1, 6), Some(RED));
        assert_eq!(gl.pixel(5, 6), Some(0));
        assert_eq!(gl.pixel(6, 1), Some(0));
    }

    #[test]
    fn resize_reallocates() {
        let mut gl = Raster::new((4, 4));
        gl.resize((6, 2));
        assert_eq!(gl.dims(), (6, 2));
        assert_eq!(gl.color_buf().len(), 12);
        assert_eq!(gl.state().viewport.width, 6);
    }
}
