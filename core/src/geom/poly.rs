//! Polyhedra with arbitrary convex polygonal faces.

use alloc::{string::String, vec, vec::Vec};

use log::{trace, warn};

use crate::math::{Color3f, Point3, Vec3};
use crate::render::{Cap, Gl, Primitive, draw_polygon};

use super::{Error, PolyVertex, check_indices};

/// A polyhedron: a closed surface made of flat polygonal faces.
///
/// Faces are lists of indices into `verts`, wound counter-clockwise when
/// seen from outside. Each face has a single color.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyhedron {
    /// Human-readable name of the shape.
    pub name: String,
    /// The vertices of the polyhedron.
    pub verts: Vec<Point3>,
    /// The faces of the polyhedron, each a list of at least three indices
    /// to `verts`.
    pub faces: Vec<Vec<usize>>,
    /// One color per face.
    pub colors: Vec<Color3f>,
}

impl Polyhedron {
    /// Creates a polyhedron from vertices and faces, with every face white.
    ///
    /// # Errors
    /// * [`Error::DegenerateFace`] if a face has fewer than three vertices.
    /// * [`Error::IndexOutOfBounds`] if a face refers to a vertex that does
    ///   not exist. The position reported is relative to the face.
    ///
    /// # Examples
    /// ```
    /// use polyview_core::geom::{Error, Polyhedron};
    /// use polyview_core::math::pt3;
    ///
    /// let verts = [pt3(0.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0), pt3(0.0, 1.0, 0.0)];
    /// let tri = Polyhedron::new("triangle", verts, [vec![0, 1, 2]]);
    /// assert!(tri.is_ok());
    ///
    /// let line = Polyhedron::new("line", verts, [vec![0, 1]]);
    /// assert_eq!(line, Err(Error::DegenerateFace { face: 0, len: 2 }));
    /// ```
    pub fn new(
        name: impl Into<String>,
        verts: impl IntoIterator<Item = Point3>,
        faces: impl IntoIterator<Item = Vec<usize>>,
    ) -> Result<Self, Error> {
        let verts: Vec<_> = verts.into_iter().collect();
        let faces: Vec<_> = faces.into_iter().collect();

        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(Error::DegenerateFace { face: i, len: face.len() });
            }
            check_indices(face, verts.len())?;
        }
        let colors = vec![Color3f::WHITE; faces.len()];
        Ok(Self { name: name.into(), verts, faces, colors })
    }

    /// Returns the number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Returns the number of edges, assuming every edge is shared by
    /// exactly two faces.
    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the unit normal of each face.
    ///
    /// Uses Newell's method, which is robust to slightly non-planar faces.
    /// A face with zero area gets a zero normal.
    pub fn normals(&self) -> Vec<Vec3> {
        self.faces
            .iter()
            .map(|f| self.newell(f).normalize())
            .collect()
    }

    /// Returns the centroid of the vertices of each face.
    pub fn centers(&self) -> Vec<Point3> {
        self.faces
            .iter()
            .map(|f| {
                Point3::centroid(f.iter().map(|&i| self.verts[i]))
                    .unwrap_or(Point3::origin())
            })
            .collect()
    }

    /// Returns the area of each face, assuming the faces are planar.
    pub fn areas(&self) -> Vec<f32> {
        self.faces
            .iter()
            .map(|f| self.newell(f).len() / 2.0)
            .collect()
    }

    /// Colors the faces by area, so that faces whose areas agree in the
    /// first two significant digits get the same color. Digits past the
    /// second are truncated, not rounded.
    ///
    /// Colors are taken from `palette` in the order distinct areas are first
    /// encountered, cycling if there are more areas than colors. Does
    /// nothing if `palette` is empty.
    pub fn paint_by_area(&mut self, palette: &[Color3f]) {
        if palette.is_empty() {
            warn!("paint_by_area: empty palette, colors not changed");
            return;
        }
        let mut seen: Vec<(i32, i32)> = Vec::new();
        for (area, color) in self.areas().into_iter().zip(&mut self.colors) {
            let key = two_digits(area);
            let idx = match seen.iter().position(|k| *k == key) {
                Some(idx) => idx,
                None => {
                    seen.push(key);
                    seen.len() - 1
                }
            };
            *color = palette[idx % palette.len()];
        }
    }

    /// Scales the polyhedron about the origin so that the largest absolute
    /// vertex coordinate is one.
    #[must_use]
    pub fn scale_unit(mut self) -> Self {
        let max = self
            .verts
            .iter()
            .map(|p| p.to_vec().max_abs())
            .fold(0.0_f32, f32::max);
        if max > 0.0 {
            let s = 1.0 / max;
            for p in &mut self.verts {
                *p = Point3(p.0.map(|c| c * s));
            }
        }
        self
    }

    /// Draws each face as a lit polygon with the face color and normal.
    pub fn draw(&self, gl: &mut impl Gl) {
        trace!("drawing {} with {} faces", self.name, self.faces.len());
        let mut buf: Vec<PolyVertex> = Vec::new();
        for ((face, &color), normal) in
            self.faces.iter().zip(&self.colors).zip(self.normals())
        {
            buf.clear();
            buf.extend(face.iter().map(|&i| PolyVertex {
                pos: self.verts[i],
                color,
                normal,
            }));
            draw_polygon(gl, &buf);
        }
    }

    /// Draws the edges of each face as unlit line loops of `color`.
    ///
    /// Lighting is disabled while drawing and enabled again afterwards.
    pub fn draw_outline(&self, gl: &mut impl Gl, color: Color3f) {
        trace!("drawing outline of {}", self.name);
        gl.disable(Cap::Lighting);
        gl.color(color);
        for face in &self.faces {
            gl.begin(Primitive::LineLoop);
            for &i in face {
                gl.vertex(self.verts[i]);
            }
            gl.end();
        }
        gl.enable(Cap::Lighting);
    }

    /// Returns the unnormalized Newell normal of `face`, whose length is
    /// twice the area of the face.
    fn newell(&self, face: &[usize]) -> Vec3 {
        let mut n = Vec3::ZERO;
        for (k, &i) in face.iter().enumerate() {
            let a = self.verts[i];
            let b = self.verts[face[(k + 1) % face.len()]];
            n += a.to_vec().cross(&b.to_vec());
        }
        n
    }
}

/// Returns the first two significant digits of `x` and its decimal
/// exponent. Zero and non-finite values each get a key of their own.
fn two_digits(x: f32) -> (i32, i32) {
    if x == 0.0 {
        return (0, 0);
    }
    if !x.is_finite() {
        return (i32::MAX, 0);
    }
    let (mut m, mut exp) = (x.abs(), 0);
    while m >= 10.0 {
        m /= 10.0;
        exp += 1;
    }
    while m < 1.0 {
        m *= 10.0;
        exp -= 1;
    }
    ((m * 10.0) as i32, exp)
}
