//! Polygon draw calls.

use core::iter::zip;

use log::trace;

use crate::geom::{Error, PolyVertex, check_indices};
use crate::math::{Color3f, Point3};

use super::{Gl, Primitive};

/// Draws a filled polygon with per-vertex colors.
///
/// The polygon has one vertex per element of `faces`: vertex `i` is at
/// `verts[faces[i]]` and has color `colors[i]`. No normals are issued, so
/// the current normal of `gl` applies to every vertex.
///
/// The buffers are checked before anything is issued; on error, `gl` is
/// left untouched. Nothing is issued if `faces` is empty.
///
/// # Errors
/// * [`Error::LengthMismatch`] if `faces` and `colors` differ in length.
/// * [`Error::IndexOutOfBounds`] if an index in `faces` is not less than
///   `verts.len()`.
///
/// # Examples
/// ```
/// use polyview_core::math::{gray, pt3};
/// use polyview_core::render::{Command, Primitive, Recorder, draw_mesh};
///
/// let verts = [pt3(0.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0), pt3(0.0, 1.0, 0.0)];
/// let mut gl = Recorder::new();
/// draw_mesh(&mut gl, &verts, &[2, 1, 0], &[gray(1.0); 3]).unwrap();
///
/// assert_eq!(gl.commands().len(), 8);
/// assert_eq!(gl.commands()[2], Command::Vertex(verts[2]));
/// ```
pub fn draw_mesh(
    gl: &mut impl Gl,
    verts: &[Point3],
    faces: &[usize],
    colors: &[Color3f],
) -> Result<(), Error> {
    if faces.len() != colors.len() {
        return Err(Error::LengthMismatch {
            indices: faces.len(),
            colors: colors.len(),
        });
    }
    check_indices(faces, verts.len())?;
    if faces.is_empty() {
        return Ok(());
    }
    trace!("draw_mesh: {} vertices", faces.len());

    gl.begin(Primitive::Polygon);
    for (&i, &c) in zip(faces, colors) {
        gl.color(c);
        gl.vertex(verts[i]);
    }
    gl.end();
    Ok(())
}

/// Draws a filled polygon with per-vertex colors and normals.
///
/// Issues the normal, color, and position of each vertex in turn. Nothing
/// is issued if `verts` is empty.
pub fn draw_polygon(gl: &mut impl Gl, verts: &[PolyVertex]) {
    if verts.is_empty() {
        return;
    }
    trace!("draw_polygon: {} vertices", verts.len());

    gl.begin(Primitive::Polygon);
    for v in verts {
        gl.normal(v.normal);
        gl.color(v.color);
        gl.vertex(v.pos);
    }
    gl.end();
}
