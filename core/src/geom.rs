//! Polygonal geometry.

use core::fmt::{self, Display, Formatter};

use crate::math::{Color3f, Point3, Vec3};

pub use poly::Polyhedron;

pub mod poly;

/// A polygon vertex with a position, a color, and a surface normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolyVertex {
    pub pos: Point3,
    pub color: Color3f,
    pub normal: Vec3,
}

/// Error in the index or attribute buffers of a polygon or polyhedron.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The index and color buffers have different lengths.
    LengthMismatch { indices: usize, colors: usize },
    /// An index at position `at` of an index buffer refers past the end
    /// of a vertex buffer of length `len`.
    IndexOutOfBounds { at: usize, index: usize, len: usize },
    /// Face number `face` has fewer than three vertices.
    DegenerateFace { face: usize, len: usize },
}

/// Returns a vertex with the given position, color, and normal.
#[inline]
pub const fn poly_vertex(pos: Point3, color: Color3f, normal: Vec3) -> PolyVertex {
    PolyVertex { pos, color, normal }
}

/// Checks that every index in `indices` is less than `len`.
pub fn check_indices(indices: &[usize], len: usize) -> Result<(), Error> {
    match indices.iter().position(|&i| i >= len) {
        Some(at) => Err(Error::IndexOutOfBounds { at, index: indices[at], len }),
        None => Ok(()),
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LengthMismatch { indices, colors } => write!(
                f,
                "{indices} vertex indices but {colors} colors given"
            ),
            Self::IndexOutOfBounds { at, index, len } => write!(
                f,
                "vertex index {index} at position {at} out of bounds \
                 for {len} vertices"
            ),
            Self::DegenerateFace { face, len } => write!(
                f,
                "face {face} has {len} vertices, at least 3 required"
            ),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn index_check() {
        assert_eq!(check_indices(&[0, 2, 1], 3), Ok(()));
        assert_eq!(check_indices(&[], 0), Ok(()));
        assert_eq!(
            check_indices(&[0, 1, 3, 4], 3),
            Err(Error::IndexOutOfBounds { at: 2, index: 3, len: 3 })
        );
    }

    #[test]
    fn error_display() {
        let e = Error::LengthMismatch { indices: 4, colors: 3 };
        assert_eq!(e.to_string(), "4 vertex indices but 3 colors given");

        let e = Error::IndexOutOfBounds { at: 1, index: 7, len: 4 };
        assert_eq!(
            e.to_string(),
            "vertex index 7 at position 1 out of bounds for 4 vertices"
        );
    }
}
