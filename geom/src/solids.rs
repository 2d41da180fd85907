//! The five Platonic solids: tetrahedron, cube, octahedron, dodecahedron,
//! and icosahedron.
//!
//! Faces are wound counter-clockwise when seen from outside the solid.
//! Every solid is scaled so that its largest vertex coordinate is one, and
//! colored by face area from [`PALETTE`].

use alloc::{string::String, vec, vec::Vec};
use core::f32::consts::SQRT_2;

use log::debug;

use re::geom::Polyhedron;
use re::math::{Color3f, Point3, pt3, rgb};

/// Trait for types that can be built into a polyhedron.
pub trait Build {
    /// Returns the polyhedron described by `self`.
    fn build(self) -> Polyhedron;
}

/// The colors assigned to faces of distinct area, in order.
pub const PALETTE: [Color3f; 8] = [
    rgb(0.9, 0.3, 0.2),
    rgb(0.2, 0.6, 0.9),
    rgb(0.95, 0.8, 0.2),
    rgb(0.3, 0.8, 0.4),
    rgb(0.7, 0.4, 0.9),
    rgb(1.0, 0.6, 0.3),
    rgb(0.3, 0.8, 0.8),
    rgb(0.85, 0.85, 0.85),
];

/// A regular tetrahedron.
///
/// A Platonic solid with four vertices and four equilateral triangle faces.
/// The tetrahedron is its own dual.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tetrahedron;

/// A cube.
///
/// A Platonic solid with eight vertices and six square faces.
/// The dual of the cube is the [octahedron][Octahedron].
///
/// `Cube`'s vertices are at (±1, ±1, ±1).
#[derive(Copy, Clone, Debug, Default)]
pub struct Cube;

/// A regular octahedron.
///
/// A Platonic solid with six vertices and eight equilateral triangle faces.
/// The dual of the octahedron is the [cube][Cube].
///
/// `Octahedron`'s vertices are at (±1, 0, 0), (0, ±1, 0), and (0, 0, ±1).
#[derive(Copy, Clone, Debug, Default)]
pub struct Octahedron;

/// A regular dodecahedron.
///
/// A Platonic solid with twenty vertices and twelve regular pentagonal faces.
/// Three edges meet at every vertex. The dual of the dodecahedron is the
/// [icosahedron][Icosahedron].
///
/// `Dodecahedron`'s vertices are at:
/// * (±1, ±1, ±1)
/// * (±φ, ±1/φ, 0)
/// * (0, ±φ, ±1/φ)
/// * (±1/φ, 0, ±φ)
///
/// where φ ≈ 1.618 is the golden ratio constant.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dodecahedron;

/// A regular icosahedron.
///
/// A Platonic solid with twelve vertices and twenty equilateral triangle
/// faces. Five edges meet at every vertex. The dual of the icosahedron is
/// the [dodecahedron][Dodecahedron].
///
/// `Icosahedron`'s vertices are at:
/// * (±φ, 0, ±1)
/// * (±1, ±φ, 0)
/// * (0, ±1, ±φ),
///
/// where φ ≈ 1.618 is the golden ratio constant.
#[derive(Copy, Clone, Debug, Default)]
pub struct Icosahedron;

/// The golden ratio constant φ.
const PHI: f32 = 1.618034_f32;
/// Reciprocal of φ.
const R_PHI: f32 = 1.0 / PHI;
/// √(2/3)
const SQRT_2_3: f32 = 0.816_496_6;

/// Returns the Platonic solid selected by `key`, or `None` if `key` is not
/// one of the letters T, C, O, D, or I. Case-insensitive.
///
/// # Examples
/// ```
/// use polyview_geom::by_key;
///
/// assert_eq!(by_key('d').map(|p| p.face_count()), Some(12));
/// assert!(by_key('x').is_none());
/// ```
pub fn by_key(key: char) -> Option<Polyhedron> {
    let p = match key.to_ascii_uppercase() {
        'T' => Tetrahedron.build(),
        'C' => Cube.build(),
        'O' => Octahedron.build(),
        'D' => Dodecahedron.build(),
        'I' => Icosahedron.build(),
        _ => return None,
    };
    Some(p)
}

impl Tetrahedron {
    const COORDS: [Point3; 4] = [
        pt3(0.0, 1.0, 0.0),
        pt3(SQRT_2 * 2.0 / 3.0, -1.0 / 3.0, 0.0),
        pt3(-SQRT_2 / 3.0, -1.0 / 3.0, SQRT_2_3),
        pt3(-SQRT_2 / 3.0, -1.0 / 3.0, -SQRT_2_3),
    ];
    const FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 3, 2], [0, 1, 3], [1, 2, 3]];
}

impl Cube {
    const COORDS: [Point3; 8] = [
        // left
        pt3(-1.0, -1.0, -1.0), // 0b000
        pt3(-1.0, -1.0, 1.0),  // 0b001
        pt3(-1.0, 1.0, -1.0),  // 0b010
        pt3(-1.0, 1.0, 1.0),   // 0b011
        // right
        pt3(1.0, -1.0, -1.0), // 0b100
        pt3(1.0, -1.0, 1.0),  // 0b101
        pt3(1.0, 1.0, -1.0),  // 0b110
        pt3(1.0, 1.0, 1.0),   // 0b111
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 4]; 6] = [
        [0b000, 0b001, 0b011, 0b010], // -X
        [0b100, 0b110, 0b111, 0b101], // +X
        [0b000, 0b100, 0b101, 0b001], // -Y
        [0b010, 0b011, 0b111, 0b110], // +Y
        [0b000, 0b010, 0b110, 0b100], // -Z
        [0b001, 0b101, 0b111, 0b011], // +Z
    ];
}

impl Octahedron {
    const COORDS: [Point3; 6] = [
        pt3(-1.0, 0.0, 0.0),
        pt3(0.0, -1.0, 0.0),
        pt3(0.0, 0.0, -1.0),
        pt3(0.0, 1.0, 0.0),
        pt3(0.0, 0.0, 1.0),
        pt3(1.0, 0.0, 0.0),
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 3]; 8] = [
        [0, 2, 1], [0, 3, 2], [0, 4, 3], [0, 1, 4], // -X
        [1, 2, 5], [2, 3, 5], [3, 4, 5], [1, 5, 4], // +X
    ];
}

impl Dodecahedron {
    #[rustfmt::skip]
    const COORDS: [Point3; 20] = [
        // -X
        pt3(-PHI, -R_PHI, 0.0), pt3(-PHI,  R_PHI, 0.0),
        // +X
        pt3( PHI, -R_PHI, 0.0), pt3( PHI,  R_PHI, 0.0),
        // -Y
        pt3(0.0, -PHI, -R_PHI), pt3(0.0, -PHI,  R_PHI),
        // +Y
        pt3(0.0,  PHI, -R_PHI), pt3(0.0,  PHI,  R_PHI),
        // -Z
        pt3(-R_PHI, 0.0, -PHI), pt3( R_PHI, 0.0, -PHI),
        // +Z
        pt3(-R_PHI, 0.0,  PHI), pt3( R_PHI, 0.0,  PHI),

        // Corners of the inscribed cube
        pt3(-1.0, -1.0, -1.0),
        pt3(-1.0, -1.0,  1.0),
        pt3(-1.0,  1.0, -1.0),
        pt3(-1.0,  1.0,  1.0),
        pt3( 1.0, -1.0, -1.0),
        pt3( 1.0, -1.0,  1.0),
        pt3( 1.0,  1.0, -1.0),
        pt3( 1.0,  1.0,  1.0),
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 5]; 12] = [
        [ 0,  1, 14, 8, 12], [ 1, 0, 13, 10, 15],
        [ 3,  2, 16, 9, 18], [ 2, 3, 19, 11, 17],
        [ 4,  5, 13, 0, 12], [ 5, 4, 16,  2, 17],
        [ 7,  6, 14, 1, 15], [ 6, 7, 19,  3, 18],
        [ 8,  9, 16, 4, 12], [ 9, 8, 14,  6, 18],
        [11, 10, 13, 5, 17], [10, 11, 19, 7, 15],
    ];
}

impl Icosahedron {
    #[rustfmt::skip]
    const COORDS: [Point3; 12] = [
        pt3(-PHI, 0.0, -1.0), pt3(-PHI, 0.0, 1.0), // -X
        pt3( PHI, 0.0, -1.0), pt3( PHI, 0.0, 1.0), // +X

        pt3(-1.0, -PHI, 0.0), pt3(1.0, -PHI, 0.0), // -Y
        pt3(-1.0,  PHI, 0.0), pt3(1.0,  PHI, 0.0), // +Y

        pt3(0.0, -1.0, -PHI), pt3(0.0, 1.0, -PHI), // -Z
        pt3(0.0, -1.0,  PHI), pt3(0.0, 1.0,  PHI), // +Z
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 3]; 20] = [
        [0,  4,  1], [0,  1,  6], // -X
        [2,  3,  5], [2,  7,  3], // +X
        [4,  8,  5], [4,  5, 10], // -Y
        [6,  7,  9], [6,  11, 7], // +Y
        [8,  0,  9], [8,  9,  2], // -Z
        [10, 11, 1], [10, 3, 11], // +Z

        // Corner faces, one per corner of the inscribed cube
        [0, 8, 4], [1,  4, 10], // -X-Y -Z,+Z
        [0, 6, 9], [1, 11,  6], // -X+Y   "
        [2, 5, 8], [3, 10,  5], // +X-Y   "
        [2, 9, 7], [3,  7, 11], // +X+Y   "
    ];
}

impl Build for Tetrahedron {
    /// Builds the tetrahedron.
    fn build(self) -> Polyhedron {
        solid("tetrahedron", &Self::COORDS, &Self::FACES)
    }
}
impl Build for Cube {
    /// Builds the cube.
    fn build(self) -> Polyhedron {
        solid("cube", &Self::COORDS, &Self::FACES)
    }
}
impl Build for Octahedron {
    /// Builds the octahedron.
    fn build(self) -> Polyhedron {
        solid("octahedron", &Self::COORDS, &Self::FACES)
    }
}
impl Build for Dodecahedron {
    /// Builds the dodecahedron.
    fn build(self) -> Polyhedron {
        solid("dodecahedron", &Self::COORDS, &Self::FACES)
    }
}
impl Build for Icosahedron {
    /// Builds the icosahedron.
    fn build(self) -> Polyhedron {
        solid("icosahedron", &Self::COORDS, &Self::FACES)
    }
}

fn solid<const N: usize>(
    name: &str,
    coords: &[Point3],
    faces: &[[usize; N]],
) -> Polyhedron {
    let (nv, nf) = (coords.len(), faces.len());
    debug!("building {name}: {nv} vertices, {nf} faces");
    // The tables are known to be valid, so bypass the checks of `new`
    let mut p = Polyhedron {
        name: String::from(name),
        verts: coords.to_vec(),
        faces: faces.iter().map(|f| f.to_vec()).collect::<Vec<_>>(),
        colors: vec![Color3f::WHITE; faces.len()],
    };
    p.paint_by_area(&PALETTE);
    p.scale_unit()
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use re::assert_approx_eq;

    use super::*;

    fn all() -> [Polyhedron; 5] {
        [
            Tetrahedron.build(),
            Cube.build(),
            Octahedron.build(),
            Dodecahedron.build(),
            Icosahedron.build(),
        ]
    }

    #[test]
    fn counts() {
        let counts = all().map(|p| (p.vertex_count(), p.face_count()));
        assert_eq!(counts, [(4, 4), (8, 6), (6, 8), (20, 12), (12, 20)]);
    }

    #[test]
    fn tables_are_valid() {
        for p in all() {
            let checked = Polyhedron::new(&*p.name, p.verts.clone(), p.faces.clone());
            assert!(checked.is_ok(), "{}: {checked:?}", p.name);
        }
    }

    #[test]
    fn euler_characteristic_is_two() {
        for p in all() {
            let (v, e, f) = (p.vertex_count(), p.edge_count(), p.face_count());
            assert_eq!(v + f, e + 2, "{}", p.name);
        }
    }

    #[test]
    fn every_edge_is_shared_by_two_faces_in_opposite_directions() {
        for p in all() {
            let mut edges = BTreeSet::new();
            for f in &p.faces {
                for k in 0..f.len() {
                    let e = (f[k], f[(k + 1) % f.len()]);
                    assert!(edges.insert(e), "{}: duplicate edge {e:?}", p.name);
                }
            }
            for &(a, b) in &edges {
                assert!(edges.contains(&(b, a)), "{}: open edge", p.name);
            }
        }
    }

    #[test]
    fn normals_point_outward() {
        for p in all() {
            for (n, c) in p.normals().into_iter().zip(p.centers()) {
                assert_approx_eq!(n.len(), 1.0);
                assert!(n.dot(&c.to_vec()) > 0.0, "{}: inward face", p.name);
            }
        }
    }

    #[test]
    fn faces_are_regular() {
        for p in all() {
            let areas = p.areas();
            for a in &areas {
                assert_approx_eq!(*a, areas[0], eps = 1e-4);
            }
        }
    }

    #[test]
    fn scaled_to_unit() {
        for p in all() {
            let max = p
                .verts
                .iter()
                .map(|v| v.to_vec().max_abs())
                .fold(0.0_f32, f32::max);
            assert_approx_eq!(max, 1.0);
        }
    }

    #[test]
    fn regular_faces_share_first_color() {
        for p in all() {
            assert!(p.colors.iter().all(|&c| c == PALETTE[0]), "{}", p.name);
        }
    }

    #[test]
    fn select_by_key() {
        assert_eq!(by_key('T').map(|p| p.name), Some("tetrahedron".into()));
        assert_eq!(by_key('c').map(|p| p.name), Some("cube".into()));
        assert_eq!(by_key('O').map(|p| p.face_count()), Some(8));
        assert_eq!(by_key('I').map(|p| p.vertex_count()), Some(12));
        assert_eq!(by_key('J'), None);
    }
}
