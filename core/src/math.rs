//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][vec], [points][point], [matrices][mat],
//! [colors][color], and [angles][angle], as well as utilities such as
//! approximate equality comparisons.
//!
//! Positions and directions are distinct types: a [`Point3`] is a location
//! and a [`Vec3`] is a displacement or a normal. Subtracting two points
//! yields a vector, and adding a vector to a point yields a point. Colors
//! are a third, unrelated type, so a color can never be passed where a
//! position is expected. Angles are strongly typed as well, to allow working
//! with degrees and radians without confusion.

pub use {
    angle::{Angle, degs, rads},
    approx::ApproxEq,
    color::{Color3f, Color4f, gray, rgb, rgba},
    mat::{Mat4, frustum, rotate, rotate_x, rotate_y, rotate_z, translate},
    point::{Point3, pt3},
    vec::{Vec3, vec3},
};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod point;
pub mod vec;
