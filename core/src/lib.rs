//! Core functionality of the `polyview` project.
//!
//! Contains a small math library with vectors, points, matrices, colors, and
//! angles; a polygonal polyhedron model; and a fixed-function rendering layer
//! in the style of immediate-mode OpenGL: perspective projection setup, an
//! orbit camera, a lighting preset, and polygon draw calls.
//!
//! All rendering goes through the [`Gl`][render::Gl] trait, an explicit
//! context object passed to every operation. Two contexts are included:
//! a [`Recorder`][render::Recorder] that logs commands and tracks state, and
//! a software [`Raster`][render::Raster] that draws into a framebuffer.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std` and enables timekeeping
//!   in rendering statistics. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` use.
//!
//! At least one of the features must be enabled. If both are, `std` is
//! used.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

pub mod geom;
pub mod math;
pub mod render;

pub mod prelude {
    pub use crate::math::{
        Angle, Color3f, Color4f, Mat4, Point3, Vec3, degs, gray, pt3, rads,
        rgb, rgba, vec3,
    };

    pub use crate::geom::{Error as MeshError, PolyVertex, Polyhedron};

    pub use crate::render::{
        Camera, Command, Dims, Gl, Orbit, OrbitControl, Raster, Recorder,
        SceneLighting, apply_camera, draw_mesh, draw_polygon,
        init_scene_lighting, perspective,
    };
}
