//! Driving a fixed-function rendering context.
//!
//! The helpers in this module configure a [`Gl`] context for viewing a
//! single lit, vertex-colored mesh from an orbiting camera:
//!
//! * [`perspective`] multiplies the current matrix by a perspective
//!   projection,
//! * [`apply_camera`] clears the frame and sets up the viewport, the
//!   projection, and the orbit view transform,
//! * [`init_scene_lighting`] configures two directional lights, a glossy
//!   material, and depth testing, and
//! * [`draw_mesh`] and [`draw_polygon`] emit a polygon.
//!
//! Two contexts are provided: [`Recorder`], which records the commands it
//! is given, and [`Raster`], a software rasterizer into a pixel buffer.

pub mod cam;
pub mod draw;
pub mod gl;
pub mod light;
pub mod proj;
pub mod raster;
pub mod record;
pub mod state;
pub mod stats;

pub use cam::{Camera, Orbit, OrbitControl, apply_camera};
pub use draw::{draw_mesh, draw_polygon};
pub use gl::{
    Buffers, Cap, Command, DepthFunc, Face, Gl, Hint, HintMode, LightId,
    LightModel, LightParam, LightPos, MaterialParam, MatrixMode, Primitive,
    ShadeModel, Viewport,
};
pub use light::{
    Light, Material, Prefs, SceneLighting, init_scene_lighting, set_prefs,
};
pub use proj::{Frustum, perspective};
pub use raster::Raster;
pub use record::Recorder;
pub use state::State;
pub use stats::Stats;

/// Width and height of a render target, in pixels.
pub type Dims = (u32, u32);
