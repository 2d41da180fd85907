//! Frontends for creating simple applications with `polyview`.

use std::time::Duration;

use re::render::{Dims, Orbit, Raster};

#[cfg(feature = "minifb")]
pub mod minifb;

/// Common window sizes.
pub mod dims {
    use super::Dims;

    pub const VGA_640_480: Dims = (640, 480);
    pub const SVGA_800_600: Dims = (800, 600);
    pub const XGA_1024_768: Dims = (1024, 768);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
///
/// By the time the callback runs, the frame has been cleared and the
/// camera transform for [`orbit`][Self::orbit] set up.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Rendering context drawing into the window's framebuffer.
    pub gl: &'a mut Raster,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// The current camera orbit.
    pub orbit: Orbit,
    /// The width and height of the framebuffer.
    pub dims: Dims,
}
