//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    mem,
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{debug, info};
use minifb::{Key, MouseMode, WindowOptions};

use re::render::{Camera, Dims, OrbitControl, Raster, Stats};

use crate::{Frame, dims::SVGA_800_600};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
    /// Projection and background color.
    pub camera: Camera,
    /// Mouse-driven orbit state.
    pub control: OrbitControl,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
    pub camera: Camera,
    pub control: OrbitControl,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: SVGA_800_600,
            title: "// polyview //",
            target_fps: Some(60),
            opts: WindowOptions { resize: true, ..WindowOptions::default() },
            camera: Camera::default(),
            control: OrbitControl::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }
    /// Sets the camera projection and background.
    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }
    /// Sets the mouse orbit control.
    pub fn control(mut self, control: OrbitControl) -> Self {
        self.control = control;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts, camera, control } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        info!("opened window {title:?} of size {}x{}", dims.0, dims.1);
        Ok(Window { imp, dims, camera, control })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Sets the title of the window.
    pub fn set_title(&mut self, title: &str) {
        self.imp.set_title(title);
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    ///
    /// # Errors
    /// If `fb.len() < self.dims.0 * self.dims.1` or the update fails.
    pub fn present(&mut self, fb: &[u32]) -> minifb::Result<()> {
        let (w, h) = self.dims;
        self.imp.update_with_buffer(fb, w as usize, h as usize)
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to draw the next frame.
    ///
    /// Before each callback, the mouse and scroll wheel state is fed to
    /// the orbit control, and the frame is cleared and its camera set up.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// If presenting a frame to the window fails.
    pub fn run<F>(&mut self, mut frame_fn: F) -> minifb::Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let mut gl = Raster::new(self.dims);
        gl.stats = Stats::start();

        let start = Instant::now();
        let mut last = Instant::now();
        loop {
            if self.should_quit() {
                break;
            }
            self.handle_input(&mut gl);

            let (orbit, dims) = (self.control.orbit(), self.dims);
            self.camera.apply(&mut gl, &orbit, dims);

            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                gl: &mut gl,
                win: self,
                orbit,
                dims,
            };
            last = Instant::now();
            if let Break(_) = frame_fn(frame) {
                break;
            }
            self.present(gl.color_buf())?;

            gl.stats.frames += 1;
        }
        let stats = mem::take(&mut gl.stats).finish();
        info!("closing window, stats:\n{stats}");
        Ok(())
    }

    fn handle_input(&mut self, gl: &mut Raster) {
        if let Some((x, y)) = self.imp.get_mouse_pos(MouseMode::Pass) {
            self.control.cursor_moved(x, y);
        }
        if let Some((_, dy)) = self.imp.get_scroll_wheel() {
            self.control.scrolled(dy);
        }
        let (w, h) = self.imp.get_size();
        let dims = (w as u32, h as u32);
        if dims != self.dims && w > 0 && h > 0 {
            debug!("window resized to {w}x{h}");
            self.dims = dims;
            gl.resize(dims);
        }
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
