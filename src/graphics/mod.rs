//! # Graphics
//!
//! [`Display`] owns the bus, the panel collaborator, the frame buffer and the
//! text/arc state. Its functionality is split across several `impl` blocks:
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | `primitives`  | pixels, lines, rectangles, circles, triangles         |
//! | `advanced`    | polygons, dot grids, polar lines, quads, ellipses, arcs |
//! | `bitmap`      | 1-bit, 8-bit and 16-bit bitmaps, sprites              |
//! | `text`        | glyph rendering, cursor and stream output             |
//! | `buffer`      | frame buffer lifecycle and flush                      |
//! | `draw_target` | `embedded-graphics` integration                       |
//!
//! ## Bounds policy
//!
//! Calls that take an anchor point (origin, corner or center) reject an
//! anchor outside the surface with a bounds error and do nothing else. Spans
//! running past the right or bottom edge are clamped to the surface. Shapes
//! defined purely by vertices (lines, triangles, quadrilaterals) clip per
//! pixel instead.
//!
//! ## Modes
//!
//! Every primitive writes through a [`Backend`]. In
//! [`RenderMode::Direct`] that is the device; in [`RenderMode::Buffered`]
//! it is the in-memory [`FrameBuffer`], which is flushed with
//! [`Display::write_buffer`].

#[cfg(feature = "advanced-graphics")]
mod advanced;
mod bitmap;
mod buffer;
mod draw_target;
mod primitives;
mod text;

#[cfg(feature = "advanced-graphics")]
pub use advanced::ArcConfig;
pub use text::CharMode;

use log::warn;

use crate::color::Color;
use crate::config::{DisplayConfig, RenderMode};
use crate::fonts::Font;
use crate::framebuffer::FrameBuffer;
use crate::hal::{Bus, Hal, MipiPanel, Panel};
use crate::status::{DisplayError, Result};
use crate::transfer::{Backend, Direct};

use text::TextState;

/// A 16-bit serial TFT surface.
pub struct Display<'a, H: Hal, P: Panel = MipiPanel> {
    bus: Bus<H>,
    panel: P,
    width: u16,
    height: u16,
    mode: RenderMode,
    frame: FrameBuffer,
    font: Font<'a>,
    text: TextState,
    #[cfg(feature = "advanced-graphics")]
    arc: ArcConfig,
}

impl<'a, H: Hal, P: Panel> Display<'a, H, P> {
    /// Creates a display using the built-in 8x8 font. The frame buffer is
    /// not allocated until [`Display::set_buffer`] is called.
    pub fn new(hal: H, panel: P, config: DisplayConfig) -> Self {
        Self {
            bus: Bus::new(hal, config.bus),
            panel,
            width: config.width,
            height: config.height,
            mode: config.mode,
            frame: FrameBuffer::new(config.width, config.height),
            font: Font::default(),
            text: TextState::default(),
            #[cfg(feature = "advanced-graphics")]
            arc: ArcConfig::default(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn bus(&self) -> &Bus<H> {
        &self.bus
    }

    pub fn hal(&self) -> &H {
        self.bus.hal()
    }

    pub fn hal_mut(&mut self) -> &mut H {
        self.bus.hal_mut()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Gives back the HAL and the panel.
    pub fn release(self) -> (H, P) {
        (self.bus.release(), self.panel)
    }

    /// Runs `f` against the backend selected by the render mode.
    fn with_backend<R>(&mut self, f: impl FnOnce(&mut dyn Backend) -> R) -> R {
        match self.mode {
            RenderMode::Direct => f(&mut Direct::new(&mut self.bus, &mut self.panel)),
            RenderMode::Buffered => f(&mut self.frame),
        }
    }

    fn check_bounds(&self, op: &str, x: u16, y: u16, error: DisplayError) -> Result {
        if x >= self.width || y >= self.height {
            warn!(
                "{}: ({}, {}) is outside the {}x{} surface",
                op, x, y, self.width, self.height
            );
            return Err(error);
        }
        Ok(())
    }

    /// Length of a span starting at `start` clamped to `extent`.
    fn clamp_span(start: u16, len: u16, extent: u16) -> u16 {
        len.min(extent.saturating_sub(start))
    }

    /// Writes one pixel, silently dropping it when off-surface.
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        self.with_backend(|backend| {
            backend.set_window(x, y, x, y);
            backend.write_repeated(color, 1);
        });
    }

    /// Horizontal run of `len` pixels from `(x, y)`, clipped on both sides.
    fn hspan(&mut self, x: i32, y: i32, len: i32, color: Color) {
        if len <= 0 || y < 0 || y >= i32::from(self.height) {
            return;
        }
        let x0 = x.max(0);
        let x1 = (x + len - 1).min(i32::from(self.width) - 1);
        if x0 > x1 {
            return;
        }
        let (x0, x1, y) = (x0 as u16, x1 as u16, y as u16);
        self.with_backend(|backend| {
            backend.set_window(x0, y, x1, y);
            backend.write_repeated(color, u32::from(x1 - x0) + 1);
        });
    }

    /// Vertical run of `len` pixels from `(x, y)`, clipped on both sides.
    fn vspan(&mut self, x: i32, y: i32, len: i32, color: Color) {
        if len <= 0 || x < 0 || x >= i32::from(self.width) {
            return;
        }
        let y0 = y.max(0);
        let y1 = (y + len - 1).min(i32::from(self.height) - 1);
        if y0 > y1 {
            return;
        }
        let (x, y0, y1) = (x as u16, y0 as u16, y1 as u16);
        self.with_backend(|backend| {
            backend.set_window(x, y0, x, y1);
            backend.write_repeated(color, u32::from(y1 - y0) + 1);
        });
    }
}
