//! # Transfer Backend
//!
//! Every rasterizer and blitter primitive talks to a [`Backend`]: it selects
//! an inclusive address window and streams big-endian RGB565 pixels into it,
//! row-major, exactly as a serial TFT controller consumes them.
//!
//! Two implementations exist:
//!
//! - [`Direct`]: programs the device window through the [`Panel`] and streams
//!   the bytes over the [`Bus`]
//! - [`FrameBuffer`](crate::framebuffer::FrameBuffer): emulates the same
//!   window/stream semantics in memory
//!
//! Since both sides receive the identical call sequence, direct and buffered
//! rendering produce the same pixels.

use crate::color::Color;
use crate::hal::{Bus, Hal, Panel};

pub trait Backend {
    /// Selects the rectangle `(x0, y0)..=(x1, y1)` for the following writes.
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16);

    /// Streams raw pixel bytes (two per pixel, high byte first).
    fn write_pixels(&mut self, data: &[u8]);

    /// Streams `count` copies of `color`.
    fn write_repeated(&mut self, color: Color, count: u32);
}

/// Backend that renders straight to the device.
pub struct Direct<'b, H: Hal, P: Panel> {
    bus: &'b mut Bus<H>,
    panel: &'b mut P,
}

impl<'b, H: Hal, P: Panel> Direct<'b, H, P> {
    pub fn new(bus: &'b mut Bus<H>, panel: &'b mut P) -> Self {
        Self { bus, panel }
    }
}

impl<H: Hal, P: Panel> Backend for Direct<'_, H, P> {
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        self.panel.set_addr_window(self.bus, x0, y0, x1, y1);
    }

    fn write_pixels(&mut self, data: &[u8]) {
        self.bus.write_data_buffer(data);
    }

    fn write_repeated(&mut self, color: Color, count: u32) {
        self.bus.write_repeated(color.to_be_bytes(), count);
    }
}
