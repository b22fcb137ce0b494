//! Frame buffer lifecycle and flush
use log::{debug, warn};

use super::Display;
use crate::color::Color;
use crate::config::FlushMode;
use crate::hal::{Hal, Panel};
use crate::status::{DisplayError, Result};
use crate::transfer::{Backend, Direct};

impl<H: Hal, P: Panel> Display<'_, H, P> {
    /// Allocates (or re-sizes) the `width * height * 2` byte frame buffer.
    pub fn set_buffer(&mut self) -> Result {
        self.frame.allocate().inspect_err(|_| {
            warn!("set_buffer: frame buffer allocation failed");
        })
    }

    /// Fills every frame buffer pixel with `color`.
    pub fn clear_buffer(&mut self, color: Color) -> Result {
        self.frame.clear(color).inspect_err(|_| {
            warn!("clear_buffer: frame buffer is empty");
        })
    }

    /// Streams the frame buffer to the device, regardless of render mode.
    pub fn write_buffer(&mut self, mode: FlushMode) -> Result {
        if !self.frame.is_allocated() {
            warn!("write_buffer: frame buffer is empty");
            return Err(DisplayError::BufferEmpty);
        }
        debug!("write_buffer: {:?} flush of {} bytes", mode, self.frame.as_bytes().len());

        let (width, height) = (self.width, self.height);
        let mut device = Direct::new(&mut self.bus, &mut self.panel);
        match mode {
            FlushMode::Whole => {
                device.set_window(0, 0, width - 1, height - 1);
                device.write_pixels(self.frame.as_bytes());
            }
            FlushMode::RowByRow => {
                for row in 0..height {
                    device.set_window(0, row, width - 1, row);
                    device.write_pixels(self.frame.row_bytes(row));
                }
            }
        }
        Ok(())
    }

    /// Releases the frame buffer allocation.
    pub fn destroy_buffer(&mut self) -> Result {
        self.frame.destroy()
    }
}
