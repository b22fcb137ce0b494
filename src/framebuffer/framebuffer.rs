//! In-memory RGB565 frame buffer with device-like address windows
use alloc::vec::Vec;
use log::debug;

use crate::color::Color;
use crate::status::{DisplayError, Result};
use crate::transfer::Backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

pub struct FrameBuffer {
    data: Vec<u8>,
    width: u16,
    height: u16,
    window: Window,
    cursor_x: u32,
    cursor_y: u32,
}

impl FrameBuffer {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            data: Vec::new(),
            width,
            height,
            window: Window {
                x0: 0,
                y0: 0,
                x1: u32::from(width.saturating_sub(1)),
                y1: u32::from(height.saturating_sub(1)),
            },
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    fn byte_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height) * 2
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    /// Raw bytes, row-major, high byte first. Empty until allocated.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn row_bytes(&self, row: u16) -> &[u8] {
        let stride = usize::from(self.width) * 2;
        let start = usize::from(row) * stride;
        self.data.get(start..start + stride).unwrap_or(&[])
    }

    /// Reads back one pixel; `None` when out of bounds or not allocated.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 2;
        let bytes = self.data.get(index..index + 2)?;
        Some(Color::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn allocate(&mut self) -> Result {
        let size = self.byte_len();
        let additional = size.saturating_sub(self.data.len());
        if self.data.try_reserve_exact(additional).is_err() {
            debug!("framebuffer: could not reserve {} bytes", size);
            return Err(DisplayError::MemoryAError);
        }
        self.data.resize(size, 0);
        if self.data.is_empty() || self.data.len() != size {
            debug!("framebuffer: allocation size mismatch ({} != {})", self.data.len(), size);
            return Err(DisplayError::MemoryAError);
        }
        debug!("framebuffer: {} bytes allocated", size);
        Ok(())
    }

    pub(crate) fn clear(&mut self, color: Color) -> Result {
        if self.data.is_empty() {
            return Err(DisplayError::BufferEmpty);
        }
        let [high, low] = color.to_be_bytes();
        for pair in self.data.chunks_exact_mut(2) {
            pair[0] = high;
            pair[1] = low;
        }
        Ok(())
    }

    pub(crate) fn destroy(&mut self) -> Result {
        self.data = Vec::new();
        if !self.data.is_empty() {
            return Err(DisplayError::MemoryAError);
        }
        debug!("framebuffer: destroyed");
        Ok(())
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return;
        }
        let index = (y as usize * usize::from(self.width) + x as usize) * 2;
        if let Some(pair) = self.data.get_mut(index..index + 2) {
            pair.copy_from_slice(&color.to_be_bytes());
        }
    }

    fn push(&mut self, color: Color) {
        self.put(self.cursor_x, self.cursor_y, color);
        self.cursor_x += 1;
        if self.cursor_x > self.window.x1 {
            self.cursor_x = self.window.x0;
            self.cursor_y += 1;
            if self.cursor_y > self.window.y1 {
                self.cursor_y = self.window.y0;
            }
        }
    }
}

impl Backend for FrameBuffer {
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        self.window = Window {
            x0: u32::from(x0),
            y0: u32::from(y0),
            x1: u32::from(x1.max(x0)),
            y1: u32::from(y1.max(y0)),
        };
        self.cursor_x = self.window.x0;
        self.cursor_y = self.window.y0;
    }

    fn write_pixels(&mut self, data: &[u8]) {
        if self.data.is_empty() {
            return;
        }
        for pair in data.chunks_exact(2) {
            self.push(Color::from_be_bytes([pair[0], pair[1]]));
        }
    }

    fn write_repeated(&mut self, color: Color, count: u32) {
        if self.data.is_empty() {
            return;
        }
        for _ in 0..count {
            self.push(color);
        }
    }
}
