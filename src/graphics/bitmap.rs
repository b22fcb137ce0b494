//! Bitmap blitting: 1-bit, 8-bit RRRGGGBB, 16-bit RGB565 and sprites
//!
//! Sources are row-major. When a bitmap is clipped at the right edge, rows
//! are still read with the bitmap's full stride.
use log::warn;

use super::Display;
use crate::color::Color;
use crate::hal::{Hal, Panel};
use crate::status::{DisplayError, Result};

fn check_len(op: &str, data: &[u8], needed: usize) -> Result {
    if data.len() < needed {
        warn!("{}: {} bytes of bitmap data, need {}", op, data.len(), needed);
        return Err(DisplayError::BitmapSize);
    }
    Ok(())
}

impl<H: Hal, P: Panel> Display<'_, H, P> {
    /// Streams `rows` rows of `width` pixels at `(x, y)`, each row built by
    /// `fill_row(row_index, row_bytes)`.
    fn blit_rows(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        rows: u16,
        mut fill_row: impl FnMut(usize, &mut [u8]),
    ) {
        if width == 0 || rows == 0 {
            return;
        }
        let mut row = alloc::vec![0u8; usize::from(width) * 2];
        self.with_backend(|backend| {
            for j in 0..rows {
                fill_row(usize::from(j), &mut row);
                backend.set_window(x, y + j, x + width - 1, y + j);
                backend.write_pixels(&row);
            }
        });
    }

    /// Monochrome bitmap, 8 pixels per byte, most significant bit leftmost.
    /// Set bits are drawn in `fg`, clear bits in `bg`. `w` must be a
    /// multiple of 8.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        fg: Color,
        bg: Color,
        data: &[u8],
    ) -> Result {
        if data.is_empty() {
            warn!("draw_bitmap: bitmap data is empty");
            return Err(DisplayError::BitmapDataEmpty);
        }
        if w % 8 != 0 {
            warn!("draw_bitmap: width {} is not a multiple of 8", w);
            return Err(DisplayError::BitmapHorizontalSize);
        }
        self.check_bounds("draw_bitmap", x, y, DisplayError::BitmapScreenBounds)?;
        let stride = usize::from(w / 8);
        check_len("draw_bitmap", data, stride * usize::from(h))?;

        let cw = Self::clamp_span(x, w, self.width);
        let ch = Self::clamp_span(y, h, self.height);
        let (fg, bg) = (fg.to_be_bytes(), bg.to_be_bytes());
        self.blit_rows(x, y, cw, ch, |j, row| {
            let src = &data[j * stride..];
            for (i, pixel) in row.chunks_exact_mut(2).enumerate() {
                let lit = src[i / 8] & (0x80 >> (i % 8)) != 0;
                pixel.copy_from_slice(if lit { &fg } else { &bg });
            }
        });
        Ok(())
    }

    /// One RRRGGGBB byte per pixel, expanded to RGB565.
    pub fn draw_bitmap_8(&mut self, x: u16, y: u16, w: u16, h: u16, data: &[u8]) -> Result {
        if data.is_empty() {
            warn!("draw_bitmap_8: bitmap data is empty");
            return Err(DisplayError::BitmapDataEmpty);
        }
        self.check_bounds("draw_bitmap_8", x, y, DisplayError::BitmapScreenBounds)?;
        let stride = usize::from(w);
        check_len("draw_bitmap_8", data, stride * usize::from(h))?;

        let cw = Self::clamp_span(x, w, self.width);
        let ch = Self::clamp_span(y, h, self.height);
        self.blit_rows(x, y, cw, ch, |j, row| {
            let src = &data[j * stride..];
            for (pixel, &value) in row.chunks_exact_mut(2).zip(src) {
                pixel.copy_from_slice(&Color::from_rrrgggbb(value).to_be_bytes());
            }
        });
        Ok(())
    }

    /// Two bytes per pixel, RGB565 high byte first, streamed unchanged.
    pub fn draw_bitmap_16(&mut self, x: u16, y: u16, w: u16, h: u16, data: &[u8]) -> Result {
        if data.is_empty() {
            warn!("draw_bitmap_16: bitmap data is empty");
            return Err(DisplayError::BitmapDataEmpty);
        }
        self.check_bounds("draw_bitmap_16", x, y, DisplayError::BitmapScreenBounds)?;
        let stride = usize::from(w) * 2;
        check_len("draw_bitmap_16", data, stride * usize::from(h))?;

        let cw = Self::clamp_span(x, w, self.width);
        let ch = Self::clamp_span(y, h, self.height);
        if cw == 0 || ch == 0 {
            return Ok(());
        }
        let visible = usize::from(cw) * 2;
        self.with_backend(|backend| {
            for j in 0..ch {
                let start = usize::from(j) * stride;
                backend.set_window(x, y + j, x + cw - 1, y + j);
                backend.write_pixels(&data[start..start + visible]);
            }
        });
        Ok(())
    }

    /// 16-bit bitmap drawn pixel by pixel. Unless `print_bg` is set, pixels
    /// equal to `key` are skipped and leave the destination untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_sprite(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        key: Color,
        print_bg: bool,
        data: &[u8],
    ) -> Result {
        if data.is_empty() {
            warn!("draw_sprite: sprite data is empty");
            return Err(DisplayError::BitmapDataEmpty);
        }
        self.check_bounds("draw_sprite", x, y, DisplayError::BitmapScreenBounds)?;
        let stride = usize::from(w);
        check_len("draw_sprite", data, stride * usize::from(h) * 2)?;

        let cw = Self::clamp_span(x, w, self.width);
        let ch = Self::clamp_span(y, h, self.height);
        for j in 0..ch {
            let src = &data[usize::from(j) * stride * 2..];
            for (i, pair) in (0u16..cw).zip(src.chunks_exact(2)) {
                let color = Color::from_be_bytes([pair[0], pair[1]]);
                if print_bg || color != key {
                    self.plot(i32::from(x) + i32::from(i), i32::from(y) + i32::from(j), color);
                }
            }
        }
        Ok(())
    }
}
