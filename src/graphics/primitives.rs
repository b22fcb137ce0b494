//! Pixels, lines, rectangles, circles and triangles
use alloc::vec::Vec;

use super::Display;
use crate::color::Color;
use crate::hal::{Hal, Panel};
use crate::status::{DisplayError, Result};

/// Quadrant masks for [`Display::circle_helper`].
pub(super) mod corner {
    pub const TOP_LEFT: u8 = 0x1;
    pub const TOP_RIGHT: u8 = 0x2;
    pub const BOTTOM_RIGHT: u8 = 0x4;
    pub const BOTTOM_LEFT: u8 = 0x8;
}

/// Half masks for [`Display::fill_circle_helper`].
pub(super) mod half {
    pub const RIGHT: u8 = 0x1;
    pub const LEFT: u8 = 0x2;
}

/// Midpoint circle stepper shared by the outline and fill routines.
///
/// Yields `(x, y)` offsets of the first octant, starting one step past the
/// axis points.
struct Octant {
    decision: i32,
    delta_x: i32,
    delta_y: i32,
    x: i32,
    y: i32,
}

impl Octant {
    fn new(radius: i32) -> Self {
        Self {
            decision: 1 - radius,
            delta_x: 1,
            delta_y: -2 * radius,
            x: 0,
            y: radius,
        }
    }
}

impl Iterator for Octant {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.decision >= 0 {
            self.y -= 1;
            self.delta_y += 2;
            self.decision += self.delta_y;
        }
        self.x += 1;
        self.delta_x += 2;
        self.decision += self.delta_x;
        Some((self.x, self.y))
    }
}

impl<H: Hal, P: Panel> Display<'_, H, P> {
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result {
        self.check_bounds("draw_pixel", x, y, DisplayError::ShapeScreenBounds)?;
        self.plot(i32::from(x), i32::from(y), color);
        Ok(())
    }

    /// Horizontal line of width `w`, one address window and one transfer.
    pub fn draw_fast_hline(&mut self, x: u16, y: u16, w: u16, color: Color) -> Result {
        self.check_bounds("draw_fast_hline", x, y, DisplayError::ShapeScreenBounds)?;
        let w = Self::clamp_span(x, w, self.width);
        self.hspan(i32::from(x), i32::from(y), i32::from(w), color);
        Ok(())
    }

    /// Vertical line of height `h`, one address window and one transfer.
    pub fn draw_fast_vline(&mut self, x: u16, y: u16, h: u16, color: Color) -> Result {
        self.check_bounds("draw_fast_vline", x, y, DisplayError::ShapeScreenBounds)?;
        let h = Self::clamp_span(y, h, self.height);
        self.vspan(i32::from(x), i32::from(y), i32::from(h), color);
        Ok(())
    }

    /// Bresenham line. Points off the surface are skipped.
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) -> Result {
        self.line(
            i32::from(x0),
            i32::from(y0),
            i32::from(x1),
            i32::from(y1),
            color,
        );
        Ok(())
    }

    pub(super) fn line(&mut self, mut x0: i32, mut y0: i32, mut x1: i32, mut y1: i32, color: Color) {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }
        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut err = dx / 2;
        let ystep = if y0 < y1 { 1 } else { -1 };

        while x0 <= x1 {
            if steep {
                self.plot(y0, x0, color);
            } else {
                self.plot(x0, y0, color);
            }
            err -= dy;
            if err < 0 {
                y0 += ystep;
                err += dx;
            }
            x0 += 1;
        }
    }

    pub fn draw_circle(&mut self, cx: u16, cy: u16, radius: u16, color: Color) -> Result {
        self.check_bounds("draw_circle", cx, cy, DisplayError::ShapeScreenBounds)?;
        let (cx, cy, r) = (i32::from(cx), i32::from(cy), i32::from(radius));

        self.plot(cx, cy + r, color);
        self.plot(cx, cy - r, color);
        self.plot(cx + r, cy, color);
        self.plot(cx - r, cy, color);
        for (x, y) in Octant::new(r) {
            self.plot(cx + x, cy + y, color);
            self.plot(cx - x, cy + y, color);
            self.plot(cx + x, cy - y, color);
            self.plot(cx - x, cy - y, color);
            self.plot(cx + y, cy + x, color);
            self.plot(cx - y, cy + x, color);
            self.plot(cx + y, cy - x, color);
            self.plot(cx - y, cy - x, color);
        }
        Ok(())
    }

    /// Outline of the quadrants selected by `corners` (see [`corner`]).
    pub(super) fn circle_helper(&mut self, cx: i32, cy: i32, r: i32, corners: u8, color: Color) {
        for (x, y) in Octant::new(r) {
            if corners & corner::BOTTOM_RIGHT != 0 {
                self.plot(cx + x, cy + y, color);
                self.plot(cx + y, cy + x, color);
            }
            if corners & corner::TOP_RIGHT != 0 {
                self.plot(cx + x, cy - y, color);
                self.plot(cx + y, cy - x, color);
            }
            if corners & corner::BOTTOM_LEFT != 0 {
                self.plot(cx - y, cy + x, color);
                self.plot(cx - x, cy + y, color);
            }
            if corners & corner::TOP_LEFT != 0 {
                self.plot(cx - y, cy - x, color);
                self.plot(cx - x, cy - y, color);
            }
        }
    }

    /// Vertical spans filling the halves selected by `halves` (see [`half`]),
    /// each stretched downwards by `stretch` pixels.
    pub(super) fn fill_circle_helper(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        halves: u8,
        stretch: i32,
        color: Color,
    ) {
        for (x, y) in Octant::new(r) {
            if halves & half::RIGHT != 0 {
                self.vspan(cx + x, cy - y, 2 * y + 1 + stretch, color);
                self.vspan(cx + y, cy - x, 2 * x + 1 + stretch, color);
            }
            if halves & half::LEFT != 0 {
                self.vspan(cx - x, cy - y, 2 * y + 1 + stretch, color);
                self.vspan(cx - y, cy - x, 2 * x + 1 + stretch, color);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: u16, cy: u16, radius: u16, color: Color) -> Result {
        self.check_bounds("fill_circle", cx, cy, DisplayError::ShapeScreenBounds)?;
        let (cx, cy, r) = (i32::from(cx), i32::from(cy), i32::from(radius));
        self.vspan(cx, cy - r, 2 * r + 1, color);
        self.fill_circle_helper(cx, cy, r, half::RIGHT | half::LEFT, 0, color);
        Ok(())
    }

    /// Rectangle outline. Edges past the right or bottom border are cut off.
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> Result {
        self.check_bounds("draw_rect", x, y, DisplayError::ShapeScreenBounds)?;
        if w == 0 || h == 0 {
            return Ok(());
        }
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        self.hspan(x, y, w, color);
        self.hspan(x, y + h - 1, w, color);
        self.vspan(x, y, h, color);
        self.vspan(x + w - 1, y, h, color);
        Ok(())
    }

    /// Solid rectangle drawn as one vertical line per column.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> Result {
        self.check_bounds("fill_rect", x, y, DisplayError::ShapeScreenBounds)?;
        let w = Self::clamp_span(x, w, self.width);
        let h = Self::clamp_span(y, h, self.height);
        for column in 0..w {
            self.vspan(i32::from(x + column), i32::from(y), i32::from(h), color);
        }
        Ok(())
    }

    /// Solid rectangle drawn as one address window and transfer per row.
    pub fn fill_rect_buffer(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> Result {
        self.check_bounds("fill_rect_buffer", x, y, DisplayError::ShapeScreenBounds)?;
        let w = Self::clamp_span(x, w, self.width);
        let h = Self::clamp_span(y, h, self.height);
        if w == 0 || h == 0 {
            return Ok(());
        }
        let row: Vec<u8> = core::iter::repeat(color.to_be_bytes())
            .take(usize::from(w))
            .flatten()
            .collect();
        self.with_backend(|backend| {
            for j in 0..h {
                backend.set_window(x, y + j, x + w - 1, y + j);
                backend.write_pixels(&row);
            }
        });
        Ok(())
    }

    pub fn fill_screen(&mut self, color: Color) -> Result {
        self.fill_rect_buffer(0, 0, self.width, self.height, color)
    }

    /// Rectangle outline with rounded corners. `radius` is clamped to half
    /// the shorter side.
    pub fn draw_round_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        radius: u16,
        color: Color,
    ) -> Result {
        self.check_bounds("draw_round_rect", x, y, DisplayError::ShapeScreenBounds)?;
        if w == 0 || h == 0 {
            return Ok(());
        }
        let r = i32::from(radius.min(w.min(h) / 2));
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));

        self.hspan(x + r, y, w - 2 * r, color);
        self.hspan(x + r, y + h - 1, w - 2 * r, color);
        self.vspan(x, y + r, h - 2 * r, color);
        self.vspan(x + w - 1, y + r, h - 2 * r, color);
        self.circle_helper(x + r, y + r, r, corner::TOP_LEFT, color);
        self.circle_helper(x + w - r - 1, y + r, r, corner::TOP_RIGHT, color);
        self.circle_helper(x + w - r - 1, y + h - r - 1, r, corner::BOTTOM_RIGHT, color);
        self.circle_helper(x + r, y + h - r - 1, r, corner::BOTTOM_LEFT, color);
        Ok(())
    }

    pub fn fill_round_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        radius: u16,
        color: Color,
    ) -> Result {
        self.check_bounds("fill_round_rect", x, y, DisplayError::ShapeScreenBounds)?;
        if w == 0 || h == 0 {
            return Ok(());
        }
        let r = i32::from(radius.min(w.min(h) / 2));
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));

        for column in x + r..x + w - r {
            self.vspan(column, y, h, color);
        }
        self.fill_circle_helper(x + w - r - 1, y + r, r, half::RIGHT, h - 2 * r - 1, color);
        self.fill_circle_helper(x + r, y + r, r, half::LEFT, h - 2 * r - 1, color);
        Ok(())
    }

    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) -> Result {
        let (x0, y0, x1, y1, x2, y2) = (
            i32::from(x0),
            i32::from(y0),
            i32::from(x1),
            i32::from(y1),
            i32::from(x2),
            i32::from(y2),
        );
        self.line(x0, y0, x1, y1, color);
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x0, y0, color);
        Ok(())
    }

    pub fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) -> Result {
        self.triangle(
            (i32::from(x0), i32::from(y0)),
            (i32::from(x1), i32::from(y1)),
            (i32::from(x2), i32::from(y2)),
            color,
        );
        Ok(())
    }

    /// Scanline triangle fill: upper half between edges 0-1 and 0-2, lower
    /// half between edges 1-2 and 0-2.
    pub(super) fn triangle(
        &mut self,
        mut a: (i32, i32),
        mut b: (i32, i32),
        mut c: (i32, i32),
        color: Color,
    ) {
        if a.1 > b.1 {
            core::mem::swap(&mut a, &mut b);
        }
        if b.1 > c.1 {
            core::mem::swap(&mut b, &mut c);
        }
        if a.1 > b.1 {
            core::mem::swap(&mut a, &mut b);
        }
        let ((x0, y0), (x1, y1), (x2, y2)) = (a, b, c);

        if y0 == y2 {
            let left = x0.min(x1).min(x2);
            let right = x0.max(x1).max(x2);
            self.hspan(left, y0, right - left + 1, color);
            return;
        }

        let (x0, y0, x1, y1, x2, y2) = (
            i64::from(x0),
            i64::from(y0),
            i64::from(x1),
            i64::from(y1),
            i64::from(x2),
            i64::from(y2),
        );
        let (dx01, dy01) = (x1 - x0, y1 - y0);
        let (dx02, dy02) = (x2 - x0, y2 - y0);
        let (dx12, dy12) = (x2 - x1, y2 - y1);
        let mut sa = 0;
        let mut sb = 0;

        // a flat bottom edge belongs to the upper half
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let mut y = y0;
        while y <= last {
            let left = x0 + sa / dy01;
            let right = x0 + sb / dy02;
            sa += dx01;
            sb += dx02;
            self.scanline(left, right, y, color);
            y += 1;
        }

        sa = dx12 * (y - y1);
        sb = dx02 * (y - y0);
        while y <= y2 {
            let left = x1 + sa / dy12;
            let right = x0 + sb / dy02;
            sa += dx12;
            sb += dx02;
            self.scanline(left, right, y, color);
            y += 1;
        }
    }

    fn scanline(&mut self, a: i64, b: i64, y: i64, color: Color) {
        let (left, right) = if a > b { (b, a) } else { (a, b) };
        self.hspan(left as i32, y as i32, (right - left + 1) as i32, color);
    }
}
