//! Polygons, dot grids, polar lines, quadrilaterals, ellipses and arcs
use core::f32::consts::PI;

use libm::{cosf, fmodf, sinf};
use log::warn;

use super::Display;
use crate::color::Color;
use crate::hal::{Hal, Panel};
use crate::status::{DisplayError, Result};

const POLYGON_MIN_SIDES: u8 = 3;
const POLYGON_MAX_SIDES: u8 = 12;

const DOT_GRID_MIN_GAP: u8 = 2;
const DOT_GRID_MAX_GAP: u8 = 20;

/// End slope used when a sector closes exactly at 360 degrees.
const FULL_TURN_END_SLOPE: f32 = -1_000_000.0;

/// Angle units and rotation applied by [`Display::draw_arc`].
///
/// `angle_max` is the value that stands for a full turn (360 by default, so
/// angles are degrees). `angle_offset` rotates every arc, in degrees; zero
/// points along the positive x axis and angles grow clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConfig {
    pub angle_max: f32,
    pub angle_offset: i32,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            angle_max: 360.0,
            angle_offset: 0,
        }
    }
}

fn radians(degrees: f32) -> f32 {
    degrees / 360.0 * 2.0 * PI
}

fn cos_deg(degrees: f32) -> f32 {
    cosf(radians(degrees))
}

fn sin_deg(degrees: f32) -> f32 {
    sinf(radians(degrees))
}

/// Folds an angle into `0..=360`. Positive multiples of a full turn map to
/// 360, not 0, so a sector ending on a full turn stays closed.
fn normalize_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle > 360.0 {
        let folded = fmodf(angle, 360.0);
        if folded == 0.0 {
            360.0
        } else {
            folded
        }
    } else if angle < 0.0 {
        let folded = fmodf(angle, 360.0);
        if folded < 0.0 {
            folded + 360.0
        } else {
            0.0
        }
    } else {
        angle
    }
}

/// Inclusive bounding box of a sector, relative to its center.
struct Bounds {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min_x: i32::MAX,
            max_x: i32::MIN,
            min_y: i32::MAX,
            max_y: i32::MIN,
        }
    }

    fn include(&mut self, x: f32, y: f32) {
        let (x, y) = (x as i32, y as i32);
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

impl<H: Hal, P: Panel> Display<'_, H, P> {
    pub fn arc_config(&self) -> ArcConfig {
        self.arc
    }

    pub fn arc_angle_max(&self) -> f32 {
        self.arc.angle_max
    }

    /// Sets the full-turn angle unit. Non-positive values are ignored.
    pub fn set_arc_angle_max(&mut self, angle_max: f32) {
        if angle_max > 0.0 {
            self.arc.angle_max = angle_max;
        }
    }

    pub fn arc_angle_offset(&self) -> i32 {
        self.arc.angle_offset
    }

    pub fn set_arc_angle_offset(&mut self, angle_offset: i32) {
        self.arc.angle_offset = angle_offset;
    }

    /// Regular polygon with `sides` vertices on a circle of radius `diameter`
    /// around `(x, y)`, rotated by `rotation` degrees.
    ///
    /// Filled polygons are rasterized scanline by scanline between sorted
    /// edge crossings.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_polygon(
        &mut self,
        x: u16,
        y: u16,
        sides: u8,
        diameter: i16,
        rotation: f32,
        fill: bool,
        color: Color,
    ) -> Result {
        if !(POLYGON_MIN_SIDES..=POLYGON_MAX_SIDES).contains(&sides) {
            warn!(
                "draw_polygon: {} sides, expected {}..={}",
                sides, POLYGON_MIN_SIDES, POLYGON_MAX_SIDES
            );
            return Err(DisplayError::GenericError);
        }
        self.check_bounds("draw_polygon", x, y, DisplayError::ShapeScreenBounds)?;

        let n = usize::from(sides);
        let step = 360.0 / f32::from(sides);
        let mut vx = [0i32; POLYGON_MAX_SIDES as usize];
        let mut vy = [0i32; POLYGON_MAX_SIDES as usize];
        for i in 0..n {
            let angle = radians(i as f32 * step + rotation);
            vx[i] = (f32::from(x) + sinf(angle) * f32::from(diameter)) as i32;
            vy[i] = (f32::from(y) + cosf(angle) * f32::from(diameter)) as i32;
        }

        if !fill {
            for i in 0..n {
                let j = (i + 1) % n;
                self.line(vx[i], vy[i], vx[j], vy[j], color);
            }
            return Ok(());
        }

        let min_y = vy[..n].iter().copied().min().unwrap_or(0);
        let max_y = vy[..n].iter().copied().max().unwrap_or(0);
        let mut crossings = [0i32; POLYGON_MAX_SIDES as usize];
        for scan_y in min_y..=max_y {
            let mut count = 0;
            for i in 0..n {
                let j = (i + 1) % n;
                if (vy[i] <= scan_y && vy[j] > scan_y) || (vy[j] <= scan_y && vy[i] > scan_y) {
                    let t = (scan_y - vy[i]) as f32 / (vy[j] - vy[i]) as f32;
                    crossings[count] = (vx[i] as f32 + t * (vx[j] - vx[i]) as f32) as i32;
                    count += 1;
                }
            }
            let crossings = &mut crossings[..count];
            crossings.sort_unstable();
            for pair in crossings.chunks_exact(2) {
                self.hspan(pair[0], scan_y, pair[1] - pair[0] + 1, color);
            }
        }
        Ok(())
    }

    /// Pixels every `gap` pixels across the `w` x `h` region at `(x, y)`.
    /// A gap outside `2..=20` falls back to 2.
    pub fn draw_dot_grid(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        gap: u8,
        color: Color,
    ) -> Result {
        self.check_bounds("draw_dot_grid", x, y, DisplayError::ShapeScreenBounds)?;
        let gap = if (DOT_GRID_MIN_GAP..=DOT_GRID_MAX_GAP).contains(&gap) {
            gap
        } else {
            warn!("draw_dot_grid: gap {} out of range, using {}", gap, DOT_GRID_MIN_GAP);
            DOT_GRID_MIN_GAP
        };
        let w = Self::clamp_span(x, w, self.width);
        let h = Self::clamp_span(y, h, self.height);
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));

        for row in (y..y + h).step_by(usize::from(gap)) {
            for column in (x..x + w).step_by(usize::from(gap)) {
                self.plot(column, row, color);
            }
        }
        Ok(())
    }

    /// Line along `angle + offset` degrees, from `start` to `start + length`
    /// pixels away from `(x, y)`. Lengths under 2 draw a single pixel at
    /// `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line_angle(
        &mut self,
        x: i16,
        y: i16,
        angle: i32,
        start: u8,
        length: u8,
        offset: i32,
        color: Color,
    ) -> Result {
        let (x, y) = (i32::from(x), i32::from(y));
        if length < 2 {
            self.plot(x, y, color);
            return Ok(());
        }
        let degrees = angle.wrapping_add(offset) as f32;
        let (cos, sin) = (cos_deg(degrees), sin_deg(degrees));
        let near = f32::from(start);
        let far = f32::from(start) + f32::from(length);
        self.line(
            (x as f32 + near * cos) as i32,
            (y as f32 + near * sin) as i32,
            (x as f32 + far * cos) as i32,
            (y as f32 + far * sin) as i32,
            color,
        );
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_quadrilateral(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        x3: i16,
        y3: i16,
        color: Color,
    ) -> Result {
        let points = [
            (i32::from(x0), i32::from(y0)),
            (i32::from(x1), i32::from(y1)),
            (i32::from(x2), i32::from(y2)),
            (i32::from(x3), i32::from(y3)),
        ];
        for i in 0..4 {
            let (a, b) = (points[i], points[(i + 1) % 4]);
            self.line(a.0, a.1, b.0, b.1, color);
        }
        Ok(())
    }

    /// Fills a quadrilateral as two triangles. The diagonal is picked from
    /// the turn direction at vertex 1: 0-2 when counter-clockwise or
    /// collinear, 1-3 otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_quadrilateral(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        x3: i16,
        y3: i16,
        color: Color,
    ) -> Result {
        let p0 = (i32::from(x0), i32::from(y0));
        let p1 = (i32::from(x1), i32::from(y1));
        let p2 = (i32::from(x2), i32::from(y2));
        let p3 = (i32::from(x3), i32::from(y3));

        let cross = i64::from(p1.0 - p0.0) * i64::from(p2.1 - p0.1)
            - i64::from(p1.1 - p0.1) * i64::from(p2.0 - p0.0);
        if cross >= 0 {
            self.triangle(p0, p1, p2, color);
            self.triangle(p2, p3, p0, color);
        } else {
            self.triangle(p1, p2, p3, color);
            self.triangle(p3, p0, p1, color);
        }
        Ok(())
    }

    /// Midpoint ellipse with horizontal semi-axis `semi_major` and vertical
    /// semi-axis `semi_minor`.
    pub fn draw_ellipse(
        &mut self,
        cx: u16,
        cy: u16,
        semi_major: u16,
        semi_minor: u16,
        fill: bool,
        color: Color,
    ) -> Result {
        self.check_bounds("draw_ellipse", cx, cy, DisplayError::ShapeScreenBounds)?;
        let (cx, cy) = (i32::from(cx), i32::from(cy));
        if semi_major == 0 && semi_minor == 0 {
            // neither region advances without a radius
            self.ellipse_step(cx, cy, 0, 0, fill, color);
            return Ok(());
        }
        let a = i64::from(semi_major);
        let b = i64::from(semi_minor);
        let two_a2 = 2 * a * a;
        let two_b2 = 2 * b * b;

        // region 1: x shrinks slower than y grows
        let (mut x, mut y) = (a, 0i64);
        let mut delta_x = b * b * (1 - 2 * a);
        let mut delta_y = a * a;
        let mut decision = 0i64;
        let mut stop_x = two_b2 * a;
        let mut stop_y = 0i64;
        while stop_x >= stop_y {
            self.ellipse_step(cx, cy, x as i32, y as i32, fill, color);
            y += 1;
            stop_y += two_a2;
            decision += delta_y;
            delta_y += two_a2;
            if 2 * decision + delta_x > 0 {
                x -= 1;
                stop_x -= two_b2;
                decision += delta_x;
                delta_x += two_b2;
            }
        }

        // region 2: y shrinks faster than x grows
        let (mut x, mut y) = (0i64, b);
        let mut delta_x = b * b;
        let mut delta_y = a * a * (1 - 2 * b);
        let mut decision = 0i64;
        let mut stop_x = 0i64;
        let mut stop_y = two_a2 * b;
        while stop_x <= stop_y {
            self.ellipse_step(cx, cy, x as i32, y as i32, fill, color);
            x += 1;
            stop_x += two_b2;
            decision += delta_x;
            delta_x += two_b2;
            if 2 * decision + delta_y > 0 {
                y -= 1;
                stop_y -= two_a2;
                decision += delta_y;
                delta_y += two_a2;
            }
        }
        Ok(())
    }

    fn ellipse_step(&mut self, cx: i32, cy: i32, x: i32, y: i32, fill: bool, color: Color) {
        if fill {
            self.hspan(cx - x, cy + y, 2 * x + 1, color);
            if y != 0 {
                self.hspan(cx - x, cy - y, 2 * x + 1, color);
            }
            return;
        }
        self.plot(cx + x, cy + y, color);
        if x != 0 {
            self.plot(cx - x, cy + y, color);
        }
        if y != 0 {
            self.plot(cx + x, cy - y, color);
        }
        if x != 0 && y != 0 {
            self.plot(cx - x, cy - y, color);
        }
    }

    /// Thick arc from `start` to `end`, in units of the configured
    /// [`ArcConfig::angle_max`], between radius `radius - thickness` and
    /// `radius`. A zero radius or thickness is treated as 1 and the
    /// thickness never exceeds the radius.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        cx: u16,
        cy: u16,
        radius: u16,
        thickness: u16,
        start: f32,
        end: f32,
        color: Color,
    ) -> Result {
        self.check_bounds("draw_arc", cx, cy, DisplayError::ShapeScreenBounds)?;
        let radius = radius.max(1);
        let thickness = thickness.max(1).min(radius);
        let max = self.arc.angle_max;

        let (start, end) = if start == 0.0 && end == max {
            (0.0, max)
        } else {
            let shift = self.arc.angle_offset as f32 / 360.0 * max;
            (start + shift, end + shift)
        };
        let start = normalize_degrees(start / max * 360.0);
        let end = normalize_degrees(end / max * 360.0);

        let (cx, cy) = (i32::from(cx), i32::from(cy));
        let (radius, thickness) = (i32::from(radius), i32::from(thickness));
        if start > end {
            // wraps past zero
            self.arc_sector(cx, cy, radius, thickness, start, 360.0, color);
            self.arc_sector(cx, cy, radius, thickness, 0.0, end, color);
        } else {
            self.arc_sector(cx, cy, radius, thickness, start, end, color);
        }
        Ok(())
    }

    /// Scans the sector's bounding box column by column and emits at most
    /// two vertical runs per column. Angles are degrees with
    /// `0 <= start <= end <= 360`.
    #[allow(clippy::too_many_arguments)]
    fn arc_sector(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        thickness: i32,
        start: f32,
        end: f32,
        color: Color,
    ) {
        let (cos_start, sin_start) = (cos_deg(start), sin_deg(start));
        let (cos_end, sin_end) = (cos_deg(end), sin_deg(end));

        let mut bounds = Bounds::empty();
        for r in [radius as f32, (radius - thickness) as f32] {
            bounds.include(r * cos_start, r * sin_start);
            bounds.include(r * cos_end, r * sin_end);
        }
        if start < 90.0 && end > 90.0 {
            bounds.max_y = radius;
        }
        if start < 180.0 && end > 180.0 {
            bounds.min_x = -radius;
        }
        if start < 270.0 && end > 270.0 {
            bounds.min_y = -radius;
        }

        let start_slope = cos_start / sin_start;
        let end_slope = if end == 360.0 {
            FULL_TURN_END_SLOPE
        } else {
            cos_end / sin_end
        };
        let inner2 = i64::from(radius - thickness) * i64::from(radius - thickness);
        let outer2 = i64::from(radius) * i64::from(radius);

        let inside = |x: i32, y: i32| -> bool {
            let d2 = i64::from(x) * i64::from(x) + i64::from(y) * i64::from(y);
            if d2 >= outer2 || d2 < inner2 {
                return false;
            }
            if d2 == 0 {
                // apex of a sector with no inner radius
                return true;
            }
            let (xf, yf) = (x as f32, y as f32);
            let after_start = (y > 0 && start < 180.0 && xf <= yf * start_slope)
                || (y < 0 && start > 180.0 && xf >= yf * start_slope)
                || (y < 0 && start <= 180.0)
                || (y == 0 && start <= 180.0 && x < 0)
                || (y == 0 && start == 0.0 && x > 0);
            let before_end = (y > 0 && end < 180.0 && xf >= yf * end_slope)
                || (y < 0 && end > 180.0 && xf <= yf * end_slope)
                || (y > 0 && end >= 180.0)
                || (y == 0 && end >= 180.0 && x < 0)
                || (y == 0 && start == 0.0 && x > 0);
            after_start && before_end
        };

        let (min_y, max_y) = (bounds.min_y, bounds.max_y);
        for x in bounds.min_x..=bounds.max_x {
            let mut first_found = false;
            let mut first_closed = false;
            let mut second_found = false;
            let mut second_open = false;
            let mut first_start = 0;
            let mut first_end = 0;
            let mut second_start = 0;

            let mut y = min_y;
            while y <= max_y {
                if inside(x, y) {
                    if !first_found {
                        first_found = true;
                        first_start = y;
                    } else if first_closed && !second_found {
                        second_found = true;
                        second_start = y;
                        // the second run mirrors the first one's length
                        y += first_end - first_start - 1;
                        if y > max_y - 1 {
                            y = second_start;
                            second_open = true;
                        }
                    } else if second_found && !second_open {
                        second_open = true;
                    }
                } else if first_found && !first_closed {
                    first_closed = true;
                    first_end = y - 1;
                    self.vspan(cx + x, cy + first_start, y - first_start, color);
                    if y < 0 {
                        // jump to the mirrored half
                        y = y.abs();
                    } else {
                        break;
                    }
                } else if second_found {
                    if second_open {
                        self.vspan(cx + x, cy + second_start, y - second_start, color);
                        second_open = false;
                        break;
                    }
                    y = second_start;
                    second_open = true;
                }
                y += 1;
            }

            if first_found && !first_closed {
                self.vspan(cx + x, cy + first_start, max_y - first_start + 1, color);
            } else if second_found && second_open {
                self.vspan(cx + x, cy + second_start, max_y - second_start + 1, color);
            }
        }
    }
}
