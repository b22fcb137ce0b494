//! Glyph rendering, cursor state and stream output
use core::fmt;

use alloc::vec::Vec;
use log::warn;

use super::Display;
use crate::color::Color;
use crate::fonts::Font;
use crate::hal::{Hal, Panel};
use crate::status::{DisplayError, Result};

/// Upper bound on characters drawn by one `write_char_string` call.
const MAX_STRING_CHARS: usize = 250;

/// How `write_char` emits a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharMode {
    /// One pixel write per glyph pixel
    Pixel,
    /// Whole glyph assembled in memory, then one windowed transfer
    #[default]
    Buffer,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct TextState {
    cursor_x: u16,
    cursor_y: u16,
    wrap: bool,
    fg: Color,
    bg: Color,
    char_mode: CharMode,
    write_error: Option<DisplayError>,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            wrap: true,
            fg: Color::WHITE,
            bg: Color::BLACK,
            char_mode: CharMode::default(),
            write_error: None,
        }
    }
}

fn to_coord(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

impl<'a, H: Hal, P: Panel> Display<'a, H, P> {
    /// Selects a glyph table. The invert flag is reset.
    pub fn set_font(&mut self, data: &'a [u8]) -> Result {
        self.font = Font::new(data)?;
        Ok(())
    }

    pub fn font(&self) -> &Font<'a> {
        &self.font
    }

    /// Swaps foreground and background when drawing glyphs.
    pub fn set_font_inverted(&mut self, inverted: bool) {
        self.font.set_inverted(inverted);
    }

    pub fn font_inverted(&self) -> bool {
        self.font.inverted()
    }

    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.text.cursor_x = x;
        self.text.cursor_y = y;
    }

    pub fn cursor(&self) -> (u16, u16) {
        (self.text.cursor_x, self.text.cursor_y)
    }

    /// Same color for foreground and background.
    pub fn set_text_color(&mut self, color: Color) {
        self.text.fg = color;
        self.text.bg = color;
    }

    pub fn set_text_colors(&mut self, fg: Color, bg: Color) {
        self.text.fg = fg;
        self.text.bg = bg;
    }

    /// `(foreground, background)`
    pub fn text_colors(&self) -> (Color, Color) {
        (self.text.fg, self.text.bg)
    }

    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.text.wrap = wrap;
    }

    pub fn text_wrap(&self) -> bool {
        self.text.wrap
    }

    pub fn set_char_mode(&mut self, mode: CharMode) {
        self.text.char_mode = mode;
    }

    pub fn char_mode(&self) -> CharMode {
        self.text.char_mode
    }

    /// Error of the latest failed [`Display::write_byte`] since the last clear.
    pub fn write_error(&self) -> Option<DisplayError> {
        self.text.write_error
    }

    pub fn clear_write_error(&mut self) {
        self.text.write_error = None;
    }

    /// Draws one character cell with its top-left corner at `(x, y)`.
    pub fn write_char(&mut self, x: u16, y: u16, ch: u8) -> Result {
        self.check_bounds("write_char", x, y, DisplayError::CharScreenBounds)?;
        let Some(glyph) = self.font.glyph(ch) else {
            warn!("write_char: {:#04x} is outside the font range", ch);
            return Err(DisplayError::CharFontAsciiRange);
        };
        let (fg, bg) = if self.font.inverted() {
            (self.text.bg, self.text.fg)
        } else {
            (self.text.fg, self.text.bg)
        };
        let gw = u16::from(glyph.width());
        let gh = u16::from(glyph.height());

        match self.text.char_mode {
            CharMode::Pixel => {
                for cy in 0..gh {
                    for cx in 0..gw {
                        let color = if glyph.is_set(cx, cy) { fg } else { bg };
                        let (px, py) = (i32::from(x) + i32::from(cx), i32::from(y) + i32::from(cy));
                        self.plot(px, py, color);
                    }
                }
            }
            CharMode::Buffer => {
                let cols = Self::clamp_span(x, gw, self.width);
                let rows = Self::clamp_span(y, gh, self.height);
                let mut cell = Vec::with_capacity(usize::from(cols) * usize::from(rows) * 2);
                for cy in 0..rows {
                    for cx in 0..cols {
                        let color = if glyph.is_set(cx, cy) { fg } else { bg };
                        cell.extend_from_slice(&color.to_be_bytes());
                    }
                }
                self.with_backend(|backend| {
                    backend.set_window(x, y, x + cols - 1, y + rows - 1);
                    backend.write_pixels(&cell);
                });
            }
        }
        Ok(())
    }

    /// Draws `text` starting at `(x, y)`, wrapping to `x = 0` one cell lower
    /// when the next glyph would run past the right edge. Stops at a NUL
    /// byte, after 250 characters, or at the first failing character.
    pub fn write_char_string(&mut self, x: u16, y: u16, text: &str) -> Result {
        let fw = i32::from(self.font.width());
        let fh = i32::from(self.font.height());
        let limit = i32::from(self.width) - fw;
        let (mut x, mut y) = (i32::from(x), i32::from(y));
        let mut count = 0;

        for &byte in text.as_bytes().iter().take(MAX_STRING_CHARS) {
            if byte == 0 {
                break;
            }
            if x + count * fw > limit {
                y += fh;
                x = 0;
                count = 0;
            }
            self.write_char(to_coord(x + count * fw), to_coord(y), byte)?;
            count += 1;
        }
        Ok(())
    }

    /// Stream output at the cursor. `\n` moves to the start of the next
    /// line, `\r` is ignored. A failed glyph sets the sticky write error and
    /// leaves the cursor in place.
    pub fn write_byte(&mut self, byte: u8) -> Result {
        let fw = self.font.width();
        let fh = self.font.height();
        match byte {
            b'\n' => {
                self.text.cursor_y = self.text.cursor_y.saturating_add(u16::from(fh));
                self.text.cursor_x = 0;
            }
            b'\r' => {}
            _ => {
                if let Err(error) = self.write_char(self.text.cursor_x, self.text.cursor_y, byte) {
                    self.text.write_error = Some(error);
                    return Err(error);
                }
                self.text.cursor_x = self.text.cursor_x.saturating_add(u16::from(fw));
                if self.text.wrap
                    && i32::from(self.text.cursor_x) > i32::from(self.width) - i32::from(fw)
                {
                    self.text.cursor_y = self.text.cursor_y.saturating_add(u16::from(fh));
                    self.text.cursor_x = 0;
                }
            }
        }
        Ok(())
    }
}

impl<H: Hal, P: Panel> fmt::Write for Display<'_, H, P> {
    /// Every byte is attempted; a failed glyph only skips itself. The error
    /// is reported once the whole string has been written.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut failed = false;
        for byte in s.bytes() {
            failed |= self.write_byte(byte).is_err();
        }
        if failed {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}
