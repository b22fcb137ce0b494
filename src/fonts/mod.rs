//! # Fonts
//!
//! Glyph tables are borrowed, read-only byte slices. The first four bytes
//! form the header:
//!
//! | Byte | Meaning                          |
//! |------|----------------------------------|
//! | 0    | cell width in pixels             |
//! | 1    | cell height in pixels            |
//! | 2    | code of the first glyph (offset) |
//! | 3    | glyph count minus one            |
//!
//! Glyph bitmaps follow back to back. Each glyph is stored row by row, most
//! significant bit leftmost, every row padded to whole bytes, so one glyph
//! occupies `ceil(width / 8) * height` bytes.

mod default;

pub use default::FONT_DEFAULT;

use log::{debug, warn};

use crate::status::{DisplayError, Result};

const HEADER_LEN: usize = 4;

/// Active glyph table plus its derived metrics.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    data: &'a [u8],
    width: u8,
    height: u8,
    offset: u8,
    last: u8,
    inverted: bool,
}

impl<'a> Font<'a> {
    /// Binds a glyph table after checking that the header is sane and that
    /// every glyph it declares is present.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.is_empty() {
            warn!("font: data is empty");
            return Err(DisplayError::FontDataEmpty);
        }
        if data.len() < HEADER_LEN {
            warn!("font: table shorter than its header");
            return Err(DisplayError::WrongFont);
        }
        let font = Self {
            data,
            width: data[0],
            height: data[1],
            offset: data[2],
            last: data[3],
            inverted: false,
        };
        if font.width == 0 || font.height == 0 {
            warn!("font: zero sized cell {}x{}", font.width, font.height);
            return Err(DisplayError::WrongFont);
        }
        let needed = HEADER_LEN + font.glyph_count() * font.glyph_len();
        if data.len() < needed {
            warn!("font: {} bytes, header declares {}", data.len(), needed);
            return Err(DisplayError::WrongFont);
        }
        debug!(
            "font: {}x{} cells, codes {:#04x}..={:#04x}",
            font.width,
            font.height,
            font.offset,
            u16::from(font.offset) + u16::from(font.last)
        );
        Ok(font)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn glyph_count(&self) -> usize {
        usize::from(self.last) + 1
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    fn row_len(&self) -> usize {
        usize::from(self.width).div_ceil(8)
    }

    fn glyph_len(&self) -> usize {
        self.row_len() * usize::from(self.height)
    }

    /// True when `code` lies in `offset..=offset + count - 1`.
    pub fn contains(&self, code: u8) -> bool {
        code >= self.offset && u16::from(code) <= u16::from(self.offset) + u16::from(self.last)
    }

    pub fn glyph(&self, code: u8) -> Option<Glyph<'a>> {
        if !self.contains(code) {
            return None;
        }
        let len = self.glyph_len();
        let start = HEADER_LEN + usize::from(code - self.offset) * len;
        let bits = self.data.get(start..start + len)?;
        Some(Glyph {
            bits,
            width: self.width,
            height: self.height,
            row_len: self.row_len(),
        })
    }
}

impl Default for Font<'static> {
    fn default() -> Self {
        Font {
            data: &FONT_DEFAULT,
            width: FONT_DEFAULT[0],
            height: FONT_DEFAULT[1],
            offset: FONT_DEFAULT[2],
            last: FONT_DEFAULT[3],
            inverted: false,
        }
    }
}

/// Bitmap of a single character cell.
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    bits: &'a [u8],
    width: u8,
    height: u8,
    row_len: usize,
}

impl Glyph<'_> {
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the pixel at column `cx`, row `cy` is lit.
    pub fn is_set(&self, cx: u16, cy: u16) -> bool {
        if cx >= u16::from(self.width) || cy >= u16::from(self.height) {
            return false;
        }
        let index = usize::from(cy) * self.row_len + usize::from(cx / 8);
        self.bits
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (cx % 8)) != 0)
    }
}
