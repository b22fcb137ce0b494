//! RGB565 color representation and conversions
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// 16-bit packed pixel: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const ORANGE: Color = Color(0xFD20);
    pub const GRAY: Color = Color(0x8410);
    pub const DARK_GRAY: Color = Color(0x4208);
    pub const LIGHT_GRAY: Color = Color(0xC618);

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Truncates 8-bit channels down to 5/6/5 bits.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// Expands an 8-bit RRRGGGBB pixel to RGB565.
    ///
    /// Each channel is scaled to the 0..=255 range with integer arithmetic and
    /// then shifted down to its 565 width.
    pub const fn from_rrrgggbb(value: u8) -> Self {
        let red = ((value >> 5) & 0x07) as u16;
        let green = ((value >> 2) & 0x07) as u16;
        let blue = (value & 0x03) as u16;
        let red = (red * 255 / 7) >> 3;
        let green = (green * 255 / 7) >> 2;
        let blue = (blue * 255 / 3) >> 3;
        Self((red << 11) | (green << 5) | blue)
    }

    /// Wire order: high byte first.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(RawU16::new(self.0))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(color.into_storage())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        color.to_rgb565()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}
