use core::fmt;

/// Failure outcome of a drawing, font or buffer operation.
///
/// Discriminants are the numeric status codes used on the wire by callers
/// that log or forward them; `Ok(())` stands for code 0 (success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisplayError {
    /// Font table header or glyph data is malformed
    WrongFont = 2,
    /// Character origin lies outside the surface
    CharScreenBounds = 3,
    /// Character code is not covered by the active font
    CharFontAsciiRange = 4,
    /// Bitmap origin lies outside the surface
    BitmapScreenBounds = 9,
    /// 1-bit bitmap width is not a multiple of 8
    BitmapHorizontalSize = 12,
    /// Bitmap data is shorter than its declared dimensions
    BitmapSize = 13,
    /// Frame buffer has not been allocated
    BufferEmpty = 16,
    /// Shape anchor lies outside the surface
    ShapeScreenBounds = 17,
    /// Bitmap data slice is empty
    BitmapDataEmpty = 19,
    /// Invalid parameter (e.g. polygon side count)
    GenericError = 20,
    /// Font data slice is empty
    FontDataEmpty = 21,
    /// Frame buffer allocation failed
    MemoryAError = 22,
}

/// Result of every fallible operation in this crate.
pub type Result<T = ()> = core::result::Result<T, DisplayError>;

impl DisplayError {
    /// Numeric status code of this error.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the error rejected an anchor outside the surface.
    pub fn is_bounds(self) -> bool {
        matches!(
            self,
            DisplayError::CharScreenBounds
                | DisplayError::BitmapScreenBounds
                | DisplayError::ShapeScreenBounds
        )
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::WrongFont => write!(f, "font table is malformed"),
            DisplayError::CharScreenBounds => write!(f, "character is out of screen bounds"),
            DisplayError::CharFontAsciiRange => write!(f, "character is outside the font range"),
            DisplayError::BitmapScreenBounds => write!(f, "bitmap is out of screen bounds"),
            DisplayError::BitmapHorizontalSize => write!(f, "bitmap width must be divisible by 8"),
            DisplayError::BitmapSize => write!(f, "bitmap data is smaller than its dimensions"),
            DisplayError::BufferEmpty => write!(f, "frame buffer is empty"),
            DisplayError::ShapeScreenBounds => write!(f, "shape is out of screen bounds"),
            DisplayError::BitmapDataEmpty => write!(f, "bitmap data is empty"),
            DisplayError::GenericError => write!(f, "invalid parameter"),
            DisplayError::FontDataEmpty => write!(f, "font data is empty"),
            DisplayError::MemoryAError => write!(f, "frame buffer allocation failed"),
        }
    }
}

impl core::error::Error for DisplayError {}
