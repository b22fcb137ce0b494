//! Rasterization and frame-buffer transfer core for 16-bit (RGB565) serial
//! TFT display controllers.
//!
//! ```text
//!   Display ── primitives / advanced / bitmap / text
//!      │
//!      ├── Direct ──── Panel (address window) ── Bus ── Hal (pins, SPI, delays)
//!      └── FrameBuffer (in memory, flushed with write_buffer)
//! ```
//!
//! The crate is `no_std` and needs `alloc` for the frame buffer and row
//! buffers. Diagnostics go through the `log` facade.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod color;
pub mod config;
pub mod fonts;
pub mod framebuffer;
pub mod graphics;
pub mod hal;
pub mod status;
pub mod transfer;

pub use color::Color;
pub use config::{BusConfig, DisplayConfig, FlushMode, RenderMode};
pub use fonts::{Font, Glyph, FONT_DEFAULT};
pub use framebuffer::FrameBuffer;
#[cfg(feature = "advanced-graphics")]
pub use graphics::ArcConfig;
pub use graphics::{CharMode, Display};
pub use hal::{Bus, Hal, Level, MipiPanel, Panel, Pin};
pub use status::{DisplayError, Result};
