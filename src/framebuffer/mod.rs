//! # Frame Buffer
//!
//! Full-screen pixel store used by buffered rendering.
//!
//! ## Layout
//!
//! - `width * height * 2` bytes, row-major
//! - two bytes per pixel, RGB565 high byte first (the device wire order)
//!
//! ## Lifecycle
//!
//! 1. `set_buffer()` allocates the store, zeroed when newly allocated
//! 2. drawing calls write into it while the display is in buffered mode
//! 3. `write_buffer()` streams it to the device, whole or row by row
//! 4. `destroy_buffer()` releases the allocation
//!
//! Writes issued while the store is empty are dropped.

pub mod framebuffer;

pub use framebuffer::FrameBuffer;
