//! Controller address-window programming
use log::trace;

use super::{Bus, Hal};

/// MIPI DCS commands shared by most 16-bit serial TFT controllers
mod cmd {
    pub const CASET: u8 = 0x2A; // Column address set
    pub const RASET: u8 = 0x2B; // Row address set
    pub const RAMWR: u8 = 0x2C; // Memory write
}

/// Device-specific half of the transfer: selects the rectangle that the next
/// streamed pixel bytes fill.
pub trait Panel {
    /// `x1`/`y1` are inclusive.
    fn set_addr_window<H: Hal>(&mut self, bus: &mut Bus<H>, x0: u16, y0: u16, x1: u16, y1: u16);
}

/// Column/row address set followed by memory write, with optional RAM offsets
/// for panels whose visible area does not start at controller RAM origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MipiPanel {
    pub col_offset: u16,
    pub row_offset: u16,
}

impl MipiPanel {
    pub const fn new() -> Self {
        Self {
            col_offset: 0,
            row_offset: 0,
        }
    }

    pub const fn with_offsets(col_offset: u16, row_offset: u16) -> Self {
        Self {
            col_offset,
            row_offset,
        }
    }
}

fn range_bytes(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

impl Panel for MipiPanel {
    fn set_addr_window<H: Hal>(&mut self, bus: &mut Bus<H>, x0: u16, y0: u16, x1: u16, y1: u16) {
        trace!("panel: window ({}, {}) - ({}, {})", x0, y0, x1, y1);
        let cols = range_bytes(
            x0.wrapping_add(self.col_offset),
            x1.wrapping_add(self.col_offset),
        );
        let rows = range_bytes(
            y0.wrapping_add(self.row_offset),
            y1.wrapping_add(self.row_offset),
        );
        bus.write_command(cmd::CASET);
        bus.write_data_buffer(&cols);
        bus.write_command(cmd::RASET);
        bus.write_data_buffer(&rows);
        bus.write_command(cmd::RAMWR);
    }
}
