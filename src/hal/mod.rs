//! # Hardware Abstraction
//!
//! The rasterizer never touches registers directly. Everything it needs from
//! the board is expressed by the [`Hal`] trait, injected at construction:
//!
//! - digital outputs for the display control lines ([`Pin`])
//! - a hardware byte transfer with optional transaction negotiation
//! - microsecond / millisecond delays
//!
//! On top of it, [`Bus`] implements the serial transfer protocol (command vs
//! data selection, chip-select framing, bit-banged or hardware bytes) and
//! [`Panel`] programs the controller's address window.
//!
//! ## Pin Roles
//!
//! | Pin     | Function                       |
//! |---------|--------------------------------|
//! | `Dc`    | Data (high) / Command (low)    |
//! | `Rst`   | Reset, active low (board init) |
//! | `Cs`    | Chip select, active low        |
//! | `Sclk`  | Emulated bus clock             |
//! | `Sdata` | Emulated bus data              |

pub mod bus;
pub mod panel;

pub use bus::Bus;
pub use panel::{MipiPanel, Panel};

/// Control lines driven by the transfer protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Data/Command select
    Dc,
    /// Reset. Never driven by the core; board init pulses it before the
    /// controller's power-on sequence.
    Rst,
    /// Chip select
    Cs,
    /// Clock line of the bit-banged bus
    Sclk,
    /// Data line of the bit-banged bus
    Sdata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Clock polarity / phase combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

/// Transfer configuration negotiated at the start of every hardware transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiSettings {
    pub clock_hz: u32,
    pub bit_order: BitOrder,
    pub mode: SpiMode,
}

impl SpiSettings {
    pub const fn new(clock_hz: u32) -> Self {
        Self {
            clock_hz,
            bit_order: BitOrder::MsbFirst,
            mode: SpiMode::Mode0,
        }
    }
}

/// Fixed clock dividers used when the runtime cannot negotiate transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockDivider {
    Div2 = 2,
    Div4 = 4,
    Div8 = 8,
    Div16 = 16,
    Div32 = 32,
    Div64 = 64,
    Div128 = 128,
}

/// Board support consumed by the display core.
///
/// Implementations are expected to be infallible: a pin write or byte
/// transfer that cannot fail on the target is the common case for
/// memory-mapped GPIO and SPI peripherals.
pub trait Hal {
    fn set_pin(&mut self, pin: Pin, level: Level);

    /// Clocks one byte out of the hardware serial peripheral.
    fn spi_transfer(&mut self, byte: u8);

    /// Whether [`Hal::begin_transaction`] is available on this runtime.
    fn supports_transactions(&self) -> bool {
        true
    }

    fn begin_transaction(&mut self, _settings: SpiSettings) {}

    fn end_transaction(&mut self) {}

    /// Fallback clock configuration for runtimes without transactions.
    fn set_clock_divider(&mut self, _divider: ClockDivider) {}

    fn delay_us(&mut self, us: u32);

    /// Long waits for board init (reset pulse, sleep-out). The core itself
    /// only waits in microseconds.
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}

impl<T: Hal + ?Sized> Hal for &mut T {
    fn set_pin(&mut self, pin: Pin, level: Level) {
        (**self).set_pin(pin, level)
    }

    fn spi_transfer(&mut self, byte: u8) {
        (**self).spi_transfer(byte)
    }

    fn supports_transactions(&self) -> bool {
        (**self).supports_transactions()
    }

    fn begin_transaction(&mut self, settings: SpiSettings) {
        (**self).begin_transaction(settings)
    }

    fn end_transaction(&mut self) {
        (**self).end_transaction()
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) {
        (**self).set_clock_divider(divider)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
