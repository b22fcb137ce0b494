//! Serial transfer protocol on top of a [`Hal`]
use log::trace;

use super::{ClockDivider, Hal, Level, Pin, SpiSettings};
use crate::config::BusConfig;

/// Fallback divider when the runtime cannot negotiate a transaction.
const FALLBACK_DIVIDER: ClockDivider = ClockDivider::Div8;

/// Owns the HAL and frames every transfer in a chip-select transaction.
pub struct Bus<H: Hal> {
    hal: H,
    config: BusConfig,
}

impl<H: Hal> Bus<H> {
    pub fn new(hal: H, config: BusConfig) -> Self {
        Self { hal, config }
    }

    pub fn config(&self) -> BusConfig {
        self.config
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    pub fn release(self) -> H {
        self.hal
    }

    /// Runs `f` between a transaction start and end.
    ///
    /// The closure cannot return early past the end call, so every started
    /// transaction is closed.
    pub fn transaction<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.start_transaction();
        let result = f(self);
        self.end_transaction();
        result
    }

    fn start_transaction(&mut self) {
        if self.config.hardware {
            if self.hal.supports_transactions() {
                self.hal
                    .begin_transaction(SpiSettings::new(self.config.clock_hz));
            } else {
                self.hal.set_clock_divider(FALLBACK_DIVIDER);
            }
        }
        self.hal.set_pin(Pin::Cs, Level::Low);
    }

    fn end_transaction(&mut self) {
        self.hal.set_pin(Pin::Cs, Level::High);
        if self.config.hardware && self.hal.supports_transactions() {
            self.hal.end_transaction();
        }
    }

    /// Writes one byte inside an already open transaction.
    pub fn write_byte(&mut self, byte: u8) {
        if self.config.hardware {
            self.hal.spi_transfer(byte);
        } else {
            self.write_byte_bit_banged(byte);
        }
    }

    fn write_byte_bit_banged(&mut self, mut byte: u8) {
        let delay = u32::from(self.config.bit_bang_delay_us);
        for _ in 0..8 {
            self.hal.set_pin(Pin::Sdata, Level::Low);
            if byte & 0x80 != 0 {
                self.hal.set_pin(Pin::Sdata, Level::High);
            }
            self.hal.set_pin(Pin::Sclk, Level::High);
            if delay > 0 {
                self.hal.delay_us(delay);
            }
            byte <<= 1;
            self.hal.set_pin(Pin::Sclk, Level::Low);
            if delay > 0 {
                self.hal.delay_us(delay);
            }
        }
    }

    pub fn write_command(&mut self, command: u8) {
        trace!("bus: command {:#04x}", command);
        self.hal.set_pin(Pin::Dc, Level::Low);
        self.transaction(|bus| bus.write_byte(command));
    }

    pub fn write_data(&mut self, data: u8) {
        self.hal.set_pin(Pin::Dc, Level::High);
        self.transaction(|bus| bus.write_byte(data));
    }

    /// Streams a block of data bytes in one transaction.
    pub fn write_data_buffer(&mut self, data: &[u8]) {
        self.hal.set_pin(Pin::Dc, Level::High);
        self.transaction(|bus| {
            for &byte in data {
                bus.write_byte(byte);
            }
        });
    }

    /// Streams `count` copies of a two-byte pixel in one transaction.
    pub fn write_repeated(&mut self, pixel: [u8; 2], count: u32) {
        self.hal.set_pin(Pin::Dc, Level::High);
        self.transaction(|bus| {
            for _ in 0..count {
                bus.write_byte(pixel[0]);
                bus.write_byte(pixel[1]);
            }
        });
    }
}
