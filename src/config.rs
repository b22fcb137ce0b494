//! Construction-time configuration of a display instance

/// Where rasterized pixels go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every primitive opens an address window on the device and streams to it
    #[default]
    Direct,
    /// Primitives write into the in-memory frame buffer; `write_buffer` flushes it
    Buffered,
}

/// How `write_buffer` streams the frame buffer to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushMode {
    /// One address window covering the whole surface, one transfer
    #[default]
    Whole,
    /// One address window and transfer per row, for controllers that cannot
    /// take a whole-screen window in a single pass
    RowByRow,
}

/// Transfer-mode flags. Not mutated while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Hardware serial peripheral (true) or bit-banged emulation (false)
    pub hardware: bool,
    /// Clock requested when a hardware transaction is negotiated
    pub clock_hz: u32,
    /// Delay per half clock cycle of the emulated bus, 0 for none
    pub bit_bang_delay_us: u16,
}

impl BusConfig {
    pub const DEFAULT_CLOCK_HZ: u32 = 8_000_000;

    pub const fn hardware(clock_hz: u32) -> Self {
        Self {
            hardware: true,
            clock_hz,
            bit_bang_delay_us: 0,
        }
    }

    pub const fn bit_banged(delay_us: u16) -> Self {
        Self {
            hardware: false,
            clock_hz: Self::DEFAULT_CLOCK_HZ,
            bit_bang_delay_us: delay_us,
        }
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::hardware(Self::DEFAULT_CLOCK_HZ)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
    pub mode: RenderMode,
    pub bus: BusConfig,
}

impl DisplayConfig {
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            mode: RenderMode::Direct,
            bus: BusConfig::hardware(BusConfig::DEFAULT_CLOCK_HZ),
        }
    }

    pub const fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_bus(mut self, bus: BusConfig) -> Self {
        self.bus = bus;
        self
    }
}
