//! Test doubles shared by the integration tests
#![allow(dead_code)]

use display16::hal::{ClockDivider, SpiSettings};
use display16::{
    BusConfig, Color, Display, DisplayConfig, Hal, Level, MipiPanel, Pin, RenderMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(Pin, Level),
    Transfer(u8),
    Begin(SpiSettings),
    End,
    Divider(ClockDivider),
    DelayUs(u32),
}

/// A byte as it appeared on the wire, with the DC line state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireByte {
    pub data: bool,
    pub value: u8,
}

/// Records every HAL call and reconstructs wire bytes, including bytes
/// clocked out on the emulated bus (sampled on SCLK rising edges).
#[derive(Debug)]
pub struct RecordingHal {
    pub events: Vec<Event>,
    pub wire: Vec<WireByte>,
    pub transactions: bool,
    pub bytes_outside_cs: usize,
    dc: Level,
    cs: Level,
    sclk: Level,
    sdata: Level,
    shift: u8,
    bits: u8,
}

impl Default for RecordingHal {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            wire: Vec::new(),
            transactions: true,
            bytes_outside_cs: 0,
            dc: Level::High,
            cs: Level::High,
            sclk: Level::Low,
            sdata: Level::Low,
            shift: 0,
            bits: 0,
        }
    }
}

impl RecordingHal {
    pub fn without_transactions() -> Self {
        Self {
            transactions: false,
            ..Self::default()
        }
    }

    fn push_byte(&mut self, value: u8) {
        if self.cs != Level::Low {
            self.bytes_outside_cs += 1;
        }
        self.wire.push(WireByte {
            data: self.dc == Level::High,
            value,
        });
    }

    pub fn count(&self, wanted: Event) -> usize {
        self.events.iter().filter(|&&e| e == wanted).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.wire.clear();
    }
}

impl Hal for RecordingHal {
    fn set_pin(&mut self, pin: Pin, level: Level) {
        self.events.push(Event::Pin(pin, level));
        match pin {
            Pin::Dc => self.dc = level,
            Pin::Cs => self.cs = level,
            Pin::Sdata => self.sdata = level,
            Pin::Sclk => {
                if self.sclk == Level::Low && level == Level::High {
                    self.shift = (self.shift << 1) | u8::from(self.sdata == Level::High);
                    self.bits += 1;
                    if self.bits == 8 {
                        let byte = self.shift;
                        self.bits = 0;
                        self.shift = 0;
                        self.push_byte(byte);
                    }
                }
                self.sclk = level;
            }
            Pin::Rst => {}
        }
    }

    fn spi_transfer(&mut self, byte: u8) {
        self.events.push(Event::Transfer(byte));
        self.push_byte(byte);
    }

    fn supports_transactions(&self) -> bool {
        self.transactions
    }

    fn begin_transaction(&mut self, settings: SpiSettings) {
        self.events.push(Event::Begin(settings));
    }

    fn end_transaction(&mut self) {
        self.events.push(Event::End);
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) {
        self.events.push(Event::Divider(divider));
    }

    fn delay_us(&mut self, us: u32) {
        self.events.push(Event::DelayUs(us));
    }
}

const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;

/// Controller model that replays a recorded MIPI command/data stream into
/// RGB565 pixels.
#[derive(Debug)]
pub struct VirtualSurface {
    pub width: u16,
    pub height: u16,
    pixels: Vec<u16>,
    window: (u16, u16, u16, u16),
    cursor: (u16, u16),
    command: Option<u8>,
    args: Vec<u8>,
    high: Option<u8>,
}

impl VirtualSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; usize::from(width) * usize::from(height)],
            window: (0, 0, width - 1, height - 1),
            cursor: (0, 0),
            command: None,
            args: Vec::new(),
            high: None,
        }
    }

    pub fn replay(width: u16, height: u16, wire: &[WireByte]) -> Self {
        let mut surface = Self::new(width, height);
        for byte in wire {
            surface.feed(*byte);
        }
        surface
    }

    pub fn feed(&mut self, byte: WireByte) {
        if !byte.data {
            self.command = Some(byte.value);
            self.args.clear();
            self.high = None;
            if byte.value == RAMWR {
                self.cursor = (self.window.0, self.window.1);
            }
            return;
        }
        match self.command {
            Some(CASET) | Some(RASET) => {
                self.args.push(byte.value);
                if self.args.len() == 4 {
                    let start = u16::from_be_bytes([self.args[0], self.args[1]]);
                    let end = u16::from_be_bytes([self.args[2], self.args[3]]);
                    if self.command == Some(CASET) {
                        self.window.0 = start;
                        self.window.2 = end;
                    } else {
                        self.window.1 = start;
                        self.window.3 = end;
                    }
                }
            }
            Some(RAMWR) => match self.high.take() {
                None => self.high = Some(byte.value),
                Some(high) => self.push(u16::from_be_bytes([high, byte.value])),
            },
            _ => {}
        }
    }

    fn push(&mut self, value: u16) {
        let (x, y) = self.cursor;
        if x < self.width && y < self.height {
            self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)] = value;
        }
        let (x0, y0, x1, y1) = self.window;
        if x >= x1 {
            self.cursor.0 = x0;
            self.cursor.1 = if y >= y1 { y0 } else { y + 1 };
        } else {
            self.cursor.0 = x + 1;
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> Color {
        Color(self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)])
    }

    /// Same layout as the frame buffer: row-major, high byte first.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
    }
}

pub type TestDisplay = Display<'static, RecordingHal, MipiPanel>;

pub fn direct(width: u16, height: u16) -> TestDisplay {
    Display::new(
        RecordingHal::default(),
        MipiPanel::new(),
        DisplayConfig::new(width, height),
    )
}

pub fn bit_banged(width: u16, height: u16) -> TestDisplay {
    let config = DisplayConfig::new(width, height).with_bus(BusConfig::bit_banged(0));
    Display::new(RecordingHal::default(), MipiPanel::new(), config)
}

/// Buffered display with the frame buffer already allocated.
pub fn buffered(width: u16, height: u16) -> TestDisplay {
    let config = DisplayConfig::new(width, height).with_mode(RenderMode::Buffered);
    let mut display = Display::new(RecordingHal::default(), MipiPanel::new(), config);
    display.set_buffer().expect("frame buffer allocation");
    display
}

/// Replays everything a direct-mode display has sent so far.
pub fn surface_of(display: &TestDisplay) -> VirtualSurface {
    VirtualSurface::replay(display.width(), display.height(), &display.hal().wire)
}

/// Pixels of a buffered display equal to `color`.
pub fn count_color(display: &TestDisplay, color: Color) -> usize {
    let fb = display.frame_buffer();
    (0..display.height())
        .flat_map(|y| (0..display.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.pixel(x, y) == Some(color))
        .count()
}

pub fn lit(display: &TestDisplay, x: u16, y: u16) -> bool {
    display.frame_buffer().pixel(x, y) != Some(Color::BLACK)
}
