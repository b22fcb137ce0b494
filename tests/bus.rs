mod support;

use display16::hal::{BitOrder, ClockDivider, SpiMode, SpiSettings};
use display16::{
    Bus, BusConfig, Color, Display, DisplayConfig, DisplayError, Hal, Level, MipiPanel, Pin,
};
use support::{bit_banged, direct, Event, RecordingHal, WireByte};

fn command(value: u8) -> WireByte {
    WireByte { data: false, value }
}

fn data(value: u8) -> WireByte {
    WireByte { data: true, value }
}

fn balanced(hal: &RecordingHal) {
    assert_eq!(
        hal.count(Event::Pin(Pin::Cs, Level::Low)),
        hal.count(Event::Pin(Pin::Cs, Level::High))
    );
    assert_eq!(hal.bytes_outside_cs, 0);
}

#[test_log::test]
fn hardware_command_is_framed_by_a_transaction() {
    let mut bus = Bus::new(RecordingHal::default(), BusConfig::default());
    bus.write_command(0x2A);

    let settings = SpiSettings::new(8_000_000);
    assert_eq!(settings.bit_order, BitOrder::MsbFirst);
    assert_eq!(settings.mode, SpiMode::Mode0);
    assert_eq!(
        bus.hal().events,
        vec![
            Event::Pin(Pin::Dc, Level::Low),
            Event::Begin(settings),
            Event::Pin(Pin::Cs, Level::Low),
            Event::Transfer(0x2A),
            Event::Pin(Pin::Cs, Level::High),
            Event::End,
        ]
    );
}

#[test_log::test]
fn data_is_sent_with_dc_high() {
    let mut bus = Bus::new(RecordingHal::default(), BusConfig::default());
    bus.write_data(0x42);
    bus.write_data_buffer(&[1, 2]);
    bus.write_repeated([0x12, 0x34], 2);

    let hal = bus.release();
    assert_eq!(
        hal.wire,
        vec![
            data(0x42),
            data(1),
            data(2),
            data(0x12),
            data(0x34),
            data(0x12),
            data(0x34),
        ]
    );
    assert_eq!(hal.count(Event::Pin(Pin::Cs, Level::Low)), 3);
    balanced(&hal);
}

#[test_log::test]
fn missing_transactions_fall_back_to_divider() {
    let mut bus = Bus::new(RecordingHal::without_transactions(), BusConfig::hardware(4_000_000));
    bus.write_command(0x2C);
    bus.write_data_buffer(&[0xAB, 0xCD]);

    let hal = bus.hal();
    assert_eq!(hal.count(Event::End), 0);
    assert!(!hal.events.iter().any(|e| matches!(e, Event::Begin(_))));
    assert_eq!(hal.count(Event::Divider(ClockDivider::Div8)), 2);
    assert_eq!(hal.wire, vec![command(0x2C), data(0xAB), data(0xCD)]);
    balanced(hal);
}

#[test_log::test]
fn bit_banged_byte_is_clocked_msb_first() {
    let mut bus = Bus::new(RecordingHal::default(), BusConfig::bit_banged(3));
    bus.write_command(0xA5);

    let hal = bus.hal();
    assert_eq!(hal.wire, vec![command(0xA5)]);
    assert_eq!(hal.count(Event::Pin(Pin::Sclk, Level::High)), 8);
    assert_eq!(hal.count(Event::Pin(Pin::Sclk, Level::Low)), 8);
    assert_eq!(hal.count(Event::DelayUs(3)), 16);
    // 0xA5 has four set bits
    assert_eq!(hal.count(Event::Pin(Pin::Sdata, Level::High)), 4);
    assert!(!hal.events.iter().any(|e| matches!(
        e,
        Event::Transfer(_) | Event::Begin(_) | Event::End | Event::Divider(_)
    )));
    balanced(hal);

    let first_bit = [
        Event::Pin(Pin::Sdata, Level::Low),
        Event::Pin(Pin::Sdata, Level::High),
        Event::Pin(Pin::Sclk, Level::High),
        Event::DelayUs(3),
        Event::Pin(Pin::Sclk, Level::Low),
        Event::DelayUs(3),
    ];
    assert_eq!(&hal.events[2..8], &first_bit);
}

#[test_log::test]
fn bit_banged_bus_without_delay_skips_waits() {
    let mut bus = Bus::new(RecordingHal::default(), BusConfig::bit_banged(0));
    bus.write_data_buffer(&[0xFF, 0x00]);
    let hal = bus.hal();
    assert!(!hal.events.iter().any(|e| matches!(e, Event::DelayUs(_))));
    assert_eq!(hal.wire, vec![data(0xFF), data(0x00)]);
}

#[test_log::test]
fn pixel_programs_a_one_pixel_window() {
    let mut display = direct(16, 16);
    display.draw_pixel(3, 4, Color::RED).unwrap();
    assert_eq!(
        display.hal().wire,
        vec![
            command(0x2A),
            data(0),
            data(3),
            data(0),
            data(3),
            command(0x2B),
            data(0),
            data(4),
            data(0),
            data(4),
            command(0x2C),
            data(0xF8),
            data(0x00),
        ]
    );
}

#[test_log::test]
fn panel_offsets_shift_the_window() {
    let config = DisplayConfig::new(16, 16);
    let mut display = Display::new(
        RecordingHal::default(),
        MipiPanel::with_offsets(2, 1),
        config,
    );
    display.draw_fast_hline(3, 4, 2, Color::WHITE).unwrap();
    assert_eq!(
        &display.hal().wire[..11],
        &[
            command(0x2A),
            data(0),
            data(5),
            data(0),
            data(6),
            command(0x2B),
            data(0),
            data(5),
            data(0),
            data(5),
            command(0x2C),
        ]
    );
}

#[test_log::test]
fn chip_select_frames_every_byte() {
    let mut display = direct(24, 24);
    display.fill_circle(10, 10, 6, Color::GREEN).unwrap();
    display.write_char_string(0, 16, "ok").unwrap();
    display.draw_arc(12, 12, 10, 3, 10.0, 200.0, Color::RED).unwrap();
    balanced(display.hal());

    let mut display = bit_banged(24, 24);
    display.fill_rect(2, 2, 5, 5, Color::BLUE).unwrap();
    display.draw_line(0, 0, 23, 23, Color::WHITE).unwrap();
    balanced(display.hal());
}

#[test_log::test]
fn rejected_calls_produce_no_traffic() {
    let mut display = direct(16, 16);
    assert_eq!(
        display.draw_circle(16, 3, 2, Color::WHITE),
        Err(DisplayError::ShapeScreenBounds)
    );
    assert_eq!(
        display.draw_bitmap(0, 0, 3, 1, Color::WHITE, Color::BLACK, &[0xFF]),
        Err(DisplayError::BitmapHorizontalSize)
    );
    assert_eq!(
        display.write_char(0, 20, b'A'),
        Err(DisplayError::CharScreenBounds)
    );
    assert_eq!(
        display.draw_polygon(8, 8, 1, 4, 0.0, false, Color::WHITE),
        Err(DisplayError::GenericError)
    );
    assert!(display.hal().events.is_empty());
}

#[test_log::test]
fn release_returns_the_hal() {
    let mut display = direct(8, 8);
    display.fill_screen(Color::WHITE).unwrap();
    let (hal, panel) = display.release();
    assert_eq!(panel, MipiPanel::new());
    // one window and one row of pixels per row
    assert_eq!(hal.wire.len(), 8 * (11 + 16));
}

#[test_log::test]
fn board_reset_runs_through_the_display_hal() {
    let mut display = direct(8, 8);
    let hal = display.hal_mut();
    hal.set_pin(Pin::Rst, Level::Low);
    hal.delay_ms(2);
    hal.set_pin(Pin::Rst, Level::High);

    let hal = display.hal();
    assert_eq!(hal.count(Event::DelayUs(1000)), 2);
    assert_eq!(hal.events.first(), Some(&Event::Pin(Pin::Rst, Level::Low)));
    assert_eq!(hal.events.last(), Some(&Event::Pin(Pin::Rst, Level::High)));
    assert!(hal.wire.is_empty());

    // drawing never touches the reset line
    display.fill_screen(Color::WHITE).unwrap();
    assert_eq!(display.hal().count(Event::Pin(Pin::Rst, Level::High)), 1);
    assert_eq!(display.hal().count(Event::Pin(Pin::Rst, Level::Low)), 1);
}
