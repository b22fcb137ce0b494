mod support;

use core::fmt::Write;

use display16::{CharMode, Color, DisplayError};
use support::{buffered, count_color, TestDisplay};

/// 8x8 font with a single, fully lit glyph for `#`.
static SOLID_8X8: [u8; 12] = [8, 8, b'#', 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// 1x1 font with a single lit glyph for `#`.
static DOT_1X1: [u8; 5] = [1, 1, b'#', 0, 0x80];

/// 3x2 font, glyph `A` is `#.#` over `.#.`.
static CHECKER_3X2: [u8; 6] = [3, 2, b'A', 0, 0b1010_0000, 0b0100_0000];

fn solid(width: u16, height: u16) -> TestDisplay {
    let mut display = buffered(width, height);
    display.set_font(&SOLID_8X8).unwrap();
    display
}

fn cell_is(display: &TestDisplay, x0: u16, y0: u16, color: Color) -> bool {
    let fb = display.frame_buffer();
    (y0..y0 + 8).all(|y| (x0..x0 + 8).all(|x| fb.pixel(x, y) == Some(color)))
}

#[test_log::test]
fn string_wraps_before_running_off_the_edge() {
    let mut display = solid(20, 16);
    display.write_char_string(0, 0, "###").unwrap();

    assert!(cell_is(&display, 0, 0, Color::WHITE));
    assert!(cell_is(&display, 8, 0, Color::WHITE));
    assert!(cell_is(&display, 0, 8, Color::WHITE));
    assert_eq!(count_color(&display, Color::WHITE), 3 * 64);
}

#[test_log::test]
fn wrapped_line_restarts_at_left_edge() {
    let mut display = solid(32, 16);
    display.write_char_string(12, 0, "###").unwrap();
    assert!(cell_is(&display, 12, 0, Color::WHITE));
    assert!(cell_is(&display, 20, 0, Color::WHITE));
    assert!(cell_is(&display, 0, 8, Color::WHITE));
    assert_eq!(count_color(&display, Color::WHITE), 3 * 64);
}

#[test_log::test]
fn string_stops_at_nul() {
    let mut display = solid(32, 8);
    display.write_char_string(0, 0, "#\0##").unwrap();
    assert_eq!(count_color(&display, Color::WHITE), 64);
}

#[test_log::test]
fn string_is_capped_at_250_characters() {
    let mut display = buffered(10, 40);
    display.set_font(&DOT_1X1).unwrap();
    let text = "#".repeat(300);
    display.write_char_string(0, 0, &text).unwrap();
    assert_eq!(count_color(&display, Color::WHITE), 250);
}

#[test_log::test]
fn string_stops_at_first_failing_character() {
    let mut display = solid(32, 8);
    assert_eq!(
        display.write_char_string(0, 0, "#a#"),
        Err(DisplayError::CharFontAsciiRange)
    );
    assert_eq!(count_color(&display, Color::WHITE), 64);
}

#[test_log::test]
fn char_outside_surface_or_font_is_rejected() {
    let mut display = buffered(16, 16);
    assert_eq!(
        display.write_char(16, 0, b'A'),
        Err(DisplayError::CharScreenBounds)
    );
    assert_eq!(
        display.write_char(0, 16, b'A'),
        Err(DisplayError::CharScreenBounds)
    );
    assert_eq!(
        display.write_char(0, 0, 0x7F),
        Err(DisplayError::CharFontAsciiRange)
    );
    assert_eq!(
        display.write_char(0, 0, 0x1F),
        Err(DisplayError::CharFontAsciiRange)
    );
    assert_eq!(count_color(&display, Color::WHITE), 0);
}

#[test_log::test]
fn glyph_bits_are_row_major_msb_first() {
    let mut display = buffered(8, 4);
    display.set_font(&CHECKER_3X2).unwrap();
    display.set_text_colors(Color::RED, Color::BLUE);
    display.write_char(1, 1, b'A').unwrap();

    let fb = display.frame_buffer();
    assert_eq!(fb.pixel(1, 1), Some(Color::RED));
    assert_eq!(fb.pixel(2, 1), Some(Color::BLUE));
    assert_eq!(fb.pixel(3, 1), Some(Color::RED));
    assert_eq!(fb.pixel(1, 2), Some(Color::BLUE));
    assert_eq!(fb.pixel(2, 2), Some(Color::RED));
    assert_eq!(fb.pixel(3, 2), Some(Color::BLUE));
    assert_eq!(fb.pixel(4, 1), Some(Color::BLACK));
}

#[test_log::test]
fn char_modes_render_identically() {
    for (x, y) in [(3, 2), (18, 4), (10, 12)] {
        let mut pixel = buffered(24, 16);
        pixel.set_char_mode(CharMode::Pixel);
        pixel.set_text_colors(Color::YELLOW, Color::DARK_GRAY);
        pixel.write_char(x, y, b'R').unwrap();

        let mut cell = buffered(24, 16);
        assert_eq!(cell.char_mode(), CharMode::Buffer);
        cell.set_text_colors(Color::YELLOW, Color::DARK_GRAY);
        cell.write_char(x, y, b'R').unwrap();

        assert_eq!(
            pixel.frame_buffer().as_bytes(),
            cell.frame_buffer().as_bytes(),
            "glyph at {:?}",
            (x, y)
        );
        assert!(count_color(&cell, Color::YELLOW) > 0);
    }
}

#[test_log::test]
fn inverted_font_swaps_colors() {
    let mut display = solid(16, 8);
    display.set_text_colors(Color::RED, Color::BLUE);
    display.set_font_inverted(true);
    assert!(display.font_inverted());
    display.write_char(0, 0, b'#').unwrap();
    assert!(cell_is(&display, 0, 0, Color::BLUE));

    // selecting a font clears the flag
    display.set_font(&SOLID_8X8).unwrap();
    assert!(!display.font_inverted());
    display.write_char(8, 0, b'#').unwrap();
    assert!(cell_is(&display, 8, 0, Color::RED));
}

#[test_log::test]
fn single_text_color_fills_the_cell() {
    let mut display = buffered(8, 8);
    display.set_text_color(Color::CYAN);
    assert_eq!(display.text_colors(), (Color::CYAN, Color::CYAN));
    display.write_char(0, 0, b'W').unwrap();
    assert_eq!(count_color(&display, Color::CYAN), 64);
}

#[test_log::test]
fn malformed_font_keeps_previous_one() {
    let mut display = buffered(16, 16);
    assert_eq!(display.set_font(&[]), Err(DisplayError::FontDataEmpty));
    assert_eq!(display.set_font(&[0, 8, 32, 0]), Err(DisplayError::WrongFont));
    assert_eq!(display.set_font(&[8, 8, 32]), Err(DisplayError::WrongFont));
    assert_eq!(display.font().width(), 8);
    assert_eq!(display.font().offset(), 0x20);
}

#[test_log::test]
fn stream_output_advances_and_wraps() {
    let mut display = solid(20, 32);
    assert_eq!(display.cursor(), (0, 0));
    assert!(display.text_wrap());

    display.write_byte(b'#').unwrap();
    assert_eq!(display.cursor(), (8, 0));
    display.write_byte(b'#').unwrap();
    assert_eq!(display.cursor(), (0, 8));
    display.write_byte(b'\r').unwrap();
    assert_eq!(display.cursor(), (0, 8));
    display.write_byte(b'\n').unwrap();
    assert_eq!(display.cursor(), (0, 16));
    assert_eq!(count_color(&display, Color::WHITE), 2 * 64);
}

#[test_log::test]
fn stream_output_without_wrap_runs_off() {
    let mut display = solid(20, 16);
    display.set_text_wrap(false);
    display.write_byte(b'#').unwrap();
    display.write_byte(b'#').unwrap();
    assert_eq!(display.cursor(), (16, 0));
    display.write_byte(b'#').unwrap();
    assert_eq!(display.cursor(), (24, 0));
    assert_eq!(
        display.write_byte(b'#'),
        Err(DisplayError::CharScreenBounds)
    );
    assert_eq!(display.cursor(), (24, 0));
}

#[test_log::test]
fn stream_errors_are_sticky() {
    let mut display = solid(32, 16);
    display.set_cursor(8, 0);
    assert_eq!(display.write_byte(b'?'), Err(DisplayError::CharFontAsciiRange));
    assert_eq!(display.cursor(), (8, 0));
    assert_eq!(display.write_error(), Some(DisplayError::CharFontAsciiRange));

    display.write_byte(b'#').unwrap();
    assert_eq!(display.write_error(), Some(DisplayError::CharFontAsciiRange));
    display.clear_write_error();
    assert_eq!(display.write_error(), None);
}

#[test_log::test]
fn formatted_output_matches_string_drawing() {
    let mut formatted = buffered(64, 16);
    write!(formatted, "{}-{}", 4, 2).unwrap();
    assert_eq!(formatted.cursor(), (24, 0));

    let mut direct = buffered(64, 16);
    direct.write_char_string(0, 0, "4-2").unwrap();
    assert_eq!(
        formatted.frame_buffer().as_bytes(),
        direct.frame_buffer().as_bytes()
    );
}

#[test_log::test]
fn formatted_output_reports_failures() {
    let mut display = buffered(64, 16);
    assert!(write!(display, "ok\u{7f}").is_err());
    assert_eq!(display.write_error(), Some(DisplayError::CharFontAsciiRange));
    assert_eq!(display.cursor(), (16, 0));
}

#[test_log::test]
fn formatted_output_continues_past_a_bad_byte() {
    let mut display = buffered(64, 16);
    assert!(write!(display, "A\u{7f}B").is_err());
    assert_eq!(display.write_error(), Some(DisplayError::CharFontAsciiRange));
    assert_eq!(display.cursor(), (16, 0));

    let mut expected = buffered(64, 16);
    expected.write_char_string(0, 0, "AB").unwrap();
    assert_eq!(
        display.frame_buffer().as_bytes(),
        expected.frame_buffer().as_bytes()
    );
}
