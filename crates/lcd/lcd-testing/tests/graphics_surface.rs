//! Pixel-level checks of `GraphicsSurface` against the LCD drawing semantics.

#![allow(clippy::unwrap_used)]

use embedded_graphics::{mono_font::ascii::FONT_6X10, pixelcolor::Rgb565, prelude::*};
use lcd_surface::{from_raw, to_raw, DrawingSurface, Gradient, GraphicsSurface, Icon, OFFSCREEN_Y};
use lcd_testing::TestCanvas;

fn surface() -> GraphicsSurface<TestCanvas> {
    GraphicsSurface::new(TestCanvas::new(64, 48), &FONT_6X10)
}

#[test]
fn fill_rect_is_inclusive() {
    let mut s = surface();
    s.set_color(Rgb565::RED);
    s.fill_rect(2, 3, 5, 4, Gradient::NONE).unwrap();
    let c = s.target();
    c.assert_region(2, 3, 5, 4, Rgb565::RED).unwrap();
    assert_eq!(c.count_in(0, 0, 63, 47, Rgb565::RED), 8);
}

#[test]
fn reversed_corners_are_normalised() {
    let mut s = surface();
    s.set_color(Rgb565::GREEN);
    s.fill_rect(5, 4, 2, 3, Gradient::NONE).unwrap();
    s.target().assert_region(2, 3, 5, 4, Rgb565::GREEN).unwrap();
}

#[test]
fn gradient_steps_raw_colour() {
    let mut s = surface();
    s.set_color(from_raw(0x0010));
    s.fill_rect(0, 0, 3, 3, Gradient::new(from_raw(1), 2)).unwrap();
    let c = s.target();
    assert_eq!(c.pixel(0, 0).map(to_raw), Some(0x0010));
    assert_eq!(c.pixel(0, 1).map(to_raw), Some(0x0010));
    assert_eq!(c.pixel(0, 2).map(to_raw), Some(0x0011));
    assert_eq!(c.pixel(3, 3).map(to_raw), Some(0x0011));
}

#[test]
fn fill_round_rect_cuts_corners() {
    let mut s = surface();
    s.set_color(Rgb565::WHITE);
    s.fill_round_rect(10, 10, 20, 20, Gradient::NONE).unwrap();
    let c = s.target();
    c.assert_pixel(10, 10, Rgb565::BLACK).unwrap();
    c.assert_pixel(11, 10, Rgb565::BLACK).unwrap();
    c.assert_pixel(12, 10, Rgb565::WHITE).unwrap();
    c.assert_pixel(10, 11, Rgb565::BLACK).unwrap();
    c.assert_pixel(11, 11, Rgb565::WHITE).unwrap();
    c.assert_pixel(10, 12, Rgb565::WHITE).unwrap();
    c.assert_pixel(20, 20, Rgb565::BLACK).unwrap();
    c.assert_pixel(15, 15, Rgb565::WHITE).unwrap();
}

#[test]
fn fill_screen_respects_left_margin() {
    let mut s = surface();
    s.fill_screen(Rgb565::BLUE, 8).unwrap();
    let c = s.target();
    c.assert_region(0, 0, 7, 47, Rgb565::BLACK).unwrap();
    c.assert_region(8, 0, 63, 47, Rgb565::BLUE).unwrap();
}

#[test]
fn clear_to_margin_fills_background_behind_cursor() {
    let mut s = surface();
    s.set_back_color(Rgb565::YELLOW);
    s.set_text_pos(20, 5, 40);
    s.clear_to_margin().unwrap();
    let c = s.target();
    c.assert_region(20, 5, 39, 14, Rgb565::YELLOW).unwrap();
    c.assert_pixel(40, 5, Rgb565::BLACK).unwrap();
    c.assert_pixel(19, 5, Rgb565::BLACK).unwrap();
}

#[test]
fn offscreen_print_draws_nothing_but_advances() {
    let mut s = surface();
    s.set_color(Rgb565::WHITE);
    s.set_back_color(Rgb565::RED);
    s.set_text_pos(0, OFFSCREEN_Y, 60);
    s.print("abc").unwrap();
    assert_eq!(s.text_x(), 18);
    assert_eq!(s.target().count_in(0, 0, 63, 47, Rgb565::BLACK), 64 * 48);
}

#[test]
fn print_fills_glyph_cells_with_background() {
    let mut s = surface();
    s.set_color(Rgb565::WHITE);
    s.set_back_color(Rgb565::RED);
    s.set_text_pos(0, 0, 64);
    s.print(" ").unwrap();
    s.target().assert_region(0, 0, 5, 9, Rgb565::RED).unwrap();
}

#[test]
fn bitmap_copies_rows() {
    static DATA: [u16; 4] = [0xF800, 0x07E0, 0x001F, 0xFFFF];
    let mut s = surface();
    s.draw_bitmap(4, 4, &Icon::new(2, 2, &DATA)).unwrap();
    let c = s.target();
    c.assert_pixel(4, 4, Rgb565::RED).unwrap();
    c.assert_pixel(5, 4, Rgb565::GREEN).unwrap();
    c.assert_pixel(4, 5, Rgb565::BLUE).unwrap();
    c.assert_pixel(5, 5, Rgb565::WHITE).unwrap();
}

#[test]
fn compressed_bitmap_decodes_runs_by_column() {
    let data = [2, 0xF800, 0, 0x001F];
    let mut s = surface();
    s.draw_compressed_bitmap(0, 0, 2, 2, &data).unwrap();
    let c = s.target();
    c.assert_pixel(0, 0, Rgb565::RED).unwrap();
    c.assert_pixel(0, 1, Rgb565::RED).unwrap();
    c.assert_pixel(1, 0, Rgb565::RED).unwrap();
    c.assert_pixel(1, 1, Rgb565::BLUE).unwrap();
}
