//! Property-based tests for dirty tracking, occlusion and hit-testing.
//! Each property is checked over generated geometry and value sequences.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects, clippy::indexing_slicing)]

use display::{
    Alignment, DisplayConfig, Event, EventParam, IconButton, IntegerField, PopupWindow, ProgressBar,
    Widget, WidgetStyle, WindowId, WindowManager,
};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use lcd_surface::{from_raw, Icon};
use lcd_testing::RecordingSurface;

const STYLE: WidgetStyle = WidgetStyle::new(&FONT_6X10);
/// With a one pixel icon margin this gives 21 px tall buttons.
const TALL_ICON: Icon = Icon::new(4, 17, &[0; 68]);

fn manager() -> WindowManager<8, 2> {
    WindowManager::new(DisplayConfig::DEFAULT, Rgb565::BLACK)
}

fn icon_button(x: u16, y: u16, width: u16) -> IconButton {
    IconButton::new(&STYLE, x, y, width, TALL_ICON, Event(1), EventParam::None)
}

proptest::proptest! {
    /// An incremental refresh draws iff the value differs from the last one drawn.
    #[test]
    fn refresh_draws_only_on_real_change(values in proptest::collection::vec(-3i32..=3, 1..20)) {
        let mut field = IntegerField::new(&STYLE, 0, 0, 120, Alignment::Left, "v=", "");
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        field.refresh(&mut lcd, true, 0, 0).unwrap();
        let mut shown = 0;
        for v in values {
            lcd.clear();
            field.set_value(v);
            field.refresh(&mut lcd, false, 0, 0).unwrap();
            assert_eq!(lcd.draw_count() > 0, v != shown, "value {} after {}", v, shown);
            shown = v;
        }
    }

    /// A repeated colour change dirties the field at most once.
    #[test]
    fn set_colours_is_idempotent(fg in 0u16..=u16::MAX, bg in 0u16..=u16::MAX) {
        let mut field = IntegerField::new(&STYLE, 0, 0, 120, Alignment::Left, "", "");
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        field.refresh(&mut lcd, true, 0, 0).unwrap();
        let (fg, bg) = (from_raw(fg), from_raw(bg));
        let differs = fg != STYLE.fg || bg != STYLE.bg;

        assert_eq!(field.set_colours(fg, bg), differs);
        assert_eq!(field.has_changed(), differs);
        field.refresh(&mut lcd, false, 0, 0).unwrap();
        assert!(!field.set_colours(fg, bg));
        assert!(!field.has_changed());
        assert!(!field.set_colours(fg, bg));
        assert!(!field.has_changed());
    }

    /// Repeated show and press calls dirty the field at most once.
    #[test]
    fn show_and_press_are_idempotent(visible: bool, pressed: bool) {
        let mut button = icon_button(0, 0, 30);
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        button.refresh(&mut lcd, true, 0, 0).unwrap();

        assert_eq!(button.show(visible), !visible);
        assert_eq!(button.press(pressed, 0), pressed);
        button.refresh(&mut lcd, false, 0, 0).unwrap();
        assert!(!button.show(visible));
        assert!(!button.press(pressed, 0));
        assert!(!button.has_changed());
    }

    /// A field is obscured exactly when its box meets the popup's box.
    #[test]
    fn obscured_iff_boxes_intersect(
        fx in 0u16..300, fy in 0u16..200, fw in 3u16..100, fh in 1u16..60,
        px in 0u16..300, py in 0u16..200, pw in 1u16..150, ph in 1u16..150,
    ) {
        let mut wm = manager();
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        let field = wm.add_field(WindowId::Main, ProgressBar::new(&STYLE, fx, fy, fw, fh)).unwrap();
        let popup = wm
            .create_popup(PopupWindow::new(pw, ph, Rgb565::BLUE, Rgb565::WHITE, false))
            .unwrap();
        assert!(!wm.obscured_by_popup(field));
        wm.set_popup(&mut lcd, popup, px, py, false).unwrap();

        let (fx2, fy2) = (fx + fw - 1, fy + fh - 1);
        let (px2, py2) = (px + pw - 1, py + ph - 1);
        let expected = fx2 >= px && fx <= px2 && fy2 >= py && fy <= py2;
        assert_eq!(wm.obscured_by_popup(field), expected);
    }

    /// Misses of up to 7 px on an axis select the button, 8 px does not.
    #[test]
    fn touch_tolerance_per_axis(dx in 0u16..16, dy in 0u16..16) {
        let mut wm = manager();
        let button = wm.add_field(WindowId::Main, icon_button(100, 100, 20)).unwrap();
        // Button spans 100..=119 by 100..=120.
        let hit = wm.find_event(119 + dx, 120 + dy);
        assert_eq!(hit.is_valid(), dx < 8 && dy < 8);
        if hit.is_valid() {
            assert_eq!(hit.button(), Some(button));
        }
        let hit = wm.find_event(100 - dx.min(100), 110);
        assert_eq!(hit.is_valid(), dx < 8);
    }

    /// Only one popup is ever attached, and it is the last one set.
    #[test]
    fn at_most_one_popup_attached(order in proptest::collection::vec(0usize..2, 1..10)) {
        let mut wm = manager();
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        let ids = [
            wm.create_popup(PopupWindow::new(50, 50, Rgb565::BLUE, Rgb565::WHITE, false)).unwrap(),
            wm.create_popup(PopupWindow::new(60, 40, Rgb565::RED, Rgb565::WHITE, true)).unwrap(),
        ];
        for &i in &order {
            wm.set_popup(&mut lcd, ids[i], 20, 20, true).unwrap();
            assert_eq!(wm.attached_popup(), Some(ids[i]));
        }
        wm.clear_all_popups(&mut lcd).unwrap();
        assert_eq!(wm.attached_popup(), None);
    }

    /// An incremental progress redraw touches exactly the flipped columns.
    #[test]
    fn progress_strip_matches_pixel_delta(p1 in 0u8..=100, p2 in 0u8..=100, width in 3u16..300) {
        let mut bar = ProgressBar::new(&STYLE, 5, 5, width, 10);
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        bar.set_percent(p1);
        bar.refresh(&mut lcd, true, 0, 0).unwrap();
        lcd.clear();

        bar.set_percent(p2);
        bar.refresh(&mut lcd, false, 0, 0).unwrap();
        let touched: u16 = lcd.fills().iter().filter_map(|f| f.fill_width()).sum();
        assert_eq!(touched, bar.pixels_for(p1).abs_diff(bar.pixels_for(p2)));
    }
}

#[test]
fn test_equal_miss_prefers_latest_added() {
    let mut wm = manager();
    let left = wm.add_field(WindowId::Main, icon_button(10, 10, 20)).unwrap();
    let right = wm.add_field(WindowId::Main, icon_button(41, 10, 20)).unwrap();
    // 6 px right of `left`, 6 px left of `right`.
    assert_eq!(wm.find_event(35, 15).button(), Some(right));
    assert_eq!(wm.find_event(34, 15).button(), Some(left));

    let mut wm = manager();
    wm.add_field(WindowId::Main, icon_button(41, 10, 20)).unwrap();
    let left = wm.add_field(WindowId::Main, icon_button(10, 10, 20)).unwrap();
    assert_eq!(wm.find_event(35, 15).button(), Some(left));
}

#[test]
fn test_obscured_button_not_found_outside_popup() {
    let mut wm = manager();
    let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
    let covered = wm.add_field(WindowId::Main, icon_button(10, 10, 20)).unwrap();
    let clear = wm.add_field(WindowId::Main, icon_button(200, 10, 20)).unwrap();
    let popup = wm
        .create_popup(PopupWindow::new(100, 100, Rgb565::BLUE, Rgb565::WHITE, false))
        .unwrap();
    wm.set_popup(&mut lcd, popup, 0, 0, true).unwrap();

    assert!(wm.obscured_by_popup(covered));
    assert!(!wm.find_event_outside_popup(15, 15).is_valid());
    assert_eq!(wm.find_event_outside_popup(205, 15).button(), Some(clear));
    // The popup has no buttons of its own.
    assert!(!wm.find_event(205, 15).is_valid());
}
