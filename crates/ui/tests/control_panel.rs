//! Main-loop behaviour of the control panel driven by a scripted finger.

#![allow(clippy::unwrap_used)]

use display::{ButtonPress, DisplayConfig, FieldId, TouchPanel, TouchPoint};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use lcd_testing::RecordingSurface;
use ui::{ColourScheme, ControlPanel, Page, PanelTiming};

#[derive(Debug, Default)]
struct Finger(Option<TouchPoint>);

impl TouchPanel for Finger {
    fn read(&mut self) -> Option<TouchPoint> {
        self.0
    }
}

const STATUS_TAB: TouchPoint = TouchPoint::new(50, 250);
const SETUP_TAB: TouchPoint = TouchPoint::new(150, 250);
const SHOW_ALERT: TouchPoint = TouchPoint::new(50, 65);
const ALERT_OK: TouchPoint = TouchPoint::new(230, 130);
const FAN_UP: TouchPoint = TouchPoint::new(225, 95);
const FAN_DOWN: TouchPoint = TouchPoint::new(175, 95);

fn started() -> (ControlPanel<Finger>, RecordingSurface) {
    let mut panel = ControlPanel::new(
        DisplayConfig::DEFAULT,
        &ColourScheme::DARK,
        Finger::default(),
        PanelTiming::DEFAULT,
    )
    .unwrap();
    let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
    panel.start(&mut lcd).unwrap();
    (panel, lcd)
}

fn touch(
    panel: &mut ControlPanel<Finger>,
    lcd: &mut RecordingSurface,
    point: Option<TouchPoint>,
    now_ms: u32,
) {
    panel.touch_mut().0 = point;
    panel.tick(lcd, now_ms).unwrap();
}

fn is_pressed(panel: &ControlPanel<Finger>, id: FieldId) -> bool {
    panel.windows().button(ButtonPress::new(id, 0)).unwrap().is_pressed()
}

#[test]
fn test_start_draws_status_page() {
    let (panel, lcd) = started();
    let text = lcd.printed_text();
    assert!(text.contains("Free RAM: 0"), "{text}");
    assert!(text.contains("Setup"), "{text}");
    assert_eq!(panel.page(), Page::Status);
    assert!(is_pressed(&panel, panel.fields().status_tab));
}

#[test]
fn test_value_update_redraws_only_that_field() {
    let (mut panel, mut lcd) = started();
    lcd.clear();
    panel.set_free_ram(2048);
    touch(&mut panel, &mut lcd, None, 10);
    lcd.assert_printed("Free RAM: 2048").unwrap();

    lcd.clear();
    touch(&mut panel, &mut lcd, None, 20);
    lcd.assert_nothing_drawn().unwrap();
}

#[test]
fn test_tab_switch_keeps_tab_highlighted() {
    let (mut panel, mut lcd) = started();
    let fields = *panel.fields();

    touch(&mut panel, &mut lcd, Some(SETUP_TAB), 1000);
    assert_eq!(panel.page(), Page::Setup);
    assert!(is_pressed(&panel, fields.setup_tab));
    assert!(!is_pressed(&panel, fields.status_tab));

    touch(&mut panel, &mut lcd, None, 1100);
    touch(&mut panel, &mut lcd, None, 1300);
    assert!(is_pressed(&panel, fields.setup_tab));

    touch(&mut panel, &mut lcd, Some(STATUS_TAB), 1400);
    assert_eq!(panel.page(), Page::Status);
    assert!(is_pressed(&panel, fields.status_tab));
    assert!(!is_pressed(&panel, fields.setup_tab));
}

#[test]
fn test_alert_opens_and_closes() {
    let (mut panel, mut lcd) = started();
    let alert = panel.fields().alert;
    touch(&mut panel, &mut lcd, Some(SETUP_TAB), 1000);

    touch(&mut panel, &mut lcd, Some(SHOW_ALERT), 1300);
    assert_eq!(panel.windows().attached_popup(), Some(alert));

    lcd.clear();
    touch(&mut panel, &mut lcd, Some(ALERT_OK), 1600);
    assert_eq!(panel.windows().attached_popup(), None);
    lcd.assert_fill(90, 60, 389, 159, ColourScheme::DARK.background).unwrap();
}

#[test]
fn test_touch_outside_popup_dismisses_it() {
    let (mut panel, mut lcd) = started();
    lcd.clear();
    panel.show_alert(&mut lcd, "Nozzle hot").unwrap();
    let text = lcd.printed_text();
    assert!(text.contains("Nozzle hot"), "{text}");
    assert!(text.contains("OK"), "{text}");

    touch(&mut panel, &mut lcd, Some(SETUP_TAB), 1000);
    assert_eq!(panel.windows().attached_popup(), None);
    assert_eq!(panel.page(), Page::Status);
}

#[test]
fn test_held_fan_button_repeats_at_short_interval() {
    let (mut panel, mut lcd) = started();
    touch(&mut panel, &mut lcd, Some(FAN_UP), 1000);
    assert_eq!(panel.fan(), 5);
    touch(&mut panel, &mut lcd, Some(FAN_UP), 1099);
    assert_eq!(panel.fan(), 5);
    touch(&mut panel, &mut lcd, Some(FAN_UP), 1100);
    assert_eq!(panel.fan(), 10);

    for t in [1200, 1300, 1400] {
        touch(&mut panel, &mut lcd, Some(FAN_DOWN), t);
    }
    assert_eq!(panel.fan(), 0);
}
