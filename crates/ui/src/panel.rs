//! Main-loop touch handling.
//!
//! After a touch is accepted further touches are ignored for a while, so a
//! finger held on a button does not repeat too fast. When that period has
//! passed the highlighted button is released and the panel is sampled
//! again.

use display::{ButtonPress, TouchPanel, WindowManager};
use lcd_surface::DrawingSurface;

/// Touch ignore periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelTiming {
    /// Ignore period after an ordinary press, in milliseconds.
    pub long_touch_ms: u32,
    /// Ignore period while stepping a value up or down.
    pub short_touch_ms: u32,
}

impl PanelTiming {
    /// 250 ms after a press, 100 ms while repeating.
    pub const DEFAULT: Self = Self {
        long_touch_ms: 250,
        short_touch_ms: 100,
    };
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A touch resolved to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Touch {
    /// A button was touched and is now highlighted.
    Button(ButtonPress),
    /// A popup is open and the touch landed on an uncovered main-window
    /// button instead.
    OutsidePopup(ButtonPress),
}

/// Touch controller plus the press and debounce state of the main loop.
#[derive(Debug)]
pub struct Panel<T> {
    touch: T,
    timing: PanelTiming,
    last_touch_ms: u32,
    ignore_ms: u32,
    current: ButtonPress,
}

impl<T: TouchPanel> Panel<T> {
    /// A panel accepting touches immediately.
    pub fn new(touch: T, timing: PanelTiming) -> Self {
        Self {
            touch,
            timing,
            last_touch_ms: 0,
            ignore_ms: 0,
            current: ButtonPress::NONE,
        }
    }

    /// Sample the touch panel at time `now_ms`.
    ///
    /// Does nothing inside the ignore period. Otherwise releases the
    /// highlighted button and, if the panel is touched, highlights and
    /// returns the button under the finger.
    pub fn poll<S: DrawingSurface, const F: usize, const P: usize>(
        &mut self,
        wm: &mut WindowManager<F, P>,
        surface: &mut S,
        now_ms: u32,
    ) -> Result<Option<Touch>, S::Error> {
        if now_ms.wrapping_sub(self.last_touch_ms) < self.ignore_ms {
            return Ok(None);
        }
        self.release(wm, surface)?;

        let Some(point) = self.touch.read() else {
            return Ok(None);
        };
        let press = wm.find_event(point.x, point.y);
        if press.is_valid() {
            self.last_touch_ms = now_ms;
            self.ignore_ms = self.timing.long_touch_ms;
            self.current = press;
            wm.press(surface, press, true)?;
            return Ok(Some(Touch::Button(press)));
        }
        let outside = wm.find_event_outside_popup(point.x, point.y);
        Ok(outside.is_valid().then_some(Touch::OutsidePopup(outside)))
    }

    /// Un-highlight the current button now.
    pub fn release<S: DrawingSurface, const F: usize, const P: usize>(
        &mut self,
        wm: &mut WindowManager<F, P>,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if self.current.is_valid() {
            wm.press(surface, self.current, false)?;
            self.current.clear();
        }
        Ok(())
    }

    /// Leave `press` highlighted when the ignore period ends.
    pub fn keep_pressed(&mut self, press: ButtonPress) {
        if self.current == press {
            self.current.clear();
        }
    }

    /// Use the short ignore period for the current touch.
    pub fn shorten_delay(&mut self) {
        self.ignore_ms = self.timing.short_touch_ms;
    }

    /// Button highlighted by the last touch, until it is released.
    #[must_use]
    pub fn current(&self) -> ButtonPress {
        self.current
    }

    /// The touch controller.
    pub fn touch_mut(&mut self) -> &mut T {
        &mut self.touch
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use display::{DisplayConfig, Event, EventParam, TextButton, TouchPoint, WidgetStyle, WindowId};
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::RgbColor;
    use lcd_testing::RecordingSurface;

    const STYLE: WidgetStyle = WidgetStyle::new(&FONT_6X10);

    struct Finger(Option<TouchPoint>);

    impl TouchPanel for Finger {
        fn read(&mut self) -> Option<TouchPoint> {
            self.0
        }
    }

    fn setup() -> (WindowManager<4, 1>, RecordingSurface, Panel<Finger>, ButtonPress) {
        let mut wm = WindowManager::new(DisplayConfig::DEFAULT, Rgb565::BLACK);
        let id = wm
            .add_field(
                WindowId::Main,
                TextButton::new(&STYLE, 10, 10, 60, Some("Go"), Event(1), EventParam::None),
            )
            .unwrap();
        let panel = Panel::new(Finger(None), PanelTiming::DEFAULT);
        let lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        (wm, lcd, panel, ButtonPress::new(id, 0))
    }

    #[test]
    fn test_touch_highlights_then_releases_after_delay() {
        let (mut wm, mut lcd, mut panel, go) = setup();
        panel.touch_mut().0 = Some(TouchPoint::new(20, 15));
        assert_eq!(panel.poll(&mut wm, &mut lcd, 1000).unwrap(), Some(Touch::Button(go)));
        assert!(wm.button(go).unwrap().is_pressed());

        panel.touch_mut().0 = None;
        assert_eq!(panel.poll(&mut wm, &mut lcd, 1249).unwrap(), None);
        assert!(wm.button(go).unwrap().is_pressed());

        assert_eq!(panel.poll(&mut wm, &mut lcd, 1250).unwrap(), None);
        assert!(!wm.button(go).unwrap().is_pressed());
        assert!(!panel.current().is_valid());
    }

    #[test]
    fn test_short_delay_repeats_sooner() {
        let (mut wm, mut lcd, mut panel, go) = setup();
        panel.touch_mut().0 = Some(TouchPoint::new(20, 15));
        panel.poll(&mut wm, &mut lcd, 0).unwrap();
        panel.shorten_delay();
        assert_eq!(panel.poll(&mut wm, &mut lcd, 99).unwrap(), None);
        assert_eq!(panel.poll(&mut wm, &mut lcd, 100).unwrap(), Some(Touch::Button(go)));
    }

    #[test]
    fn test_kept_press_survives_release() {
        let (mut wm, mut lcd, mut panel, go) = setup();
        panel.touch_mut().0 = Some(TouchPoint::new(20, 15));
        panel.poll(&mut wm, &mut lcd, 0).unwrap();
        panel.keep_pressed(go);
        panel.touch_mut().0 = None;
        panel.poll(&mut wm, &mut lcd, 500).unwrap();
        assert!(wm.button(go).unwrap().is_pressed());
    }

    #[test]
    fn test_miss_reports_nothing() {
        let (mut wm, mut lcd, mut panel, _) = setup();
        panel.touch_mut().0 = Some(TouchPoint::new(300, 200));
        assert_eq!(panel.poll(&mut wm, &mut lcd, 0).unwrap(), None);
        assert!(!panel.current().is_valid());
    }
}
