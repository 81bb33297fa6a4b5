//! The control panel: pages, popup and main-loop step wired together.

use display::{
    ButtonPress, DisplayConfig, DisplayError, FieldId, FloatField, IntegerButton, IntegerField,
    ProgressBar, StaticTextField, TouchPanel, Widget, WindowManager, AUTO_PLACE,
};
use lcd_surface::DrawingSurface;

use crate::colours::ColourScheme;
use crate::events::UiEvent;
use crate::navigation::Navigator;
use crate::pages::{self, PanelFields, ALERT_Y};
use crate::panel::{Panel, PanelTiming, Touch};
use crate::screen::Page;

/// Field capacity of the panel.
pub const MAX_FIELDS: usize = 48;
/// Popup capacity of the panel.
pub const MAX_POPUPS: usize = 2;

/// Step applied by the fan buttons, in percent.
const FAN_STEP: i32 = 5;

/// The running control panel.
#[derive(Debug)]
pub struct ControlPanel<T> {
    wm: WindowManager<MAX_FIELDS, MAX_POPUPS>,
    nav: Navigator,
    panel: Panel<T>,
    fields: PanelFields,
    current_tab: FieldId,
}

impl<T: TouchPanel> ControlPanel<T> {
    /// Build every page. Nothing is drawn until [`start`](Self::start).
    pub fn new(
        config: DisplayConfig,
        scheme: &ColourScheme,
        touch: T,
        timing: PanelTiming,
    ) -> Result<Self, DisplayError> {
        let mut wm = WindowManager::new(config, scheme.background);
        let mut nav = Navigator::new();
        let fields = pages::build(&mut wm, &mut nav, scheme)?;
        Ok(Self {
            wm,
            nav,
            panel: Panel::new(touch, timing),
            current_tab: fields.status_tab,
            fields,
        })
    }

    /// Draw the status page with its tab highlighted.
    pub fn start<S: DrawingSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if let Some(tab) = self.wm.field_mut(self.current_tab) {
            tab.press(true, 0);
        }
        self.wm.set_root(self.nav.root(self.nav.current()));
        self.wm.refresh(surface, true)
    }

    /// One pass of the main loop: handle touch input, then draw whatever
    /// changed.
    pub fn tick<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        now_ms: u32,
    ) -> Result<(), S::Error> {
        if let Some(touch) = self.panel.poll(&mut self.wm, surface, now_ms)? {
            self.dispatch(surface, touch)?;
        }
        self.wm.refresh(surface, false)
    }

    fn dispatch<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        touch: Touch,
    ) -> Result<(), S::Error> {
        let press = match touch {
            Touch::Button(press) => press,
            Touch::OutsidePopup(_) => return self.wm.clear_popup(surface, true, None),
        };
        let Some(event) = self.wm.button(press).and_then(|b| UiEvent::from_event(b.event())) else {
            display::warn!("touch on a button with no known event");
            return Ok(());
        };
        match event {
            UiEvent::TabStatus | UiEvent::TabSetup => {
                if let Some(page) = Page::from_tab(event) {
                    self.change_page(surface, page, press)?;
                }
            }
            UiEvent::FanUp => {
                self.adjust_fan(FAN_STEP);
                self.panel.shorten_delay();
            }
            UiEvent::FanDown => {
                self.adjust_fan(FAN_STEP.saturating_neg());
                self.panel.shorten_delay();
            }
            UiEvent::OpenAlert => {
                self.wm.set_popup(surface, self.fields.alert, AUTO_PLACE, ALERT_Y, true)?;
            }
            UiEvent::CloseAlert => self.wm.clear_popup(surface, true, Some(self.fields.alert))?,
        }
        Ok(())
    }

    fn change_page<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        page: Page,
        press: ButtonPress,
    ) -> Result<(), S::Error> {
        let new_tab = self.fields.tab(page);
        if new_tab != self.current_tab {
            if let Some(old) = self.wm.field_mut(self.current_tab) {
                old.press(false, 0);
            }
            self.current_tab = new_tab;
        }
        self.panel.keep_pressed(press);
        self.nav.switch_to(&mut self.wm, surface, page)?;
        Ok(())
    }

    fn adjust_fan(&mut self, delta: i32) {
        if let Some(fan) = self.wm.get_mut::<IntegerButton>(self.fields.fan) {
            let value = fan.value().saturating_add(delta).clamp(0, 100);
            fan.set_value(value);
        }
    }

    /// Show a message in the alert popup.
    pub fn show_alert<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        message: &str,
    ) -> Result<(), S::Error> {
        if let Some(text) = self.wm.get_mut::<StaticTextField>(self.fields.alert_text) {
            text.set_value(message, true);
        }
        self.wm.set_popup(surface, self.fields.alert, AUTO_PLACE, ALERT_Y, true)
    }

    /// Update the free memory readout.
    pub fn set_free_ram(&mut self, bytes: i32) {
        if let Some(field) = self.wm.get_mut::<IntegerField>(self.fields.free_ram) {
            field.set_value(bytes);
        }
    }

    /// Update the temperature readout.
    pub fn set_temperature(&mut self, celsius: f32) {
        if let Some(field) = self.wm.get_mut::<FloatField>(self.fields.temperature) {
            field.set_value(celsius);
        }
    }

    /// Update the job progress bar.
    pub fn set_progress(&mut self, percent: u8) {
        if let Some(bar) = self.wm.get_mut::<ProgressBar>(self.fields.progress) {
            bar.set_percent(percent);
        }
    }

    /// Current fan speed.
    #[must_use]
    pub fn fan(&self) -> i32 {
        self.wm.get::<IntegerButton>(self.fields.fan).map_or(0, IntegerButton::value)
    }

    /// Page currently shown.
    #[must_use]
    pub fn page(&self) -> Page {
        self.nav.current()
    }

    /// Ids of the panel's fields.
    #[must_use]
    pub fn fields(&self) -> &PanelFields {
        &self.fields
    }

    /// The window manager.
    #[must_use]
    pub fn windows(&self) -> &WindowManager<MAX_FIELDS, MAX_POPUPS> {
        &self.wm
    }

    /// The touch controller.
    pub fn touch_mut(&mut self) -> &mut T {
        self.panel.touch_mut()
    }
}
