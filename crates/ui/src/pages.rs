//! Page construction.
//!
//! The tab bar is built first and shared: each page's list is started from
//! the tab bar's head, so after the page fields are added the tab bar sits
//! at the tail of every page.

use display::{
    Alignment, ColourGradientField, DisplayError, EventParam, FieldId, FloatField, IntegerButton,
    IntegerField, PopupId, PopupWindow, ProgressBar, StaticTextField, TextButton, WindowId,
    WindowManager,
};

use crate::colours::ColourScheme;
use crate::events::UiEvent;
use crate::navigation::Navigator;
use crate::screen::Page;

/// Top of the tab bar.
pub const TAB_Y: u16 = 244;
/// Width of each tab.
pub const TAB_WIDTH: u16 = 100;
/// Size of the alert popup.
pub const ALERT_SIZE: (u16, u16) = (300, 100);
/// Row the alert popup is attached at.
pub const ALERT_Y: u16 = 60;

/// Ids of the fields the application updates after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelFields {
    /// Tab selecting the status page.
    pub status_tab: FieldId,
    /// Tab selecting the setup page.
    pub setup_tab: FieldId,
    /// Free memory readout.
    pub free_ram: FieldId,
    /// Temperature readout.
    pub temperature: FieldId,
    /// Job progress.
    pub progress: FieldId,
    /// Fan speed.
    pub fan: FieldId,
    /// Alert popup.
    pub alert: PopupId,
    /// Message inside the alert popup.
    pub alert_text: FieldId,
}

impl PanelFields {
    /// Tab button of a page.
    #[must_use]
    pub fn tab(&self, page: Page) -> FieldId {
        match page {
            Page::Status => self.status_tab,
            Page::Setup => self.setup_tab,
        }
    }
}

/// Build every page and the alert popup, recording page roots in `nav`.
/// The main window is left on the status page.
pub fn build<const F: usize, const P: usize>(
    wm: &mut WindowManager<F, P>,
    nav: &mut Navigator,
    scheme: &ColourScheme,
) -> Result<PanelFields, DisplayError> {
    let text = scheme.text_style();
    let buttons = scheme.button_style();

    wm.set_root(None);
    let tab = |page: Page, x: u16, caption: &str| {
        TextButton::new(
            &buttons,
            x,
            TAB_Y,
            TAB_WIDTH,
            Some(caption),
            page.tab_event().into(),
            EventParam::None,
        )
    };
    let status_tab = wm.add_field(WindowId::Main, tab(Page::Status, 10, "Status"))?;
    let setup_tab = wm.add_field(WindowId::Main, tab(Page::Setup, 120, "Setup"))?;
    let tab_bar = wm.root();

    // Status page
    wm.add_field(
        WindowId::Main,
        StaticTextField::new(&text, 10, 8, 200, Alignment::Left, "Status"),
    )?;
    let free_ram = wm.add_field(
        WindowId::Main,
        IntegerField::new(&text, 10, 30, 220, Alignment::Left, "Free RAM: ", ""),
    )?;
    let temperature = wm.add_field(
        WindowId::Main,
        FloatField::new(&text, 10, 46, 220, Alignment::Left, 1, "Temp: ", "C"),
    )?;
    let progress = wm.add_field(
        WindowId::Main,
        ProgressBar::new(&scheme.progress_style(), 10, 66, 300, 10),
    )?;
    let fan = wm.add_field(
        WindowId::Main,
        IntegerButton::new(&buttons, 10, 90, 140, "Fan ", "%"),
    )?;
    wm.add_field(
        WindowId::Main,
        TextButton::new(
            &buttons,
            160,
            90,
            40,
            Some("-"),
            UiEvent::FanDown.into(),
            EventParam::Int(-5),
        ),
    )?;
    wm.add_field(
        WindowId::Main,
        TextButton::new(
            &buttons,
            210,
            90,
            40,
            Some("+"),
            UiEvent::FanUp.into(),
            EventParam::Int(5),
        ),
    )?;
    nav.set_root(Page::Status, wm.root());

    // Setup page
    wm.set_root(tab_bar);
    wm.add_field(
        WindowId::Main,
        StaticTextField::new(&text, 10, 8, 200, Alignment::Left, "Setup"),
    )?;
    wm.add_field(
        WindowId::Main,
        StaticTextField::new(&text, 280, 8, 190, Alignment::Right, scheme.name),
    )?;
    wm.add_field(WindowId::Main, ColourGradientField::new(&text, 10, 30, 256, 16))?;
    wm.add_field(
        WindowId::Main,
        TextButton::new(
            &buttons,
            10,
            60,
            140,
            Some("Show alert"),
            UiEvent::OpenAlert.into(),
            EventParam::None,
        ),
    )?;
    nav.set_root(Page::Setup, wm.root());

    // Alert popup
    let alert = wm.create_popup(PopupWindow::new(
        ALERT_SIZE.0,
        ALERT_SIZE.1,
        scheme.popup_back,
        scheme.popup_border,
        true,
    ))?;
    let alert_text = wm.add_field(
        WindowId::Popup(alert),
        StaticTextField::new(&scheme.popup_style(), 10, 10, 280, Alignment::Centre, ""),
    )?;
    wm.add_field(
        WindowId::Popup(alert),
        TextButton::new(
            &buttons,
            110,
            64,
            80,
            Some("OK"),
            UiEvent::CloseAlert.into(),
            EventParam::None,
        ),
    )?;

    wm.set_root(nav.root(Page::Status));
    Ok(PanelFields {
        status_tab,
        setup_tab,
        free_ram,
        temperature,
        progress,
        fan,
        alert,
        alert_text,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use display::{DisplayConfig, Field};

    fn built() -> (WindowManager<32, 2>, Navigator, PanelFields) {
        let scheme = ColourScheme::DARK;
        let mut wm = WindowManager::new(DisplayConfig::DEFAULT, scheme.background);
        let mut nav = Navigator::new();
        let fields = build(&mut wm, &mut nav, &scheme).unwrap();
        (wm, nav, fields)
    }

    fn ids(wm: &WindowManager<32, 2>, head: Option<FieldId>) -> std::vec::Vec<FieldId> {
        let mut out = std::vec::Vec::new();
        let mut cursor = head;
        while let Some(id) = cursor {
            out.push(id);
            cursor = wm.field(id).and_then(|f: &Field| display::Widget::core(f).next());
        }
        out
    }

    #[test]
    fn test_tab_bar_shared_by_both_pages() {
        let (wm, nav, fields) = built();
        let status = ids(&wm, nav.root(Page::Status));
        let setup = ids(&wm, nav.root(Page::Setup));
        for tab in [fields.status_tab, fields.setup_tab] {
            assert!(status.contains(&tab));
            assert!(setup.contains(&tab));
        }
        assert!(status.contains(&fields.fan));
        assert!(!setup.contains(&fields.fan));
        assert_eq!(status.last(), Some(&fields.status_tab));
    }

    #[test]
    fn test_starts_on_status_page() {
        let (wm, nav, fields) = built();
        assert_eq!(wm.root(), nav.root(Page::Status));
        assert_eq!(fields.tab(Page::Setup), fields.setup_tab);
        assert_eq!(wm.attached_popup(), None);
    }

    #[test]
    fn test_too_small_arena_reports_full() {
        let scheme = ColourScheme::DARK;
        let mut wm: WindowManager<4, 1> =
            WindowManager::new(DisplayConfig::DEFAULT, scheme.background);
        let mut nav = Navigator::new();
        assert_eq!(build(&mut wm, &mut nav, &scheme), Err(DisplayError::FieldArenaFull));
    }
}
