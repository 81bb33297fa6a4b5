//! Page switching.
//!
//! Each page is a field list in the main window. The navigator remembers
//! the head of every page's list and swaps the main window's root when the
//! page changes.

use display::{FieldId, WindowManager};
use lcd_surface::DrawingSurface;

use crate::screen::Page;

/// Current page and the list head of every page.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    roots: [Option<FieldId>; Page::COUNT],
}

impl Navigator {
    /// A navigator showing the status page. No page has fields yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Page::Status,
            roots: [None; Page::COUNT],
        }
    }

    /// Page currently shown.
    #[must_use]
    pub fn current(&self) -> Page {
        self.current
    }

    /// Record the head of a page's field list.
    pub fn set_root(&mut self, page: Page, root: Option<FieldId>) {
        if let Some(slot) = self.roots.get_mut(page.index()) {
            *slot = root;
        }
    }

    /// Head of a page's field list.
    #[must_use]
    pub fn root(&self, page: Page) -> Option<FieldId> {
        self.roots.get(page.index()).copied().flatten()
    }

    /// Show `page`: swap the main window's root and redraw everything.
    /// Returns whether the page changed.
    pub fn switch_to<S: DrawingSurface, const F: usize, const P: usize>(
        &mut self,
        wm: &mut WindowManager<F, P>,
        surface: &mut S,
        page: Page,
    ) -> Result<bool, S::Error> {
        if page == self.current && wm.root() == self.root(page) {
            return Ok(false);
        }
        self.current = page;
        wm.set_root(self.root(page));
        display::debug!("page {}", page.index());
        wm.refresh(surface, true)?;
        Ok(true)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use display::{Alignment, DisplayConfig, StaticTextField, WidgetStyle, WindowId};
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::RgbColor;
    use lcd_testing::RecordingSurface;

    const STYLE: WidgetStyle = WidgetStyle::new(&FONT_6X10);

    #[test]
    fn test_nav_starts_at_status() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Page::Status);
        assert_eq!(nav.root(Page::Setup), None);
    }

    #[test]
    fn test_switch_swaps_root_and_redraws() {
        let mut wm: WindowManager<4, 1> = WindowManager::new(DisplayConfig::DEFAULT, Rgb565::BLACK);
        let mut lcd = RecordingSurface::new(480, 272, &FONT_6X10);
        let mut nav = Navigator::new();

        let status = wm
            .add_field(
                WindowId::Main,
                StaticTextField::new(&STYLE, 0, 0, 80, Alignment::Left, "status"),
            )
            .unwrap();
        nav.set_root(Page::Status, Some(status));
        wm.set_root(None);
        let setup = wm
            .add_field(
                WindowId::Main,
                StaticTextField::new(&STYLE, 0, 0, 80, Alignment::Left, "setup"),
            )
            .unwrap();
        nav.set_root(Page::Setup, Some(setup));

        assert!(nav.switch_to(&mut wm, &mut lcd, Page::Setup).unwrap());
        assert_eq!(nav.current(), Page::Setup);
        assert_eq!(wm.root(), Some(setup));
        lcd.assert_printed("setup").unwrap();

        lcd.clear();
        assert!(!nav.switch_to(&mut wm, &mut lcd, Page::Setup).unwrap());
        lcd.assert_nothing_drawn().unwrap();

        assert!(nav.switch_to(&mut wm, &mut lcd, Page::Status).unwrap());
        lcd.assert_printed("status").unwrap();
    }
}
