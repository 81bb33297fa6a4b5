//! Horizontal progress bar with strip-level incremental redraw.
//!
//! The leftmost column doubles as the left border. Top, bottom and right
//! edges are drawn on full refresh. Between full refreshes only the columns
//! whose state flipped are repainted.

use lcd_surface::{DrawingSurface, Gradient, PixelNumber};

use crate::dirty;
use crate::field::{FieldCore, Widget};
use crate::style::WidgetStyle;

/// A progress bar filled left to right in the foreground colour.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    core: FieldCore,
    height: PixelNumber,
    percent: u8,
    last_pixels: PixelNumber,
}

impl ProgressBar {
    /// An empty bar.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            height,
            percent: 0,
            last_pixels: 0,
        }
    }

    /// Current percentage.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Set the percentage, clamped to 100.
    pub fn set_percent(&mut self, percent: u8) -> bool {
        dirty::update(&mut self.percent, percent.min(100), &mut self.core.changed)
    }

    /// Interior columns filled at `percent`.
    #[must_use]
    pub fn pixels_for(&self, percent: u8) -> PixelNumber {
        let interior = u32::from(self.interior());
        let filled = interior.saturating_mul(u32::from(percent.min(100))) / 100;
        PixelNumber::try_from(filled).unwrap_or(PixelNumber::MAX)
    }

    fn interior(&self) -> PixelNumber {
        self.core.width.saturating_sub(2)
    }
}

impl Widget for ProgressBar {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn height(&self) -> PixelNumber {
        self.height
    }

    fn refresh<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        full: bool,
        x_offset: PixelNumber,
        y_offset: PixelNumber,
    ) -> Result<(), S::Error> {
        if !full && !self.core.changed {
            return Ok(());
        }
        let pixels = self.pixels_for(self.percent);
        let x = x_offset.saturating_add(self.core.x);
        let y = y_offset.saturating_add(self.core.y);
        let right = x.saturating_add(self.core.width).saturating_sub(1);
        let top = y.saturating_add(1);
        let bottom = y.saturating_add(self.height).saturating_sub(2);
        let last = self.last_pixels;

        if full {
            surface.set_color(self.core.fcolour);
            surface.draw_line(x, y, right, y)?;
            let base = y.saturating_add(self.height).saturating_sub(1);
            surface.draw_line(x, base, right, base)?;
            surface.draw_line(right, top, right, bottom)?;
            surface.fill_rect(x, top, x.saturating_add(pixels), bottom, Gradient::NONE)?;
            if pixels < self.interior() {
                surface.set_color(self.core.bcolour);
                surface.fill_rect(
                    x.saturating_add(pixels).saturating_add(1),
                    top,
                    right.saturating_sub(1),
                    bottom,
                    Gradient::NONE,
                )?;
            }
        } else if pixels > last {
            surface.set_color(self.core.fcolour);
            surface.fill_rect(
                x.saturating_add(last).saturating_add(1),
                top,
                x.saturating_add(pixels),
                bottom,
                Gradient::NONE,
            )?;
        } else if pixels < last {
            surface.set_color(self.core.bcolour);
            surface.fill_rect(
                x.saturating_add(pixels).saturating_add(1),
                top,
                x.saturating_add(last),
                bottom,
                Gradient::NONE,
            )?;
        }
        self.last_pixels = pixels;
        self.core.changed = false;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use lcd_testing::RecordingSurface;

    const STYLE: WidgetStyle = WidgetStyle::new(&FONT_6X10);

    #[test]
    fn test_pixels_for() {
        let bar = ProgressBar::new(&STYLE, 0, 0, 102, 10);
        assert_eq!(bar.pixels_for(0), 0);
        assert_eq!(bar.pixels_for(50), 50);
        assert_eq!(bar.pixels_for(100), 100);
        assert_eq!(bar.pixels_for(200), 100);
    }

    #[test]
    fn test_set_percent_clamps() {
        let mut bar = ProgressBar::new(&STYLE, 0, 0, 102, 10);
        bar.set_percent(150);
        assert_eq!(bar.percent(), 100);
    }

    #[test]
    fn test_unchanged_percent_draws_nothing() {
        let mut bar = ProgressBar::new(&STYLE, 0, 0, 102, 10);
        let mut s = RecordingSurface::new(480, 272, &FONT_6X10);
        bar.set_percent(30);
        bar.refresh(&mut s, true, 0, 0).unwrap();
        s.clear();
        assert!(!bar.set_percent(30));
        bar.refresh(&mut s, false, 0, 0).unwrap();
        s.assert_nothing_drawn().unwrap();
    }

    #[test]
    fn test_full_refresh_draws_frame_and_both_parts() {
        let mut bar = ProgressBar::new(&STYLE, 10, 20, 52, 8);
        bar.set_percent(50);
        let mut s = RecordingSurface::new(480, 272, &FONT_6X10);
        bar.refresh(&mut s, true, 0, 0).unwrap();
        s.assert_fill(10, 21, 35, 26, STYLE.fg).unwrap();
        s.assert_fill(36, 21, 60, 26, STYLE.bg).unwrap();
    }
}
