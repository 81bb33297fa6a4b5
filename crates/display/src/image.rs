//! Image fields: compressed bitmaps and the colour calibration ramp.

use lcd_surface::{from_raw, DrawingSurface, PixelNumber};

use crate::field::{FieldCore, Widget};
use crate::style::WidgetStyle;

/// A fixed run-length compressed image, such as a splash logo.
#[derive(Debug, Clone)]
pub struct StaticImageField {
    core: FieldCore,
    height: PixelNumber,
    data: &'static [u16],
}

impl StaticImageField {
    /// An image of `width` x `height` decoded from `data`.
    #[must_use]
    pub fn new(
        style: &WidgetStyle,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
        data: &'static [u16],
    ) -> Self {
        Self {
            core: FieldCore::new(style, x, y, width),
            height,
            data,
        }
    }
}

impl Widget for StaticImageField {
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
        surface.draw_compressed_bitmap(
            x_offset.saturating_add(self.core.x),
            y_offset.saturating_add(self.core.y),
            self.core.width,
            self.height,
            self.data,
        )?;
        self.core.changed = false;
        Ok(())
    }
}

/// Red, green and blue ramps side by side, every intensity level in turn,
/// for checking panel colour depth. Drawn on full refreshes only.
#[derive(Debug, Clone)]
pub struct ColourGradientField {
    core: FieldCore,
    height: PixelNumber,
}

/// Intensity levels of the red, green and blue channels and the bit shift
/// that places each in an RGB565 word.
const RAMPS: [(u16, u32); 3] = [(32, 11), (64, 5), (32, 0)];

/// Total levels across the three ramps.
const RAMP_LEVELS: PixelNumber = 128;

impl ColourGradientField {
    /// A ramp; each level is `width / 128` columns wide.
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
        }
    }
}

impl Widget for ColourGradientField {
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
        if !full {
            self.core.changed = false;
            return Ok(());
        }
        let repeat = self.core.width / RAMP_LEVELS;
        let mut px = x_offset.saturating_add(self.core.x);
        let top = y_offset.saturating_add(self.core.y);
        let bottom = top.saturating_add(self.height).saturating_sub(1);
        for (levels, shift) in RAMPS {
            for level in 0..levels {
                surface.set_color(from_raw(level.wrapping_shl(shift)));
                for _ in 0..repeat {
                    surface.draw_line(px, top, px, bottom)?;
                    px = px.saturating_add(1);
                }
            }
        }
        self.core.changed = false;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use lcd_testing::{DrawCall, RecordingSurface};

    const STYLE: WidgetStyle = WidgetStyle::new(&FONT_6X10);

    #[test]
    fn test_image_drawn_once() {
        static LOGO: [u16; 2] = [3, 0xFFFF];
        let mut f = StaticImageField::new(&STYLE, 5, 6, 2, 2, &LOGO);
        let mut s = RecordingSurface::new(480, 272, &FONT_6X10);
        f.refresh(&mut s, false, 0, 0).unwrap();
        s.assert_call(&DrawCall::CompressedBitmap { x: 5, y: 6, width: 2, height: 2 }).unwrap();
        s.clear();
        f.refresh(&mut s, false, 0, 0).unwrap();
        s.assert_nothing_drawn().unwrap();
    }

    #[test]
    fn test_gradient_draws_every_level() {
        let mut f = ColourGradientField::new(&STYLE, 0, 0, 256, 10);
        let mut s = RecordingSurface::new(480, 272, &FONT_6X10);
        f.refresh(&mut s, true, 0, 0).unwrap();
        let lines: Vec<_> = s
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .collect();
        assert_eq!(lines.len(), 256);
        assert_eq!(lines[255].colour().map(lcd_surface::to_raw), Some(31));
        assert_eq!(lines[63].colour().map(lcd_surface::to_raw), Some(31 << 11));
    }

    #[test]
    fn test_gradient_skipped_on_incremental_refresh() {
        let mut f = ColourGradientField::new(&STYLE, 0, 0, 256, 10);
        let mut s = RecordingSurface::new(480, 272, &FONT_6X10);
        assert!(f.has_changed());
        f.refresh(&mut s, false, 0, 0).unwrap();
        s.assert_nothing_drawn().unwrap();
        assert!(!f.has_changed());
    }
}
