//! Text cursor model shared by all surfaces.
//!
//! Printing advances the cursor one glyph at a time and stops at the right
//! margin. A glyph that only partly fits is clipped at the margin and the
//! cursor ends exactly on the margin.

use crate::types::{char_advance, Font, PixelNumber};

/// Position of the next glyph and the column printing must not reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextCursor {
    /// X of the next glyph.
    pub x: PixelNumber,
    /// Top row of the current line.
    pub y: PixelNumber,
    /// First column past the printable area.
    pub right_margin: PixelNumber,
}

/// One glyph placement produced by [`TextCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSpan {
    /// Left column of the glyph cell.
    pub x: PixelNumber,
    /// Visible width of the glyph cell after clipping at the margin.
    pub width: PixelNumber,
}

impl TextCursor {
    /// A cursor at `(x, y)` that clips at `right_margin`, itself limited to
    /// one past the last column of a `screen_width` panel.
    #[must_use]
    pub fn new(
        x: PixelNumber,
        y: PixelNumber,
        right_margin: PixelNumber,
        screen_width: PixelNumber,
    ) -> Self {
        Self {
            x,
            y,
            right_margin: right_margin.min(screen_width),
        }
    }

    /// Columns left before the margin.
    #[must_use]
    pub fn remaining(&self) -> PixelNumber {
        self.right_margin.saturating_sub(self.x)
    }

    /// Place one glyph of `font`. Returns `None` once the margin is reached.
    pub fn advance(&mut self, font: Font) -> Option<GlyphSpan> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let width = char_advance(font).min(remaining);
        let span = GlyphSpan { x: self.x, width };
        self.x = self.x.saturating_add(width);
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    #[test]
    fn test_advance_stops_at_margin() {
        let mut cursor = TextCursor::new(0, 0, 15, 480);
        assert_eq!(cursor.advance(&FONT_6X10), Some(GlyphSpan { x: 0, width: 6 }));
        assert_eq!(cursor.advance(&FONT_6X10), Some(GlyphSpan { x: 6, width: 6 }));
        // Third glyph is clipped to the three remaining columns.
        assert_eq!(cursor.advance(&FONT_6X10), Some(GlyphSpan { x: 12, width: 3 }));
        assert_eq!(cursor.advance(&FONT_6X10), None);
        assert_eq!(cursor.x, 15);
    }

    #[test]
    fn test_margin_limited_to_screen() {
        let cursor = TextCursor::new(0, 0, 9999, 320);
        assert_eq!(cursor.right_margin, 320);
    }
}
