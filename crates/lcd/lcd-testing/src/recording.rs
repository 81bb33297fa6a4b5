//! A [`DrawingSurface`] that records calls instead of drawing.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use lcd_surface::{Colour, DrawingSurface, Font, Gradient, Icon, PixelNumber, TextCursor};

/// One recorded drawing operation, with the colours in force at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// `draw_line`.
    Line {
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
    },
    /// `draw_rect`.
    Rect {
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
    },
    /// `draw_round_rect`.
    RoundRect {
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
    },
    /// `fill_rect`.
    FillRect {
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
        gradient: Gradient,
    },
    /// `fill_round_rect`.
    FillRoundRect {
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
        gradient: Gradient,
    },
    /// `fill_screen`.
    FillScreen { colour: Colour, left_margin: PixelNumber },
    /// `draw_bitmap`.
    Bitmap {
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
    },
    /// `draw_compressed_bitmap`.
    CompressedBitmap {
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
    },
    /// `print`, holding only the glyphs that fitted before the margin.
    Print {
        x: PixelNumber,
        y: PixelNumber,
        text: String,
        colour: Colour,
        /// `None` when the background was transparent.
        background: Option<Colour>,
    },
    /// `clear_to_margin`, recorded as the filled span.
    ClearToMargin {
        x1: PixelNumber,
        x2: PixelNumber,
        y: PixelNumber,
        colour: Colour,
    },
}

impl DrawCall {
    /// Whether this call fills an area (rectangles, screen, margin clears).
    pub fn is_fill(&self) -> bool {
        matches!(
            self,
            Self::FillRect { .. }
                | Self::FillRoundRect { .. }
                | Self::FillScreen { .. }
                | Self::ClearToMargin { .. }
        )
    }

    /// Inclusive horizontal extent of a rectangle fill, in pixels.
    pub fn fill_width(&self) -> Option<PixelNumber> {
        match self {
            Self::FillRect { x1, x2, .. } | Self::FillRoundRect { x1, x2, .. } => {
                Some(x1.abs_diff(*x2) + 1)
            }
            _ => None,
        }
    }

    /// The colour this call drew with.
    pub fn colour(&self) -> Option<Colour> {
        match self {
            Self::Line { colour, .. }
            | Self::Rect { colour, .. }
            | Self::RoundRect { colour, .. }
            | Self::FillRect { colour, .. }
            | Self::FillRoundRect { colour, .. }
            | Self::FillScreen { colour, .. }
            | Self::Print { colour, .. }
            | Self::ClearToMargin { colour, .. } => Some(*colour),
            Self::Bitmap { .. } | Self::CompressedBitmap { .. } => None,
        }
    }
}

/// Headless surface that logs every call.
///
/// Text uses the same cursor model as a real panel: glyphs advance by the
/// font's cell width and stop at the right margin. Prints below the panel
/// (measuring prints) are recorded too but are excluded from the
/// on-screen helpers.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: PixelNumber,
    height: PixelNumber,
    foreground: Colour,
    background: Colour,
    transparent: bool,
    font: Font,
    cursor: TextCursor,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// A `width` x `height` recorder starting with `font`.
    pub fn new(width: PixelNumber, height: PixelNumber, font: Font) -> Self {
        Self {
            width,
            height,
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
            transparent: false,
            font,
            cursor: TextCursor::new(0, 0, width, width),
            calls: Vec::new(),
        }
    }

    /// Panel width.
    pub fn width(&self) -> PixelNumber {
        self.width
    }

    /// Panel height.
    pub fn height(&self) -> PixelNumber {
        self.height
    }

    /// Every recorded call, measuring prints included.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forget recorded calls. Colours, font and cursor are kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn is_on_screen(&self, call: &DrawCall) -> bool {
        match call {
            DrawCall::Print { y, .. } => *y < self.height,
            _ => true,
        }
    }

    /// Calls that reached the panel.
    pub fn drawn(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|c| self.is_on_screen(c)).collect()
    }

    /// Number of calls that reached the panel.
    pub fn draw_count(&self) -> usize {
        self.drawn().len()
    }

    /// On-screen prints as `(x, y, text)`.
    pub fn prints(&self) -> Vec<(PixelNumber, PixelNumber, &str)> {
        self.drawn()
            .into_iter()
            .filter_map(|c| match c {
                DrawCall::Print { x, y, text, .. } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// All on-screen text concatenated in call order.
    pub fn printed_text(&self) -> String {
        self.prints().into_iter().map(|(_, _, t)| t).collect()
    }

    /// Area fills in call order.
    pub fn fills(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|c| c.is_fill()).collect()
    }

    /// Assert that nothing reached the panel.
    pub fn assert_nothing_drawn(&self) -> Result<(), String> {
        let drawn = self.drawn();
        if drawn.is_empty() {
            Ok(())
        } else {
            Err(format!("expected no drawing, got {} calls: {:?}", drawn.len(), drawn))
        }
    }

    /// Assert that the on-screen text, concatenated, equals `expected`.
    pub fn assert_printed(&self, expected: &str) -> Result<(), String> {
        let actual = self.printed_text();
        if actual == expected {
            Ok(())
        } else {
            Err(format!("expected printed text {expected:?}, got {actual:?}"))
        }
    }

    /// Assert that some call exactly matches `expected`.
    pub fn assert_call(&self, expected: &DrawCall) -> Result<(), String> {
        if self.calls.contains(expected) {
            Ok(())
        } else {
            Err(format!("no call matched {expected:?}; recorded {:?}", self.calls))
        }
    }

    /// Assert that a flat or gradient rectangle fill covered exactly the
    /// inclusive corners given, in `colour`.
    pub fn assert_fill(
        &self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
    ) -> Result<(), String> {
        let found = self.calls.iter().any(|c| match c {
            DrawCall::FillRect { x1: a, y1: b, x2: c2, y2: d, colour: col, .. } => {
                (*a, *b, *c2, *d, *col) == (x1, y1, x2, y2, colour)
            }
            _ => false,
        });
        if found {
            Ok(())
        } else {
            Err(format!(
                "no fill ({x1},{y1})-({x2},{y2}) in {colour:?}; fills were {:?}",
                self.fills()
            ))
        }
    }

    fn record(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}

impl DrawingSurface for RecordingSurface {
    type Error = Infallible;

    fn set_color(&mut self, colour: Colour) {
        self.foreground = colour;
    }

    fn set_back_color(&mut self, colour: Colour) {
        self.background = colour;
    }

    fn set_transparent_background(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn font(&self) -> Font {
        self.font
    }

    fn draw_line(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Infallible> {
        let colour = self.foreground;
        self.record(DrawCall::Line { x1, y1, x2, y2, colour });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Infallible> {
        let colour = self.foreground;
        self.record(DrawCall::Rect { x1, y1, x2, y2, colour });
        Ok(())
    }

    fn draw_round_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Infallible> {
        let colour = self.foreground;
        self.record(DrawCall::RoundRect { x1, y1, x2, y2, colour });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
    ) -> Result<(), Infallible> {
        let colour = self.foreground;
        self.record(DrawCall::FillRect { x1, y1, x2, y2, colour, gradient });
        Ok(())
    }

    fn fill_round_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
    ) -> Result<(), Infallible> {
        let colour = self.foreground;
        self.record(DrawCall::FillRoundRect { x1, y1, x2, y2, colour, gradient });
        Ok(())
    }

    fn fill_screen(&mut self, colour: Colour, left_margin: PixelNumber) -> Result<(), Infallible> {
        self.record(DrawCall::FillScreen { colour, left_margin });
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        x: PixelNumber,
        y: PixelNumber,
        icon: &Icon,
    ) -> Result<(), Infallible> {
        self.record(DrawCall::Bitmap { x, y, width: icon.width, height: icon.height });
        Ok(())
    }

    fn draw_compressed_bitmap(
        &mut self,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
        _data: &[u16],
    ) -> Result<(), Infallible> {
        self.record(DrawCall::CompressedBitmap { x, y, width, height });
        Ok(())
    }

    fn set_text_pos(&mut self, x: PixelNumber, y: PixelNumber, right_margin: PixelNumber) {
        self.cursor = TextCursor::new(x, y, right_margin, self.width);
    }

    fn print(&mut self, text: &str) -> Result<(), Infallible> {
        let start = self.cursor.x;
        let mut fitted = String::new();
        for ch in text.chars() {
            if self.cursor.advance(self.font).is_none() {
                break;
            }
            fitted.push(ch);
        }
        let background = (!self.transparent).then_some(self.background);
        self.record(DrawCall::Print {
            x: start,
            y: self.cursor.y,
            text: fitted,
            colour: self.foreground,
            background,
        });
        Ok(())
    }

    fn text_x(&self) -> PixelNumber {
        self.cursor.x
    }

    fn clear_to_margin(&mut self) -> Result<(), Infallible> {
        let TextCursor { x, y, right_margin } = self.cursor;
        if x < right_margin {
            let colour = self.background;
            self.record(DrawCall::ClearToMargin { x1: x, x2: right_margin - 1, y, colour });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use lcd_surface::{text_width, OFFSCREEN_Y};

    #[test]
    fn test_measuring_print_is_not_on_screen() {
        let mut s = RecordingSurface::new(100, 50, &FONT_6X10);
        let w = text_width(&mut s, "abcd", 100).unwrap();
        assert_eq!(w, 24);
        assert_eq!(s.calls().len(), 1);
        assert_eq!(s.draw_count(), 0);
        assert!(matches!(s.calls()[0], DrawCall::Print { y: OFFSCREEN_Y, .. }));
    }

    #[test]
    fn test_print_truncates_at_margin() {
        let mut s = RecordingSurface::new(100, 50, &FONT_6X10);
        s.set_text_pos(0, 0, 14);
        s.print("abcdef").unwrap();
        // Two whole glyphs plus one clipped glyph.
        s.assert_printed("abc").unwrap();
        assert_eq!(s.text_x(), 14);
    }

    #[test]
    fn test_print_int_and_float() {
        let mut s = RecordingSurface::new(200, 50, &FONT_6X10);
        s.set_text_pos(0, 0, 200);
        s.print_int(-42).unwrap();
        s.print_float(3.14159, 2).unwrap();
        s.assert_printed("-423.14").unwrap();
    }

    #[test]
    fn test_clear_to_margin_uses_background() {
        let mut s = RecordingSurface::new(100, 50, &FONT_6X10);
        s.set_back_color(Rgb565::BLUE);
        s.set_text_pos(10, 5, 40);
        s.print("ab").unwrap();
        s.clear_to_margin().unwrap();
        s.assert_call(&DrawCall::ClearToMargin { x1: 22, x2: 39, y: 5, colour: Rgb565::BLUE })
            .unwrap();
    }
}
