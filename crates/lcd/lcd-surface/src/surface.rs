//! The drawing surface contract.
//!
//! Coordinates are inclusive corner pairs in device pixels, the way LCD
//! controllers address their window registers. Reversed corners are
//! normalised by the surface. Clipping to the panel is the surface's job.

use core::fmt::Write as _;

use heapless::String;

use crate::types::{Colour, Font, Gradient, Icon, PixelNumber, OFFSCREEN_Y};

/// Capacity of the scratch buffer used to format numbers.
const NUMBER_BUF: usize = 48;

/// Immediate-mode drawing operations consumed by the display fields.
///
/// Outline and fill primitives use the foreground colour set with
/// [`set_color`](Self::set_color); text uses the foreground colour for glyphs
/// and the background colour for the cell behind them unless the background
/// is transparent.
pub trait DrawingSurface {
    /// Error reported by the underlying panel.
    type Error;

    /// Set the foreground colour.
    fn set_color(&mut self, colour: Colour);

    /// Set the background colour used behind glyphs and by
    /// [`clear_to_margin`](Self::clear_to_margin).
    fn set_back_color(&mut self, colour: Colour);

    /// When set, glyph cells are not filled behind the glyph.
    fn set_transparent_background(&mut self, transparent: bool);

    /// Select the text font.
    fn set_font(&mut self, font: Font);

    /// Currently selected font.
    fn font(&self) -> Font;

    /// Draw a one pixel line between two inclusive end points.
    fn draw_line(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Self::Error>;

    /// Draw a rectangle outline.
    fn draw_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Self::Error>;

    /// Draw a rectangle outline with one pixel cut from each corner.
    fn draw_round_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Self::Error>;

    /// Fill a rectangle, ramping the colour row by row with `gradient`.
    fn fill_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
    ) -> Result<(), Self::Error>;

    /// Fill a rectangle with rounded corners, ramping like
    /// [`fill_rect`](Self::fill_rect).
    fn fill_round_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
    ) -> Result<(), Self::Error>;

    /// Fill the whole panel with `colour`, leaving the columns left of
    /// `left_margin` untouched.
    fn fill_screen(&mut self, colour: Colour, left_margin: PixelNumber) -> Result<(), Self::Error>;

    /// Copy an icon with its top-left corner at `(x, y)`.
    fn draw_bitmap(
        &mut self,
        x: PixelNumber,
        y: PixelNumber,
        icon: &Icon,
    ) -> Result<(), Self::Error>;

    /// Draw a run-length compressed image.
    ///
    /// `data` holds `(repeat, colour)` word pairs: `colour` is written once
    /// and then `repeat` more times. Pixels are visited column by column.
    fn draw_compressed_bitmap(
        &mut self,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
        data: &[u16],
    ) -> Result<(), Self::Error>;

    /// Move the text cursor and set the column printing stops at.
    fn set_text_pos(&mut self, x: PixelNumber, y: PixelNumber, right_margin: PixelNumber);

    /// Print at the cursor, advancing it. Nothing is drawn when the cursor
    /// row is below the panel, but the cursor still advances.
    fn print(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Current X of the text cursor.
    fn text_x(&self) -> PixelNumber;

    /// Fill from the cursor to the right margin, one text row high, in the
    /// background colour.
    fn clear_to_margin(&mut self) -> Result<(), Self::Error>;

    /// Print a signed decimal integer.
    fn print_int(&mut self, value: i32) -> Result<(), Self::Error> {
        let mut buf: String<NUMBER_BUF> = String::new();
        // Truncated output is still printed.
        let _ = write!(buf, "{value}");
        self.print(&buf)
    }

    /// Print a float with a fixed number of decimals.
    fn print_float(&mut self, value: f32, decimals: u8) -> Result<(), Self::Error> {
        let mut buf: String<NUMBER_BUF> = String::new();
        let _ = write!(buf, "{:.*}", usize::from(decimals), value);
        self.print(&buf)
    }
}

/// Measure `text` in the current font by printing it off screen.
///
/// The result is capped at `max_width`. The text cursor is left at the end of
/// the measuring print.
pub fn text_width<S>(
    surface: &mut S,
    text: &str,
    max_width: PixelNumber,
) -> Result<PixelNumber, S::Error>
where
    S: DrawingSurface + ?Sized,
{
    surface.set_text_pos(0, OFFSCREEN_Y, max_width);
    surface.print(text)?;
    Ok(surface.text_x())
}
