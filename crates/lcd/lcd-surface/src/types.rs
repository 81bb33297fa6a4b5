//! Value types shared by every drawing surface: pixel coordinates, colours,
//! fonts, icons and fill gradients.

use embedded_graphics::{
    mono_font::MonoFont,
    pixelcolor::{raw::RawU16, Rgb565},
    prelude::*,
};

/// A device pixel coordinate or extent.
pub type PixelNumber = u16;

/// Panel colour. The panels driven here are all 16-bit RGB565.
pub type Colour = Rgb565;

/// A monospaced bitmap font with static lifetime.
pub type Font = &'static MonoFont<'static>;

/// Y coordinate used for measuring prints. Nothing is drawn at this row but
/// the text cursor still advances, so the printed width can be read back.
pub const OFFSCREEN_Y: PixelNumber = 9999;

/// Build a panel colour from 8-bit red, green and blue components.
#[must_use]
pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Colour {
    Rgb565::new(red.wrapping_shr(3), green.wrapping_shr(2), blue.wrapping_shr(3))
}

/// Reinterpret a raw RGB565 word as a colour.
#[must_use]
pub fn from_raw(raw: u16) -> Colour {
    Rgb565::from(RawU16::new(raw))
}

/// The raw RGB565 word of a colour.
#[must_use]
pub fn to_raw(colour: Colour) -> u16 {
    colour.into_storage()
}

/// Height in pixels of one text row in `font`.
#[must_use]
pub fn font_height(font: Font) -> PixelNumber {
    PixelNumber::try_from(font.character_size.height).unwrap_or(PixelNumber::MAX)
}

/// Horizontal advance in pixels of one glyph in `font`, spacing included.
#[must_use]
pub fn char_advance(font: Font) -> PixelNumber {
    let advance = font.character_size.width.saturating_add(font.character_spacing);
    PixelNumber::try_from(advance).unwrap_or(PixelNumber::MAX)
}

/// Vertical colour ramp applied while filling a rectangle.
///
/// Every `step` rows the fill colour's raw RGB565 word is incremented by the
/// raw word of `colour` (wrapping). A `step` of zero disables the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gradient {
    /// Raw increment added to the fill colour.
    pub colour: Colour,
    /// Number of rows between increments.
    pub step: u8,
}

impl Gradient {
    /// Flat fill.
    pub const NONE: Self = Self {
        colour: Rgb565::BLACK,
        step: 0,
    };

    /// A ramp adding `colour` every `step` rows.
    #[must_use]
    pub const fn new(colour: Colour, step: u8) -> Self {
        Self { colour, step }
    }

    /// Whether this gradient changes the colour at all.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.step == 0 || to_raw(self.colour) == 0
    }

    /// Start walking the ramp from `base`, one row at a time.
    #[must_use]
    pub fn walk(&self, base: Colour) -> GradientWalk {
        GradientWalk {
            current: to_raw(base),
            delta: to_raw(self.colour),
            step: self.step,
            count: 0,
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::NONE
    }
}

/// Row-by-row cursor over a [`Gradient`].
#[derive(Debug, Clone)]
pub struct GradientWalk {
    current: u16,
    delta: u16,
    step: u8,
    count: u8,
}

impl GradientWalk {
    /// Colour of the current row.
    #[must_use]
    pub fn colour(&self) -> Colour {
        from_raw(self.current)
    }

    /// Move to the next row.
    pub fn next_row(&mut self) {
        if self.step == 0 {
            return;
        }
        self.count = self.count.wrapping_add(1);
        if self.count == self.step {
            self.count = 0;
            self.current = self.current.wrapping_add(self.delta);
        }
    }
}

/// A raw RGB565 image, stored row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Width in pixels.
    pub width: PixelNumber,
    /// Height in pixels.
    pub height: PixelNumber,
    /// `width * height` raw colour words.
    pub data: &'static [u16],
}

impl Icon {
    /// Wrap static pixel data.
    #[must_use]
    pub const fn new(width: PixelNumber, height: PixelNumber, data: &'static [u16]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};

    #[test]
    fn test_font_metrics() {
        assert_eq!(font_height(&FONT_6X10), 10);
        assert_eq!(char_advance(&FONT_6X10), 6);
        assert_eq!(font_height(&FONT_10X20), 20);
    }

    #[test]
    fn test_raw_round_trip() {
        let c = from_rgb(0xFF, 0x80, 0x08);
        assert_eq!(from_raw(to_raw(c)), c);
    }

    #[test]
    fn test_gradient_steps_every_n_rows() {
        let grad = Gradient::new(from_raw(1), 2);
        let mut walk = grad.walk(from_raw(10));
        assert_eq!(to_raw(walk.colour()), 10);
        walk.next_row();
        assert_eq!(to_raw(walk.colour()), 10);
        walk.next_row();
        assert_eq!(to_raw(walk.colour()), 11);
        walk.next_row();
        walk.next_row();
        assert_eq!(to_raw(walk.colour()), 12);
    }

    #[test]
    fn test_flat_gradient_never_changes() {
        let mut walk = Gradient::NONE.walk(from_raw(0x1234));
        for _ in 0..50 {
            walk.next_row();
        }
        assert_eq!(to_raw(walk.colour()), 0x1234);
        assert!(Gradient::NONE.is_flat());
    }
}
