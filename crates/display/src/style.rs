//! Construction-time styling for batches of fields.
//!
//! Page builders create one [`WidgetStyle`] per group of related fields and
//! hand it to every constructor in that group. Changing style for the next
//! group means building another value; nothing is shared or global.

use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};
use lcd_surface::{Colour, Font, PixelNumber};

/// Rows between gradient steps on button faces.
pub const BUTTON_GRAD_STEP: u8 = 12;

/// Colours, fonts and margins applied to newly constructed fields.
#[derive(Debug, Clone, Copy)]
pub struct WidgetStyle {
    /// Text and outline colour.
    pub fg: Colour,
    /// Background colour.
    pub bg: Colour,
    /// Button border colour.
    pub border: Colour,
    /// Raw gradient increment for button faces.
    pub grad: Colour,
    /// Button face colour while pressed.
    pub pressed_bg: Colour,
    /// Raw gradient increment while pressed.
    pub pressed_grad: Colour,
    /// Font for text fields.
    pub font: Font,
    /// Font for button captions.
    pub button_font: Font,
    /// Padding between a button border and its caption.
    pub text_margin: PixelNumber,
    /// Padding between a button border and its icon.
    pub icon_margin: PixelNumber,
}

impl WidgetStyle {
    /// White on black, flat grey buttons, `font` everywhere.
    #[must_use]
    pub const fn new(font: Font) -> Self {
        Self {
            fg: Rgb565::WHITE,
            bg: Rgb565::BLACK,
            border: Rgb565::WHITE,
            grad: Rgb565::BLACK,
            pressed_bg: Rgb565::new(16, 32, 16),
            pressed_grad: Rgb565::BLACK,
            font,
            button_font: font,
            text_margin: 1,
            icon_margin: 1,
        }
    }

    /// Same style with different text colours.
    #[must_use]
    pub const fn with_colours(mut self, fg: Colour, bg: Colour) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Same style with different button decoration.
    #[must_use]
    pub const fn with_button_colours(
        mut self,
        border: Colour,
        grad: Colour,
        pressed_bg: Colour,
        pressed_grad: Colour,
    ) -> Self {
        self.border = border;
        self.grad = grad;
        self.pressed_bg = pressed_bg;
        self.pressed_grad = pressed_grad;
        self
    }

    /// Same style with a different text font.
    #[must_use]
    pub const fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Same style with a different button font.
    #[must_use]
    pub const fn with_button_font(mut self, font: Font) -> Self {
        self.button_font = font;
        self
    }

    /// Same style with different button paddings.
    #[must_use]
    pub const fn with_margins(
        mut self,
        text_margin: PixelNumber,
        icon_margin: PixelNumber,
    ) -> Self {
        self.text_margin = text_margin;
        self.icon_margin = icon_margin;
        self
    }
}
