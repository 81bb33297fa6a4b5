//! Colour schemes and the widget styles derived from them.

use display::WidgetStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_6X13};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use lcd_surface::{from_rgb, Colour};

const LIGHT_BLUE: Colour = from_rgb(224, 224, 255);
const LIGHT_GREEN: Colour = from_rgb(192, 255, 192);
const MID_GREEN: Colour = from_rgb(0, 160, 0);
const DARK_BLUE: Colour = from_rgb(0, 0, 64);
const MID_GREY: Colour = from_rgb(80, 80, 80);

/// Colours for one look of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourScheme {
    /// Scheme name shown in the setup page.
    pub name: &'static str,
    /// Screen background.
    pub background: Colour,
    /// Label and value text.
    pub text: Colour,
    /// Button caption text.
    pub button_text: Colour,
    /// Button face.
    pub button_back: Colour,
    /// Raw gradient step on button faces.
    pub button_grad: Colour,
    /// Button face while pressed.
    pub button_pressed_back: Colour,
    /// Raw gradient step while pressed.
    pub button_pressed_grad: Colour,
    /// Button outline.
    pub button_border: Colour,
    /// Popup background.
    pub popup_back: Colour,
    /// Popup border.
    pub popup_border: Colour,
    /// Popup text.
    pub popup_text: Colour,
    /// Filled part of progress bars.
    pub progress: Colour,
}

impl ColourScheme {
    /// Dark text on white.
    pub const LIGHT: Self = Self {
        name: "Light",
        background: Rgb565::WHITE,
        text: Rgb565::BLACK,
        button_text: Rgb565::BLACK,
        button_back: Rgb565::WHITE,
        button_grad: from_rgb(239, 243, 247),
        button_pressed_back: LIGHT_GREEN,
        button_pressed_grad: from_rgb(239, 243, 247),
        button_border: Rgb565::BLACK,
        popup_back: LIGHT_BLUE,
        popup_border: Rgb565::BLACK,
        popup_text: Rgb565::BLACK,
        progress: MID_GREEN,
    };

    /// White text on black.
    pub const DARK: Self = Self {
        name: "Dark",
        background: Rgb565::BLACK,
        text: Rgb565::WHITE,
        button_text: Rgb565::WHITE,
        button_back: Rgb565::BLACK,
        button_grad: from_rgb(8, 4, 8),
        button_pressed_back: MID_GREY,
        button_pressed_grad: from_rgb(8, 8, 8),
        button_border: Rgb565::WHITE,
        popup_back: DARK_BLUE,
        popup_border: Rgb565::WHITE,
        popup_text: Rgb565::WHITE,
        progress: MID_GREEN,
    };

    /// Style for labels and values on the main screen.
    #[must_use]
    pub fn text_style(&self) -> WidgetStyle {
        self.base().with_colours(self.text, self.background)
    }

    /// Style for buttons on the main screen.
    #[must_use]
    pub fn button_style(&self) -> WidgetStyle {
        self.base().with_colours(self.button_text, self.button_back)
    }

    /// Style for text inside popups.
    #[must_use]
    pub fn popup_style(&self) -> WidgetStyle {
        self.base().with_colours(self.popup_text, self.popup_back)
    }

    /// Style for progress bars.
    #[must_use]
    pub fn progress_style(&self) -> WidgetStyle {
        self.base().with_colours(self.progress, self.background)
    }

    fn base(&self) -> WidgetStyle {
        WidgetStyle::new(&FONT_6X10)
            .with_button_font(&FONT_6X13)
            .with_button_colours(
                self.button_border,
                self.button_grad,
                self.button_pressed_back,
                self.button_pressed_grad,
            )
            .with_margins(2, 1)
    }
}

impl Default for ColourScheme {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_follow_scheme() {
        let scheme = ColourScheme::LIGHT;
        let text = scheme.text_style();
        assert_eq!((text.fg, text.bg), (Rgb565::BLACK, Rgb565::WHITE));
        let button = scheme.button_style();
        assert_eq!(button.border, Rgb565::BLACK);
        assert_eq!(button.pressed_bg, LIGHT_GREEN);
        assert_eq!(scheme.progress_style().fg, MID_GREEN);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ColourScheme::default(), ColourScheme::DARK);
    }
}
