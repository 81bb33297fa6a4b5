//! [`DrawingSurface`] backed by any embedded-graphics [`DrawTarget`].
//!
//! Works with real panel drivers, `embedded-graphics-simulator` windows and
//! in-memory framebuffers alike.

use embedded_graphics::{
    mono_font::MonoTextStyleBuilder,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::cursor::TextCursor;
use crate::surface::DrawingSurface;
use crate::types::{font_height, from_raw, Colour, Font, Gradient, Icon, PixelNumber};

fn point(x: PixelNumber, y: PixelNumber) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

fn corners(
    x1: PixelNumber,
    y1: PixelNumber,
    x2: PixelNumber,
    y2: PixelNumber,
) -> (PixelNumber, PixelNumber, PixelNumber, PixelNumber) {
    (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
}

/// A drawing surface over an embedded-graphics target.
pub struct GraphicsSurface<D> {
    target: D,
    foreground: Colour,
    background: Colour,
    transparent: bool,
    font: Font,
    cursor: TextCursor,
    width: PixelNumber,
    height: PixelNumber,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap `target`, taking the panel size from its bounding box.
    pub fn new(target: D, font: Font) -> Self {
        let size = target.bounding_box().size;
        let width = PixelNumber::try_from(size.width).unwrap_or(PixelNumber::MAX);
        let height = PixelNumber::try_from(size.height).unwrap_or(PixelNumber::MAX);
        Self {
            target,
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
            transparent: false,
            font,
            cursor: TextCursor::new(0, 0, width, width),
            width,
            height,
        }
    }

    /// Panel width in pixels.
    pub fn width(&self) -> PixelNumber {
        self.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> PixelNumber {
        self.height
    }

    /// Borrow the wrapped target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Mutably borrow the wrapped target.
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwrap the target.
    pub fn into_inner(self) -> D {
        self.target
    }

    fn fill_area(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        colour: Colour,
    ) -> Result<(), D::Error> {
        Rectangle::with_corners(point(x1, y1), point(x2, y2))
            .into_styled(PrimitiveStyle::with_fill(colour))
            .draw(&mut self.target)
    }

    /// Fill rows `y1..=y2`, each row inset from both sides by `inset(row)`.
    fn fill_rows<F>(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
        inset: F,
    ) -> Result<(), D::Error>
    where
        F: Fn(PixelNumber) -> PixelNumber,
    {
        let mut walk = gradient.walk(self.foreground);
        for (row, y) in (y1..=y2).enumerate() {
            let row = PixelNumber::try_from(row).unwrap_or(PixelNumber::MAX);
            let pad = inset(row);
            let colour = walk.colour();
            self.fill_area(x1.saturating_add(pad), y, x2.saturating_sub(pad), y, colour)?;
            walk.next_row();
        }
        Ok(())
    }
}

impl<D> DrawingSurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

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
    ) -> Result<(), Self::Error> {
        Line::new(point(x1, y1), point(x2, y2))
            .into_styled(PrimitiveStyle::with_stroke(self.foreground, 1))
            .draw(&mut self.target)
    }

    fn draw_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Self::Error> {
        Rectangle::with_corners(point(x1, y1), point(x2, y2))
            .into_styled(PrimitiveStyle::with_stroke(self.foreground, 1))
            .draw(&mut self.target)
    }

    fn draw_round_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> Result<(), Self::Error> {
        let (x1, y1, x2, y2) = corners(x1, y1, x2, y2);
        if x2.saturating_sub(x1) <= 4 || y2.saturating_sub(y1) <= 4 {
            return self.draw_rect(x1, y1, x2, y2);
        }
        let colour = self.foreground;
        let (left, right) = (x1.saturating_add(1), x2.saturating_sub(1));
        let (top, bottom) = (y1.saturating_add(1), y2.saturating_sub(1));
        for (px, py) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            Pixel(point(px, py), colour).draw(&mut self.target)?;
        }
        self.fill_area(x1.saturating_add(2), y1, x2.saturating_sub(2), y1, colour)?;
        self.fill_area(x1.saturating_add(2), y2, x2.saturating_sub(2), y2, colour)?;
        self.fill_area(x1, y1.saturating_add(2), x1, y2.saturating_sub(2), colour)?;
        self.fill_area(x2, y1.saturating_add(2), x2, y2.saturating_sub(2), colour)
    }

    fn fill_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
    ) -> Result<(), Self::Error> {
        let (x1, y1, x2, y2) = corners(x1, y1, x2, y2);
        if gradient.is_flat() {
            let colour = self.foreground;
            return self.fill_area(x1, y1, x2, y2, colour);
        }
        self.fill_rows(x1, y1, x2, y2, gradient, |_| 0)
    }

    fn fill_round_rect(
        &mut self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
        gradient: Gradient,
    ) -> Result<(), Self::Error> {
        let (x1, y1, x2, y2) = corners(x1, y1, x2, y2);
        if x2.saturating_sub(x1) <= 4 || y2.saturating_sub(y1) <= 4 {
            return self.fill_rect(x1, y1, x2, y2, gradient);
        }
        let last = y2.saturating_sub(y1);
        self.fill_rows(x1, y1, x2, y2, gradient, |row| {
            let from_edge = row.min(last.saturating_sub(row));
            2u16.saturating_sub(from_edge)
        })
    }

    fn fill_screen(&mut self, colour: Colour, left_margin: PixelNumber) -> Result<(), Self::Error> {
        if left_margin >= self.width || self.height == 0 {
            return Ok(());
        }
        let (right, bottom) = (self.width.saturating_sub(1), self.height.saturating_sub(1));
        self.fill_area(left_margin, 0, right, bottom, colour)
    }

    fn draw_bitmap(
        &mut self,
        x: PixelNumber,
        y: PixelNumber,
        icon: &Icon,
    ) -> Result<(), Self::Error> {
        let area = Rectangle::new(
            point(x, y),
            Size::new(u32::from(icon.width), u32::from(icon.height)),
        );
        self.target
            .fill_contiguous(&area, icon.data.iter().map(|&raw| from_raw(raw)))
    }

    fn draw_compressed_bitmap(
        &mut self,
        x: PixelNumber,
        y: PixelNumber,
        width: PixelNumber,
        height: PixelNumber,
        data: &[u16],
    ) -> Result<(), Self::Error> {
        let pixels = RunLengthPixels::new(data, width, height).map(|(tx, ty, raw)| {
            Pixel(point(x.saturating_add(tx), y.saturating_add(ty)), from_raw(raw))
        });
        self.target.draw_iter(pixels)
    }

    fn set_text_pos(&mut self, x: PixelNumber, y: PixelNumber, right_margin: PixelNumber) {
        self.cursor = TextCursor::new(x, y, right_margin, self.width);
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        let on_screen = self.cursor.y < self.height;
        let builder = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(self.foreground);
        let style = if self.transparent {
            builder.build()
        } else {
            builder.background_color(self.background).build()
        };
        let row_height = u32::from(font_height(self.font));
        let mut glyph = [0u8; 4];
        for ch in text.chars() {
            let Some(span) = self.cursor.advance(self.font) else {
                break;
            };
            if !on_screen {
                continue;
            }
            let origin = point(span.x, self.cursor.y);
            let clip = Rectangle::new(origin, Size::new(u32::from(span.width), row_height));
            let encoded: &str = ch.encode_utf8(&mut glyph);
            Text::with_baseline(encoded, origin, style, Baseline::Top)
                .draw(&mut self.target.clipped(&clip))?;
        }
        Ok(())
    }

    fn text_x(&self) -> PixelNumber {
        self.cursor.x
    }

    fn clear_to_margin(&mut self) -> Result<(), Self::Error> {
        let TextCursor { x, y, right_margin } = self.cursor;
        if x >= right_margin || y >= self.height {
            return Ok(());
        }
        let bottom = y.saturating_add(font_height(self.font)).saturating_sub(1);
        let colour = self.background;
        self.fill_area(x, y, right_margin.saturating_sub(1), bottom, colour)
    }
}

/// Decoder for the run-length image format, yielding `(x, y, raw colour)`
/// column by column.
#[derive(Debug, Clone)]
pub struct RunLengthPixels<'a> {
    data: &'a [u16],
    width: PixelNumber,
    height: PixelNumber,
    tx: PixelNumber,
    ty: PixelNumber,
    repeat: u16,
    colour: u16,
}

impl<'a> RunLengthPixels<'a> {
    /// Decode `data` as a `width` x `height` image.
    pub fn new(data: &'a [u16], width: PixelNumber, height: PixelNumber) -> Self {
        Self {
            data,
            width,
            height,
            tx: 0,
            ty: 0,
            repeat: 0,
            colour: 0,
        }
    }
}

impl Iterator for RunLengthPixels<'_> {
    type Item = (PixelNumber, PixelNumber, u16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.height == 0 || self.tx >= self.width {
            return None;
        }
        if self.repeat == 0 {
            let (&count, rest) = self.data.split_first()?;
            let (&colour, rest) = rest.split_first()?;
            self.data = rest;
            self.repeat = count;
            self.colour = colour;
        } else {
            self.repeat = self.repeat.saturating_sub(1);
        }
        let item = (self.tx, self.ty, self.colour);
        self.ty = self.ty.saturating_add(1);
        if self.ty >= self.height {
            self.ty = 0;
            self.tx = self.tx.saturating_add(1);
        }
        Some(item)
    }
}
