//! In-memory RGB565 framebuffer with pixel assertions.

use std::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

/// A headless RGB565 panel.
///
/// Out-of-bounds pixels are dropped, as a panel controller would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl TestCanvas {
    /// A `width` x `height` canvas cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
        }
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Number of pixels in the inclusive rectangle that have `colour`.
    pub fn count_in(&self, x1: u32, y1: u32, x2: u32, y2: u32, colour: Rgb565) -> usize {
        (y1..=y2)
            .flat_map(|y| (x1..=x2).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y) == Some(colour))
            .count()
    }

    /// Assert the colour of one pixel.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb565) -> Result<(), String> {
        match self.pixel(x, y) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(format!("pixel ({x},{y}): expected {expected:?}, got {actual:?}")),
            None => Err(format!(
                "pixel ({x},{y}) is outside the {}x{} canvas",
                self.width, self.height
            )),
        }
    }

    /// Assert that every pixel of the inclusive rectangle has `expected`.
    pub fn assert_region(
        &self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        expected: Rgb565,
    ) -> Result<(), String> {
        let area = ((x2 - x1 + 1) * (y2 - y1 + 1)) as usize;
        let matching = self.count_in(x1, y1, x2, y2, expected);
        if matching == area {
            Ok(())
        } else {
            Err(format!(
                "region ({x1},{y1})-({x2},{y2}): {matching} of {area} pixels are {expected:?}"
            ))
        }
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, colour) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                if x < self.width && y < self.height {
                    self.pixels[(y * self.width + x) as usize] = colour;
                }
            }
        }
        Ok(())
    }
}
