//! Touch input seam.

use lcd_surface::PixelNumber;

/// A touched point in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    /// Column.
    pub x: PixelNumber,
    /// Row.
    pub y: PixelNumber,
}

impl TouchPoint {
    /// A point at `(x, y)`.
    #[must_use]
    pub const fn new(x: PixelNumber, y: PixelNumber) -> Self {
        Self { x, y }
    }
}

/// Touch controller.
///
/// Implementations report calibrated panel coordinates. Debouncing and
/// calibration belong to the implementation.
pub trait TouchPanel {
    /// Sample the panel, returning the touched point if there is one.
    fn read(&mut self) -> Option<TouchPoint>;
}

impl<T: TouchPanel + ?Sized> TouchPanel for &mut T {
    fn read(&mut self) -> Option<TouchPoint> {
        (**self).read()
    }
}
