//! Panel geometry and touch configuration.

use lcd_surface::PixelNumber;

/// Default touch tolerance: a touch may miss a button by up to 7 px on
/// each axis and still select it.
pub const DEFAULT_TOUCH_TOLERANCE: PixelNumber = 8;

/// Physical panel layout the window system works within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DisplayConfig {
    /// Panel width in pixels.
    pub width: PixelNumber,
    /// Panel height in pixels.
    pub height: PixelNumber,
    /// Columns on the left that full-screen clears leave alone.
    pub left_margin: PixelNumber,
    /// Hit-test tolerance. A touch selects a button only when it misses the
    /// button by less than this on both axes.
    pub touch_tolerance: PixelNumber,
}

impl DisplayConfig {
    /// A `width` x `height` panel with no left margin and the default touch
    /// tolerance.
    #[must_use]
    pub const fn new(width: PixelNumber, height: PixelNumber) -> Self {
        Self {
            width,
            height,
            left_margin: 0,
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
        }
    }

    /// Same panel with a static left margin.
    #[must_use]
    pub const fn with_left_margin(mut self, left_margin: PixelNumber) -> Self {
        self.left_margin = left_margin;
        self
    }

    /// Same panel with a different touch tolerance.
    #[must_use]
    pub const fn with_touch_tolerance(mut self, tolerance: PixelNumber) -> Self {
        self.touch_tolerance = tolerance;
        self
    }

    /// Whether the inclusive rectangle lies wholly on the panel.
    #[must_use]
    pub fn contains(
        &self,
        x1: PixelNumber,
        y1: PixelNumber,
        x2: PixelNumber,
        y2: PixelNumber,
    ) -> bool {
        x1 <= x2 && y1 <= y2 && x2 < self.width && y2 < self.height
    }

    /// 4.3" panel, 480 x 272.
    pub const DISPLAY_480X272: Self = Self::new(480, 272);
    /// 5" and 7" panels, 800 x 480.
    pub const DISPLAY_800X480: Self = Self::new(800, 480);
    /// 2.8" panel, 320 x 240.
    pub const DISPLAY_320X240: Self = Self::new(320, 240);
    /// Default configuration.
    pub const DEFAULT: Self = Self::DISPLAY_480X272;
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_480x272() {
        let cfg = DisplayConfig::default();
        assert_eq!((cfg.width, cfg.height), (480, 272));
        assert_eq!(cfg.touch_tolerance, 8);
        assert_eq!(cfg.left_margin, 0);
    }

    #[test]
    fn test_contains() {
        let cfg = DisplayConfig::DISPLAY_320X240;
        assert!(cfg.contains(0, 0, 319, 239));
        assert!(!cfg.contains(0, 0, 320, 10));
        assert!(!cfg.contains(10, 10, 5, 20));
    }
}
