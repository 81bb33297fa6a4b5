//! Drawing surface contract for 16-bit colour LCD panels.
//!
//! The display field framework only ever talks to a [`DrawingSurface`]: set a
//! colour, fill or outline a rectangle, copy a bitmap, position a text cursor
//! and print. Two implementations exist:
//!
//! - [`GraphicsSurface`] drives any `embedded-graphics` [`DrawTarget`] with
//!   `Rgb565` pixels (panel drivers, the desktop simulator, framebuffers).
//! - `lcd_testing::RecordingSurface` records calls for headless tests.
//!
//! # Text measurement
//!
//! Fonts are measured by printing off screen at [`OFFSCREEN_Y`] and reading
//! the cursor back with [`DrawingSurface::text_x`]; see [`text_width`].
//!
//! ```
//! use embedded_graphics::mono_font::ascii::FONT_6X10;
//! use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Rgb565};
//! use lcd_surface::{text_width, GraphicsSurface};
//!
//! let mut surface = GraphicsSurface::new(MockDisplay::<Rgb565>::new(), &FONT_6X10);
//! assert_eq!(text_width(&mut surface, "abc", 64).ok(), Some(18));
//! ```
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod cursor;
pub mod graphics;
pub mod surface;
pub mod types;

pub use cursor::TextCursor;
pub use graphics::GraphicsSurface;
pub use surface::{text_width, DrawingSurface};
pub use types::{
    char_advance, font_height, from_raw, from_rgb, to_raw, Colour, Font, Gradient, Icon,
    PixelNumber, OFFSCREEN_Y,
};
