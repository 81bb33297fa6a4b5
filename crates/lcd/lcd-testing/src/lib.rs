//! LCD UI testing utilities.
//!
//! Headless stand-ins for a panel, with assertion helpers that return
//! `Result<(), String>` so failures carry a readable message.
//!
//! - [`RecordingSurface`] records every [`DrawingSurface`] call. Use it to
//!   check *which* drawing an incremental refresh issued: how many fills,
//!   which strings were printed and where, in which colours.
//! - [`TestCanvas`] is an in-memory RGB565 framebuffer implementing
//!   [`DrawTarget`]. Wrap it in a `GraphicsSurface` to check actual pixels.
//!
//! # Quick start
//!
//! ```
//! use embedded_graphics::mono_font::ascii::FONT_6X10;
//! use lcd_surface::DrawingSurface;
//! use lcd_testing::RecordingSurface;
//!
//! let mut s = RecordingSurface::new(480, 272, &FONT_6X10);
//! s.set_text_pos(10, 20, 200);
//! s.print("Hello").unwrap();
//! s.assert_printed("Hello").unwrap();
//! assert_eq!(s.text_x(), 40);
//! ```
//!
//! [`DrawingSurface`]: lcd_surface::DrawingSurface
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
// Test tooling: indexing into known-length buffers and plain arithmetic on
// small test geometries.
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::use_debug)]

mod canvas;
mod recording;

pub use canvas::TestCanvas;
pub use recording::{DrawCall, RecordingSurface};
