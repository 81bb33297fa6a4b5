//! Retained-mode widget and window framework for small colour LCD panels.
//!
//! Widgets ("fields") hold their own state and a dirty flag. The
//! [`WindowManager`] owns every field in a fixed-capacity arena, chains
//! them into the main window's current page or into popup windows, and
//! redraws only what changed when [`WindowManager::refresh`] runs. Touches
//! are resolved to buttons with a small tolerance so a near miss still
//! selects the closest button.
//!
//! Drawing goes through the [`DrawingSurface`](lcd_surface::DrawingSurface)
//! trait, so the same code drives a hardware panel or a recording surface in
//! tests.
//!
//! # Example
//!
//! ```
//! use display::{Alignment, DisplayConfig, IntegerField, WidgetStyle, WindowId, WindowManager};
//! use embedded_graphics::mono_font::ascii::FONT_6X10;
//! use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
//! use lcd_testing::RecordingSurface;
//!
//! let style = WidgetStyle::new(&FONT_6X10);
//! let mut wm: WindowManager<8, 1> =
//!     WindowManager::new(DisplayConfig::new(240, 128), Rgb565::BLACK);
//! let ram = wm
//!     .add_field(
//!         WindowId::Main,
//!         IntegerField::new(&style, 0, 0, 200, Alignment::Left, "Free RAM: ", ""),
//!     )
//!     .unwrap();
//! wm.get_mut::<IntegerField>(ram).unwrap().set_value(1024);
//!
//! let mut lcd = RecordingSurface::new(240, 128, &FONT_6X10);
//! wm.refresh(&mut lcd, true).unwrap();
//! assert_eq!(lcd.printed_text(), "Free RAM: 1024");
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

#[macro_use]
pub mod log;

pub mod arena;
pub mod button;
pub mod config;
pub mod dirty;
pub mod error;
pub mod field;
pub mod image;
pub mod press;
pub mod progress;
pub mod style;
pub mod text;
pub mod touch;
pub mod window;

pub use arena::{FieldArena, FieldIter};
pub use button::{
    ButtonBase, CharButton, CharButtonRow, Event, EventParam, FloatButton, IconButton,
    IconButtonWithText, IconCaption, IntegerButton, TextButton,
};
pub use config::DisplayConfig;
pub use error::DisplayError;
pub use field::{Alignment, Field, FieldCore, FieldId, FieldKind, Widget};
pub use image::{ColourGradientField, StaticImageField};
pub use press::ButtonPress;
pub use progress::ProgressBar;
pub use style::WidgetStyle;
pub use text::{FloatField, IntegerField, StaticTextField, TextField};
pub use touch::{TouchPanel, TouchPoint};
pub use window::{MainWindow, PopupId, PopupWindow, WindowId, WindowManager, AUTO_PLACE};
