//! Control-panel application layer: event codes, colour schemes, page
//! construction, page navigation and the main-loop touch step.
//!
//! This crate is `no_std`; fields live in the display crate's fixed arena.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod colours;
pub mod events;
pub mod navigation;
pub mod pages;
pub mod panel;
pub mod screen;

pub use app::ControlPanel;
pub use colours::ColourScheme;
pub use events::UiEvent;
pub use navigation::Navigator;
pub use panel::{Panel, PanelTiming, Touch};
pub use screen::Page;
