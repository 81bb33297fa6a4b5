//! Page identifiers: every full-screen page the panel can show.

use crate::events::UiEvent;

/// A full-screen page, selected by its tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Live readings and fan control.
    Status,
    /// Calibration ramp and alert test.
    Setup,
}

impl Page {
    /// Number of pages.
    pub const COUNT: usize = 2;

    /// Position in per-page tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Status => 0,
            Self::Setup => 1,
        }
    }

    /// Event sent by this page's tab.
    #[must_use]
    pub const fn tab_event(self) -> UiEvent {
        match self {
            Self::Status => UiEvent::TabStatus,
            Self::Setup => UiEvent::TabSetup,
        }
    }

    /// Page selected by a tab event.
    #[must_use]
    pub const fn from_tab(event: UiEvent) -> Option<Self> {
        match event {
            UiEvent::TabStatus => Some(Self::Status),
            UiEvent::TabSetup => Some(Self::Setup),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_events_match_pages() {
        for page in [Page::Status, Page::Setup] {
            assert_eq!(Page::from_tab(page.tab_event()), Some(page));
        }
        assert_eq!(Page::from_tab(UiEvent::FanUp), None);
    }

    #[test]
    fn test_indices_are_distinct() {
        assert_ne!(Page::Status.index(), Page::Setup.index());
        assert!(Page::Setup.index() < Page::COUNT);
    }
}
