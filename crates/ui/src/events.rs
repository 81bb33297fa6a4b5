//! Event codes carried by the panel's buttons.

use display::Event;

/// Every action a button on the panel can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum UiEvent {
    /// Switch to the status page.
    TabStatus = 1,
    /// Switch to the setup page.
    TabSetup = 2,
    /// Raise the fan speed.
    FanUp = 3,
    /// Lower the fan speed.
    FanDown = 4,
    /// Show the alert popup.
    OpenAlert = 5,
    /// Dismiss the alert popup.
    CloseAlert = 6,
}

impl UiEvent {
    const ALL: [Self; 6] = [
        Self::TabStatus,
        Self::TabSetup,
        Self::FanUp,
        Self::FanDown,
        Self::OpenAlert,
        Self::CloseAlert,
    ];

    /// Decode a button's event code.
    #[must_use]
    pub fn from_event(event: Event) -> Option<Self> {
        Self::ALL.into_iter().find(|e| Event::from(*e) == event)
    }
}

impl From<UiEvent> for Event {
    fn from(event: UiEvent) -> Self {
        Event(event as u8)
    }
}
