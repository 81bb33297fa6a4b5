//! Errors raised by the field and window store.
//!
//! Drawing failures are not listed here: they are the surface's own error
//! type and are propagated unchanged.

/// Display framework errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// No room left in the field arena
    FieldArenaFull,
    /// No room left for another popup window
    PopupArenaFull,
    /// Popup id does not name a stored popup
    UnknownPopup,
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FieldArenaFull => write!(f, "Field arena is full"),
            Self::PopupArenaFull => write!(f, "Popup arena is full"),
            Self::UnknownPopup => write!(f, "Unknown popup id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayError;

    #[test]
    fn test_error_messages() {
        assert_eq!(DisplayError::FieldArenaFull.to_string(), "Field arena is full");
        assert_eq!(DisplayError::UnknownPopup.to_string(), "Unknown popup id");
    }
}
