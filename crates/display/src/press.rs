//! Identity of a touched button.

use crate::field::FieldId;

/// The button a touch resolved to, or none.
///
/// `index` selects the key of a [`CharButtonRow`](crate::button::CharButtonRow)
/// and is zero for every other button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPress {
    button: Option<FieldId>,
    index: u16,
}

impl ButtonPress {
    /// No button.
    pub const NONE: Self = Self {
        button: None,
        index: 0,
    };

    /// A press of `button`.
    #[must_use]
    pub const fn new(button: FieldId, index: u16) -> Self {
        Self {
            button: Some(button),
            index,
        }
    }

    /// Whether this names a button.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.button.is_some()
    }

    /// The pressed button.
    #[must_use]
    pub const fn button(&self) -> Option<FieldId> {
        self.button
    }

    /// Sub-button index.
    #[must_use]
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Forget the button.
    pub fn clear(&mut self) {
        *self = Self::NONE;
    }
}
