//! Fixed-capacity field storage.
//!
//! Fields are allocated once while pages are built and never freed. Window
//! lists are singly linked through [`FieldCore::next`](crate::field::FieldCore),
//! so inserting at the head of a list is O(1) and the most recently added
//! field comes first when a list is walked.

use heapless::Vec;

use crate::error::DisplayError;
use crate::field::{Field, FieldId, Widget};

/// Arena of up to `N` fields.
#[derive(Debug, Clone)]
pub struct FieldArena<const N: usize> {
    fields: Vec<Field, N>,
}

impl<const N: usize> FieldArena<N> {
    /// An empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Store `field`, returning its id.
    pub fn insert(&mut self, field: Field) -> Result<FieldId, DisplayError> {
        let index = u16::try_from(self.fields.len()).map_err(|_| DisplayError::FieldArenaFull)?;
        self.fields
            .push(field)
            .map_err(|_| DisplayError::FieldArenaFull)?;
        Ok(FieldId::new(index))
    }

    /// Borrow a field.
    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.index())
    }

    /// Mutably borrow a field.
    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(id.index())
    }

    /// Successor of `id` in its list.
    #[must_use]
    pub fn next_of(&self, id: FieldId) -> Option<FieldId> {
        self.get(id).and_then(|f| f.core().next())
    }

    /// Walk the list starting at `head`.
    #[must_use]
    pub fn list(&self, head: Option<FieldId>) -> FieldIter<'_, N> {
        FieldIter {
            arena: self,
            cursor: head,
            remaining: self.fields.len(),
        }
    }

    /// Whether `id` is on the list starting at `head`.
    #[must_use]
    pub fn contains(&self, head: Option<FieldId>, id: FieldId) -> bool {
        self.list(head).any(|(candidate, _)| candidate == id)
    }

    /// Number of stored fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<const N: usize> Default for FieldArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor over one window list. Stops after visiting as many fields as the
/// arena holds, so a corrupted link cannot loop forever.
#[derive(Debug, Clone)]
pub struct FieldIter<'a, const N: usize> {
    arena: &'a FieldArena<N>,
    cursor: Option<FieldId>,
    remaining: usize,
}

impl<'a, const N: usize> Iterator for FieldIter<'a, N> {
    type Item = (FieldId, &'a Field);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.remaining = self.remaining.checked_sub(1)?;
        let field = self.arena.get(id)?;
        self.cursor = field.core().next();
        Some((id, field))
    }
}
