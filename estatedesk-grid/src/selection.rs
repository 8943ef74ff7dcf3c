//! Row-selection state for grids with a checkbox column.

use crate::row::RowId;

/// Who owns the selected ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// The grid keeps its own selection.
    #[default]
    SelfManaged,
    /// The parent supplies the ids; a change overwrites the grid's selection.
    ExternallyControlled(Vec<RowId>),
}

impl SelectionMode {
    #[must_use]
    pub fn controlled_ids(&self) -> Option<&[RowId]> {
        match self {
            Self::SelfManaged => None,
            Self::ExternallyControlled(ids) => Some(ids),
        }
    }

    /// Selection a freshly mounted grid starts with.
    #[must_use]
    pub fn initial_set(&self) -> SelectionSet {
        self.controlled_ids()
            .map(|ids| SelectionSet::from_ids(ids.iter().cloned()))
            .unwrap_or_default()
    }
}

/// State of the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    /// No rows to select.
    Empty,
    All,
    /// Visible selected count differs from the row count, zero included.
    Indeterminate,
}

/// Order-preserving set of selected row ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: Vec<RowId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = RowId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    fn insert(&mut self, id: RowId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    #[must_use]
    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    /// Clear when anything is selected, otherwise select every row.
    ///
    /// Returns the new selection for the change callback.
    pub fn toggle_all(&mut self, row_ids: &[RowId]) -> Vec<RowId> {
        if self.is_empty() {
            *self = Self::from_ids(row_ids.iter().cloned());
        } else {
            self.ids.clear();
        }
        self.ids.clone()
    }

    /// Add or remove a single id. Returns the new selection.
    pub fn toggle(&mut self, id: &RowId) -> Vec<RowId> {
        if self.contains(id) {
            self.ids.retain(|existing| existing != id);
        } else {
            self.ids.push(id.clone());
        }
        self.ids.clone()
    }

    /// Overwrite with ids supplied by a controlling parent.
    pub fn sync(&mut self, ids: &[RowId]) {
        *self = Self::from_ids(ids.iter().cloned());
    }

    /// How many of `row_ids` are selected; ids from other pages do not count.
    #[must_use]
    pub fn visible_count(&self, row_ids: &[RowId]) -> usize {
        row_ids.iter().filter(|id| self.contains(id)).count()
    }

    #[must_use]
    pub fn header_state(&self, row_ids: &[RowId]) -> HeaderCheck {
        if row_ids.is_empty() {
            HeaderCheck::Empty
        } else if self.visible_count(row_ids) == row_ids.len() {
            HeaderCheck::All
        } else {
            HeaderCheck::Indeterminate
        }
    }
}
