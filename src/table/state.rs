//! Expansion and selection state.
//!
//! State transitions are pure: [`TableState::apply`] consumes the current
//! state and returns the next one, so a state value handed out earlier never
//! changes underneath its holder.

use std::collections::BTreeSet;

use crate::data::{Row, RowId};

/// A state transition of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMsg {
    /// Expand the row, or collapse it if it is the expanded one.
    ToggleExpansion(RowId),
    /// Add the row to the selection, or remove it if already selected.
    ToggleSelection(RowId),
    /// Empty the selection.
    ClearSelection,
}

/// Which row is expanded and which rows are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    /// The single expanded row, if any.
    expanded: Option<RowId>,
    /// Rows marked for bulk deletion.
    selected: BTreeSet<RowId>,
}

impl TableState {
    /// Create an empty state: nothing expanded, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transition, producing the next state.
    pub fn apply(self, msg: TableMsg) -> Self {
        match msg {
            TableMsg::ToggleExpansion(id) => Self {
                expanded: if self.expanded == Some(id) {
                    None
                } else {
                    Some(id)
                },
                ..self
            },
            TableMsg::ToggleSelection(id) => {
                let mut selected = self.selected;
                if !selected.remove(&id) {
                    selected.insert(id);
                }
                Self { selected, ..self }
            }
            TableMsg::ClearSelection => Self {
                selected: BTreeSet::new(),
                ..self
            },
        }
    }

    /// The expanded row id, if any.
    pub fn expanded(&self) -> Option<RowId> {
        self.expanded
    }

    /// Whether the given row is the expanded one.
    ///
    /// This does not look at the row's details; see [`TableState::shows_details`].
    pub fn is_expanded(&self, id: RowId) -> bool {
        self.expanded == Some(id)
    }

    /// Whether the row's details panel is visible.
    pub fn shows_details(&self, row: &Row) -> bool {
        self.is_expanded(row.id()) && row.has_details()
    }

    /// The selected row ids.
    pub fn selected(&self) -> &BTreeSet<RowId> {
        &self.selected
    }

    /// Whether the given row is selected.
    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether the bulk delete control is available.
    pub fn can_bulk_delete(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Drop ids that are not present in the collection.
    pub fn reconcile<I>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = RowId>,
    {
        let present: BTreeSet<RowId> = ids.into_iter().collect();
        Self {
            expanded: self.expanded.filter(|id| present.contains(id)),
            selected: self
                .selected
                .into_iter()
                .filter(|id| present.contains(id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::row;

    #[test]
    fn test_new_state_is_empty() {
        let state = TableState::new();
        assert_eq!(state.expanded(), None);
        assert_eq!(state.selected_count(), 0);
        assert!(!state.can_bulk_delete());
    }

    #[test]
    fn test_expansion_is_exclusive() {
        let state = TableState::new()
            .apply(TableMsg::ToggleExpansion(RowId(1)))
            .apply(TableMsg::ToggleExpansion(RowId(3)));

        assert_eq!(state.expanded(), Some(RowId(3)));
        assert!(!state.is_expanded(RowId(1)));
    }

    #[test]
    fn test_toggle_expanded_row_collapses_it() {
        let state = TableState::new()
            .apply(TableMsg::ToggleExpansion(RowId(2)))
            .apply(TableMsg::ToggleExpansion(RowId(2)));

        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn test_expansion_sequence_never_has_two_rows() {
        let mut state = TableState::new();
        for id in [0, 1, 1, 2, 0, 0, 3] {
            state = state.apply(TableMsg::ToggleExpansion(RowId(id)));
            let expanded = (0..4).filter(|i| state.is_expanded(RowId(*i))).count();
            assert!(expanded <= 1);
        }
        assert_eq!(state.expanded(), Some(RowId(3)));
    }

    #[test]
    fn test_selection_toggle_adds_and_removes_one() {
        let state = TableState::new().apply(TableMsg::ToggleSelection(RowId(1)));
        assert_eq!(state.selected_count(), 1);
        assert!(state.is_selected(RowId(1)));

        let state = state.apply(TableMsg::ToggleSelection(RowId(4)));
        assert_eq!(state.selected_count(), 2);

        let state = state.apply(TableMsg::ToggleSelection(RowId(1)));
        assert_eq!(state.selected_count(), 1);
        assert!(!state.is_selected(RowId(1)));
        assert!(state.is_selected(RowId(4)));
    }

    #[test]
    fn test_selection_toggle_is_involutive() {
        let before = TableState::new()
            .apply(TableMsg::ToggleSelection(RowId(0)))
            .apply(TableMsg::ToggleSelection(RowId(2)));

        let after = before
            .clone()
            .apply(TableMsg::ToggleSelection(RowId(5)))
            .apply(TableMsg::ToggleSelection(RowId(5)));

        assert_eq!(before, after);
    }

    #[test]
    fn test_previous_state_is_not_mutated() {
        let first = TableState::new().apply(TableMsg::ToggleSelection(RowId(1)));
        let kept = first.clone();
        let _second = first.apply(TableMsg::ToggleSelection(RowId(2)));

        assert_eq!(kept.selected().iter().copied().collect::<Vec<_>>(), vec![RowId(1)]);
    }

    #[test]
    fn test_bulk_delete_visibility() {
        let state = TableState::new();
        assert!(!state.can_bulk_delete());

        let state = state.apply(TableMsg::ToggleSelection(RowId(0)));
        assert!(state.can_bulk_delete());

        let state = state.apply(TableMsg::ClearSelection);
        assert!(!state.can_bulk_delete());
    }

    #[test]
    fn test_shows_details_requires_details() {
        let with = row(0, [("details", "more")]);
        let without = row(1, [("name", "B")]);

        let state = TableState::new().apply(TableMsg::ToggleExpansion(RowId(0)));
        assert!(state.shows_details(&with));

        let state = state.apply(TableMsg::ToggleExpansion(RowId(1)));
        assert!(state.is_expanded(RowId(1)));
        assert!(!state.shows_details(&without));
    }

    #[test]
    fn test_reconcile_drops_missing_ids() {
        let state = TableState::new()
            .apply(TableMsg::ToggleSelection(RowId(0)))
            .apply(TableMsg::ToggleSelection(RowId(2)))
            .apply(TableMsg::ToggleExpansion(RowId(2)));

        let state = state.reconcile([RowId(0), RowId(1)]);
        assert!(state.is_selected(RowId(0)));
        assert!(!state.is_selected(RowId(2)));
        assert_eq!(state.expanded(), None);
    }
}
