//! Collection transforms for edits and deletions.
//!
//! Every transform returns a fresh collection. Rows that did not change are
//! shared with the input; a changed row is always a new allocation.

use std::collections::BTreeSet;
use std::rc::Rc;

use super::{Result, TableError};
use crate::data::{Accessor, Row, RowId, Rows, Value};

/// Position of the row with the given id.
pub fn position_of(rows: &[Rc<Row>], id: RowId) -> Result<usize> {
    rows.iter()
        .position(|r| r.id() == id)
        .ok_or(TableError::UnknownRow(id))
}

/// Id of the row at the given position.
pub fn id_at(rows: &[Rc<Row>], index: usize) -> Result<RowId> {
    rows.get(index)
        .map(|r| r.id())
        .ok_or(TableError::RowOutOfRange {
            index,
            len: rows.len(),
        })
}

/// Remove every selected row, preserving the order of the rest.
pub fn bulk_delete(rows: &[Rc<Row>], selected: &BTreeSet<RowId>) -> Rows {
    rows.iter()
        .filter(|r| !selected.contains(&r.id()))
        .cloned()
        .collect()
}

/// Replace a single field of a single row.
pub fn edit_cell(rows: &[Rc<Row>], id: RowId, accessor: &Accessor, value: Value) -> Result<Rows> {
    let field = accessor.field().ok_or(TableError::NotAField)?;
    let index = position_of(rows, id)?;

    let mut edited = rows.to_vec();
    edited[index] = Rc::new(rows[index].with_field(field, value));
    Ok(edited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::row;

    fn people() -> Rows {
        vec![
            row(0, [("name", Value::from("A")), ("age", Value::from(28))]),
            row(1, [("name", Value::from("B")), ("age", Value::from(30))]),
        ]
    }

    fn four_rows() -> Rows {
        (0..4).map(|i| row(i, [("n", Value::from(i as i64))])).collect()
    }

    #[test]
    fn test_bulk_delete_removes_selected_in_order() {
        let rows = four_rows();
        let selected: BTreeSet<RowId> = [RowId(1), RowId(3)].into_iter().collect();

        let remaining = bulk_delete(&rows, &selected);
        let ids: Vec<RowId> = remaining.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RowId(0), RowId(2)]);
        assert!(Rc::ptr_eq(&remaining[0], &rows[0]));
        assert!(Rc::ptr_eq(&remaining[1], &rows[2]));
    }

    #[test]
    fn test_bulk_delete_with_empty_selection_keeps_everything() {
        let rows = four_rows();
        let remaining = bulk_delete(&rows, &BTreeSet::new());
        assert_eq!(remaining.len(), 4);
    }

    #[test]
    fn test_edit_cell_changes_only_one_field() {
        let rows = people();
        let edited = edit_cell(
            &rows,
            RowId(1),
            &Accessor::Field("age".to_string()),
            Value::from(31),
        )
        .unwrap();

        assert_eq!(edited.len(), 2);
        assert_eq!(edited[0].get("age"), Some(&Value::from(28)));
        assert_eq!(edited[1].get("age"), Some(&Value::from(31)));
        assert_eq!(edited[1].get("name"), Some(&Value::from("B")));
        // input collection untouched
        assert_eq!(rows[1].get("age"), Some(&Value::from(30)));
    }

    #[test]
    fn test_edit_cell_replaces_edited_row_and_shares_others() {
        let rows = people();
        let edited = edit_cell(
            &rows,
            RowId(1),
            &Accessor::Field("name".to_string()),
            Value::from("Bea"),
        )
        .unwrap();

        assert!(Rc::ptr_eq(&edited[0], &rows[0]));
        assert!(!Rc::ptr_eq(&edited[1], &rows[1]));
        assert_eq!(edited[1].id(), RowId(1));
    }

    #[test]
    fn test_edit_cell_unknown_row() {
        let err = edit_cell(
            &people(),
            RowId(9),
            &Accessor::Field("age".to_string()),
            Value::from(1),
        )
        .unwrap_err();
        assert_eq!(err, TableError::UnknownRow(RowId(9)));
    }

    #[test]
    fn test_edit_cell_select_column_is_rejected() {
        let err = edit_cell(&people(), RowId(0), &Accessor::Select, Value::from(true)).unwrap_err();
        assert_eq!(err, TableError::NotAField);
    }

    #[test]
    fn test_id_at_and_position_of() {
        let rows = people();
        assert_eq!(id_at(&rows, 1), Ok(RowId(1)));
        assert_eq!(
            id_at(&rows, 2),
            Err(TableError::RowOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(position_of(&rows, RowId(1)), Ok(1));
    }
}
