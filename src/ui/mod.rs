//! User interface components.
//!
//! This module contains all TUI rendering logic: the data table and the
//! cells, rows and header it is built from.

mod components;
pub mod theme;

pub use components::{
    activate, checkbox_label, coerce, CellEditor, DataTable, DataTableAction, InputKind,
    InputMode, RowIntent, RowView, TextInput, COLLAPSED_INDICATOR, EXPANDED_INDICATOR,
};
pub use theme::Theme;
