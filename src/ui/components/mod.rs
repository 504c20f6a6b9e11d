//! Reusable UI components.

mod cell;
mod checkbox;
mod data_table;
mod header;
mod input;
mod row;

pub use cell::{coerce, CellEditor};
pub use checkbox::checkbox_label;
pub use data_table::{DataTable, DataTableAction};
pub use input::{InputKind, InputMode, TextInput};
pub use row::{activate, RowIntent, RowView, COLLAPSED_INDICATOR, EXPANDED_INDICATOR};
