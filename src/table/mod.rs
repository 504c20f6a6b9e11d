//! Table controller logic.
//!
//! Holds the expansion/selection state machine and the pure collection
//! transforms used by the [`DataTable`](crate::ui::DataTable) widget.

pub mod ops;
mod state;

use thiserror::Error;

use crate::data::RowId;

pub use state::{TableMsg, TableState};

/// Errors raised by table operations.
///
/// These indicate a row reference that does not belong to the collection
/// being operated on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No row with this id exists in the collection.
    #[error("Row {0} is not in the table")]
    UnknownRow(RowId),

    /// A row position past the end of the collection.
    #[error("Row position {index} is out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// The selection column has no field to edit.
    #[error("The selection column cannot be edited")]
    NotAField,
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
