//! Table rows and their identity.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// Name of the field that enables row expansion.
pub const DETAILS_FIELD: &str = "details";

/// Stable identifier of a row, assigned when the row is ingested.
///
/// Selection and expansion are keyed by this id rather than by the row's
/// position, so they survive edits and deletions of other rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single record of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The row's identity.
    id: RowId,
    /// Field values by field name.
    fields: BTreeMap<String, Value>,
}

/// The displayed collection.
///
/// Rows are reference counted so that a new collection can share every row
/// that did not change.
pub type Rows = Vec<Rc<Row>>;

impl Row {
    /// Create a new row.
    pub fn new(id: RowId, fields: BTreeMap<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Get the row's id.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The expandable details content, if present and truthy.
    pub fn details(&self) -> Option<&Value> {
        self.get(DETAILS_FIELD).filter(|v| v.is_truthy())
    }

    /// Whether this row can be expanded.
    pub fn has_details(&self) -> bool {
        self.details().is_some()
    }

    /// Return a copy of this row with one field replaced.
    ///
    /// The id is kept; the field is inserted if it did not exist.
    pub fn with_field(&self, field: &str, value: Value) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.to_string(), value);
        Self {
            id: self.id,
            fields,
        }
    }
}

/// Build a row from `(field, value)` pairs.
///
/// Handy for tests and for hosts that assemble rows by hand.
pub fn row<I, K, V>(id: u64, fields: I) -> Rc<Row>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let fields = fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    Rc::new(Row::new(RowId(id), fields))
}
