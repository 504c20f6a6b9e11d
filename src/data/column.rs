//! Column schema.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The reserved accessor naming the selection column.
pub const SELECT_ACCESSOR: &str = "select";

/// What a column displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// The row selection checkbox.
    Select,
    /// A data field, by name.
    Field(String),
}

impl Accessor {
    /// Parse an accessor, recognizing the reserved `"select"` token.
    pub fn parse(s: &str) -> Self {
        if s == SELECT_ACCESSOR {
            Accessor::Select
        } else {
            Accessor::Field(s.to_string())
        }
    }

    /// The accessor as it appears in column files.
    pub fn as_str(&self) -> &str {
        match self {
            Accessor::Select => SELECT_ACCESSOR,
            Accessor::Field(name) => name,
        }
    }

    /// The field name, unless this is the selection column.
    pub fn field(&self) -> Option<&str> {
        match self {
            Accessor::Select => None,
            Accessor::Field(name) => Some(name),
        }
    }
}

impl Serialize for Accessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Accessor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Accessor::parse(&s))
    }
}

/// A column of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The display label.
    pub header: String,
    /// The field shown in this column.
    pub accessor: Accessor,
    /// Whether cells in this column can be edited.
    #[serde(default)]
    pub editable: bool,
}

impl Column {
    /// Create a read-only data column.
    pub fn new(header: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(field.into()),
            editable: false,
        }
    }

    /// Create the selection checkbox column.
    pub fn select(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Select,
            editable: false,
        }
    }

    /// Mark this column editable.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Whether this is the selection column.
    pub fn is_select(&self) -> bool {
        self.accessor == Accessor::Select
    }

    /// Whether activating this column's cells opens the cell editor.
    pub fn is_editable_field(&self) -> bool {
        self.editable && !self.is_select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns_json() {
        let json = r#"[
            {"header": "Select", "accessor": "select"},
            {"header": "Name", "accessor": "name", "editable": true},
            {"header": "Email", "accessor": "email"}
        ]"#;
        let columns: Vec<Column> = serde_json::from_str(json).unwrap();

        assert_eq!(columns.len(), 3);
        assert!(columns[0].is_select());
        assert_eq!(columns[1].accessor, Accessor::Field("name".to_string()));
        assert!(columns[1].editable);
        assert!(!columns[2].editable);
    }

    #[test]
    fn test_accessor_field() {
        assert_eq!(Accessor::parse("select").field(), None);
        assert_eq!(Accessor::parse("age").field(), Some("age"));
        assert_eq!(Accessor::Select.as_str(), "select");
    }

    #[test]
    fn test_editable_select_column_is_not_an_editable_field() {
        let column = Column::select("Select").editable();
        assert!(!column.is_editable_field());
        assert!(Column::new("Name", "name").editable().is_editable_field());
    }
}
