use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::Column;

/// Unique constraint definition preserving column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UniqueConstraint {
    /// Empty until the name finalization pass has run.
    pub name: Option<String>,
    /// Name of the owning table.
    pub relation: String,
    pub columns: Vec<Column>,
    pub clustered: bool,
    pub backing_index: Option<Index>,
}

impl UniqueConstraint {
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            name: None,
            relation: relation.into(),
            columns: Vec::new(),
            clustered: false,
            backing_index: None,
        }
    }

    pub fn named(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    /// Insert a column at `position`, appending when the position is past the end.
    pub fn add_column(&mut self, position: usize, column: Column) {
        if position >= self.columns.len() {
            self.columns.push(column);
        } else {
            self.columns.insert(position, column);
        }
    }

    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }

    /// Column names rendered as `[A, B]`.
    pub fn column_names_display(&self) -> String {
        format!("[{}]", self.column_names().join(", "))
    }

    pub fn set_backing_index(&mut self, index: Index) {
        self.backing_index = Some(index);
    }
}

/// Index backing a unique constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Index {
    pub name: String,
    pub relation: String,
    pub columns: Vec<Column>,
    pub is_unique: bool,
}
