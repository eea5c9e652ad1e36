use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::UniqueConstraint;

/// A relational table under snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    /// Unique constraints in the order they were attached.
    pub unique_constraints: Vec<UniqueConstraint>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            unique_constraints: Vec::new(),
        }
    }

    /// Attach snapshotted columns, binding each one to this table.
    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = self.name.clone();
        self.columns
            .extend(names.into_iter().map(|name| Column::new(name).bound_to(&table)));
        self
    }
}

/// Column metadata as seen by the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    /// Name of the owning table. A back-reference, not ownership.
    pub relation: Option<String>,
    pub is_unique: bool,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: None,
            is_unique: false,
        }
    }

    pub fn bound_to(mut self, table: &str) -> Self {
        self.relation = Some(table.to_string());
        self
    }
}

/// Kinds of database objects a snapshot can capture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Table,
    Column,
    PrimaryKey,
    ForeignKey,
    Index,
    UniqueConstraint,
    Sequence,
    View,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 8] = [
        ObjectKind::Table,
        ObjectKind::Column,
        ObjectKind::PrimaryKey,
        ObjectKind::ForeignKey,
        ObjectKind::Index,
        ObjectKind::UniqueConstraint,
        ObjectKind::Sequence,
        ObjectKind::View,
    ];
}
