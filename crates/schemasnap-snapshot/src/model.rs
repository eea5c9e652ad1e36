//! In-memory mapping description.

use serde::{Deserialize, Serialize};

use crate::mapping::{ColumnSource, ColumnView, MappingTable, UniqueKeySource, UniqueKeyView};

/// Collection of mapped tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingModel {
    #[serde(default)]
    pub tables: Vec<MappingTableDef>,
}

impl MappingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: MappingTableDef) -> Self {
        self.tables.push(table);
        self
    }

    /// Look up a mapped table by name, ignoring identifier case.
    pub fn find_table(&self, name: &str) -> Option<&MappingTableDef> {
        self.tables
            .iter()
            .find(|table| table.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTableDef {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<MappingColumn>,
    #[serde(default)]
    pub unique_keys: Vec<MappingUniqueKey>,
}

impl MappingTableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            unique_keys: Vec::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(MappingColumn {
            name: name.into(),
            unique: false,
        });
        self
    }

    pub fn unique_column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(MappingColumn {
            name: name.into(),
            unique: true,
        });
        self
    }

    pub fn unique_key<I, S>(mut self, name: Option<&str>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_keys.push(MappingUniqueKey {
            name: name.map(str::to_string),
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingColumn {
    pub name: String,
    #[serde(default)]
    pub unique: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingUniqueKey {
    pub name: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl UniqueKeySource for MappingTableDef {
    fn unique_keys(&self) -> Vec<UniqueKeyView<'_>> {
        self.unique_keys
            .iter()
            .map(|key| UniqueKeyView {
                name: key.name.as_deref(),
                columns: key.columns.iter().map(String::as_str).collect(),
            })
            .collect()
    }
}

impl ColumnSource for MappingTableDef {
    fn columns(&self) -> Vec<ColumnView<'_>> {
        self.columns
            .iter()
            .map(|col| ColumnView {
                name: col.name.as_str(),
                unique: col.unique,
            })
            .collect()
    }
}

impl MappingTable for MappingTableDef {
    fn name(&self) -> &str {
        &self.name
    }
}
