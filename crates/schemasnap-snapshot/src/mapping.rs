//! Read-only view of a mapping description, as needed by snapshot generators.

use schemasnap_core::Result;

use crate::naming::{NameDigest, mapping_constraint_name};

/// A unique key declared on a mapped table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKeyView<'a> {
    /// Declared name, if any. Empty names are resolved during finalization.
    pub name: Option<&'a str>,
    /// Participating columns in declaration order.
    pub columns: Vec<&'a str>,
}

/// A column on a mapped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub name: &'a str,
    /// Whether the column is individually flagged unique.
    pub unique: bool,
}

pub trait UniqueKeySource {
    /// Unique keys in declaration order.
    fn unique_keys(&self) -> Vec<UniqueKeyView<'_>>;
}

pub trait ColumnSource {
    /// All columns of the table in declaration order.
    fn columns(&self) -> Vec<ColumnView<'_>>;
}

/// A mapped table as seen by the deriver.
pub trait MappingTable: UniqueKeySource + ColumnSource {
    fn name(&self) -> &str;

    /// The mapping model's own rule for naming a constraint it generates.
    ///
    /// The default rule always hashes with SHA-256 and does not follow
    /// `SnapshotControl::name_digest`, so `UK_` names stay stable when the
    /// digest for `UCIDX` names is reconfigured. MD5 is not offered, so these
    /// names differ from the ones Hibernate generates for the same columns.
    fn generate_constraint_name(&self, prefix: &str, columns: &[&str]) -> Result<String> {
        Ok(mapping_constraint_name(
            prefix,
            self.name(),
            columns,
            NameDigest::default(),
        ))
    }
}
