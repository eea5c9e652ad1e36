use schemasnap_core::{ObjectKind, Result, Table};

use crate::model::MappingModel;

/// Trait implemented by generators that add one kind of object to a table snapshot.
pub trait SnapshotGenerator {
    /// Object kind this generator produces.
    fn kind(&self) -> ObjectKind;

    /// Object kinds that must be fully snapshotted before this generator runs.
    fn runs_after(&self) -> &'static [ObjectKind];

    /// Add the generated objects to `table`.
    fn add_to(&self, table: &mut Table, model: &MappingModel) -> Result<()>;
}
