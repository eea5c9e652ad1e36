//! Derivation of unique constraints from a mapped table.
//!
//! Constraints come from two independent sources: unique keys declared on the
//! mapped table, and columns individually flagged unique. The two are not
//! merged, so a column that is both flagged unique and the sole member of a
//! declared key yields two constraints over the same column.

use schemasnap_core::{Column, Index, ObjectKind, Result, Table, UniqueConstraint};

use crate::control::SnapshotControl;
use crate::generator::SnapshotGenerator;
use crate::mapping::MappingTable;
use crate::model::MappingModel;
use crate::naming::{UNIQUE_KEY_PREFIX, backing_index_name, generated_name};
use crate::observer::{ConstraintObserver, TracingObserver};

/// Builds a table's unique constraints, each with a backing index.
pub struct UniqueConstraintDeriver {
    control: SnapshotControl,
    observer: Box<dyn ConstraintObserver>,
}

impl Default for UniqueConstraintDeriver {
    fn default() -> Self {
        Self::new(SnapshotControl::default())
    }
}

impl UniqueConstraintDeriver {
    pub fn new(control: SnapshotControl) -> Self {
        Self {
            control,
            observer: Box::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl ConstraintObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Snapshot unique constraints for `table` using its entry in `model`.
    ///
    /// Tables with no mapping entry are left untouched.
    pub fn snapshot_table(&self, table: &mut Table, model: &MappingModel) -> Result<()> {
        match model.find_table(&table.name) {
            Some(mapping) => self.derive_and_attach(table, mapping),
            None => {
                tracing::debug!(event = "mapping_table_missing", table = %table.name);
                Ok(())
            }
        }
    }

    /// Append the unique constraints declared by `mapping` to `table`, then
    /// name every constraint on the table that is still unnamed.
    ///
    /// Errors are returned as-is with no rollback. If naming fails, the
    /// constraints appended so far stay on the table and any still unnamed
    /// keep `name: None`.
    pub fn derive_and_attach(&self, table: &mut Table, mapping: &dyn MappingTable) -> Result<()> {
        if !self.control.should_include(ObjectKind::UniqueConstraint) {
            return Ok(());
        }

        for key in mapping.unique_keys() {
            let mut unique = UniqueConstraint::new(&table.name).named(key.name);
            for (position, column) in key.columns.iter().enumerate() {
                unique.add_column(position, Column::new(*column).bound_to(&table.name));
            }
            self.attach(table, mapping, unique);
        }

        for column in mapping.columns().into_iter().filter(|col| col.unique) {
            let name = mapping.generate_constraint_name(UNIQUE_KEY_PREFIX, &[column.name])?;
            let mut unique = UniqueConstraint::new(&table.name).named(Some(name.as_str()));
            unique.add_column(0, Column::new(column.name).bound_to(&table.name));
            self.attach(table, mapping, unique);
        }

        self.finalize_names(table)
    }

    fn attach(&self, table: &mut Table, mapping: &dyn MappingTable, mut unique: UniqueConstraint) {
        unique.set_backing_index(Index {
            name: backing_index_name(mapping.name()),
            relation: table.name.clone(),
            columns: unique.columns.clone(),
            is_unique: true,
        });
        self.observer.constraint_found(&table.name, &unique);
        table.unique_constraints.push(unique);
    }

    /// Give every unnamed constraint on the table a hashed name derived from
    /// the table name and its column list.
    fn finalize_names(&self, table: &mut Table) -> Result<()> {
        let Table {
            name,
            unique_constraints,
            ..
        } = table;

        for unique in unique_constraints.iter_mut().filter(|uc| !uc.has_name()) {
            let digest = self.control.name_digest()?;
            let generated = generated_name(name.as_str(), &unique.column_names(), digest);
            tracing::debug!(
                event = "unique_constraint_named",
                table = %name,
                constraint = %generated,
            );
            unique.name = Some(generated);
        }

        Ok(())
    }
}

impl SnapshotGenerator for UniqueConstraintDeriver {
    fn kind(&self) -> ObjectKind {
        ObjectKind::UniqueConstraint
    }

    fn runs_after(&self) -> &'static [ObjectKind] {
        &[ObjectKind::Table, ObjectKind::Column, ObjectKind::Index]
    }

    fn add_to(&self, table: &mut Table, model: &MappingModel) -> Result<()> {
        self.snapshot_table(table, model)
    }
}
