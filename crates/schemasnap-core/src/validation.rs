use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::Table;

/// Validate the unique constraints attached to a snapshotted table.
///
/// This checks:
/// - every constraint carries a non-empty name
/// - every constraint is non-clustered
/// - every constraint has a unique backing index over the same columns
/// - constraint columns are bound to the table and, when the table has
///   snapshotted columns, exist on it
pub fn validate_unique_constraints(table: &Table) -> Result<()> {
    let columns: BTreeSet<&str> = table.columns.iter().map(|col| col.name.as_str()).collect();

    for (position, unique) in table.unique_constraints.iter().enumerate() {
        let label = unique
            .name
            .clone()
            .unwrap_or_else(|| format!("#{position}"));

        if !unique.has_name() {
            return Err(Error::InvalidSchema(format!(
                "unnamed unique constraint: {}.{}",
                table.name, label
            )));
        }

        if unique.clustered {
            return Err(Error::InvalidSchema(format!(
                "clustered unique constraint: {}.{}",
                table.name, label
            )));
        }

        let index = unique.backing_index.as_ref().ok_or_else(|| {
            Error::InvalidSchema(format!(
                "missing backing index: {}.{}",
                table.name, label
            ))
        })?;

        if !index.is_unique {
            return Err(Error::InvalidSchema(format!(
                "backing index is not unique: {}.{} ({})",
                table.name, label, index.name
            )));
        }

        if index.columns != unique.columns {
            return Err(Error::InvalidSchema(format!(
                "backing index columns differ from constraint: {}.{} ({})",
                table.name, label, index.name
            )));
        }

        for column in &unique.columns {
            if column.relation.as_deref() != Some(table.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "unique column not bound to table: {}.{}.{}",
                    table.name, label, column.name
                )));
            }

            if !columns.is_empty() && !columns.contains(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "unique column not found: {}.{}.{}",
                    table.name, label, column.name
                )));
            }
        }
    }

    Ok(())
}
