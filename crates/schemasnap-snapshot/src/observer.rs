use schemasnap_core::UniqueConstraint;

/// Receives each unique constraint as the deriver discovers it.
pub trait ConstraintObserver {
    fn constraint_found(&self, table: &str, constraint: &UniqueConstraint);
}

/// Emits a structured `tracing` event per discovered constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConstraintObserver for TracingObserver {
    fn constraint_found(&self, table: &str, constraint: &UniqueConstraint) {
        tracing::info!(
            event = "unique_constraint_found",
            table = %table,
            constraint = %constraint.name.as_deref().unwrap_or_default(),
            columns = %constraint.column_names_display(),
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ConstraintObserver for NoopObserver {
    fn constraint_found(&self, _table: &str, _constraint: &UniqueConstraint) {}
}
