//! Unique constraint snapshotting from mapping descriptions.

pub mod control;
pub mod generator;
pub mod mapping;
pub mod model;
pub mod naming;
pub mod observer;
pub mod unique;

pub use control::SnapshotControl;
pub use generator::SnapshotGenerator;
pub use mapping::{ColumnSource, ColumnView, MappingTable, UniqueKeySource, UniqueKeyView};
pub use model::{MappingColumn, MappingModel, MappingTableDef, MappingUniqueKey};
pub use naming::NameDigest;
pub use observer::{ConstraintObserver, NoopObserver, TracingObserver};
pub use unique::UniqueConstraintDeriver;

pub use schemasnap_core::{Table, UniqueConstraint};
