//! Core contracts for schemasnap.
//!
//! This crate defines the snapshot object model produced from a mapping
//! description, the shared error type, and structural validation of derived
//! unique constraints.

pub mod constraints;
pub mod error;
pub mod schema;
pub mod validation;

pub use constraints::{Index, UniqueConstraint};
pub use error::{Error, Result};
pub use schema::{Column, ObjectKind, Table};
pub use validation::validate_unique_constraints;
