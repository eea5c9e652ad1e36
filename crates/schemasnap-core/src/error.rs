use thiserror::Error;

/// Core error type shared across schemasnap crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The snapshot violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// A constraint name could not be generated.
    #[error("unable to generate a hashed name: {0}")]
    NameGeneration(String),
    /// Snapshot configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias for results returned by schemasnap crates.
pub type Result<T> = std::result::Result<T, Error>;
