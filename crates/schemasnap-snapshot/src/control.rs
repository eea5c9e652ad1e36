use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use schemasnap_core::{Error, ObjectKind, Result};

use crate::naming::NameDigest;

/// Options that control what a snapshot captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotControl {
    /// Object kinds requested in this snapshot.
    pub include: BTreeSet<ObjectKind>,
    /// Digest used when hashing `UCIDX` constraint names: `sha256` or `sha512`.
    /// Any other value, `md5` included, fails when a name is first needed.
    pub name_digest: String,
}

impl Default for SnapshotControl {
    fn default() -> Self {
        Self {
            include: ObjectKind::ALL.into_iter().collect(),
            name_digest: "sha256".to_string(),
        }
    }
}

impl SnapshotControl {
    pub fn excluding(mut self, kind: ObjectKind) -> Self {
        self.include.remove(&kind);
        self
    }

    pub fn with_name_digest(mut self, digest: impl Into<String>) -> Self {
        self.name_digest = digest.into();
        self
    }

    pub fn should_include(&self, kind: ObjectKind) -> bool {
        self.include.contains(&kind)
    }

    /// Resolve the configured digest. Fails when the algorithm is unknown.
    pub fn name_digest(&self) -> Result<NameDigest> {
        NameDigest::parse(&self.name_digest)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Config(err.to_string()))
    }
}
