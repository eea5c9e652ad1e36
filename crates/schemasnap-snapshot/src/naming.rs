//! Deterministic names for generated constraints and indexes.
//!
//! Several engines cap identifiers at 30 characters. Names are built from a
//! 128-bit prefix of a digest rendered in base 35, which never needs more than
//! 25 digits, so every generated name stays within that cap.

use sha2::{Digest, Sha256, Sha512};

use schemasnap_core::{Error, Result};

/// Prefix the mapping model uses for column-level unique keys.
pub const UNIQUE_KEY_PREFIX: &str = "UK_";
/// Prefix for unique constraint names assigned during finalization.
pub const GENERATED_NAME_PREFIX: &str = "UCIDX";
/// Suffix appended to the table name for backing indexes.
pub const INDEX_SUFFIX: &str = "_IX";
/// Longest name any rule in this module can produce.
pub const MAX_GENERATED_NAME_LEN: usize = 30;

const BASE35_DIGITS: &[u8; 35] = b"0123456789abcdefghijklmnopqrstuvwxy";

/// Digest algorithms available for name hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameDigest {
    #[default]
    Sha256,
    Sha512,
}

impl NameDigest {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            other => Err(Error::NameGeneration(format!(
                "digest algorithm '{other}' is not available"
            ))),
        }
    }

    fn digest_prefix(self, seed: &str) -> u128 {
        let digest = match self {
            Self::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(seed.as_bytes());
                hasher.finalize().to_vec()
            }
            Self::Sha512 => {
                let mut hasher = Sha512::new();
                hasher.update(seed.as_bytes());
                hasher.finalize().to_vec()
            }
        };

        let mut head = [0u8; 16];
        head.copy_from_slice(&digest[..16]);
        u128::from_be_bytes(head)
    }
}

/// Hash `seed` and render the result as a compact base-35 numeral.
pub fn hashed_name(seed: &str, digest: NameDigest) -> String {
    to_base35(digest.digest_prefix(seed))
}

/// Render an unsigned value with digits `0-9a-y`.
pub fn to_base35(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE35_DIGITS[(value % 35) as usize] as char);
        value /= 35;
    }
    digits.iter().rev().collect()
}

/// Name assigned to a unique constraint that reached finalization unnamed.
///
/// The seed is the table name followed by the column list, e.g. `T[X]` or
/// `ORDERS[CUSTOMER_ID, ORDER_DATE]`.
pub fn generated_name(table: &str, columns: &[&str], digest: NameDigest) -> String {
    let seed = format!("{table}[{}]", columns.join(", "));
    format!("{GENERATED_NAME_PREFIX}{}", hashed_name(&seed, digest))
}

/// Name a mapping model gives to a constraint it generated itself.
pub fn mapping_constraint_name(
    prefix: &str,
    table: &str,
    columns: &[&str],
    digest: NameDigest,
) -> String {
    let mut seed = format!("table`{table}`");
    for column in columns {
        seed.push_str("column`");
        seed.push_str(column);
        seed.push('`');
    }
    format!("{prefix}{}", hashed_name(&seed, digest))
}

pub fn backing_index_name(table: &str) -> String {
    format!("{table}{INDEX_SUFFIX}")
}
