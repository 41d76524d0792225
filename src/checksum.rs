//! SHA256 checksums for exported catalogs

use sha2::{Digest, Sha256};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// SHA256 checksum, hex encoded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    /// Compute checksum from raw bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Compute checksum over the compact JSON encoding of a value
    pub fn of_json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let canonical = serde_json::to_vec(value)?;
        Ok(Self::from_bytes(&canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify that a value still hashes to this checksum
    pub fn verify_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<bool> {
        Ok(Self::of_json(value)? == *self)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
