//! Content hash (truncated SHA-1)
//!
//! Every record and every blob is identified by the SHA-1 digest of the file
//! content, rendered as lowercase hex and truncated to 8 characters.
//!
//! ## Format
//!
//! - 8 hex characters (e.g., "aaf4c61d")
//!
//! Truncation keeps identifiers short for humans; it also means two distinct
//! contents may share a hash. The blob store checks for that case explicitly.

use crate::artifacts::objects::{CONTENT_HASH_LENGTH, READ_CHUNK_SIZE};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::io::Read;
use std::path::Path;

/// Truncated content digest of a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Parse and validate a content hash from a string
    ///
    /// # Arguments
    ///
    /// * `hash` - 8-character lowercase hexadecimal string
    pub fn try_parse(hash: String) -> anyhow::Result<Self> {
        if hash.len() != CONTENT_HASH_LENGTH {
            return Err(anyhow::anyhow!("Invalid content hash length: {}", hash.len()));
        }
        if !hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)) {
            return Err(anyhow::anyhow!("Invalid content hash characters: {}", hash));
        }
        Ok(Self(hash))
    }

    /// Hash an in-memory byte slice
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Self::from_digest(hasher)
    }

    /// Hash a file by streaming it in fixed-size chunks
    pub fn of_file(path: &Path) -> anyhow::Result<Self> {
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("Unable to open file {}", path.display()))?;
        let mut hasher = Sha1::new();
        let mut buffer = [0u8; READ_CHUNK_SIZE];

        loop {
            let read = file
                .read(&mut buffer)
                .with_context(|| format!("Unable to read file {}", path.display()))?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        Ok(Self::from_digest(hasher))
    }

    fn from_digest(hasher: Sha1) -> Self {
        let digest = format!("{:x}", hasher.finalize());
        Self(digest[..CONTENT_HASH_LENGTH].to_string())
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContentHash {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}
