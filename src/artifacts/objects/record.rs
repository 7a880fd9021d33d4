//! Tracked file record
//!
//! A record is the smallest unit of tracked state: a file name relative to the
//! repository root, the content hash of that file when it was last scanned,
//! and its lifecycle status.
//!
//! ## Format
//!
//! ```json
//! { "filename": "src/a.txt", "hash": "aaf4c61d", "status": 0 }
//! ```

use crate::artifacts::objects::content_hash::ContentHash;
use crate::artifacts::status::record_status::RecordStatus;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Record {
    filename: String,
    hash: ContentHash,
    status: RecordStatus,
}

impl Record {
    /// Compute a fresh record for a file in the working tree
    ///
    /// # Arguments
    ///
    /// * `root` - Repository root
    /// * `filename` - Path relative to the root, `/`-separated
    /// * `status` - Status to give the record
    pub fn scan(root: &Path, filename: &str, status: RecordStatus) -> anyhow::Result<Self> {
        let hash = ContentHash::of_file(&root.join(filename))?;
        Ok(Record::new(filename.to_string(), hash, status))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn status(&self) -> RecordStatus {
        self.status
    }

    /// Extension of the file including the leading dot, or an empty string
    pub fn extension(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Same file and same content
    pub fn is_same_version(&self, other: &Record) -> bool {
        self.filename == other.filename && self.hash == other.hash
    }

    /// Copy of this record with a new status and hash
    pub fn moved(&self, hash: ContentHash, status: RecordStatus) -> Self {
        Record {
            filename: self.filename.clone(),
            hash,
            status,
        }
    }

    pub(crate) fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    pub(crate) fn set_hash(&mut self, hash: ContentHash) {
        self.hash = hash;
    }

    pub(crate) fn rename(&mut self, filename: String) {
        self.filename = filename;
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.status.label(), self.hash, self.filename)
    }
}
