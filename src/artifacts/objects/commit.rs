//! Commit snapshot
//!
//! A commit freezes the staged records into an immutable manifest. It is
//! identified by the truncated SHA-1 of its message followed by its date, so
//! two commits with the same message in the same second share an id.
//!
//! ## Format
//!
//! Stored as `commit_<id>_<YYYY-MM-DD_HH-MM-SS>.json`:
//! ```json
//! {
//!   "commit_id": "1c5b8b2e",
//!   "date": "2024-01-01 12:00:00",
//!   "message": "first",
//!   "records": [{ "filename": "a.txt", "hash": "aaf4c61d", "status": 3 }]
//! }
//! ```

use crate::artifacts::objects::content_hash::ContentHash;
use crate::artifacts::objects::record::Record;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the date embedded in commit file names
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const COMMIT_FILE_PREFIX: &str = "commit_";
pub const COMMIT_FILE_SUFFIX: &str = ".json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(rename = "commit_id")]
    id: ContentHash,
    #[serde(with = "commit_date")]
    date: NaiveDateTime,
    message: String,
    #[serde(rename = "records")]
    manifest: Vec<Record>,
}

impl Commit {
    /// Create a commit and derive its id from the message and date
    pub fn new(message: String, date: NaiveDateTime, manifest: Vec<Record>) -> Self {
        let id = Self::derive_id(&message, &date);
        Commit {
            id,
            date,
            message,
            manifest,
        }
    }

    pub fn derive_id(message: &str, date: &NaiveDateTime) -> ContentHash {
        let seed = format!("{}{}", message, date.format(DATE_FORMAT));
        ContentHash::of_bytes(seed.as_bytes())
    }

    pub fn id(&self) -> &ContentHash {
        &self.id
    }

    pub fn date(&self) -> &NaiveDateTime {
        &self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The frozen records of this commit
    pub fn manifest(&self) -> &[Record] {
        &self.manifest
    }

    /// File names contained in the manifest
    pub fn files(&self) -> Vec<&str> {
        self.manifest.iter().map(Record::filename).collect()
    }

    pub fn record_for(&self, filename: &str) -> Option<&Record> {
        self.manifest
            .iter()
            .find(|record| record.filename() == filename)
    }

    /// Name of the file this commit is persisted to
    pub fn file_name(&self) -> String {
        format!(
            "{}{}_{}{}",
            COMMIT_FILE_PREFIX,
            self.id,
            self.date.format(FILE_DATE_FORMAT),
            COMMIT_FILE_SUFFIX
        )
    }

    pub fn readable_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} | {} | {}]",
            self.id,
            self.readable_date(),
            self.message
        )
    }
}

mod commit_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
