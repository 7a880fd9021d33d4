//! # tig
//!
//! A miniature version control system. Every file in the working tree is
//! tracked by a [`Record`](artifacts::objects::record::Record) that moves
//! through a small state machine (untracked, modified, staged, committed).
//! Commits freeze the staged records into immutable JSON snapshots and the
//! file contents are kept in a content-addressable blob store.
//!
//! ## Layout on disk
//!
//! ```text
//! <root>/.tig/.status.json                       status store
//! <root>/.tig/commits/commit_<id>_<date>.json    one file per commit
//! <root>/.tig/backup/<hash><ext>                 one blob per content hash
//! ```
//!
//! ## Modules
//!
//! - `areas`: persisted stores and the working tree
//! - `artifacts`: value types and algorithms (records, commits, diffs, checkout plans)
//! - `commands`: user-facing commands that print their outcome

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Name of the repository metadata directory
pub const METADATA_DIR: &str = ".tig";
/// Status store file name inside the metadata directory
pub const STATUS_FILE: &str = ".status.json";
/// Commit directory name inside the metadata directory
pub const COMMITS_DIR: &str = "commits";
/// Blob store directory name inside the metadata directory
pub const BACKUP_DIR: &str = "backup";
/// Environment variable overriding the commit timestamp (`%Y-%m-%d %H:%M:%S`)
pub const COMMIT_DATE_ENV: &str = "TIG_COMMIT_DATE";
