//! Status store
//!
//! The status store is the authoritative set of records, one per known file.
//! It lives in `.tig/.status.json` as a pretty-printed JSON array and is read
//! in full on every access. Mutations rewrite the whole array through a
//! temporary file and an atomic rename, and only when something changed.
//!
//! ## State machine
//!
//! ```text
//! UNTRACKED --stage--> STAGED --commit--> COMMITTED
//!                        ^                    |
//!                        +------stage---- MODIFIED <--sync (content changed)
//! ```

use crate::areas::workspace::Workspace;
use crate::artifacts::core::write_json_atomic;
use crate::artifacts::objects::content_hash::ContentHash;
use crate::artifacts::objects::record::Record;
use crate::artifacts::status::record_status::RecordStatus;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::Path;

/// Changes applied by a [`StatusStore::sync`] pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub renamed: Vec<(String, String)>,
    pub removed: Vec<String>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.added.is_empty()
            && self.modified.is_empty()
            && self.renamed.is_empty()
            && self.removed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct StatusStore {
    /// Path to the store file (typically `.tig/.status.json`)
    path: Box<Path>,
    workspace: Workspace,
}

impl StatusStore {
    pub fn new(path: Box<Path>, workspace: Workspace) -> Self {
        StatusStore { path, workspace }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record from disk
    ///
    /// A missing store file is an empty store. A malformed one is an error.
    fn rehydrate(&self) -> anyhow::Result<Vec<Record>> {
        if !self.path.exists() {
            log::debug!("no status store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = std::fs::read(&self.path)
            .with_context(|| format!("Unable to read status store {}", self.path.display()))?;
        let records = serde_json::from_slice(&content)
            .with_context(|| format!("Malformed status store {}", self.path.display()))?;

        Ok(records)
    }

    fn write_updates(&self, records: &[Record]) -> anyhow::Result<()> {
        log::debug!(
            "writing {} records to {}",
            records.len(),
            self.path.display()
        );
        write_json_atomic(&self.path, records)
    }

    /// Read-modify-write of the whole store
    ///
    /// The store file is rewritten only if `f` changed the record set.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut Vec<Record>) -> R) -> anyhow::Result<R> {
        let original = self.rehydrate()?;
        let mut records = original.clone();

        let result = f(&mut records);

        if records != original {
            self.write_updates(&records)?;
        }

        Ok(result)
    }

    pub fn all(&self) -> anyhow::Result<Vec<Record>> {
        self.rehydrate()
    }

    pub fn untracked(&self) -> anyhow::Result<Vec<Record>> {
        self.with_status(RecordStatus::Untracked)
    }

    pub fn modified(&self) -> anyhow::Result<Vec<Record>> {
        self.with_status(RecordStatus::Modified)
    }

    pub fn staged(&self) -> anyhow::Result<Vec<Record>> {
        self.with_status(RecordStatus::Staged)
    }

    pub fn committed(&self) -> anyhow::Result<Vec<Record>> {
        self.with_status(RecordStatus::Committed)
    }

    pub fn with_status(&self, status: RecordStatus) -> anyhow::Result<Vec<Record>> {
        Ok(self
            .rehydrate()?
            .into_iter()
            .filter(|record| record.status() == status)
            .collect())
    }

    pub fn find(&self, filename: &str) -> anyhow::Result<Option<Record>> {
        Ok(self
            .rehydrate()?
            .into_iter()
            .find(|record| record.filename() == filename))
    }

    /// Insert a record, replacing the one with the same file name if any
    pub fn add(&self, record: &Record) -> anyhow::Result<()> {
        self.update(|records| Self::upsert(records, record.clone()))
    }

    pub(crate) fn upsert(records: &mut Vec<Record>, record: Record) {
        match records
            .iter()
            .position(|existing| existing.filename() == record.filename())
        {
            Some(index) => records[index] = record,
            None => records.push(record),
        }
    }

    /// Delete the record with the same file name and hash; no-op if absent
    pub fn remove(&self, record: &Record) -> anyhow::Result<()> {
        self.update(|records| records.retain(|existing| !existing.is_same_version(record)))
    }

    /// Give the record with the same file name and hash a new hash and status
    ///
    /// If no such record exists, it is inserted with the new hash and status.
    pub fn move_to(
        &self,
        record: &Record,
        hash: ContentHash,
        status: RecordStatus,
    ) -> anyhow::Result<()> {
        self.update(|records| Self::move_in(records, record, hash, status))
    }

    pub(crate) fn move_in(
        records: &mut Vec<Record>,
        record: &Record,
        hash: ContentHash,
        status: RecordStatus,
    ) {
        match records
            .iter()
            .position(|existing| existing.is_same_version(record))
        {
            Some(index) => {
                records[index].set_hash(hash);
                records[index].set_status(status);
            }
            None => records.push(record.moved(hash, status)),
        }
    }

    /// Reconcile the store with the working tree
    ///
    /// - a known file whose content changed becomes MODIFIED (untracked files
    ///   stay untracked and only take the new hash)
    /// - an unknown file whose content matches a record of a vanished file
    ///   takes over that record (rename without change)
    /// - any other unknown file is added as UNTRACKED
    /// - a record whose file is gone and whose hash matches no current file is
    ///   dropped
    pub fn sync(&self) -> anyhow::Result<SyncReport> {
        let files = self.workspace.list_files()?;
        let fresh = files
            .iter()
            .map(|file| Record::scan(self.workspace.path(), file, RecordStatus::Untracked))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let fresh_hashes = fresh.iter().map(Record::hash).collect::<BTreeSet<_>>();

        let report = self.update(|records| {
            let mut report = SyncReport::default();

            for record in &fresh {
                let by_name = records
                    .iter()
                    .position(|stored| stored.filename() == record.filename());
                let by_content = records.iter().position(|stored| {
                    stored.hash() == record.hash() && !files.contains(stored.filename())
                });

                if let Some(index) = by_name {
                    let stored = &mut records[index];
                    if stored.hash() != record.hash() {
                        if stored.status().is_tracked() {
                            stored.set_status(RecordStatus::Modified);
                            report.modified.push(record.filename().to_string());
                        }
                        stored.set_hash(record.hash().clone());
                    }
                } else if let Some(index) = by_content {
                    let stored = &mut records[index];
                    report
                        .renamed
                        .push((stored.filename().to_string(), record.filename().to_string()));
                    stored.rename(record.filename().to_string());
                } else {
                    report.added.push(record.filename().to_string());
                    records.push(record.clone());
                }
            }

            records.retain(|stored| {
                let keep =
                    files.contains(stored.filename()) || fresh_hashes.contains(stored.hash());
                if !keep {
                    report.removed.push(stored.filename().to_string());
                }
                keep
            });

            report
        })?;

        if !report.is_clean() {
            log::info!(
                "sync: {} added, {} modified, {} renamed, {} removed",
                report.added.len(),
                report.modified.len(),
                report.renamed.len(),
                report.removed.len()
            );
        }

        Ok(report)
    }
}
