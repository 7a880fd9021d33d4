//! Backup store
//!
//! Content-addressed copies of file versions, one blob per distinct content
//! hash, stored as `.tig/backup/<hash><ext>`. Blobs are written once, shared
//! between every record with the same hash and never deleted.

use crate::areas::repository::Repository;
use crate::areas::status_store::StatusStore;
use crate::artifacts::checkout::CheckoutOutcome;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::write_atomic;
use crate::artifacts::objects::content_hash::ContentHash;
use crate::artifacts::objects::record::Record;
use crate::artifacts::status::record_status::RecordStatus;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::PathBuf;

#[derive(new)]
pub struct Backup<'r> {
    repository: &'r Repository,
}

impl Backup<'_> {
    pub fn blob_path(&self, record: &Record) -> PathBuf {
        self.repository
            .backup_path()
            .join(format!("{}{}", record.hash(), record.extension()))
    }

    /// Copy the current content of every record's file into the store
    ///
    /// A file whose bytes no longer hash to its record's hash is never stored
    /// under that hash. Blobs that already exist with the same bytes are left
    /// alone. A blob that exists with different bytes while the file still
    /// hashes to the record's hash is a hash collision and aborts the copy.
    pub fn add(&self, records: &[Record]) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();

        for record in records {
            let data = workspace.read_file(record.filename())?;
            let blob_path = self.blob_path(record);
            let matches_record = ContentHash::of_bytes(&data) == *record.hash();

            if !blob_path.exists() {
                if !matches_record {
                    log::warn!(
                        "{} changed since it was recorded as {}, not storing it",
                        record.filename(),
                        record.hash()
                    );
                    continue;
                }

                log::debug!("storing blob {}", blob_path.display());
                write_atomic(&blob_path, &data)?;
                continue;
            }

            let stored = self.read(record)?;
            if stored == data {
                continue;
            }

            if matches_record {
                anyhow::bail!(
                    "hash collision: {} differs from stored blob {}",
                    record.filename(),
                    blob_path.display()
                );
            }

            log::warn!(
                "{} changed since it was recorded as {}, keeping the stored blob",
                record.filename(),
                record.hash()
            );
        }

        Ok(())
    }

    pub fn read(&self, record: &Record) -> anyhow::Result<Bytes> {
        let blob_path = self.blob_path(record);

        let content = std::fs::read(&blob_path).with_context(|| {
            format!(
                "Missing blob {} for {}",
                blob_path.display(),
                record.filename()
            )
        })?;

        Ok(content.into())
    }

    /// Restore the working tree to the manifest of commit `commit_id`
    ///
    /// Tracked files outside the manifest are deleted. Untracked files and
    /// files the status store does not know are kept.
    pub fn checkout(&self, commit_id: &str) -> anyhow::Result<CheckoutOutcome> {
        let commit = match self.repository.commits().find(commit_id)? {
            Some(commit) => commit,
            None => return Ok(CheckoutOutcome::UnknownCommit(commit_id.to_string())),
        };

        let workspace = self.repository.workspace();
        let status_store = self.repository.status_store();
        let known = status_store.all()?;
        let workspace_files = workspace.list_files()?;

        let migration = Migration::plan(
            &commit,
            |record| self.read(record),
            &known,
            &workspace_files,
        )?;
        workspace.apply_migration(&migration)?;

        let restored = migration.restored_files();
        let removed = migration.deleted_files();

        status_store.update(|records| {
            records.retain(|record| !removed.iter().any(|file| file == record.filename()));
            for record in commit.manifest() {
                StatusStore::upsert(
                    records,
                    record.moved(record.hash().clone(), RecordStatus::Committed),
                );
            }
        })?;

        log::info!(
            "checked out {}: {} restored, {} removed",
            commit.id(),
            restored.len(),
            removed.len()
        );

        Ok(CheckoutOutcome::Restored {
            commit: Box::new(commit),
            restored,
            removed,
        })
    }
}
