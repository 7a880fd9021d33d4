//! Commit history
//!
//! Every commit is a standalone JSON file under `.tig/commits/` named
//! `commit_<id>_<YYYY-MM-DD_HH-MM-SS>.json`. There are no parent links: the
//! history order is recovered from the embedded dates.

use crate::areas::repository::Repository;
use crate::areas::status_store::StatusStore;
use crate::artifacts::core::write_json_atomic;
use crate::artifacts::objects::commit::{COMMIT_FILE_PREFIX, COMMIT_FILE_SUFFIX, Commit};
use crate::artifacts::status::record_status::RecordStatus;
use anyhow::Context;
use chrono::{NaiveDateTime, SubsecRound};
use derive_new::new;

/// Result of a commit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    NothingToCommit,
    Committed(Commit),
}

#[derive(new)]
pub struct Commits<'r> {
    repository: &'r Repository,
}

impl Commits<'_> {
    /// Snapshot every staged record, dated now
    pub fn commit(&self, message: &str) -> anyhow::Result<CommitOutcome> {
        let date = chrono::Local::now().naive_local().trunc_subsecs(0);
        self.commit_at(message, date)
    }

    /// Snapshot every staged record with an explicit date
    ///
    /// Blobs are stored first, then the commit file, then the staged records
    /// move to COMMITTED.
    pub fn commit_at(&self, message: &str, date: NaiveDateTime) -> anyhow::Result<CommitOutcome> {
        let status_store = self.repository.status_store();
        let staged = status_store.staged()?;

        if staged.is_empty() {
            log::debug!("nothing staged, skipping commit");
            return Ok(CommitOutcome::NothingToCommit);
        }

        self.repository.backup().add(&staged)?;

        let manifest = staged
            .iter()
            .map(|record| record.moved(record.hash().clone(), RecordStatus::Committed))
            .collect();
        let commit = Commit::new(message.to_string(), date, manifest);

        let commit_path = self.repository.commits_path().join(commit.file_name());
        write_json_atomic(&commit_path, &commit)?;

        status_store.update(|records| {
            for record in &staged {
                StatusStore::move_in(
                    records,
                    record,
                    record.hash().clone(),
                    RecordStatus::Committed,
                );
            }
        })?;

        log::info!("committed {} with {} records", commit.id(), staged.len());

        Ok(CommitOutcome::Committed(commit))
    }

    /// Every commit, oldest first
    pub fn all(&self) -> anyhow::Result<Vec<Commit>> {
        let commits_path = self.repository.commits_path();
        if !commits_path.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&commits_path)
            .with_context(|| format!("Unable to list commits in {}", commits_path.display()))?;

        let mut commits = Vec::new();
        for entry in entries {
            let entry = entry.context("Unable to read commits directory entry")?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !Self::is_commit_file(&file_name) {
                continue;
            }

            let content = std::fs::read(entry.path())
                .with_context(|| format!("Unable to read commit {}", file_name))?;
            let commit: Commit = serde_json::from_slice(&content)
                .with_context(|| format!("Malformed commit {}", file_name))?;
            commits.push((file_name, commit));
        }

        commits.sort_by(|(a_name, a), (b_name, b)| {
            a.date().cmp(b.date()).then_with(|| a_name.cmp(b_name))
        });

        Ok(commits.into_iter().map(|(_, commit)| commit).collect())
    }

    pub fn latest(&self) -> anyhow::Result<Commit> {
        self.all()?
            .pop()
            .ok_or_else(|| anyhow::anyhow!("no commits yet"))
    }

    pub fn find(&self, commit_id: &str) -> anyhow::Result<Option<Commit>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|commit| commit.id().as_ref() == commit_id))
    }

    fn is_commit_file(file_name: &str) -> bool {
        file_name.starts_with(COMMIT_FILE_PREFIX) && file_name.ends_with(COMMIT_FILE_SUFFIX)
    }
}
