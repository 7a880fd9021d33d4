//! Checkout plan
//!
//! A migration lists what a checkout does to the working tree before anything
//! is touched:
//!
//! - every manifest record is restored from its blob
//! - every other file that the status store tracks is deleted
//!
//! Untracked files and files the status store has never seen survive.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::record::Record;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    restores: BTreeMap<String, Bytes>,
    deletions: BTreeSet<String>,
}

impl Migration {
    /// Plan the checkout of `commit`
    ///
    /// # Arguments
    ///
    /// * `commit` - Target commit
    /// * `load_blob` - Loads the stored content of a manifest record
    /// * `known` - Current status store records
    /// * `workspace_files` - Files currently present in the working tree
    pub fn plan<F>(
        commit: &Commit,
        mut load_blob: F,
        known: &[Record],
        workspace_files: &BTreeSet<String>,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(&Record) -> anyhow::Result<Bytes>,
    {
        let mut restores = BTreeMap::new();
        for record in commit.manifest() {
            restores.insert(record.filename().to_string(), load_blob(record)?);
        }

        let tracked = known
            .iter()
            .filter(|record| record.status().is_tracked())
            .map(Record::filename)
            .collect::<BTreeSet<_>>();

        let deletions = workspace_files
            .iter()
            .filter(|file| !restores.contains_key(file.as_str()))
            .filter(|file| tracked.contains(file.as_str()))
            .cloned()
            .collect();

        Ok(Migration {
            restores,
            deletions,
        })
    }

    pub fn restores(&self) -> impl Iterator<Item = (&String, &Bytes)> {
        self.restores.iter()
    }

    pub fn deletions(&self) -> impl Iterator<Item = &String> {
        self.deletions.iter()
    }

    pub fn restored_files(&self) -> Vec<String> {
        self.restores.keys().cloned().collect()
    }

    pub fn deleted_files(&self) -> Vec<String> {
        self.deletions.iter().cloned().collect()
    }
}
