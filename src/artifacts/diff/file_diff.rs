use crate::areas::repository::Repository;
use crate::artifacts::diff::unified::UnifiedDiff;
use crate::artifacts::objects::record::Record;
use crate::artifacts::status::record_status::RecordStatus;
use derive_new::new;

/// Result of comparing a working file with its committed version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    NotInWorkspace,
    NeverCommitted,
    Unchanged,
    Patch(UnifiedDiff),
}

/// Compares a working tree file against the first committed version of it
#[derive(new)]
pub struct FileDiff<'r> {
    repository: &'r Repository,
}

impl FileDiff<'_> {
    pub fn diff(&self, filename: &str) -> anyhow::Result<DiffOutcome> {
        let workspace = self.repository.workspace();
        let filename = workspace.record_name(filename)?;

        if !workspace.exists(&filename) {
            return Ok(DiffOutcome::NotInWorkspace);
        }

        let status_store = self.repository.status_store();
        status_store.sync()?;
        let current = match status_store.find(&filename)? {
            Some(record) => record,
            None => Record::scan(workspace.path(), &filename, RecordStatus::Untracked)?,
        };

        // the baseline is the oldest manifest entry, not the latest
        let baseline = self
            .repository
            .commits()
            .all()?
            .iter()
            .find_map(|commit| commit.record_for(&filename).cloned());
        let baseline = match baseline {
            Some(record) => record,
            None => return Ok(DiffOutcome::NeverCommitted),
        };

        if baseline.hash() == current.hash() {
            return Ok(DiffOutcome::Unchanged);
        }

        let old = self.repository.backup().read(&baseline)?;
        let new = workspace.read_file(&filename)?;
        let patch = UnifiedDiff::between(&filename, &old, &new);

        if patch.is_empty() {
            Ok(DiffOutcome::Unchanged)
        } else {
            Ok(DiffOutcome::Patch(patch))
        }
    }
}
