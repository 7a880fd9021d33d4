use crate::areas::repository::Repository;
use crate::artifacts::objects::record::Record;
use crate::artifacts::status::record_status::RecordStatus;
use derive_new::new;

/// Staging of working tree files
///
/// There is no staging ledger of its own: a staged file is a record with
/// status STAGED in the status store, backed by a blob.
#[derive(new)]
pub struct Stage<'r> {
    repository: &'r Repository,
}

impl Stage<'_> {
    /// Mark the current content of `filename` for the next commit
    pub fn add(&self, filename: &str) -> anyhow::Result<Record> {
        let workspace = self.repository.workspace();
        let filename = workspace.record_name(filename)?;

        if !workspace.exists(&filename) {
            anyhow::bail!("pathspec '{}' did not match any files", filename);
        }

        let record = Record::scan(workspace.path(), &filename, RecordStatus::Staged)?;

        self.repository
            .backup()
            .add(std::slice::from_ref(&record))?;
        self.repository.status_store().add(&record)?;
        log::debug!("staged {} at {}", record.filename(), record.hash());

        Ok(record)
    }
}
