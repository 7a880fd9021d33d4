use crate::areas::repository::Repository;
use crate::artifacts::checkout::CheckoutOutcome;

impl Repository {
    pub fn checkout(&self, commit_id: &str) -> anyhow::Result<()> {
        match self.backup().checkout(commit_id)? {
            CheckoutOutcome::UnknownCommit(commit_id) => {
                writeln!(self.writer(), "no commit found: {}", commit_id)?
            }
            CheckoutOutcome::Restored {
                commit,
                restored,
                removed,
            } => writeln!(
                self.writer(),
                "checked out {}: {} restored, {} removed",
                commit.id(),
                restored.len(),
                removed.len()
            )?,
        }

        Ok(())
    }
}
