use crate::areas::commits::CommitOutcome;
use crate::areas::repository::Repository;
use chrono::NaiveDateTime;

impl Repository {
    pub fn commit(&self, message: &str, date: Option<NaiveDateTime>) -> anyhow::Result<()> {
        let message = message.trim();
        let outcome = match date {
            Some(date) => self.commits().commit_at(message, date)?,
            None => self.commits().commit(message)?,
        };

        match outcome {
            CommitOutcome::Committed(commit) => {
                writeln!(self.writer(), "[{}] {}", commit.id(), commit.message())?
            }
            CommitOutcome::NothingToCommit => writeln!(self.writer(), "no changes to commit")?,
        }

        Ok(())
    }
}
