use crate::areas::repository::Repository;

pub const DEFAULT_LOG_COUNT: usize = 5;

impl Repository {
    /// Print the `count` most recent commits, newest first
    pub fn log(&self, count: usize) -> anyhow::Result<()> {
        let commits = self.commits().all()?;

        for commit in commits.iter().rev().take(count) {
            writeln!(self.writer(), "{}", commit)?;
        }

        Ok(())
    }
}
