use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_algorithm::Edit;
use crate::artifacts::diff::file_diff::DiffOutcome;
use crate::artifacts::diff::hunk::NO_NEWLINE_MARKER;
use crate::artifacts::diff::unified::UnifiedDiff;
use colored::Colorize;

impl Repository {
    pub fn diff(&self, filename: &str) -> anyhow::Result<()> {
        let filename = self.workspace().record_name(filename)?;

        match self.file_diff().diff(&filename)? {
            DiffOutcome::NotInWorkspace => {
                writeln!(self.writer(), "{}: not found in the working tree", filename)?
            }
            DiffOutcome::NeverCommitted => {
                writeln!(self.writer(), "{}: no committed version", filename)?
            }
            DiffOutcome::Unchanged => writeln!(self.writer(), "{}: no changes", filename)?,
            DiffOutcome::Patch(patch) => self.print_patch(&patch)?,
        }

        Ok(())
    }

    fn print_patch(&self, patch: &UnifiedDiff) -> anyhow::Result<()> {
        let (old_label, new_label) = patch.labels();
        writeln!(self.writer(), "{}", format!("--- {}", old_label).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", new_label).bold())?;

        for hunk in patch.hunks() {
            writeln!(self.writer(), "{}", hunk.header().cyan())?;
            for edit in hunk.edits() {
                let line = edit.to_string();
                match edit {
                    Edit::Delete { .. } => writeln!(self.writer(), "{}", line.red())?,
                    Edit::Insert { .. } => writeln!(self.writer(), "{}", line.green())?,
                    Edit::Equal { .. } => writeln!(self.writer(), "{}", line)?,
                }
                if !edit.is_terminated() {
                    writeln!(self.writer(), "{}", NO_NEWLINE_MARKER)?;
                }
            }
        }

        Ok(())
    }
}
