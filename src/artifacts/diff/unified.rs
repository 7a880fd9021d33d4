use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, MyersDiff};
use crate::artifacts::diff::hunk::{HUNK_CONTEXT, Hunk};
use std::fmt::Display;

const OLD_LABEL: &str = "(old)";
const NEW_LABEL: &str = "(new)";

/// Unified diff between two versions of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedDiff {
    old_label: String,
    new_label: String,
    hunks: Vec<Hunk<String>>,
}

impl UnifiedDiff {
    /// Line diff of `old` against `new`, labelled with the file name
    ///
    /// Lines are compared as raw bytes including their terminator, so any byte
    /// change yields a hunk. Content that is not valid UTF-8 is rendered lossily.
    pub fn between(filename: &str, old: &[u8], new: &[u8]) -> Self {
        let old_lines = Self::split_lines(old);
        let new_lines = Self::split_lines(new);
        let edits = MyersDiff::new(&old_lines, &new_lines)
            .diff()
            .into_iter()
            .map(|edit| edit.map(|line| String::from_utf8_lossy(line).into_owned()))
            .collect::<Vec<_>>();

        UnifiedDiff {
            old_label: format!("{} {}", filename, OLD_LABEL),
            new_label: format!("{} {}", filename, NEW_LABEL),
            hunks: Hunk::build(&edits, HUNK_CONTEXT),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.old_label, &self.new_label)
    }

    pub fn hunks(&self) -> &[Hunk<String>] {
        &self.hunks
    }

    fn split_lines(data: &[u8]) -> Vec<&[u8]> {
        data.split_inclusive(|byte| *byte == b'\n').collect()
    }
}

impl Display for UnifiedDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hunks.is_empty() {
            return Ok(());
        }

        writeln!(f, "--- {}", self.old_label)?;
        writeln!(f, "+++ {}", self.new_label)?;
        for hunk in &self.hunks {
            write!(f, "{}", hunk)?;
        }
        Ok(())
    }
}
