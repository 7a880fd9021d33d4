use crate::artifacts::diff::diff_algorithm::Edit;
use std::fmt::Display;

/// Number of unchanged lines kept around each change
pub const HUNK_CONTEXT: usize = 3;

/// Printed after a line that ends the file without a terminator
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// A contiguous group of edits with its surrounding context
///
/// Line numbers are 1-based, as printed in `@@ -a,b +c,d @@` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    b_start: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Group an edit script into hunks
    ///
    /// Changes separated by no more than `2 * context` unchanged lines end up
    /// in the same hunk. An edit script without changes yields no hunks.
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Hunk<T>> {
        // (a, b) line offsets before each edit
        let mut offsets = Vec::with_capacity(edits.len());
        let (mut a, mut b) = (0, 0);
        for edit in edits {
            offsets.push((a, b));
            match edit {
                Edit::Delete { .. } => a += 1,
                Edit::Insert { .. } => b += 1,
                Edit::Equal { .. } => {
                    a += 1;
                    b += 1;
                }
            }
        }

        let changes = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| edit.is_change())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        let mut groups: Vec<(usize, usize)> = Vec::new();
        for change in changes {
            match groups.last_mut() {
                Some((_, end)) if change - *end - 1 <= 2 * context => *end = change,
                _ => groups.push((change, change)),
            }
        }

        groups
            .into_iter()
            .map(|(first, last)| {
                let low = first.saturating_sub(context);
                let high = (last + context).min(edits.len() - 1);
                let (a_offset, b_offset) = offsets[low];

                Hunk {
                    a_start: a_offset + 1,
                    b_start: b_offset + 1,
                    edits: edits[low..=high].to_vec(),
                }
            })
            .collect()
    }
}

impl<T> Hunk<T> {
    pub fn a_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Insert { .. }))
            .count()
    }

    pub fn b_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Delete { .. }))
            .count()
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    /// `@@ -a,b +c,d @@` header
    ///
    /// A range of one line prints its start only; an empty range prints the
    /// line before it.
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            Self::format_range(self.a_start, self.a_size()),
            Self::format_range(self.b_start, self.b_size())
        )
    }

    fn format_range(start: usize, size: usize) -> String {
        match size {
            0 => format!("{},0", start - 1),
            1 => format!("{}", start),
            _ => format!("{},{}", start, size),
        }
    }
}

impl<T: AsRef<str>> Display for Hunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for edit in &self.edits {
            writeln!(f, "{}", edit)?;
            if !edit.is_terminated() {
                writeln!(f, "{}", NO_NEWLINE_MARKER)?;
            }
        }
        Ok(())
    }
}
