use crate::areas::repository::Repository;
use crate::artifacts::objects::record::Record;
use crate::artifacts::status::record_status::RecordStatus;
use colored::{ColoredString, Colorize};

const SECTIONS: [RecordStatus; 4] = [
    RecordStatus::Staged,
    RecordStatus::Modified,
    RecordStatus::Untracked,
    RecordStatus::Committed,
];

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let mut records = self.status_store().all()?;
        records.sort_by(|a, b| a.filename().cmp(b.filename()));

        for status in SECTIONS {
            let section = records
                .iter()
                .filter(|record| record.status() == status)
                .collect::<Vec<_>>();
            if section.is_empty() {
                continue;
            }

            writeln!(self.writer(), "{}", status.heading())?;
            for record in section {
                writeln!(self.writer(), "\t{}", Self::status_line(record))?;
            }
            writeln!(self.writer())?;
        }

        let pending = records
            .iter()
            .any(|record| record.status() != RecordStatus::Committed);
        if !pending {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        }

        Ok(())
    }

    fn status_line(record: &Record) -> ColoredString {
        let line = format!("{}{}", record.status().label(), record.filename());
        match record.status() {
            RecordStatus::Staged => line.green(),
            RecordStatus::Modified | RecordStatus::Untracked => line.red(),
            RecordStatus::Committed => line.normal(),
        }
    }
}
