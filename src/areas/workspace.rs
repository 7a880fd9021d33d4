use crate::METADATA_DIR;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::{normalize_path, to_record_name, write_atomic};
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [METADATA_DIR];

/// The working tree of a repository
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every file of the working tree as a record name, sorted
    ///
    /// The metadata directory is skipped entirely.
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();

        let walker = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_string_lossy().as_ref()));

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to walk working tree {}", self.path.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.path)
                .with_context(|| format!("{} is outside the working tree", entry.path().display()))?;
            files.insert(to_record_name(relative));
        }

        Ok(files)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    /// Normalise a user-supplied file name into a record name
    ///
    /// Relative names are resolved against the working tree root and `..` is
    /// collapsed first. Paths outside the root or inside the metadata directory
    /// are rejected.
    pub fn record_name(&self, filename: &str) -> anyhow::Result<String> {
        let candidate = normalize_path(Path::new(filename));
        let relative = if candidate.is_absolute() {
            candidate
                .strip_prefix(&self.path)
                .with_context(|| format!("{} is outside the repository", filename))?
                .to_path_buf()
        } else {
            candidate
        };

        if relative
            .components()
            .any(|component| matches!(component, std::path::Component::ParentDir))
        {
            anyhow::bail!("{} is outside the repository", filename);
        }

        let name = to_record_name(&relative);
        if name.is_empty() || name.split('/').any(Self::is_ignored) {
            anyhow::bail!("{} is not a file of the working tree", filename);
        }

        Ok(name)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.path.join(filename).is_file()
    }

    pub fn absolute_path(&self, filename: &str) -> PathBuf {
        self.path.join(filename)
    }

    pub fn read_file(&self, filename: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(filename);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    pub fn write_file(&self, filename: &str, data: &[u8]) -> anyhow::Result<()> {
        write_atomic(&self.path.join(filename), data)
    }

    /// Delete a file and prune the directories it leaves empty
    pub fn remove_file(&self, filename: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(filename);

        std::fs::remove_file(&file_path)
            .with_context(|| format!("Failed to remove file: {}", file_path.display()))?;

        let mut parent = file_path.parent();
        while let Some(dir) = parent {
            if dir == self.path.as_ref() || !Self::is_empty_dir(dir) {
                break;
            }
            std::fs::remove_dir(dir)
                .with_context(|| format!("Failed to remove directory: {}", dir.display()))?;
            parent = dir.parent();
        }

        Ok(())
    }

    fn is_empty_dir(dir: &Path) -> bool {
        std::fs::read_dir(dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    }

    // Restores are applied before deletions so that a file moving between
    // directories never leaves the tree without either copy.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for (filename, data) in migration.restores() {
            log::debug!("restoring {}", filename);
            self.write_file(filename, data)
                .with_context(|| format!("Failed to restore file: {}", filename))?;
        }

        for filename in migration.deletions() {
            log::debug!("removing {}", filename);
            self.remove_file(filename)?;
        }

        Ok(())
    }
}
