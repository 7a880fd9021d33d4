use crate::areas::backup::Backup;
use crate::areas::commits::Commits;
use crate::areas::stage::Stage;
use crate::areas::status_store::StatusStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::file_diff::FileDiff;
use crate::{BACKUP_DIR, COMMITS_DIR, METADATA_DIR, STATUS_FILE};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const NO_REPOSITORY_MESSAGE: &str =
    "No repository has been found. Create it first with 'tig init <path>'";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    status_store: StatusStore,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed
    ///
    /// The metadata directory is not required to exist yet; see [`Repository::init`].
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve path {}", path.display()))?;

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let status_store = StatusStore::new(
            path.join(METADATA_DIR).join(STATUS_FILE).into_boxed_path(),
            workspace.clone(),
        );

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            status_store,
        })
    }

    /// Find the repository containing `start`, walking up its ancestors
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Unable to resolve path {}", start.display()))?;

        match start.ancestors().find(|dir| Self::is_repository(dir)) {
            Some(root) => Self::new(root, writer),
            None => anyhow::bail!(NO_REPOSITORY_MESSAGE),
        }
    }

    pub fn is_repository(path: &Path) -> bool {
        path.join(METADATA_DIR).is_dir()
    }

    /// Create the metadata layout; existing metadata is left untouched
    pub fn create_layout(&self) -> anyhow::Result<()> {
        for dir in [self.commits_path(), self.backup_path()] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {} directory", dir.display()))?;
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn commits_path(&self) -> PathBuf {
        self.metadata_path().join(COMMITS_DIR)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.metadata_path().join(BACKUP_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn status_store(&self) -> &StatusStore {
        &self.status_store
    }

    pub fn stage(&'_ self) -> Stage<'_> {
        Stage::new(self)
    }

    pub fn commits(&'_ self) -> Commits<'_> {
        Commits::new(self)
    }

    pub fn backup(&'_ self) -> Backup<'_> {
        Backup::new(self)
    }

    pub fn file_diff(&'_ self) -> FileDiff<'_> {
        FileDiff::new(self)
    }
}
