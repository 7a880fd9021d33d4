use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Create (or reuse) the repository metadata under `path`
    pub fn init(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let reinitialized = Self::is_repository(path);

        let repository = Repository::new(path, writer)?;
        repository.create_layout()?;

        let verb = if reinitialized {
            "Reinitialized existing"
        } else {
            "Initialized empty"
        };
        writeln!(
            repository.writer(),
            "{} tig repository in {}",
            verb,
            repository.metadata_path().display()
        )?;

        Ok(repository)
    }
}
