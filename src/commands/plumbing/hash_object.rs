use crate::areas::repository::Repository;
use crate::artifacts::objects::content_hash::ContentHash;

impl Repository {
    pub fn hash_object(&self, file: &str) -> anyhow::Result<()> {
        let filename = self.workspace().record_name(file)?;
        let hash = ContentHash::of_file(&self.workspace().absolute_path(&filename))?;

        writeln!(self.writer(), "{}", hash)?;

        Ok(())
    }
}
