use crate::areas::repository::Repository;

impl Repository {
    pub fn add(&self, filename: &str) -> anyhow::Result<()> {
        self.stage().add(filename)?;

        Ok(())
    }
}
