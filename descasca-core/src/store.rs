use crate::error::Result;

#[derive(Clone, Debug)]
pub struct OpenParams {
    pub store_path: std::path::PathBuf,
}

/// Named upload batches, keyed by source filename. A `put` under an existing
/// name overwrites the prior entry; the store owns persisted batches and
/// hands out read-only views.
pub trait ArchiveStore {
    fn put(&mut self, name: &str, batch: Vec<Vec<String>>) -> Result<()>;

    fn get(&self, name: &str) -> Option<&[Vec<String>]>;

    /// `Ok(false)` when no entry carries `name`.
    fn delete(&mut self, name: &str) -> Result<bool>;

    fn list(&self) -> Vec<String>;
}
