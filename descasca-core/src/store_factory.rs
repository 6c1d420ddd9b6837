use crate::error::Result;
use crate::store::{ArchiveStore, OpenParams};
use crate::store_json::JsonStore;

pub enum Backend {
    Json,
}

pub fn open_store(backend: Backend, p: OpenParams) -> Result<Box<dyn ArchiveStore>> {
    match backend {
        Backend::Json => Ok(Box::new(JsonStore::open(p)?)),
    }
}
