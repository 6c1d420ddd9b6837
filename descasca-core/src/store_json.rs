use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DescascaError, Result};
use crate::store::{ArchiveStore, OpenParams};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Entry {
    data: Vec<Vec<String>>,
}

/// Whole-file JSON store: one object mapping filename to its batch,
/// rewritten wholesale on every mutation. An unreadable file on open is
/// treated as an empty store; the in-memory map stays the single source of
/// truth for reads after that.
pub struct JsonStore {
    path: PathBuf,
    entries: BTreeMap<String, Entry>,
}

impl JsonStore {
    pub fn open(params: OpenParams) -> Result<Self> {
        let entries = match fs::read(&params.store_path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        path = %params.store_path.display(),
                        error = %e,
                        "archive unreadable, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: params.store_path,
            entries,
        })
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.entries)
            .map_err(|e| DescascaError::Archive(format!("encode archive: {e}")))?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ArchiveStore for JsonStore {
    fn put(&mut self, name: &str, batch: Vec<Vec<String>>) -> Result<()> {
        self.entries.insert(name.to_string(), Entry { data: batch });
        self.persist()
    }

    fn get(&self, name: &str) -> Option<&[Vec<String>]> {
        self.entries.get(name).map(|e| e.data.as_slice())
    }

    fn delete(&mut self, name: &str) -> Result<bool> {
        if self.entries.remove(name).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::open(OpenParams {
            store_path: dir.path().join("archive.json"),
        })
        .unwrap()
    }

    fn batch(n: u32) -> Vec<Vec<String>> {
        vec![vec!["2024-01-01".into(), format!("{n}")]]
    }

    #[test]
    fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_at(&dir);
        store.put("turno1.txt", batch(1)).unwrap();
        assert_eq!(store.get("turno1.txt"), Some(batch(1).as_slice()));
        assert_eq!(store.get("missing.txt"), None);
    }

    #[test]
    fn same_name_put_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_at(&dir);
        store.put("turno1.txt", batch(1)).unwrap();
        store.put("turno1.txt", batch(2)).unwrap();
        assert_eq!(store.list(), vec!["turno1.txt"]);
        assert_eq!(store.get("turno1.txt"), Some(batch(2).as_slice()));
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = open_at(&dir);
            store.put("turno1.txt", batch(1)).unwrap();
            store.put("turno2.txt", batch(2)).unwrap();
        }
        let store = open_at(&dir);
        assert_eq!(store.list(), vec!["turno1.txt", "turno2.txt"]);
        assert_eq!(store.get("turno2.txt"), Some(batch(2).as_slice()));
    }

    #[test]
    fn deleting_a_missing_key_reports_false() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_at(&dir);
        assert!(!store.delete("nope.txt").unwrap());
        store.put("turno1.txt", batch(1)).unwrap();
        assert!(store.delete("turno1.txt").unwrap());
        assert!(store.get("turno1.txt").is_none());
    }

    #[test]
    fn corrupt_file_opens_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");
        fs::write(&path, b"{ not json").unwrap();
        let store = JsonStore::open(OpenParams { store_path: path }).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn persisted_shape_matches_the_legacy_layout() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_at(&dir);
        store
            .put("turno1.txt", vec![vec!["a".into(), "b".into()]])
            .unwrap();
        let raw = fs::read_to_string(dir.path().join("archive.json")).unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["turno1.txt"]["data"][0][1], "b");
    }
}
