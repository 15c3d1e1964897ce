//! File-backed storage implementation.
//!
//! Each key gets its own `<key>.json` file inside a data directory, the
//! durable analog of per-origin key-value storage. Writes overwrite the
//! whole file; there is no locking or cross-key transactionality, which the
//! domain tolerates (the collections are logically independent).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use waymark_core::ports::KeyValueStore;
use waymark_core::{Result, WaymarkError};

/// File-per-key implementation of `KeyValueStore`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if necessary) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| WaymarkError::Store {
            key: dir.display().to_string(),
            reason: format!("failed to create data directory: {}", e),
        })?;
        tracing::debug!(dir = %dir.display(), "opened file store");
        Ok(Self { dir })
    }

    /// Directory holding the per-key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WaymarkError::Store {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value).map_err(|e| WaymarkError::Store {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("paths").unwrap(), None);
    }

    #[test]
    fn put_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.put("mapType", "\"satellite\"").unwrap();
        assert_eq!(
            store.get("mapType").unwrap().as_deref(),
            Some("\"satellite\"")
        );
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.put("coordinates", "[]").unwrap();
        assert!(nested.join("coordinates.json").exists());
    }
}
