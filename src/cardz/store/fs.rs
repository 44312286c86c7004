use super::KeyValueStore;
use crate::error::{CardzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value store: each key is a `<key>.json` file under the
/// root directory. The directory is created lazily on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CardzError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(CardzError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(CardzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_fresh_store_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        assert_eq!(store.get("gift_cards").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        store.set("gift_cards", "[]").unwrap();
        assert_eq!(store.get("gift_cards").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("data").join("gift_cards.json").exists());
    }

    #[test]
    fn set_replaces_the_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("gift_cards", "old").unwrap();
        store.set("gift_cards", "new").unwrap();
        assert_eq!(store.get("gift_cards").unwrap().as_deref(), Some("new"));
    }
}
