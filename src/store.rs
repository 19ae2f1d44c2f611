//! String key-value storage for scores and history.
//!
//! Values are opaque to the store; callers decide how to encode them.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

/// All keys in one JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let map = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() { BTreeMap::new() } else { serde_json::from_str(&raw)? }
        } else {
            BTreeMap::new()
        };
        debug!("opened store {} with {} keys", path.display(), map.len());
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path { &self.path }

    // Writes `map` to disk; callers swap it in only once this succeeds.
    fn write(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.map.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        self.map = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.map.contains_key(key) {
            return Ok(());
        }
        let mut next = self.map.clone();
        next.remove(key);
        self.write(&next)?;
        self.map = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_write_leaves_file_store_unchanged() {
        let dir = std::env::temp_dir().join(format!("gridbot-store-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        // A regular file where the store's directory should be.
        let blocker = dir.join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut s = JsonFileStore::open(blocker.join("scores.json")).unwrap();
        assert!(s.set("k", "v").is_err());
        assert_eq!(s.get("k").unwrap(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_store_round_trips() {
        let mut s = MemoryStore::new();
        assert_eq!(s.get("k").unwrap(), None);
        s.set("k", "v").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("v"));
        s.remove("k").unwrap();
        assert_eq!(s.get("k").unwrap(), None);
    }
}
