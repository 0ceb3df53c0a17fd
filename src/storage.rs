//! Namespaced key-value persistence.
//!
//! All saved state lives as flat key-value pairs: one pretty-printed JSON
//! file per key under a single app directory (`~/.arcade` by default). The
//! directory is the namespace; `keys`/`clear` only ever see what is inside
//! it. Values are plain serde types. Reads degrade to the caller's fallback
//! when a value is missing or unreadable; only writes surface errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// App directory under the user's home.
const STORAGE_DIR: &str = ".arcade";

/// Key used by [`Storage::is_available`] to probe for a writable namespace.
const PROBE_KEY: &str = "__probe__";

/// A flat key-value store over one namespace directory.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open the default namespace at `~/.arcade`, creating it if needed.
    pub fn open() -> io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine home directory",
            )
        })?;
        Self::with_root(home.join(STORAGE_DIR))
    }

    /// Open a namespace at an explicit root. Tests use this to stay out of
    /// the real home directory.
    pub fn with_root(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Read and deserialize the value for `key`. Missing or unparsable
    /// values read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = fs::read_to_string(self.key_path(key)).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Like [`Storage::get`] but falls back to `T::default()`.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Serialize `value` and write it under `key`, replacing any previous
    /// value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.key_path(key), json)
    }

    /// Delete the value for `key`. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// Delete every key in the namespace. The directory itself stays.
    pub fn clear(&self) -> io::Result<()> {
        for key in self.keys()? {
            self.remove(&key)?;
        }
        Ok(())
    }

    /// All keys currently stored, sorted.
    pub fn keys(&self) -> io::Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Probe whether the namespace accepts writes (write then remove a
    /// throwaway key).
    pub fn is_available(&self) -> bool {
        self.set(PROBE_KEY, &true).is_ok() && self.remove(PROBE_KEY).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn temp_storage(tag: &str) -> Storage {
        let root = std::env::temp_dir().join(format!(
            "arcade-storage-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        Storage::with_root(root).unwrap()
    }

    fn cleanup(storage: Storage) {
        let _ = fs::remove_dir_all(storage.root());
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let storage = temp_storage("roundtrip");
        let value = Sample {
            name: "x".to_string(),
            count: 3,
        };
        storage.set("sample", &value).unwrap();
        assert_eq!(storage.get::<Sample>("sample"), Some(value));
        cleanup(storage);
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let storage = temp_storage("missing");
        assert_eq!(storage.get::<Sample>("absent"), None);
        assert_eq!(storage.get_or_default::<Sample>("absent"), Sample::default());
        cleanup(storage);
    }

    #[test]
    fn test_corrupt_value_reads_as_none() {
        let storage = temp_storage("corrupt");
        fs::write(storage.root().join("bad.json"), "{not valid json").unwrap();
        assert_eq!(storage.get::<Sample>("bad"), None);
        cleanup(storage);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = temp_storage("remove");
        storage.set("gone", &1u32).unwrap();
        storage.remove("gone").unwrap();
        storage.remove("gone").unwrap();
        assert_eq!(storage.get::<u32>("gone"), None);
        cleanup(storage);
    }

    #[test]
    fn test_keys_and_clear() {
        let storage = temp_storage("keys");
        storage.set("beta", &2u32).unwrap();
        storage.set("alpha", &1u32).unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["alpha", "beta"]);

        storage.clear().unwrap();
        assert!(storage.keys().unwrap().is_empty());
        cleanup(storage);
    }

    #[test]
    fn test_is_available_on_writable_root() {
        let storage = temp_storage("probe");
        assert!(storage.is_available());
        // The probe key must not linger in the namespace.
        assert!(storage.keys().unwrap().is_empty());
        cleanup(storage);
    }
}
