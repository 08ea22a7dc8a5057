//! JSON-file storage.
//!
//! The whole store is one JSON object of string values, rewritten on every
//! change through a sibling temp file and a rename.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use super::{KeyValueStore, StorageError};

/// Storage persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let Value::Object(object) = serde_json::from_str::<Value>(&raw)? else {
            return Err(StorageError::NotAnObject(self.path.display().to_string()));
        };

        object
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(value) => Ok((key, value)),
                _ => Err(StorageError::NotAnObject(self.path.display().to_string())),
            })
            .collect()
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Current entries for a write. A file that exists but does not decode
    /// is dropped so the write replaces it.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_all() {
            Err(e @ (StorageError::Json(_) | StorageError::NotAnObject(_))) => {
                warn!(path = %self.path.display(), "Replacing corrupt storage file: {e}");
                Ok(BTreeMap::new())
            }
            result => result,
        }
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_for_write()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("storecart-{}", uuid::Uuid::new_v4()))
            .join("storage.json")
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let storage = FileStorage::new(temp_path());
        assert_eq!(storage.get("cartItems").unwrap(), None);
    }

    #[test]
    fn test_set_creates_file_and_parents() {
        let path = temp_path();
        let mut storage = FileStorage::new(&path);
        storage.set("paymentMethod", "PayPal").unwrap();

        assert!(path.exists());
        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get("paymentMethod").unwrap().as_deref(),
            Some("PayPal")
        );

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_remove_key() {
        let path = temp_path();
        let mut storage = FileStorage::new(&path);
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        storage.remove("a").unwrap();

        assert_eq!(storage.get("a").unwrap(), None);
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_non_object_file_is_an_error() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2, 3]").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("a"),
            Err(StorageError::NotAnObject(_))
        ));

        fs::write(&path, r#"{"a": 1}"#).unwrap();
        assert!(matches!(
            storage.get("a"),
            Err(StorageError::NotAnObject(_))
        ));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_invalid_json_file_is_an_error() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("a"), Err(StorageError::Json(_))));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_set_replaces_corrupt_file() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "garbage").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.set("cartItems", "[]").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("cartItems").unwrap().as_deref(), Some("[]"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let path = temp_path();
        fs::create_dir_all(path.join("occupied")).unwrap();

        let storage = FileStorage::new(&path);
        let entries = BTreeMap::from([("a".to_owned(), "1".to_owned())]);
        assert!(storage.write_all(&entries).is_err());

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        assert!(!PathBuf::from(tmp).exists());

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
