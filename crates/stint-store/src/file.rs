//! JSON-file-backed storage.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::{Storage, StorageError};

/// Storage backed by a single JSON object file.
///
/// A missing file reads as empty state. Writes are whole-file
/// read-modify-write, serialized by an in-process mutex and made safe
/// against torn writes by writing a `.tmp` sibling then renaming it
/// into place. There is no cross-process lock; see the crate docs for
/// the consistency contract.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Reads the whole state object. `NotFound` yields empty state.
    async fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "state file absent, starting empty");
                Ok(Map::new())
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Writes the whole state object via a temp file and atomic rename.
    async fn write_all(&self, state: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_vec_pretty(state)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, &content)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))
    }
}

impl Storage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut state = self.read_all().await?;
        state.insert(key.to_string(), value);
        self.write_all(&state).await
    }

    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut state = self.read_all().await?;
        for (key, value) in entries {
            state.insert(key, value);
        }
        self.write_all(&state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    use serde_json::json;

    #[tokio::test]
    async fn missing_file_reads_as_empty_state() {
        let temp = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(temp.path().join("state.json"));
        assert_eq!(storage.get(keys::TIME_ENTRIES).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips_through_the_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("stint/state.json");
        let storage = JsonFileStorage::new(&path);

        storage
            .set(keys::TASK_NAMES, json!(["Email"]))
            .await
            .unwrap();
        assert_eq!(
            storage.get(keys::TASK_NAMES).await.unwrap(),
            Some(json!(["Email"]))
        );

        // The value survives a fresh handle reading the same file.
        let reopened = JsonFileStorage::new(&path);
        assert_eq!(
            reopened.get(keys::TASK_NAMES).await.unwrap(),
            Some(json!(["Email"]))
        );
    }

    #[tokio::test]
    async fn set_many_lands_in_a_single_state_object() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("state.json");
        let storage = JsonFileStorage::new(&path);

        storage
            .set_many(vec![
                (keys::RUNNING_ENTRY.to_string(), Value::Null),
                (keys::DARK_MODE.to_string(), json!(true)),
            ])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let state: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(state[keys::RUNNING_ENTRY], Value::Null);
        assert_eq!(state[keys::DARK_MODE], json!(true));
    }

    #[tokio::test]
    async fn set_preserves_unrelated_keys() {
        let temp = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(temp.path().join("state.json"));

        storage.set(keys::DARK_MODE, json!(true)).await.unwrap();
        storage
            .set(keys::TASK_NAMES, json!(["Email"]))
            .await
            .unwrap();

        assert_eq!(
            storage.get(keys::DARK_MODE).await.unwrap(),
            Some(json!(true))
        );
    }

    #[tokio::test]
    async fn unparseable_file_surfaces_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(
            storage.get(keys::DARK_MODE).await,
            Err(StorageError::Json(_))
        ));
    }

    #[tokio::test]
    async fn no_tmp_file_is_left_behind() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("state.json");
        let storage = JsonFileStorage::new(&path);
        storage.set(keys::DARK_MODE, json!(false)).await.unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
