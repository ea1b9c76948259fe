//! In-memory storage fake for tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::{Storage, StorageError};

/// In-memory twin of the production backend.
///
/// Lets the state machine and tracker be tested against the same
/// [`Storage`] interface without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value);
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<(), StorageError> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in entries {
            data.insert(key, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    use serde_json::json;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(keys::RUNNING_ENTRY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        storage.set(keys::DARK_MODE, json!(true)).await.unwrap();
        assert_eq!(
            storage.get(keys::DARK_MODE).await.unwrap(),
            Some(json!(true))
        );
    }
}
