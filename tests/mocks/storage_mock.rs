use spotlight::error::StorageError;
use spotlight::storage::{KeyValueStorage, MemoryStorage};
use std::cell::Cell;

/// Reads from an inner map, rejects every write (a full or locked storage).
#[derive(Default)]
pub struct FailingWrites {
    pub inner: MemoryStorage,
    pub write_attempts: Cell<usize>,
}

impl KeyValueStorage for FailingWrites {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts.set(self.write_attempts.get() + 1);
        Err(StorageError::Write("QuotaExceededError".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".into()))
    }
}

/// Every read fails, as when storage access is blocked.
#[allow(dead_code)]
pub struct UnreadableStorage;

impl KeyValueStorage for UnreadableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("SecurityError".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
