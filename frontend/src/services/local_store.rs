use anyhow::Context;
use gloo::storage::{LocalStorage, Storage};
use shared::{KeyValueStore, StorageError};

/// Browser local storage as a [`KeyValueStore`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn try_get(key: &str) -> anyhow::Result<Option<String>> {
        let storage = LocalStorage::raw();
        let value = storage
            .get_item(key)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
            .with_context(|| format!("reading local storage key '{}'", key))?;
        Ok(value)
    }

    fn try_set(key: &str, value: &str) -> anyhow::Result<()> {
        let storage = LocalStorage::raw();
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
            .with_context(|| format!("writing local storage key '{}'", key))
    }
}

impl KeyValueStore for LocalStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::try_get(key).map_err(|e| StorageError::Backend(format!("{:#}", e)))
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        Self::try_set(key, &value).map_err(|e| StorageError::Backend(format!("{:#}", e)))
    }
}
