//! # Storage Traits
//!
//! Abstraction over the durable key-value storage the lecture collection
//! lives in. The browser build plugs in local storage; tests use
//! [`MemoryStore`].
//!
//! Reads never fail from the caller's point of view: a missing key or a
//! value that no longer deserializes yields the provided default. Every
//! write replaces the whole stored value.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Raw string key-value storage backend
pub trait KeyValueStore {
    /// Fetch the raw value for a key, `None` if the key is absent
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value for a key
    fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Read and deserialize a value. `Ok(None)` means the key is absent.
    fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Deserialize {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Read and deserialize a value, falling back to `default` on any failure
    fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("No stored value for key '{}'; using default", key);
                default
            }
            Err(e @ StorageError::Deserialize { .. }) => {
                // The next write replaces the unreadable value
                log::error!("{}; stored data will be replaced by the default", e);
                default
            }
            Err(e) => {
                log::warn!("Failed to read key '{}': {}; using default", key, e);
                default
            }
        }
    }

    /// Serialize a value and replace whatever is stored under `key`
    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, raw)
    }
}

/// In-memory store, used by tests and as a fallback when no durable
/// storage is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// A store bound to one key, i.e. one named slot of serialized state.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistentSlot<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistentSlot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn read<T: DeserializeOwned>(&self, default: T) -> T {
        self.store.read(&self.key, default)
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        self.store.write(&self.key, value)
    }
}
