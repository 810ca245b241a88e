// ABOUTME: Key-value persistence boundary for app preferences and onboarding flags
// ABOUTME: Pluggable backends: concurrent in-memory map and a JSON file on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String key-value store shared by every screen of the app
///
/// # Examples
///
/// ```rust
/// use fitcoach::storage::{InMemoryStore, KeyValueStore};
/// # fn example() -> Result<(), fitcoach::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.set("fitcoach_language", "ar")?;
/// assert_eq!(store.get("fitcoach_language")?.as_deref(), Some("ar"));
/// store.remove("fitcoach_language")?;
/// assert!(!store.contains("fitcoach_language")?);
/// # Ok(())
/// # }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Whether `key` holds a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// All stored keys, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn keys(&self) -> AppResult<Vec<String>>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> AppResult<bool> {
        (**self).contains(key)
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        (**self).keys()
    }
}

/// Store `value` as JSON under `key`
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn set_json<S, T>(store: &S, key: &str, value: &T) -> AppResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    store.set(key, &serde_json::to_string(value)?)
}

/// Read a JSON value stored under `key`
///
/// # Errors
///
/// Returns an error if the read fails or the stored text is not valid JSON
/// for `T`
pub fn get_json<S, T>(store: &S, key: &str) -> AppResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    store
        .get(key)?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(Into::into)
}
