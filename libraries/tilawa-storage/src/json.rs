//! Typed JSON values on top of a string store

use crate::error::{Result, StorageError};
use serde::{de::DeserializeOwned, Serialize};
use tilawa_core::KeyValueStore;

/// Read and decode the JSON value under `key`
pub(crate) fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::serialization(key, &e)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`
pub(crate) fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, &e))?;
    store.set(key, &raw)?;
    Ok(())
}
