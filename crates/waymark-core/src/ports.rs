//! Storage port for durable key-value persistence.
//!
//! The application persists each named collection under its own key as JSON
//! text. Adapters live in the `waymark-store` crate.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Port for durable per-user key-value storage.
///
/// Payloads are opaque strings; serialization happens in the typed
/// [`load`]/[`save`] helpers. There is no transactionality across keys: a
/// crash between two `put` calls can leave one collection updated and
/// another stale, which the domain tolerates.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Load a value from the store, substituting `default` when the key is
/// absent, the read fails, or the payload does not deserialize. A malformed
/// persisted record is recovered silently, never surfaced to the user.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed persisted value, using default");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed, using default");
            default
        }
    }
}

/// Serialize `value` as JSON and write it under `key`. Persistence is
/// fire-and-forget: failures are logged, not propagated into the mutation
/// path.
pub fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to serialize value, skipping save");
            return;
        }
    };
    if let Err(e) = store.put(key, &raw) {
        tracing::warn!(key, error = %e, "store write failed");
    }
}
