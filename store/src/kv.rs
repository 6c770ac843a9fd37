//! Durable storage capability trait.

use crate::StoreError;

/// A durable string key-value facility.
///
/// The backend is selected once at startup; callers never branch on
/// availability. When no durable facility exists in the host environment,
/// [`AbsentKv`] is used and the in-memory fallback carries the session.
pub trait DurableKv: Send + Sync {
    /// Read the value for a key, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the value for a key, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The "no durable storage configured" backend.
///
/// Every key reads as absent and writes are accepted and discarded, so the
/// fallback cache becomes the sole source of truth for the process.
pub struct AbsentKv;

impl DurableKv for AbsentKv {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
