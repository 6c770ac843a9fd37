//! Nullable durable storage — scriptable in-memory `DurableKv`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use txtrail_store::{DurableKv, StoreError};

/// An in-memory durable-storage double.
///
/// Entries can be preloaded (including deliberately corrupt payloads), and
/// read or write failures can be injected at any point to exercise the
/// ledger's degradation paths.
pub struct NullKv {
    entries: Mutex<HashMap<String, String>>,
    read_failure: AtomicBool,
    write_failure: AtomicBool,
}

impl NullKv {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            read_failure: AtomicBool::new(false),
            write_failure: AtomicBool::new(false),
        }
    }

    /// Seed an entry directly, bypassing the failure switches.
    pub fn preload(&self, key: &str, payload: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
    }

    /// Make every subsequent `get` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.read_failure.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set` fail (quota-exceeded style).
    pub fn fail_writes(&self, fail: bool) {
        self.write_failure.store(fail, Ordering::SeqCst);
    }
}

impl Default for NullKv {
    fn default() -> Self {
        Self::new()
    }
}

impl DurableKv for NullKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.read_failure.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected read failure".into()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.write_failure.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected("injected write failure".into()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
