//! Process-wide in-memory fallback cache.
//!
//! Keyed by storage key and shared across every history-store handle in the
//! process, so multiple handles for the same address stay coherent even
//! when no durable facility exists. The mutex guards read-modify-write of
//! each key's record list, preserving the dedup invariant in threaded hosts.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use txtrail_types::TransactionRecord;

static CACHE: OnceLock<Mutex<HashMap<String, Vec<TransactionRecord>>>> = OnceLock::new();

fn cache() -> &'static Mutex<HashMap<String, Vec<TransactionRecord>>> {
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Read the cached record list for a storage key, if any.
pub fn read(key: &str) -> Option<Vec<TransactionRecord>> {
    cache().lock().unwrap().get(key).cloned()
}

/// Replace the cached record list for a storage key.
pub fn write(key: &str, records: &[TransactionRecord]) {
    cache().lock().unwrap().insert(key.to_string(), records.to_vec());
}

/// Drop every cached entry. Administrative reset for test isolation; the
/// durable facility is not touched.
pub fn clear() {
    cache().lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use txtrail_types::{ChainId, Timestamp, TxStatus};

    fn record(hash: &str) -> TransactionRecord {
        TransactionRecord::new(hash, ChainId::new(1), TxStatus::Pending, Timestamp::new(1))
    }

    #[test]
    fn test_write_then_read_roundtrips() {
        let key = "txtrail:history:memory-test-roundtrip";
        write(key, &[record("0xa"), record("0xb")]);
        let cached = read(key).unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].hash, "0xa");
    }

    #[test]
    fn test_read_absent_key_is_none() {
        assert!(read("txtrail:history:memory-test-absent").is_none());
    }

    #[test]
    fn test_write_replaces_existing_entry() {
        let key = "txtrail:history:memory-test-replace";
        write(key, &[record("0xa")]);
        write(key, &[record("0xb")]);
        let cached = read(key).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].hash, "0xb");
    }
}
