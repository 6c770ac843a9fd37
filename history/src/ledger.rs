//! The address-scoped transaction ledger.

use std::sync::Arc;

use txtrail_store::{memory, DurableKv};
use txtrail_types::{ChainId, Clock, RecordPatch, TransactionRecord, TxStatus, WalletAddress};

/// Namespace prefix for every ledger's storage key.
pub const STORAGE_KEY_PREFIX: &str = "txtrail:history:";

/// How many records the recent-transactions view exposes.
pub const RECENT_LIMIT: usize = 5;

/// Derive the storage key for an address. Case-insensitive: both the key
/// and the record set are shared by every capitalization of the address.
pub fn storage_key_for(address: &WalletAddress) -> String {
    format!("{STORAGE_KEY_PREFIX}{}", address.normalized())
}

/// Reset the process-wide in-memory fallback. Administrative operation for
/// test isolation; durable storage is not touched.
pub fn clear_all_caches() {
    memory::clear();
}

/// Durable, deduplicated transaction ledger for one wallet address.
///
/// All operations are synchronous; persistence completes before a mutation
/// returns. Derived views are recomputed from the live record list on every
/// read, so consumers always observe the latest mutation.
pub struct HistoryStore {
    durable: Arc<dyn DurableKv>,
    clock: Arc<dyn Clock>,
    address: Option<WalletAddress>,
    storage_key: Option<String>,
    records: Vec<TransactionRecord>,
}

impl HistoryStore {
    /// Create a store for an address that may not be known yet.
    pub fn new(
        durable: Arc<dyn DurableKv>,
        clock: Arc<dyn Clock>,
        address: Option<WalletAddress>,
    ) -> Self {
        let mut store = Self {
            durable,
            clock,
            address: None,
            storage_key: None,
            records: Vec::new(),
        };
        store.set_address(address);
        store
    }

    /// The address this store is currently scoped to.
    pub fn address(&self) -> Option<&WalletAddress> {
        self.address.as_ref()
    }

    /// Re-scope the store to a (possibly absent) address.
    ///
    /// Re-derives the storage key and reloads the record list synchronously,
    /// so no stale data from the previous address is ever visible. A present
    /// durable entry always wins over the in-memory fallback, even when the
    /// fallback holds fresher data from this session: a failed durable write
    /// followed by a switch away and back loses the memory-only updates.
    pub fn set_address(&mut self, address: Option<WalletAddress>) {
        self.storage_key = address.as_ref().map(storage_key_for);
        self.address = address;
        self.records = match self.storage_key.as_deref() {
            Some(key) => self.load(key),
            None => Vec::new(),
        };
    }

    /// Record a newly submitted transaction.
    ///
    /// Rejected with a diagnostic (no-op, nothing persisted) unless the
    /// record is app-sourced with a non-empty hash and a valid chain id and
    /// an address is currently set. A record matching an existing
    /// (hash, chain) key merges into it in place; otherwise the record is
    /// prepended, keeping the ledger newest-first.
    pub fn add_transaction(&mut self, record: TransactionRecord) {
        if self.storage_key.is_none() {
            tracing::warn!(
                hash = %record.hash,
                "dropping transaction record: no wallet address set"
            );
            return;
        }
        if !record.is_storable() {
            tracing::warn!(
                hash = %record.hash,
                chain = %record.chain_id,
                source = ?record.source,
                "dropping malformed or non-app transaction record"
            );
            return;
        }

        match self
            .records
            .iter_mut()
            .find(|r| r.matches_key(&record.hash, record.chain_id))
        {
            Some(existing) => existing.merge_from(record),
            None => self.records.insert(0, record),
        }
        self.persist();
    }

    /// Patch the record identified by (hash, chain).
    ///
    /// When no such record exists a pending app-sourced record is
    /// synthesized, stamped with the current clock time, patched, and
    /// prepended. Always persists.
    pub fn update_transaction(&mut self, hash: &str, chain_id: ChainId, patch: RecordPatch) {
        if self.storage_key.is_none() {
            tracing::warn!(hash, "dropping transaction update: no wallet address set");
            return;
        }

        match self
            .records
            .iter_mut()
            .find(|r| r.matches_key(hash, chain_id))
        {
            Some(existing) => patch.apply_to(existing),
            None => {
                let mut record = TransactionRecord::new(
                    hash,
                    chain_id,
                    TxStatus::Pending,
                    self.clock.now(),
                );
                patch.apply_to(&mut record);
                self.records.insert(0, record);
            }
        }
        self.persist();
    }

    /// Every app-sourced record, newest first.
    pub fn all_transactions(&self) -> Vec<TransactionRecord> {
        self.records
            .iter()
            .filter(|r| r.source.is_app())
            .cloned()
            .collect()
    }

    /// The most recent records, at most [`RECENT_LIMIT`].
    pub fn recent_transactions(&self) -> Vec<TransactionRecord> {
        self.records
            .iter()
            .filter(|r| r.source.is_app())
            .take(RECENT_LIMIT)
            .cloned()
            .collect()
    }

    /// The most recent successful transaction, if any.
    pub fn latest_success(&self) -> Option<TransactionRecord> {
        self.records
            .iter()
            .filter(|r| r.source.is_app())
            .find(|r| r.status.is_success())
            .cloned()
    }

    /// Load the ledger for a storage key.
    ///
    /// A present durable entry is decoded from JSON; an unreadable payload
    /// degrades to an empty ledger. An absent entry falls back to the
    /// in-memory cache. Backend read failures are expected recoverable
    /// conditions and also degrade to empty, never to a caller error.
    /// Deliberately logged at `debug`, not `warn`: these are routine
    /// degradations, unlike write failures, which lose data and log at
    /// `error` in [`Self::persist`].
    fn load(&self, key: &str) -> Vec<TransactionRecord> {
        match self.durable.get(key) {
            Ok(Some(payload)) => {
                match serde_json::from_str::<Vec<TransactionRecord>>(&payload) {
                    Ok(records) => records,
                    Err(e) => {
                        tracing::debug!(key, error = %e, "unreadable history payload, starting empty");
                        Vec::new()
                    }
                }
            }
            Ok(None) => memory::read(key).unwrap_or_default(),
            Err(e) => {
                tracing::debug!(key, error = %e, "durable read failed, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full record list: memory cache unconditionally, then
    /// durable storage. A durable write failure is logged and absorbed; the
    /// in-memory copy stays authoritative for the rest of the session.
    fn persist(&self) {
        let Some(key) = self.storage_key.as_deref() else {
            return;
        };
        memory::write(key, &self.records);

        let payload = match serde_json::to_string(&self.records) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to encode history payload");
                return;
            }
        };
        if let Err(e) = self.durable.set(key, &payload) {
            tracing::error!(key, error = %e, "durable history write failed");
        }
    }
}
