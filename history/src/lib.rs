//! Per-address persisted transaction-history ledger.
//!
//! [`HistoryStore`] owns the mapping from a wallet address to an ordered
//! list of locally-submitted transactions, deduplicated by (hash, chain)
//! and backed by a durable key-value facility with a process-wide in-memory
//! fallback. Storage failures never surface to callers; the store degrades
//! to an empty or memory-only ledger and keeps working.
//!
//! Also hosts the user-cancellation classifier ([`should_store_failure`])
//! and the batch-capability watcher ([`BatchSupportWatcher`]) that consumes
//! the same wallet context.

pub mod batching;
pub mod failures;
pub mod ledger;

pub use batching::{BatchSupportWatcher, BatchingProbe};
pub use failures::{should_store_failure, SubmissionError};
pub use ledger::{clear_all_caches, storage_key_for, HistoryStore, RECENT_LIMIT};
