//! Durable key-value abstraction for the txtrail ledger.
//!
//! Every durable backend (LMDB, scriptable test doubles, or "no storage at
//! all") implements the [`DurableKv`] trait. The history store depends only
//! on the trait plus the process-wide in-memory fallback in [`memory`].

pub mod error;
pub mod kv;
pub mod memory;

pub use error::StoreError;
pub use kv::{AbsentKv, DurableKv};
