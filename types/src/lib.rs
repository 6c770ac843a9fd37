//! Fundamental types for the txtrail transaction ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: wallet addresses, chain identifiers, timestamps, transaction
//! records, and the patch type used for in-place record updates.

pub mod address;
pub mod chain;
pub mod record;
pub mod time;

pub use address::WalletAddress;
pub use chain::ChainId;
pub use record::{RecordPatch, TransactionRecord, TxSource, TxStatus};
pub use time::{Clock, SystemClock, Timestamp};
