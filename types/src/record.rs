//! Transaction record, status/source enums, and the update patch.

use serde::{Deserialize, Serialize};

use crate::{ChainId, Timestamp};

/// On-chain status of a tracked transaction. Mutable over a record's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// Handed to the wallet/provider, not yet seen in the mempool.
    Submitted,
    /// In flight; awaiting confirmation.
    Pending,
    /// Confirmed successfully.
    Success,
    /// Confirmed but reverted, or dropped.
    Failed,
}

impl TxStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Origin of a record. Only app-originated records are ever stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxSource {
    App,
    External,
}

impl TxSource {
    pub fn is_app(&self) -> bool {
        matches!(self, Self::App)
    }
}

/// One locally-tracked transaction, scoped to a single wallet address.
///
/// Identity within an address's ledger is the (`hash`, `chain_id`) pair;
/// everything else is mutable or descriptive. Serialized with camelCase
/// keys so ledgers written by earlier clients remain readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub hash: String,
    pub chain_id: ChainId,
    pub status: TxStatus,
    pub timestamp: Timestamp,
    pub source: TxSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_count: Option<u32>,
}

impl TransactionRecord {
    /// Create an app-sourced record with no descriptive metadata.
    pub fn new(
        hash: impl Into<String>,
        chain_id: ChainId,
        status: TxStatus,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            hash: hash.into(),
            chain_id,
            status,
            timestamp,
            source: TxSource::App,
            input_summary: None,
            output_summary: None,
            fee_summary: None,
            explorer_url: None,
            batch_id: None,
            batch_count: None,
        }
    }

    /// Whether this record may enter the ledger: app-sourced, with a
    /// non-empty hash and a valid chain id.
    pub fn is_storable(&self) -> bool {
        self.source.is_app() && !self.hash.is_empty() && self.chain_id.is_valid()
    }

    /// Whether this record is identified by the given (hash, chain) pair.
    pub fn matches_key(&self, hash: &str, chain_id: ChainId) -> bool {
        self.hash == hash && self.chain_id == chain_id
    }

    /// Merge a newer record for the same (hash, chain) key into this one.
    ///
    /// The newer record's status and timestamp win; optional fields the
    /// newer record leaves unset are retained from the existing record.
    pub fn merge_from(&mut self, newer: TransactionRecord) {
        self.status = newer.status;
        self.timestamp = newer.timestamp;
        self.input_summary = newer.input_summary.or(self.input_summary.take());
        self.output_summary = newer.output_summary.or(self.output_summary.take());
        self.fee_summary = newer.fee_summary.or(self.fee_summary.take());
        self.explorer_url = newer.explorer_url.or(self.explorer_url.take());
        self.batch_id = newer.batch_id.or(self.batch_id.take());
        self.batch_count = newer.batch_count.or(self.batch_count);
    }
}

/// A shallow-merge update for an existing (or synthesized) record.
///
/// The identity fields (hash, chain id), the source, and the creation
/// timestamp are not patchable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordPatch {
    pub status: Option<TxStatus>,
    pub input_summary: Option<String>,
    pub output_summary: Option<String>,
    pub fee_summary: Option<String>,
    pub explorer_url: Option<String>,
    pub batch_id: Option<String>,
    pub batch_count: Option<u32>,
}

impl RecordPatch {
    /// A patch that only changes the status.
    pub fn status(status: TxStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Apply this patch to a record. Set fields override; unset fields
    /// leave the record untouched.
    pub fn apply_to(&self, record: &mut TransactionRecord) {
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(input) = &self.input_summary {
            record.input_summary = Some(input.clone());
        }
        if let Some(output) = &self.output_summary {
            record.output_summary = Some(output.clone());
        }
        if let Some(fee) = &self.fee_summary {
            record.fee_summary = Some(fee.clone());
        }
        if let Some(url) = &self.explorer_url {
            record.explorer_url = Some(url.clone());
        }
        if let Some(batch_id) = &self.batch_id {
            record.batch_id = Some(batch_id.clone());
        }
        if let Some(count) = self.batch_count {
            record.batch_count = Some(count);
        }
    }
}
