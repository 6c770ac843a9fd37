//! End-to-end persistence over the real LMDB backend.

use std::sync::Arc;

use txtrail_history::{storage_key_for, HistoryStore};
use txtrail_store::DurableKv;
use txtrail_store_lmdb::LmdbKv;
use txtrail_types::{ChainId, RecordPatch, Timestamp, TransactionRecord, TxStatus, WalletAddress};

fn record(hash: &str, status: TxStatus) -> TransactionRecord {
    TransactionRecord::new(hash, ChainId::new(1), status, Timestamp::new(1_000))
}

fn open_store(kv: Arc<LmdbKv>, address: &WalletAddress) -> HistoryStore {
    txtrail_utils::init_tracing();
    HistoryStore::new(
        kv,
        Arc::new(txtrail_types::SystemClock),
        Some(address.clone()),
    )
}

#[test]
fn ledger_survives_store_reinstantiation() {
    let dir = tempfile::tempdir().unwrap();
    let kv = Arc::new(LmdbKv::open(dir.path()).unwrap());
    let address = WalletAddress::new("0xPersist1");

    {
        let mut store = open_store(kv.clone(), &address);
        store.add_transaction(record("0x1", TxStatus::Submitted));
        store.update_transaction("0x1", ChainId::new(1), RecordPatch::status(TxStatus::Success));
    }

    let reloaded = open_store(kv, &address);
    let all = reloaded.all_transactions();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, TxStatus::Success);
}

#[test]
fn ledger_survives_environment_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let address = WalletAddress::new("0xPersist2");

    {
        let kv = Arc::new(LmdbKv::open(dir.path()).unwrap());
        let mut store = open_store(kv, &address);
        store.add_transaction(record("0x1", TxStatus::Submitted));
        store.add_transaction(record("0x2", TxStatus::Submitted));
    }

    let kv = Arc::new(LmdbKv::open(dir.path()).unwrap());
    let reloaded = open_store(kv, &address);
    let hashes: Vec<_> = reloaded
        .all_transactions()
        .into_iter()
        .map(|r| r.hash)
        .collect();
    assert_eq!(hashes, vec!["0x2", "0x1"]);
}

#[test]
fn corrupted_durable_payload_degrades_to_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let kv = Arc::new(LmdbKv::open(dir.path()).unwrap());
    let address = WalletAddress::new("0xPersist3");

    kv.set(&storage_key_for(&address), "not a json payload").unwrap();

    let store = open_store(kv, &address);
    assert!(store.all_transactions().is_empty());
}

#[test]
fn durable_entry_wins_over_memory_cache_on_switch_back() {
    let dir = tempfile::tempdir().unwrap();
    let kv = Arc::new(LmdbKv::open(dir.path()).unwrap());
    let a1 = WalletAddress::new("0xPersist4a");
    let a2 = WalletAddress::new("0xPersist4b");

    let mut store = open_store(kv.clone(), &a1);
    store.add_transaction(record("0x1", TxStatus::Submitted));

    // Overwrite the durable entry behind the store's back, then switch
    // away and back. The reload takes the durable entry, not the fresher
    // memory-cache copy.
    kv.set(&storage_key_for(&a1), "[]").unwrap();
    store.set_address(Some(a2));
    store.set_address(Some(a1));
    assert!(store.all_transactions().is_empty());
}
