use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use txtrail_history::{HistoryStore, RECENT_LIMIT};
use txtrail_nullables::{NullClock, NullKv};
use txtrail_types::{ChainId, RecordPatch, Timestamp, TransactionRecord, TxStatus, WalletAddress};

static NEXT_ADDRESS: AtomicU64 = AtomicU64::new(0);

/// Every proptest case gets its own address so the process-wide memory
/// fallback never couples cases or tests.
fn fresh_store() -> HistoryStore {
    let n = NEXT_ADDRESS.fetch_add(1, Ordering::Relaxed);
    HistoryStore::new(
        Arc::new(NullKv::new()),
        Arc::new(NullClock::new(1_000)),
        Some(WalletAddress::new(format!("0xprop{n}"))),
    )
}

#[derive(Clone, Debug)]
enum Op {
    Add {
        hash: u8,
        chain: u8,
        status: TxStatus,
    },
    Update {
        hash: u8,
        chain: u8,
        status: TxStatus,
    },
}

fn any_status() -> impl Strategy<Value = TxStatus> {
    prop_oneof![
        Just(TxStatus::Submitted),
        Just(TxStatus::Pending),
        Just(TxStatus::Success),
        Just(TxStatus::Failed),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    (any::<bool>(), 0u8..8, 1u8..4, any_status()).prop_map(|(add, hash, chain, status)| {
        if add {
            Op::Add {
                hash,
                chain,
                status,
            }
        } else {
            Op::Update {
                hash,
                chain,
                status,
            }
        }
    })
}

fn apply(store: &mut HistoryStore, op: &Op) {
    match op {
        Op::Add {
            hash,
            chain,
            status,
        } => {
            store.add_transaction(TransactionRecord::new(
                format!("0x{hash}"),
                ChainId::new(u64::from(*chain)),
                *status,
                Timestamp::new(1_000),
            ));
        }
        Op::Update {
            hash,
            chain,
            status,
        } => {
            store.update_transaction(
                &format!("0x{hash}"),
                ChainId::new(u64::from(*chain)),
                RecordPatch::status(*status),
            );
        }
    }
}

proptest! {
    /// (hash, chain) stays unique under arbitrary add/update interleavings.
    #[test]
    fn dedup_invariant_holds(ops in prop::collection::vec(any_op(), 1..40)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let all = store.all_transactions();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                prop_assert!(!(a.hash == b.hash && a.chain_id == b.chain_id));
            }
        }
    }

    /// recent_transactions is always a prefix of all_transactions with
    /// length at most RECENT_LIMIT.
    #[test]
    fn recent_is_bounded_prefix_of_all(ops in prop::collection::vec(any_op(), 0..40)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let all = store.all_transactions();
        let recent = store.recent_transactions();
        prop_assert!(recent.len() <= RECENT_LIMIT);
        prop_assert_eq!(&all[..recent.len()], &recent[..]);
    }

    /// latest_success equals the first success in all_transactions order.
    #[test]
    fn latest_success_law(ops in prop::collection::vec(any_op(), 0..40)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let expected = store
            .all_transactions()
            .into_iter()
            .find(|r| r.status == TxStatus::Success);
        prop_assert_eq!(store.latest_success(), expected);
    }
}
