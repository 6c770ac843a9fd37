//! Batch-capability watcher.
//!
//! Reactive glue over an external capability check: probes once when both
//! wallet context halves (address, target chain) are first known, re-probes
//! on any context change while both remain known, and forces the
//! use-batching preference off whenever the check answers an explicit no.

use txtrail_types::{ChainId, WalletAddress};

/// External capability check for transaction batching on a chain.
pub trait BatchingProbe {
    /// `Some(true)` / `Some(false)` when the capability is known,
    /// `None` when the check could not determine it.
    fn check_batching_support(&self, chain_id: ChainId) -> Option<bool>;
}

/// Watches the wallet context and keeps the batching capability result and
/// the user's use-batching preference coherent.
pub struct BatchSupportWatcher<P: BatchingProbe> {
    probe: P,
    address: Option<WalletAddress>,
    chain: Option<ChainId>,
    supported: Option<bool>,
    prefer_batching: bool,
}

impl<P: BatchingProbe> BatchSupportWatcher<P> {
    /// Create the watcher; probes immediately iff address and chain are
    /// both already known.
    pub fn new(
        probe: P,
        address: Option<WalletAddress>,
        chain: Option<ChainId>,
        prefer_batching: bool,
    ) -> Self {
        let mut watcher = Self {
            probe,
            address,
            chain,
            supported: None,
            prefer_batching,
        };
        if watcher.address.is_some() {
            if let Some(chain) = watcher.chain {
                watcher.run_check(chain);
            }
        }
        watcher
    }

    /// Update the wallet context. Re-probes only when the (address, chain)
    /// pair actually changed and both halves are known; no other transition
    /// triggers a check.
    pub fn set_context(&mut self, address: Option<WalletAddress>, chain: Option<ChainId>) {
        let changed = self.address != address || self.chain != chain;
        self.address = address;
        self.chain = chain;
        if !changed {
            return;
        }
        if self.address.is_some() {
            if let Some(chain) = self.chain {
                self.run_check(chain);
            }
        }
    }

    fn run_check(&mut self, chain: ChainId) {
        let result = self.probe.check_batching_support(chain);
        self.supported = result;
        if result == Some(false) {
            self.prefer_batching = false;
        }
    }

    /// Latest capability result, `None` until a check has answered.
    pub fn supported(&self) -> Option<bool> {
        self.supported
    }

    pub fn prefer_batching(&self) -> bool {
        self.prefer_batching
    }

    /// Caller-driven preference toggle. An explicit "unsupported" result
    /// from the probe will force this back off.
    pub fn set_prefer_batching(&mut self, prefer: bool) {
        self.prefer_batching = prefer;
    }
}
