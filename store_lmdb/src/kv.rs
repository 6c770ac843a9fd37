//! LMDB implementation of DurableKv.

use std::path::Path;

use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};

use txtrail_store::{DurableKv, StoreError};

use crate::LmdbError;

const LEDGER_DB: &str = "ledger";

/// 64 MiB map size; history payloads are small JSON lists.
const MAP_SIZE: usize = 64 * 1024 * 1024;

/// Durable key-value store backed by a single LMDB environment.
pub struct LmdbKv {
    env: Env,
    db: Database<Str, Str>,
}

impl LmdbKv {
    /// Open or create an LMDB environment at the given directory.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        // Safety contract of heed: no other process may resize the map
        // while this environment is open.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(MAP_SIZE)
                .max_dbs(1)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let db = env.create_database(&mut wtxn, Some(LEDGER_DB))?;
        wtxn.commit()?;
        tracing::debug!(path = %path.display(), "opened LMDB ledger environment");
        Ok(Self { env, db })
    }
}

impl DurableKv for LmdbKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self.db.get(&rtxn, key).map_err(LmdbError::from)?;
        Ok(value.map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db.put(&mut wtxn, key, value).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }
}
