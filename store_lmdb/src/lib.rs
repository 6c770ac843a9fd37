//! LMDB durable storage backend for txtrail.
//!
//! Implements the `DurableKv` trait from `txtrail-store` using the `heed`
//! LMDB bindings: one environment, one string-to-string database.

pub mod error;
pub mod kv;

pub use error::LmdbError;
pub use kv::LmdbKv;
