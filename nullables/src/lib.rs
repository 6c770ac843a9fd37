//! Nullable infrastructure for deterministic testing.
//!
//! The ledger's external dependencies (clock, durable storage) are
//! abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically (advance time, inject failures,
//!   preload corrupt payloads)
//! - Never touch the filesystem
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod kv;

pub use clock::NullClock;
pub use kv::NullKv;
