//! Shared utilities for txtrail.

pub mod logging;

pub use logging::init_tracing;
