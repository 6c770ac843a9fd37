//! Wallet address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wallet address, stored exactly as the caller supplied it.
///
/// Addresses compare case-sensitively as values, but all storage-key
/// derivation goes through [`WalletAddress::normalized`], so two
/// capitalizations of the same address always map to the same ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form, used for storage-key derivation.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_lowercases() {
        let address = WalletAddress::new("0xAbCdEf012345");
        assert_eq!(address.normalized(), "0xabcdef012345");
        assert_eq!(address.as_str(), "0xAbCdEf012345");
    }

    #[test]
    fn test_mixed_case_addresses_normalize_identically() {
        let upper = WalletAddress::new("0xABC");
        let lower = WalletAddress::new("0xabc");
        assert_ne!(upper, lower);
        assert_eq!(upper.normalized(), lower.normalized());
    }
}
