//! Opaque 42-character identifiers
//!
//! Wallet addresses and marketplace contract addresses are treated as opaque
//! strings; they are never verified against any chain. The only structural
//! requirement is the fixed 42-character length.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a wallet or a marketplace contract.
///
/// Exactly 42 characters; the marketplace variant doubles as the tenant key
/// for every child collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Required length of every address string.
    pub const LEN: usize = 42;

    /// Create a new Address.
    ///
    /// # Panics
    /// Panics if the string is not exactly 42 characters. Callers validate
    /// at the request boundary first; use [`Address::try_new`] for fallible
    /// construction.
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        assert_eq!(s.len(), Self::LEN, "Address must be 42 characters");
        Self(s)
    }

    /// Try to create an Address, returning None on a bad length.
    pub fn try_new(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        if s.len() == Self::LEN {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Get the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
