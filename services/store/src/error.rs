//! Store error taxonomy

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An insert or update would violate a unique index.
    #[error("duplicate key for {collection}.{index}")]
    DuplicateKey {
        collection: &'static str,
        index: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = StoreError::DuplicateKey {
            collection: "markets",
            index: "name",
        };
        assert_eq!(err.to_string(), "duplicate key for markets.name");
    }
}
