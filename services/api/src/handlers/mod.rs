//! Request handlers
//!
//! One thin function per operation: validate shape, apply the rules, run
//! the store operation, wrap the result in the `{success, ...}` envelope.

pub mod cart;
pub mod item;
pub mod market;
pub mod market_review;
pub mod product;
pub mod product_review;
pub mod report;

use crate::error::AppError;
use types::Address;

/// Path-supplied addresses are not field-validated; a malformed one simply
/// cannot name any stored document.
pub(crate) fn path_address(value: &str) -> Result<Address, AppError> {
    Address::try_new(value)
        .ok_or_else(|| AppError::NotFound("address parameter must be 42 characters".to_string()))
}
