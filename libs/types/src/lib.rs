//! Core types for the marketplace directory backend
//!
//! Entity documents, the opaque address newtype, and document identifiers.
//! This crate is the leaf of the workspace: every service depends on it and
//! it depends on nothing but serialization and timestamp support.

pub mod address;
pub mod cart;
pub mod ids;
pub mod item;
pub mod market;
pub mod product;
pub mod report;
pub mod review;

pub use address::Address;
pub use cart::CartEntry;
pub use ids::DocumentId;
pub use item::Item;
pub use market::Market;
pub use product::Product;
pub use report::Report;
pub use review::{MarketReview, ProductReview};
