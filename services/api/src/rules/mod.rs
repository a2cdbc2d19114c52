//! Business rules over the document store
//!
//! Three concerns, one module each: cross-entity existence and uniqueness
//! checks, derived-field aggregation, and the cascade/rename-propagation
//! policy. Handlers stay thin by composing these.

pub mod cascade;
pub mod integrity;
pub mod rating;
