//! Application state
//!
//! The store handle is constructed once at startup and injected into every
//! handler through axum state; nothing reaches for ambient globals.

use std::sync::Arc;
use store::DirectoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DirectoryStore>,
}

impl AppState {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        Self { store }
    }
}
