//! Application state for the Pay and Withholding Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxTableLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// schedule tables, loaded and validated once at startup and read-only
/// afterwards, so concurrent handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded schedule tables.
    tables: Arc<TaxTableLoader>,
}

impl AppState {
    /// Creates a new application state with the given table loader.
    pub fn new(tables: TaxTableLoader) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the table loader.
    pub fn tables(&self) -> &TaxTableLoader {
        &self.tables
    }
}
