use std::sync::Arc;

use crate::store::OrderStore;

/// Gateway application state (shared)
///
/// The store is constructed at startup and injected here; handlers never
/// touch module-level globals.
#[derive(Clone)]
pub struct AppState {
    /// Order store (single in-process instance)
    pub store: Arc<OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }
}
