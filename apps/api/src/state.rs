use std::sync::Arc;

use crate::advisory::selection::SelectionTracker;
use crate::advisory::AdvisoryClient;
use crate::catalog::builder::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,
    /// Pluggable advisory backend. Default: Gemini, or unconfigured without a key.
    pub advisor: AdvisoryClient,
    pub selection: Arc<SelectionTracker>,
}

impl AppState {
    pub fn new(catalog: Catalog, advisor: AdvisoryClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
            selection: Arc::new(SelectionTracker::new(advisor.clone())),
            advisor,
        }
    }
}
