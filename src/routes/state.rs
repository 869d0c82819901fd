use std::sync::Arc;

use crate::services::{Catalog, Explainer};

/// Shared application state
///
/// Read-only for the lifetime of the process; handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub explainer: Explainer,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, explainer: Explainer) -> Self {
        Self { catalog, explainer }
    }
}
