//! Application state for listing service.

use std::sync::Arc;

use crate::catalog::SchemaCatalog;
use common::config::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<SchemaCatalog>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(SchemaCatalog::new(config.clone())),
            config,
        }
    }
}
