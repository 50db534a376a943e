use std::sync::Arc;

use tryout_db::{ConsistencyGuard, EntityStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store is
/// constructed once at startup and injected here; nothing reaches for a
/// process-wide connection handle.
#[derive(Clone)]
pub struct AppState {
    /// Tryout and question persistence.
    pub store: Arc<dyn EntityStore>,
    /// Submission-lock check consulted before every question mutation.
    pub guard: ConsistencyGuard,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, config: ServerConfig) -> Self {
        Self {
            guard: ConsistencyGuard::new(Arc::clone(&store)),
            store,
            config: Arc::new(config),
        }
    }
}
